pub(crate) mod consts;
pub mod dynamic;
