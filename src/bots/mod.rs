mod cfg_ext;
mod main_bot;

pub(crate) use cfg_ext::CfgExt;
pub use main_bot::MainBot;
