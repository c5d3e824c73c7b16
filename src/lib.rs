//! Discord bot for an Archean game server.
//!
//! Records polled server statistics and the users waiting for the server to
//! reach a given player count. The command layer builds on [`db::Database`],
//! the models in [`db::dao`] and the [`resolve::Resolve`] seam.

pub mod archean;
pub mod bots;
pub mod db;
pub mod immut_data;
pub mod resolve;
pub mod type_map_keys;
pub mod util;

pub use util::{Error, Result};
