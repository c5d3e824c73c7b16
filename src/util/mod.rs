use core::convert::identity as id;
use std::time::{SystemTime, UNIX_EPOCH};

use serenity::model::prelude::{ChannelId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Serenity error: {0}")]
    Serenity(#[from] serenity::Error),
    #[error("Missing secret: {0}")]
    MissingSecret(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;

/// Seconds since the Unix epoch, with sub-second precision.
pub(crate) fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

// Discord snowflakes are u64 while SQLite only has signed 64-bit integers.
// The casts below keep the bit pattern, so every snowflake round-trips.

pub(crate) fn i64_from_user_id(UserId(user_id): UserId) -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    let user_id = id::<u64>(user_id) as i64;
    user_id
}

pub(crate) fn user_id_from_i64(user_id: i64) -> UserId {
    #[allow(clippy::cast_sign_loss)]
    let user_id = id::<i64>(user_id) as u64;
    UserId(user_id)
}

pub(crate) fn i64_from_channel_id(ChannelId(channel_id): ChannelId) -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    let channel_id = id::<u64>(channel_id) as i64;
    channel_id
}

pub(crate) fn channel_id_from_i64(channel_id: i64) -> ChannelId {
    #[allow(clippy::cast_sign_loss)]
    let channel_id = id::<i64>(channel_id) as u64;
    ChannelId(channel_id)
}
