//! Module for Data Access Objects

use sqlx::FromRow;

/// One polled reading of the Archean server. Rows are append-only.
#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct ServerStatistic {
    pub id: i64,
    /// Seconds since the Unix epoch.
    pub time: f64,
    pub player_count: i64,
    pub max_players: i64,
    pub version: String,
}

/// A user waiting for the server to reach `wants_player_count` players.
///
/// The stored snowflakes are read through [`Waitee::user_id`] and
/// [`Waitee::fallback_channel_id`].
#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct Waitee {
    pub id: i64,
    pub(crate) user_id: i64,
    pub wants_player_count: i64,
    /// Where to remind the user if a direct message can't be delivered.
    pub(crate) fallback_channel_id: i64,
    /// Seconds since the Unix epoch.
    pub start_time: f64,
}
