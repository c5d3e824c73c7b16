use crate::{archean::ServerSnapshot, util::unix_now};

use super::{dao::ServerStatistic, Database};

impl ServerStatistic {
    /// Records a snapshot of `server`, stamped with the current time.
    pub async fn create_from_server(
        db: &Database,
        server: &impl ServerSnapshot,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO server_statistics (time, player_count, max_players, version) \
            VALUES (?, ?, ?, ?) \
            RETURNING id, time, player_count, max_players, version",
        )
        .bind(unix_now())
        .bind(server.players())
        .bind(server.max_players())
        .bind(server.version())
        .fetch_one(db.pool())
        .await
    }

    /// The snapshot with the highest player count ever recorded, if any.
    ///
    /// Which row wins a tie is up to SQLite.
    pub async fn get_peak_player_count(db: &Database) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, time, player_count, max_players, version FROM server_statistics \
            ORDER BY player_count DESC \
            LIMIT 1",
        )
        .fetch_optional(db.pool())
        .await
    }

    /// The newest snapshot by `time`, then by `id`.
    pub async fn latest(db: &Database) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, time, player_count, max_players, version FROM server_statistics \
            ORDER BY time DESC, id DESC \
            LIMIT 1",
        )
        .fetch_optional(db.pool())
        .await
    }
}
