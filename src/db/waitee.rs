use serenity::model::prelude::{ChannelId, UserId};
use tracing::debug;

use crate::{
    resolve::Resolve,
    util::{
        channel_id_from_i64, i64_from_channel_id, i64_from_user_id, unix_now, user_id_from_i64,
    },
};

use super::{dao::Waitee, Database};

impl Waitee {
    /// Registers `user` as waiting for `player_count` players.
    ///
    /// Existing requests from the same user are left alone; callers that want
    /// one request per user check [`Waitee::get_waitee`] first.
    pub async fn wait_for_count(
        db: &Database,
        user: UserId,
        player_count: i64,
        channel: ChannelId,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO waitees (user_id, wants_player_count, fallback_channel_id, start_time) \
            VALUES (?, ?, ?, ?) \
            RETURNING id, user_id, wants_player_count, fallback_channel_id, start_time",
        )
        .bind(i64_from_user_id(user))
        .bind(player_count)
        .bind(i64_from_channel_id(channel))
        .bind(unix_now())
        .fetch_one(db.pool())
        .await
    }

    pub async fn get_waitee(db: &Database, user: UserId) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, user_id, wants_player_count, fallback_channel_id, start_time \
            FROM waitees \
            WHERE user_id = ? \
            LIMIT 1",
        )
        .bind(i64_from_user_id(user))
        .fetch_optional(db.pool())
        .await
    }

    /// Everyone waiting for exactly `player_count` players.
    pub async fn get_waitees_for_player_count(
        db: &Database,
        player_count: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let res: Result<Vec<Self>, sqlx::Error> = sqlx::query_as(
            "SELECT id, user_id, wants_player_count, fallback_channel_id, start_time \
            FROM waitees \
            WHERE wants_player_count = ?",
        )
        .bind(player_count)
        .fetch_all(db.pool())
        .await;

        match res {
            Err(sqlx::Error::RowNotFound) => Ok(Vec::new()),
            res => res,
        }
    }

    /// Deletes this wait-request. Returns `false` if it was already gone.
    pub async fn remove(&self, db: &Database) -> Result<bool, sqlx::Error> {
        let res = sqlx::query("DELETE FROM waitees WHERE id = ?")
            .bind(self.id)
            .execute(db.pool())
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub fn user_id(&self) -> UserId {
        user_id_from_i64(self.user_id)
    }

    pub fn fallback_channel_id(&self) -> ChannelId {
        channel_id_from_i64(self.fallback_channel_id)
    }

    /// The waiting user, from the cache or else from Discord.
    ///
    /// Every failure ends up as `None`, so a network error looks the same as a
    /// deleted account.
    pub async fn get_user<R: Resolve>(&self, resolver: &R) -> Option<R::User> {
        let user_id = self.user_id();
        if let Some(user) = resolver.cached_user(user_id) {
            return Some(user);
        }
        match resolver.fetch_user(user_id).await {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(%user_id, error = %e, "Failed to fetch waitee");
                None
            }
        }
    }

    /// The fallback channel, from the cache or else from Discord. Failures are
    /// swallowed like in [`Waitee::get_user`].
    pub async fn get_fallback_channel<R: Resolve>(&self, resolver: &R) -> Option<R::Channel> {
        let channel_id = self.fallback_channel_id();
        if let Some(channel) = resolver.cached_channel(channel_id) {
            return Some(channel);
        }
        match resolver.fetch_channel(channel_id).await {
            Ok(channel) => Some(channel),
            Err(e) => {
                debug!(%channel_id, error = %e, "Failed to fetch fallback channel");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use serenity::async_trait;

    use super::*;

    const CHANNEL: ChannelId = ChannelId(1_100_000_000_000_000_001);

    #[tokio::test]
    async fn wait_then_get_waitee() {
        let db = Database::in_memory().await.unwrap();
        let user = UserId(286_962_466_037_170_176);

        let created = Waitee::wait_for_count(&db, user, 5, CHANNEL).await.unwrap();
        let found = Waitee::get_waitee(&db, user).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.wants_player_count, 5);
        assert_eq!(found.user_id(), user);
        assert_eq!(found.fallback_channel_id(), CHANNEL);
        assert!(found.start_time > 0.0);
    }

    #[tokio::test]
    async fn get_waitee_is_none_for_unknown_user() {
        let db = Database::in_memory().await.unwrap();
        Waitee::wait_for_count(&db, UserId(1), 3, CHANNEL)
            .await
            .unwrap();

        assert_eq!(Waitee::get_waitee(&db, UserId(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_requests_are_kept() {
        let db = Database::in_memory().await.unwrap();
        let user = UserId(77);
        Waitee::wait_for_count(&db, user, 4, CHANNEL).await.unwrap();
        Waitee::wait_for_count(&db, user, 4, CHANNEL).await.unwrap();

        let waitees = Waitee::get_waitees_for_player_count(&db, 4).await.unwrap();
        assert_eq!(waitees.len(), 2);
        assert!(waitees.iter().all(|w| w.user_id() == user));
        assert!(Waitee::get_waitee(&db, user).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn waitees_match_player_count_exactly() {
        let db = Database::in_memory().await.unwrap();
        let wants = [0, 5, 9999, 5, 4, 6, 0, 9998];
        for (i, count) in wants.into_iter().enumerate() {
            Waitee::wait_for_count(&db, UserId(i as u64 + 1), count, CHANNEL)
                .await
                .unwrap();
        }

        for n in [0, 5, 9999] {
            let mut users: Vec<u64> = Waitee::get_waitees_for_player_count(&db, n)
                .await
                .unwrap()
                .into_iter()
                .inspect(|w| assert_eq!(w.wants_player_count, n))
                .map(|w| w.user_id().0)
                .collect();
            users.sort_unstable();

            let expected: Vec<u64> = wants
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c == n)
                .map(|(i, _)| i as u64 + 1)
                .collect();
            assert_eq!(users, expected, "player count {n}");
        }
    }

    #[tokio::test]
    async fn no_match_is_an_empty_list() {
        let db = Database::in_memory().await.unwrap();
        assert!(Waitee::get_waitees_for_player_count(&db, 5)
            .await
            .unwrap()
            .is_empty());

        Waitee::wait_for_count(&db, UserId(9), 6, CHANNEL)
            .await
            .unwrap();
        assert!(Waitee::get_waitees_for_player_count(&db, 5)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_only_that_request() {
        let db = Database::in_memory().await.unwrap();
        let first = Waitee::wait_for_count(&db, UserId(1), 8, CHANNEL)
            .await
            .unwrap();
        let second = Waitee::wait_for_count(&db, UserId(2), 8, CHANNEL)
            .await
            .unwrap();

        assert!(first.remove(&db).await.unwrap());
        assert!(!first.remove(&db).await.unwrap());

        let left = Waitee::get_waitees_for_player_count(&db, 8).await.unwrap();
        assert_eq!(left, vec![second]);
    }

    /// Stands in for the Discord cache and REST API.
    #[derive(Default)]
    struct FakeDiscord {
        cached: HashSet<u64>,
        remote: HashSet<u64>,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl Resolve for FakeDiscord {
        type User = u64;
        type Channel = u64;

        fn cached_user(&self, UserId(id): UserId) -> Option<u64> {
            self.cached.contains(&id).then_some(id)
        }

        async fn fetch_user(&self, user_id: UserId) -> serenity::Result<u64> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.remote.contains(&user_id.0) {
                Ok(user_id.0)
            } else {
                Err(serenity::Error::Other("Unknown User"))
            }
        }

        fn cached_channel(&self, ChannelId(id): ChannelId) -> Option<u64> {
            self.cached.contains(&id).then_some(id)
        }

        async fn fetch_channel(&self, channel_id: ChannelId) -> serenity::Result<u64> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.remote.contains(&channel_id.0) {
                Ok(channel_id.0)
            } else {
                Err(serenity::Error::Other("Missing Access"))
            }
        }
    }

    fn waitee(user_id: i64, fallback_channel_id: i64) -> Waitee {
        Waitee {
            id: 1,
            user_id,
            wants_player_count: 10,
            fallback_channel_id,
            start_time: 0.0,
        }
    }

    #[tokio::test]
    async fn cached_user_skips_the_fetch() {
        let discord = FakeDiscord {
            cached: HashSet::from([10]),
            ..Default::default()
        };

        assert_eq!(waitee(10, 20).get_user(&discord).await, Some(10));
        assert_eq!(discord.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn uncached_user_is_fetched() {
        let discord = FakeDiscord {
            remote: HashSet::from([10]),
            ..Default::default()
        };

        assert_eq!(waitee(10, 20).get_user(&discord).await, Some(10));
        assert_eq!(discord.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetches_become_none() {
        let discord = FakeDiscord::default();

        assert_eq!(waitee(10, 20).get_user(&discord).await, None);
        assert_eq!(waitee(10, 20).get_fallback_channel(&discord).await, None);
        assert_eq!(discord.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fallback_channel_prefers_the_cache() {
        let discord = FakeDiscord {
            cached: HashSet::from([20]),
            remote: HashSet::from([30]),
            ..Default::default()
        };

        assert_eq!(waitee(10, 20).get_fallback_channel(&discord).await, Some(20));
        assert_eq!(waitee(10, 30).get_fallback_channel(&discord).await, Some(30));
        assert_eq!(discord.fetches.load(Ordering::SeqCst), 1);
    }
}
