use serenity::{
    async_trait,
    model::prelude::{Channel, ChannelId, User, UserId},
    prelude::Context,
};

/// Turns stored Discord ids back into live objects.
///
/// The cached lookups must not touch the network; the fetches may.
#[async_trait]
pub trait Resolve: Sync {
    type User: Send;
    type Channel: Send;

    fn cached_user(&self, user_id: UserId) -> Option<Self::User>;
    async fn fetch_user(&self, user_id: UserId) -> serenity::Result<Self::User>;
    fn cached_channel(&self, channel_id: ChannelId) -> Option<Self::Channel>;
    async fn fetch_channel(&self, channel_id: ChannelId) -> serenity::Result<Self::Channel>;
}

#[async_trait]
impl Resolve for Context {
    type User = User;
    type Channel = Channel;

    fn cached_user(&self, user_id: UserId) -> Option<User> {
        self.cache.user(user_id)
    }

    async fn fetch_user(&self, user_id: UserId) -> serenity::Result<User> {
        self.http.get_user(user_id.0).await
    }

    fn cached_channel(&self, channel_id: ChannelId) -> Option<Channel> {
        self.cache.channel(channel_id)
    }

    async fn fetch_channel(&self, channel_id: ChannelId) -> serenity::Result<Channel> {
        self.http.get_channel(channel_id.0).await
    }
}
