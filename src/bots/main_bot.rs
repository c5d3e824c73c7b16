use serenity::{
    async_trait,
    model::prelude::Ready,
    prelude::{Client, Context, EventHandler, TypeMap},
};
use shuttle_secrets::SecretStore;
use tokio::sync::RwLockWriteGuard;
use tracing::{info, warn};

use crate::{
    db::{dao::ServerStatistic, Database},
    immut_data::{consts::DISCORD_INTENTS, dynamic::BotCfg},
    type_map_keys::{BotCfgKey, DatabaseKey},
};

use super::cfg_ext::{impl_cfg_ext, CfgExt};

/// Event handler for the Archean bot.
///
/// Holds the [Database] and, once the gateway is ready, shares it with
/// commands under [DatabaseKey].
pub struct MainBot {
    /// Statistics and waitees, persisted between restarts.
    pub(crate) database: Database,
    /// The configuration of the bot.
    pub(crate) cfg: BotCfg,
}

impl MainBot {
    /// Reads the configuration and opens the database.
    pub async fn new(secret_store: &SecretStore) -> crate::Result<Self> {
        let cfg = BotCfg::new(secret_store)?;
        let database = Database::connect(&cfg.database_path).await?;
        Ok(Self { database, cfg })
    }

    /// Builds the Discord client that drives this bot.
    pub async fn into_client(self) -> crate::Result<Client> {
        let token = self.discord_token().to_owned();
        let client = Client::builder(token, DISCORD_INTENTS)
            .event_handler(self)
            .await?;
        Ok(client)
    }
}

impl_cfg_ext!(MainBot);

#[async_trait]
impl EventHandler for MainBot {
    async fn ready(&self, ctx: Context, ready: Ready) {
        {
            let mut wlock: RwLockWriteGuard<TypeMap> = ctx.data.write().await;
            wlock.insert::<DatabaseKey>(self.database.clone());
            wlock.insert::<BotCfgKey>(self.cfg());
        }

        match ServerStatistic::get_peak_player_count(&self.database).await {
            Ok(Some(peak)) => info!(
                players = peak.player_count,
                max_players = peak.max_players,
                version = %peak.version,
                "Recorded player peak"
            ),
            Ok(None) => info!("No server statistics recorded yet"),
            Err(e) => warn!(error = %e, "Failed to query the player peak"),
        }

        let bot_name: &str = &ready.user.name;
        info!("{bot_name} is watching the Archean server");
    }
}
