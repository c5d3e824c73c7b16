use shuttle_secrets::SecretStore;

use crate::util::{Error, Result};

use super::consts::DEFAULT_DATABASE_PATH;

/// Settings read from `Secrets.toml` at startup.
#[derive(Clone, Debug)]
pub struct BotCfg {
    pub discord_token: String,
    /// Location of the SQLite file holding statistics and waitees.
    pub database_path: String,
}

impl BotCfg {
    pub fn new(secret_store: &SecretStore) -> Result<Self> {
        Self::from_secrets(|key| secret_store.get(key))
    }

    fn from_secrets(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token = get("DISCORD_TOKEN").ok_or(Error::MissingSecret("DISCORD_TOKEN"))?;
        let database_path =
            get("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        Ok(Self {
            discord_token,
            database_path,
        })
    }
}
