use serenity::prelude::TypeMapKey;

use crate::{db::Database, immut_data::dynamic::BotCfg};

pub struct DatabaseKey;
pub struct BotCfgKey;

impl TypeMapKey for DatabaseKey {
    type Value = Database;
}

impl TypeMapKey for BotCfgKey {
    type Value = BotCfg;
}
