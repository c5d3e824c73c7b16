use serenity::prelude::GatewayIntents;

pub(crate) const SCHEMA: &str = include_str!("../../schema.sql");

pub(crate) const DISCORD_INTENTS: GatewayIntents = {
    let fst = GatewayIntents::GUILDS.bits();
    let snd = GatewayIntents::DIRECT_MESSAGES.bits();
    match GatewayIntents::from_bits(fst | snd) {
        Some(intents) => intents,
        None => panic!("Invalid intents"),
    }
};

pub(crate) const DEFAULT_DATABASE_PATH: &str = "archean.sqlite3";
