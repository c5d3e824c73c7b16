/// Live state of an Archean game server, as reported by whatever polls it.
pub trait ServerSnapshot {
    fn players(&self) -> i64;
    fn max_players(&self) -> i64;
    fn version(&self) -> &str;
}
