/// Every user action and async completion the app reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    /// Trigger button pressed (also fired once at startup).
    FetchAll,
    /// One branch of a joint fetch settled, success or not.
    FetchFinished {
        slot: usize,
        result: Result<String, String>,
    },
    /// Theme button pressed.
    ToggleTheme,
}
