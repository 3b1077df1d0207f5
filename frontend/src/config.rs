pub struct Config;

impl Config {
    /// Console log level; debug builds log route switches and edits
    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    pub fn app_title() -> &'static str {
        "Alumni Portal Admin"
    }
}
