use std::{collections::HashMap, fs, time::Duration};

/// Host settings layered from defaults, an optional `counter.toml` in the
/// working directory, and `APP__*` environment variables. Malformed values
/// fall back to the previous layer.
#[derive(Debug, Clone)]
pub struct HostSettings {
    pub initial_title: String,
    pub initial_count: i32,
    pub reactor_delay: Duration,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            initial_title: "Initial Hello From Rust!".into(),
            initial_count: 3,
            reactor_delay: Duration::from_secs(2),
        }
    }
}

pub fn load_settings() -> HostSettings {
    let mut settings = HostSettings::default();

    if let Ok(raw) = fs::read_to_string("counter.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("initial_title") {
                settings.initial_title = v.clone();
            }
            if let Some(v) = file_cfg.get("initial_count") {
                if let Ok(parsed) = v.parse::<i32>() {
                    settings.initial_count = parsed;
                }
            }
            if let Some(v) = file_cfg.get("reactor_delay_ms") {
                if let Ok(parsed) = v.parse::<u64>() {
                    settings.reactor_delay = Duration::from_millis(parsed);
                }
            }
        }
    }

    if let Ok(v) = std::env::var("APP__INITIAL_TITLE") {
        settings.initial_title = v;
    }

    if let Ok(v) = std::env::var("APP__INITIAL_COUNT") {
        if let Ok(parsed) = v.parse::<i32>() {
            settings.initial_count = parsed;
        }
    }

    if let Ok(v) = std::env::var("APP__REACTOR_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.reactor_delay = Duration::from_millis(parsed);
        }
    }

    settings
}
