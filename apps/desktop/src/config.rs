use std::{fs, path::PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "luxestay.toml";

#[derive(Debug)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub rooms_per_page: usize,
    pub booking_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/storefront"),
            rooms_per_page: 6,
            booking_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    data_dir: Option<PathBuf>,
    rooms_per_page: Option<usize>,
    booking_delay_ms: Option<u64>,
}

/// Defaults, overridden by `luxestay.toml` when present, overridden in turn by
/// `APP__*` environment variables. Unparseable values are skipped.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(CONFIG_FILE) {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            apply_file_settings(&mut settings, file_cfg);
        }
    }

    if let Ok(v) = std::env::var("APP__DATA_DIR") {
        settings.data_dir = PathBuf::from(v);
    }
    if let Ok(v) = std::env::var("APP__ROOMS_PER_PAGE") {
        if let Ok(parsed) = v.parse() {
            settings.rooms_per_page = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__BOOKING_DELAY_MS") {
        if let Ok(parsed) = v.parse() {
            settings.booking_delay_ms = parsed;
        }
    }

    settings
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.data_dir {
        settings.data_dir = v;
    }
    if let Some(v) = file_cfg.rooms_per_page {
        settings.rooms_per_page = v;
    }
    if let Some(v) = file_cfg.booking_delay_ms {
        settings.booking_delay_ms = v;
    }
}
