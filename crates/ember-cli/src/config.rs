use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ember_core::models::progress::TrackingPeriod;

/// Bump together with a new entry in [`MIGRATIONS`].
const CURRENT_VERSION: u32 = 2;

const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmberConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where entries and results are stored. `None` means the platform
    /// data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Added in v1.
    pub tracking_period: TrackingPeriod,
    /// Fallback filter when `RUST_LOG` is unset. Added in v2.
    pub log_level: String,
    pub created_at: jiff::Timestamp,
}

impl EmberConfig {
    pub fn new(created_at: jiff::Timestamp) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            tracking_period: TrackingPeriod::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            created_at,
        }
    }

    /// Configured data directory, or `<platform data dir>/ember`.
    pub fn resolved_data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base =
                    dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join("ember"))
            }
        }
    }
}

/// `<platform config dir>/ember`.
pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("ember"))
}

pub fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<EmberConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: EmberConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// The stored config, or a fresh default when none has been saved yet.
pub fn load_or_default(dir: &Path) -> eyre::Result<EmberConfig> {
    if has_config(dir) {
        load_config(dir)
    } else {
        tracing::debug!(dir = %dir.display(), "no config found, using defaults");
        Ok(EmberConfig::new(jiff::Timestamp::now()))
    }
}

type Migration = fn(&mut serde_json::Map<String, serde_json::Value>);

/// `MIGRATIONS[n]` upgrades a version `n` config to version `n + 1`.
const MIGRATIONS: [(&str, Migration); CURRENT_VERSION as usize] = [
    ("add tracking_period", add_tracking_period),
    ("add log_level", add_log_level),
];

/// Upgrade raw config JSON from `from_version` to [`CURRENT_VERSION`].
/// Values already present are never overwritten.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update ember."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    for (from, (change, step)) in MIGRATIONS.iter().enumerate().skip(from_version as usize) {
        step(obj);
        let to = from as u32 + 1;
        obj.insert("config_version".to_string(), to.into());
        tracing::info!(from, to, change, "migrated config");
    }

    Ok(json)
}

fn add_tracking_period(obj: &mut serde_json::Map<String, serde_json::Value>) {
    obj.entry("tracking_period")
        .or_insert_with(|| TrackingPeriod::default().as_str().into());
}

fn add_log_level(obj: &mut serde_json::Map<String, serde_json::Value>) {
    obj.entry("log_level")
        .or_insert_with(|| DEFAULT_LOG_LEVEL.into());
}

pub fn save_config(dir: &Path, config: &EmberConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
