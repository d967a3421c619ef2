use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use carebook_export::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const CONFIG_ENV: &str = "CAREBOOK_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub styles: DocumentStyles,
    /// Tera template for the document header. `None` uses the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_template: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            styles: DocumentStyles::default(),
            header_template: None,
        }
    }
}

/// `<config dir>/carebook/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("carebook").join("config.json"))
}

/// Load the config from `path`, or from the default location.
///
/// An explicit path must exist. A missing file at the default location
/// yields the defaults.
pub fn load_config(path: Option<&Path>) -> eyre::Result<RenderConfig> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_path()?, false),
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(RenderConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON, migrating older shapes first.
pub fn parse_config(contents: &str) -> eyre::Result<RenderConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v)
            .map_err(|_| eyre::eyre!("config_version {v} is out of range"))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: RenderConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update carebook."
        ));
    }

    // v0 → v1: heading1_size/heading2_size became title_size/section_size
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(styles) = obj.get_mut("styles").and_then(|s| s.as_object_mut()) {
            for (old, new) in [("heading1_size", "title_size"), ("heading2_size", "section_size")] {
                if let Some(v) = styles.remove(old) {
                    styles.entry(new).or_insert(v);
                }
            }
            styles.remove("heading3_size");
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (renamed heading sizes)");
    }

    Ok(json)
}

pub fn save_config(config: &RenderConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
