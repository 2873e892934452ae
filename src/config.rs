use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QmError, Result};
use crate::extract::NamingRules;

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "quotemill.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub naming: NamingRules,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("QM_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(QmError::MissingConfig(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Parse a config from TOML text, merging it over the defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| QmError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("quotemill/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| QmError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| QmError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.input {
            self.input.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
        if let Some(patch) = patch.naming {
            merge_naming(&mut self.naming, patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("QM_INPUT") {
            self.input.path = PathBuf::from(value);
        }

        if let Some(value) = env_string("QM_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(value);
        }
        if let Some(value) = env_bool("QM_OUTPUT_CLEAN") {
            self.output.clean = value;
        }
        if let Some(value) = env_usize("QM_OUTPUT_INDEX_WIDTH")? {
            self.output.index_width = value;
        }

        if let Some(value) = env_usize("QM_TITLE_WORDS")? {
            self.naming.title_words = value;
        }
        if let Some(value) = env_usize("QM_TITLE_FALLBACK_WORDS")? {
            self.naming.title_fallback_words = value;
        }
        if let Some(value) = env_usize("QM_MIN_TITLE_CHARS")? {
            self.naming.min_title_chars = value;
        }
        if let Some(value) = env_usize("QM_SLUG_WORDS")? {
            self.naming.slug_words = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("i-am-that.md"),
        }
    }
}

impl InputConfig {
    fn merge(&mut self, patch: InputPatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub dir: PathBuf,
    #[serde(default)]
    pub clean: bool,
    #[serde(default)]
    pub index_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content/quotes"),
            clean: true,
            index_width: 3,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.dir {
            self.dir = value;
        }
        if let Some(value) = patch.clean {
            self.clean = value;
        }
        if let Some(value) = patch.index_width {
            self.index_width = value;
        }
    }
}

fn merge_naming(rules: &mut NamingRules, patch: NamingPatch) {
    if let Some(value) = patch.title_words {
        rules.title_words = value;
    }
    if let Some(value) = patch.title_fallback_words {
        rules.title_fallback_words = value;
    }
    if let Some(value) = patch.min_title_chars {
        rules.min_title_chars = value;
    }
    if let Some(value) = patch.slug_words {
        rules.slug_words = value;
    }
    if let Some(value) = patch.slug_fallback {
        rules.slug_fallback = value;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub input: Option<InputPatch>,
    pub output: Option<OutputPatch>,
    pub naming: Option<NamingPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InputPatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub dir: Option<PathBuf>,
    pub clean: Option<bool>,
    pub index_width: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NamingPatch {
    pub title_words: Option<usize>,
    pub title_fallback_words: Option<usize>,
    pub min_title_chars: Option<usize>,
    pub slug_words: Option<usize>,
    pub slug_fallback: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| QmError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
