use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use treesift::RuleSet;

pub const LOCAL_RULES_FILE: &str = ".siftrules.toml";

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    pub format: Option<String>,
    pub no_color: Option<bool>,
    pub flat: Option<bool>,
    pub rules: Option<String>,
}

impl Config {
    pub fn merge(&mut self, other: Config) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.no_color.is_some() {
            self.no_color = other.no_color;
        }
        if other.flat.is_some() {
            self.flat = other.flat;
        }
        if other.rules.is_some() {
            self.rules = other.rules;
        }
    }
}

pub fn load_config() -> Config {
    let mut config = Config::default();

    // 1. Global config: ~/.sift/config.toml
    if let Some(home_dir) = dirs::home_dir() {
        let global_path = home_dir.join(".sift").join("config.toml");
        if let Ok(content) = fs::read_to_string(global_path) {
            if let Ok(global_config) = toml::from_str::<Config>(&content) {
                config.merge(global_config);
            }
        }
    }

    // 2. Local config: .sift.toml in the working directory
    if let Ok(content) = fs::read_to_string(".sift.toml") {
        if let Ok(local_config) = toml::from_str::<Config>(&content) {
            config.merge(local_config);
        }
    }

    config
}

pub fn global_rules_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sift").join("rules.toml"))
}

/// Which rules file a command reads and writes: explicit flag, then config,
/// then an existing local file, then an existing global one, else the local
/// default (which a write will create).
pub fn resolve_rules_path(flag: Option<&str>, config: &Config) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.rules {
        return PathBuf::from(path);
    }
    let local = PathBuf::from(LOCAL_RULES_FILE);
    if local.exists() {
        return local;
    }
    if let Some(global) = global_rules_path() {
        if global.exists() {
            return global;
        }
    }
    local
}

/// Load a rules file; a missing file is an empty rule set, not an error.
pub fn load_rules(path: &Path) -> Result<RuleSet, Box<dyn Error>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(RuleSet::new()),
        Err(e) => Err(e.into()),
    }
}

pub fn save_rules(path: &Path, rules: &RuleSet) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, toml::to_string_pretty(rules)?)?;
    Ok(())
}
