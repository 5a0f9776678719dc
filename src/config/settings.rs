use std::{fs, path::Path, path::PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::providers::Provider;
use crate::utils::secrets::normalize_api_key;

const APP_DIR_NAME: &str = ".deepcheck";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_TEMPERATURE: f32 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub provider: String,
    pub api_key: Option<String>,
    /// Model override; the provider default is used when unset
    pub model: Option<String>,
    /// Base URL override, required for the `custom` provider
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: Provider::default().name().to_string(),
            api_key: None,
            model: None,
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Everything needed to reach the completion endpoint, checked once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEndpoint {
    pub provider: Provider,
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub temperature: f32,
}

impl Settings {
    pub fn load_with(project_root: Option<&Path>, explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(project_root, explicit)?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let value: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config TOML at {}", path.display()))?;
        Ok(value)
    }

    pub fn save_with(&self, project_root: Option<&Path>, explicit: Option<&Path>) -> Result<()> {
        let (dir, path) = resolve_config_dir_and_file(project_root, explicit)?;
        if !dir.exists() {
            fs::create_dir_all(&dir).with_context(|| format!(
                "Failed to create config directory at {}",
                dir.display()
            ))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn load(explicit: Option<&Path>) -> Result<Self> { Self::load_with(None, explicit) }
    pub fn save(&self, explicit: Option<&Path>) -> Result<()> { self.save_with(None, explicit) }

    pub fn init_scoped(force: bool, project_root: Option<&Path>, explicit: Option<&Path>) -> Result<PathBuf> {
        let (_, file) = resolve_config_dir_and_file(project_root, explicit)?;
        if file.exists() && !force {
            bail!("Config already exists at {} (use --force to overwrite)", file.display());
        }
        Self::default().save_with(project_root, explicit)?;
        Ok(file)
    }

    /// Applies `config set <key> <value>`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-key" | "api_key" => self.api_key = Some(normalize_api_key(value)),
            "provider" => self.provider = value.parse::<Provider>()?.name().to_string(),
            "model" => self.model = non_empty(value),
            "base-url" | "base_url" => self.base_url = non_empty(value),
            "temperature" => {
                let t: f32 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("temperature must be a number, got '{}'", value))?;
                if !(0.0..=2.0).contains(&t) {
                    bail!("temperature {} is outside 0-2", t);
                }
                self.temperature = t;
            }
            other => bail!("Unknown config key: {}", other),
        }
        Ok(())
    }

    /// Picks provider, model, URL and credential. `lookup_env` is consulted for the
    /// provider's key variable when the config has no key.
    pub fn resolve_endpoint<F>(
        &self,
        provider_override: Option<&str>,
        model_override: Option<&str>,
        lookup_env: F,
    ) -> Result<ResolvedEndpoint>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider: Provider = provider_override.unwrap_or(&self.provider).parse()?;

        let base_url = self
            .base_url
            .clone()
            .or_else(|| provider.default_base_url().map(str::to_string))
            .ok_or_else(|| anyhow!("Provider '{}' needs `base_url` in the config", provider))?;

        let model = model_override
            .map(str::to_string)
            .or_else(|| self.model.clone())
            .unwrap_or_else(|| provider.default_model().to_string());

        let api_key = self
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup_env(provider.api_key_env()))
            .map(|k| normalize_api_key(&k))
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!(
                "API key is not set. Use `config set api-key ...` or set env {}",
                provider.api_key_env()
            ))?;

        Ok(ResolvedEndpoint {
            provider,
            base_url,
            model,
            api_key,
            temperature: self.temperature,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() { None } else { Some(v.to_string()) }
}

fn config_dir_path() -> Result<PathBuf> {
    let home = home_dir().context("Cannot resolve home directory")?;
    Ok(home.join(APP_DIR_NAME))
}

fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir_path()?.join(CONFIG_FILE_NAME))
}

fn resolve_config_path(project_root: Option<&Path>, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit { return Ok(p.to_path_buf()); }
    if let Some(root) = project_root { return Ok(root.join(CONFIG_FILE_NAME)); }
    config_file_path()
}

fn resolve_config_dir_and_file(project_root: Option<&Path>, explicit: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    if let Some(p) = explicit {
        let dir = p.parent().unwrap_or_else(|| Path::new("."));
        return Ok((dir.to_path_buf(), p.to_path_buf()));
    }
    if let Some(root) = project_root {
        return Ok((root.to_path_buf(), root.join(CONFIG_FILE_NAME)));
    }
    let dir = config_dir_path()?;
    Ok((dir.clone(), dir.join(CONFIG_FILE_NAME)))
}
