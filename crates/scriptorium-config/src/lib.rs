use scriptorium_engine::{EnhancementConfig, RenderOptions, Variant, page};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// `[renderer]` table: presentation variant and memoisation sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub variant: Variant,
    pub frontmatter_cache: usize,
    pub block_cache: usize,
    pub caching: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            variant: options.variant,
            frontmatter_cache: options.frontmatter_cache_capacity,
            block_cache: options.block_cache_capacity,
            caching: options.caching,
        }
    }
}

impl RendererConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            variant: self.variant,
            frontmatter_cache_capacity: self.frontmatter_cache,
            block_cache_capacity: self.block_cache,
            caching: self.caching,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub content_path: PathBuf,
    #[serde(default)]
    pub renderer: RendererConfig,
    /// Section layouts applied to pages, keyed by heading.
    #[serde(default, skip_serializing_if = "EnhancementConfig::is_empty")]
    pub enhancements: EnhancementConfig,
}

impl Config {
    pub fn new(content_path: impl Into<PathBuf>) -> Self {
        Self {
            content_path: content_path.into(),
            renderer: RendererConfig::default(),
            enhancements: EnhancementConfig::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the content path
        config.content_path =
            Self::expand_path(&config.content_path).unwrap_or(config.content_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/scriptorium");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        self.renderer.render_options()
    }

    /// A renderer built from the `[renderer]` table.
    pub fn renderer(&self) -> page::Renderer {
        page::Renderer::new(self.render_options())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
