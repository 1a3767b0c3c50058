use anyhow::{Context, Result};

use crate::gallery::params::{LayoutParams, PedestalLayout, DEFAULT_MAX_EDGE, WALL_SLOT};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub pedestal_layout: PedestalLayout,
    pub wall_slot: f64,
    pub frame_max_edge: f64,
    pub layout_cache_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            pedestal_layout: parse_env("GALLERY_PEDESTAL_LAYOUT", PedestalLayout::Legacy)?,
            wall_slot: parse_env("GALLERY_WALL_SLOT", WALL_SLOT)?,
            frame_max_edge: parse_env("GALLERY_FRAME_MAX_EDGE", DEFAULT_MAX_EDGE)?,
            layout_cache_size: parse_env("GALLERY_LAYOUT_CACHE_SIZE", 256)?,
        })
    }

    /// Layout constants with the configured overrides applied, validated.
    pub fn layout_params(&self) -> Result<LayoutParams> {
        let params = LayoutParams {
            pedestal_layout: self.pedestal_layout,
            wall_slot: self.wall_slot,
            frame_max_edge: self.frame_max_edge,
            ..LayoutParams::default()
        };
        params.validate().context("Invalid gallery layout configuration")?;
        Ok(params)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            pedestal_layout: PedestalLayout::Legacy,
            wall_slot: WALL_SLOT,
            frame_max_edge: DEFAULT_MAX_EDGE,
            layout_cache_size: 16,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
