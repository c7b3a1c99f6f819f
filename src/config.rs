//! Carousel configuration.
//!
//! Loaded from a TOML file, built from a directory of images, or taken from
//! the built-in landing page defaults. Each `[[carousel]]` table names the
//! host elements it renders into and carries its own slides and timings.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::slide::{Slide, default_slides};
use crate::state::Settings;
use crate::texture_loader::load_sorted_image_paths;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no carousel configured")]
    NoCarousels,
    #[error("carousel #{0} has no slides")]
    EmptySlides(String),
    #[error("carousel #{0} has a zero autoplay interval")]
    ZeroInterval(String),
    #[error("carousel #{track} has an invalid swipe threshold {threshold}")]
    InvalidSwipeThreshold { track: String, threshold: f32 },
    #[error("element #{0} is used as a container by more than one carousel")]
    DuplicateContainer(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing filter, `RUST_LOG` wins when set.
    pub log_level: String,
    pub window: WindowConfig,
    #[serde(rename = "carousel")]
    pub carousels: Vec<CarouselConfig>,
    /// Directory relative slide sources resolve against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_track")]
    pub track: String,
    #[serde(default = "default_indicators")]
    pub indicators: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Element whose hover and focus belong to this carousel; the track when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
    #[serde(default)]
    pub transition_ms: u64,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

fn default_track() -> String {
    SLIDE_TRACK_ID.to_string()
}

fn default_indicators() -> String {
    INDICATOR_STRIP_ID.to_string()
}

fn default_interval() -> u64 {
    AUTOPLAY_INTERVAL_MS
}

fn default_swipe_threshold() -> f32 {
    SWIPE_THRESHOLD_PX
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
            fps: FPS,
            title: "Hero Carousel".to_string(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track: default_track(),
            indicators: default_indicators(),
            next: Some(NEXT_BUTTON_ID.to_string()),
            prev: Some(PREV_BUTTON_ID.to_string()),
            region: None,
            interval_ms: AUTOPLAY_INTERVAL_MS,
            transition_ms: TRANSITION_MS,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            slides: default_slides(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            carousels: vec![CarouselConfig::default()],
            base_dir: None,
        }
    }
}

impl CarouselConfig {
    pub fn settings(&self) -> Settings {
        Settings {
            interval_ms: self.interval_ms,
            swipe_threshold: self.swipe_threshold,
            transition_ms: self.transition_ms,
        }
    }

    pub fn region_id(&self) -> &str {
        self.region.as_deref().unwrap_or(&self.track)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// One carousel showing every image in `dir`, in file name order.
    pub fn from_image_dir(dir: &Path) -> Result<Self> {
        let slides = load_sorted_image_paths(dir)?
            .into_iter()
            .map(|path| {
                let alt = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or_default()
                    .to_string();
                Slide::new(path.to_string_lossy(), alt)
            })
            .collect();

        Ok(Self {
            carousels: vec![CarouselConfig { slides, ..CarouselConfig::default() }],
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousels.is_empty() {
            return Err(ConfigError::NoCarousels);
        }
        let mut containers = HashSet::new();
        for carousel in &self.carousels {
            for id in [&carousel.track, &carousel.indicators] {
                if !containers.insert(id.as_str()) {
                    return Err(ConfigError::DuplicateContainer(id.clone()));
                }
            }
            if carousel.slides.is_empty() {
                return Err(ConfigError::EmptySlides(carousel.track.clone()));
            }
            if carousel.interval_ms == 0 {
                return Err(ConfigError::ZeroInterval(carousel.track.clone()));
            }
            if !carousel.swipe_threshold.is_finite() || carousel.swipe_threshold < 0.0 {
                return Err(ConfigError::InvalidSwipeThreshold {
                    track: carousel.track.clone(),
                    threshold: carousel.swipe_threshold,
                });
            }
        }
        Ok(())
    }

    /// Overrides the autoplay interval of every carousel.
    pub fn with_interval(mut self, interval_ms: u64) -> Self {
        for carousel in &mut self.carousels {
            carousel.interval_ms = interval_ms;
        }
        self
    }

    /// Slide source as a filesystem path.
    pub fn resolve(&self, src: &str) -> PathBuf {
        let path = Path::new(src);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
