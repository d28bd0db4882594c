//! Page configuration
//!
//! Defaults come from [`crate::consts`]. A page may override any of them with
//! an inline `<script type="application/json" id="folio-config">` block.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::locale::Locale;

/// Element id of the optional inline JSON config
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
/// Default recipient; deployments are expected to override it
pub const PLACEHOLDER_RECIPIENT: &str = "hello@example.com";

/// An RGB colour, drawn with a per-use alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS `rgba()` string with the given alpha
    pub fn with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        let (r, g, b) = ACCENT_RGB;
        Rgb(r, g, b)
    }
}

/// Particle field tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub max_points: usize,
    pub area_per_point: f32,
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub link_distance: f32,
    pub link_max_alpha: f32,
    pub link_width: f32,
    pub point_alpha: f32,
    pub color: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
            area_per_point: AREA_PER_POINT,
            max_speed: POINT_MAX_SPEED,
            min_radius: POINT_MIN_RADIUS,
            max_radius: POINT_MAX_RADIUS,
            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            link_width: LINK_WIDTH,
            point_alpha: POINT_ALPHA,
            color: Rgb::default(),
        }
    }
}

/// Whole-page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Contact form recipient address. Set this in the page config; the
    /// default is a placeholder that nobody reads.
    pub recipient: String,
    /// Locale the page markup is written in
    pub locale: Locale,
    /// Loading screen display time (ms)
    pub loader_delay_ms: u32,
    pub field: FieldConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipient: PLACEHOLDER_RECIPIENT.to_string(),
            locale: Locale::En,
            loader_delay_ms: LOADER_DELAY_MS,
            field: FieldConfig::default(),
        }
    }
}

impl Config {
    /// Parse a JSON override; falls back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid page config: {}", e);
                Self::default()
            }
        }
    }

    /// Whether contact hand-offs would still go to the placeholder address
    pub fn has_placeholder_recipient(&self) -> bool {
        self.recipient.trim().is_empty() || self.recipient == PLACEHOLDER_RECIPIENT
    }

    /// Load the inline config block from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let config = match json {
            Some(json) => {
                log::info!("Loaded page config");
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default config");
                Self::default()
            }
        };
        config.warn_on_placeholder();
        config
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let config = Self::default();
        config.warn_on_placeholder();
        config
    }

    fn warn_on_placeholder(&self) {
        if self.has_placeholder_recipient() {
            log::warn!(
                "Contact recipient is not configured; set \"recipient\" in #{}",
                CONFIG_ELEMENT_ID
            );
        }
    }
}
