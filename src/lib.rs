//! Neural Folio - interactive layer for a portfolio page
//!
//! Core modules:
//! - `field`: Animated particle background (points, motion, links, drawing)
//! - `typewriter`: Phrase typing/deleting cycle
//! - `locale`: Two-language text toggle and the page context it drives
//! - `theme`: Light/dark preference
//! - `contact`: Contact form mail hand-off
//! - `page`: Small page behaviours (menu, nav, reveal, smooth scroll)
//! - `persistence`: Key-value preference storage
//! - `platform`: Browser bindings (wasm32 only)

pub mod config;
pub mod contact;
pub mod field;
pub mod locale;
pub mod page;
pub mod persistence;
pub mod platform;
pub mod theme;
pub mod typewriter;

pub use config::Config;
pub use locale::{Locale, PageContext};
pub use theme::Theme;

/// Page behaviour constants
pub mod consts {
    /// Hard cap on background points
    pub const MAX_POINTS: usize = 80;
    /// Surface area (px²) per background point
    pub const AREA_PER_POINT: f32 = 15_000.0;
    /// Max absolute point speed per axis (px/frame)
    pub const POINT_MAX_SPEED: f32 = 0.25;
    /// Point radius range (px)
    pub const POINT_MIN_RADIUS: f32 = 1.0;
    pub const POINT_MAX_RADIUS: f32 = 3.0;
    /// Points closer than this are linked
    pub const LINK_DISTANCE: f32 = 150.0;
    /// Link alpha at zero distance
    pub const LINK_MAX_ALPHA: f32 = 0.12;
    pub const LINK_WIDTH: f32 = 1.0;
    /// Point fill alpha
    pub const POINT_ALPHA: f32 = 0.4;
    /// Accent colour (#64B5F6)
    pub const ACCENT_RGB: (u8, u8, u8) = (100, 181, 246);

    /// Loading screen display time
    pub const LOADER_DELAY_MS: u32 = 1500;

    /// Typewriter timings
    pub const TYPE_START_DELAY_MS: u32 = 1000;
    pub const TYPE_DELAY_MS: u32 = 100;
    pub const DELETE_DELAY_MS: u32 = 50;
    pub const HOLD_DELAY_MS: u32 = 2000;
    pub const NEXT_PHRASE_DELAY_MS: u32 = 500;

    /// How long the contact button shows its "sent" label
    pub const SENT_LABEL_MS: u32 = 3000;
    /// Scroll offset past which the nav switches style
    pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
}
