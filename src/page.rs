//! Small page behaviours: markup hooks and the state rules behind them
//!
//! The browser layer wires these to DOM events; everything here is plain data.

use crate::consts::NAV_SCROLL_THRESHOLD;

/// Element ids the page is expected to provide
pub mod ids {
    pub const CANVAS: &str = "neural-canvas";
    pub const LOADER: &str = "loader";
    pub const TYPED_TEXT: &str = "typed-text";
    pub const MENU_BUTTON: &str = "mobile-menu-btn";
    pub const MENU: &str = "mobile-menu";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const LANG_TOGGLES: [&str; 2] = ["lang-toggle", "lang-toggle-mobile"];
    pub const THEME_TOGGLES: [&str; 2] = ["theme-toggle", "theme-toggle-mobile"];
}

/// CSS classes toggled by the page
pub mod classes {
    pub const HIDDEN: &str = "hidden";
    pub const FLEX: &str = "flex";
    pub const ACTIVE: &str = "active";
    pub const REVEALED: &str = "revealed";
    pub const NAV_SCROLLED: &str = "nav-scrolled";
    pub const NAV_BACKGROUND: &str = "bg-nav";
}

/// Selectors used by the page
pub mod selectors {
    pub const REVEAL: &str = ".reveal-up, .reveal-left, .reveal-right";
    pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
    pub const MENU_LINKS: &str = "a";
    pub const LANG_OPTION: &str = ".lang-option";
    pub const TRANSLATABLE: &str = "[data-en][data-id]";
    pub const SUN_ICON: &str = ".sun-icon";
    pub const MOON_ICON: &str = ".moon-icon";
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const NAV: &str = "nav";
}

/// Attribute naming a `.lang-option`'s locale
pub const LANG_ATTRIBUTE: &str = "data-lang";

/// Intersection options for scroll reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// Reveal is one-way: once an element has intersected it stays revealed
pub fn should_reveal(already_revealed: bool, intersecting: bool) -> bool {
    !already_revealed && intersecting
}

/// Nav bar styling for a scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub scrolled: bool,
}

impl NavStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > NAV_SCROLL_THRESHOLD,
        }
    }

    /// `(class, present)` pairs to apply to the nav element
    pub fn classes(&self) -> [(&'static str, bool); 2] {
        [
            (classes::NAV_SCROLLED, self.scrolled),
            (classes::NAV_BACKGROUND, !self.scrolled),
        ]
    }
}

/// Mobile menu classes
///
/// `hidden` and `flex` are tracked separately and each one flips on toggle,
/// so markup that starts with both or neither keeps its own pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub hidden: bool,
    pub flex: bool,
}

impl MenuState {
    /// State as read from the menu's class list
    pub fn from_classes(hidden: bool, flex: bool) -> Self {
        Self { hidden, flex }
    }

    pub fn is_open(&self) -> bool {
        !self.hidden
    }

    pub fn toggled(&self) -> Self {
        Self {
            hidden: !self.hidden,
            flex: !self.flex,
        }
    }

    pub fn closed() -> Self {
        Self {
            hidden: true,
            flex: false,
        }
    }

    /// `(class, present)` pairs to apply to the menu element
    pub fn classes(&self) -> [(&'static str, bool); 2] {
        [(classes::HIDDEN, self.hidden), (classes::FLEX, self.flex)]
    }
}

/// Selector for an in-page anchor's target, `None` for a bare `#`
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Timer delay as `setTimeout` takes it; saturates instead of wrapping
pub fn timeout_ms(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}
