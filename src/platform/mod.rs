//! Browser platform layer
//!
//! Binds the page behaviours to the DOM:
//! - Canvas animation loop and resize handling
//! - Timers (loader, typewriter, contact button)
//! - Event listeners (menu, anchors, toggles, form, scroll)
//! - Storage (LocalStorage on web)
//!
//! Everything here is wasm32-only; the logic it drives lives in the
//! platform-independent modules.

#[cfg(target_arch = "wasm32")]
pub mod background;
#[cfg(target_arch = "wasm32")]
pub mod contact_form;
#[cfg(target_arch = "wasm32")]
pub mod controls;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub use run_page::run;

#[cfg(target_arch = "wasm32")]
mod run_page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use super::typing::{SharedContext, TypingDriver};
    use super::{background, contact_form, controls, dom, typing};
    use crate::config::Config;
    use crate::locale::PageContext;

    /// Initialise every page behaviour.
    ///
    /// Fails on the first missing required element; behaviours wired before
    /// the failure keep running.
    pub fn run() -> Result<(), JsValue> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let config = Config::load();

        controls::hide_loader_after(&window, &document, config.loader_delay_ms)?;
        background::start(&window, &document, &config.field)?;

        let ctx: SharedContext = Rc::new(RefCell::new(PageContext::new(config.locale)));
        let typewriter = TypingDriver::new(&window, &document, ctx.clone())?;
        typewriter.start()?;

        controls::observe_reveals(&document)?;
        controls::mobile_menu(&document)?;
        controls::smooth_scroll(&document)?;
        contact_form::attach(&window, &document, ctx, config.recipient.clone())?;
        typing::language_toggle(&document, &typewriter)?;
        controls::theme_toggle(&document)?;
        controls::nav_on_scroll(&window, &document)?;

        Ok(())
    }
}
