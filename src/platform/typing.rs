//! Typewriter timer loop and the language toggle that restarts it

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Window};

use super::dom;
use crate::locale::{Locale, LocaleSwitch, PageContext, Translations, translate};
use crate::page::{LANG_ATTRIBUTE, classes, ids, selectors};
use crate::typewriter::Typewriter;

/// Page context shared between browser callbacks (timer handles are `i32`)
pub type SharedContext = Rc<RefCell<PageContext<i32>>>;

/// Drives the typewriter into `#typed-text` with `setTimeout`
#[derive(Clone)]
pub struct TypingDriver {
    ctx: SharedContext,
    window: Window,
    target: Element,
}

impl TypingDriver {
    pub fn new(window: &Window, document: &Document, ctx: SharedContext) -> Result<Self, JsValue> {
        Ok(Self {
            ctx,
            window: window.clone(),
            target: dom::require(document, ids::TYPED_TEXT)?,
        })
    }

    pub fn context(&self) -> &SharedContext {
        &self.ctx
    }

    /// Begin typing after the start delay
    pub fn start(&self) -> Result<(), JsValue> {
        self.schedule(Typewriter::start_delay_ms())
    }

    /// Cancel `stale_timer`, show the (reset) typewriter text and start over
    pub fn restart(&self, stale_timer: Option<i32>) -> Result<(), JsValue> {
        if let Some(handle) = stale_timer {
            dom::clear_timeout(&self.window, handle);
        }
        let text = {
            let ctx = self.ctx.borrow();
            ctx.typewriter.visible_text(ctx.locale.phrases())
        };
        self.target.set_text_content(Some(&text));
        self.start()
    }

    fn schedule(&self, delay_ms: u32) -> Result<(), JsValue> {
        let driver = self.clone();
        let handle = dom::set_timeout(&self.window, delay_ms, move || driver.tick())?;
        // Only one cycle may run; drop whatever was pending before
        let replaced = self.ctx.borrow_mut().set_pending_timer(handle);
        if let Some(stale) = replaced {
            dom::clear_timeout(&self.window, stale);
        }
        Ok(())
    }

    fn tick(&self) {
        let frame = self.ctx.borrow_mut().type_step();
        self.target.set_text_content(Some(&frame.text));
        if let Err(e) = self.schedule(frame.delay_ms) {
            log::warn!("Typewriter stopped: {:?}", e);
        }
    }
}

/// Wire the language toggles (both optional)
pub fn language_toggle(document: &Document, driver: &TypingDriver) -> Result<(), JsValue> {
    for id in ids::LANG_TOGGLES {
        let Some(toggle) = document.get_element_by_id(id) else {
            continue;
        };
        let doc = document.clone();
        let driver = driver.clone();
        dom::listen(&toggle, "click", move |event: Event| {
            let option = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(selectors::LANG_OPTION).ok().flatten());
            let Some(locale) = option
                .and_then(|opt| opt.get_attribute(LANG_ATTRIBUTE))
                .and_then(|code| Locale::from_code(&code))
            else {
                return;
            };
            if let Err(e) = switch_language(&doc, &driver, locale) {
                log::warn!("Language switch failed: {:?}", e);
            }
        })?;
    }
    Ok(())
}

fn switch_language(document: &Document, driver: &TypingDriver, locale: Locale) -> Result<(), JsValue> {
    let switch = driver.context().borrow_mut().switch_locale(locale);
    let LocaleSwitch::Switched { stale_timer } = switch else {
        return Ok(());
    };
    log::info!("Language switched to {}", locale.code());

    for option in dom::select_all(document, selectors::LANG_OPTION)? {
        let active = option.get_attribute(LANG_ATTRIBUTE).as_deref() == Some(locale.code());
        dom::apply_classes(&option, &[(classes::ACTIVE, active)]);
    }

    for el in dom::select_all(document, selectors::TRANSLATABLE)? {
        let translations = Translations {
            en: el.get_attribute(Locale::En.attribute()),
            id: el.get_attribute(Locale::Id.attribute()),
        };
        if let Some(text) = translate(&translations, locale) {
            el.set_inner_html(text);
        }
    }

    driver.restart(stale_timer)
}
