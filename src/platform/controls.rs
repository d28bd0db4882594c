//! Loader, scroll reveal, mobile menu, smooth scroll, nav and theme toggle

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::dom;
use super::storage::LocalStore;
use crate::page::{
    MenuState, NavStyle, RevealOptions, anchor_target, classes, ids, selectors, should_reveal,
};
use crate::theme::{THEME_ATTRIBUTE, Theme, ThemeToggle};

/// Hide the loading screen after `delay_ms`
pub fn hide_loader_after(window: &Window, document: &Document, delay_ms: u32) -> Result<(), JsValue> {
    let loader = dom::require(document, ids::LOADER)?;
    dom::set_timeout(window, delay_ms, move || {
        let _ = loader.class_list().add_1(classes::HIDDEN);
    })?;
    Ok(())
}

/// Reveal elements once they scroll into view
pub fn observe_reveals(document: &Document) -> Result<(), JsValue> {
    let options = RevealOptions::default();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let revealed = target.class_list().contains(classes::REVEALED);
                if should_reveal(revealed, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(classes::REVEALED);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    let targets = dom::select_all(document, selectors::REVEAL)?;
    for el in &targets {
        observer.observe(el);
    }
    log::debug!("Observing {} reveal targets", targets.len());
    Ok(())
}

/// Mobile menu button and the links inside the menu
pub fn mobile_menu(document: &Document) -> Result<(), JsValue> {
    let button = dom::require(document, ids::MENU_BUTTON)?;
    let menu = dom::require(document, ids::MENU)?;
    let links = dom::elements(menu.query_selector_all(selectors::MENU_LINKS)?);

    {
        let menu = menu.clone();
        dom::listen(&button, "click", move |_event| {
            let list = menu.class_list();
            let state = MenuState::from_classes(
                list.contains(classes::HIDDEN),
                list.contains(classes::FLEX),
            )
            .toggled();
            dom::apply_classes(&menu, &state.classes());
        })?;
    }

    for link in &links {
        let menu = menu.clone();
        dom::listen(link, "click", move |_event| {
            dom::apply_classes(&menu, &MenuState::closed().classes());
        })?;
    }
    Ok(())
}

/// Smooth scrolling for in-page `#anchor` links
pub fn smooth_scroll(document: &Document) -> Result<(), JsValue> {
    let anchors = dom::select_all(document, selectors::IN_PAGE_ANCHORS)?;
    for anchor in &anchors {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(anchor, "click", move |event: Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            match doc.query_selector(selector) {
                Ok(Some(target)) => scroll_to(&target),
                Ok(None) => {}
                Err(_) => log::debug!("Unusable anchor target: {}", selector),
            }
        })?;
    }
    Ok(())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Nav bar style follows the scroll position
pub fn nav_on_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let win = window.clone();
    let doc = document.clone();
    dom::listen(window, "scroll", move |_event| {
        let Some(nav) = doc.query_selector(selectors::NAV).ok().flatten() else {
            return;
        };
        let style = NavStyle::for_scroll(win.scroll_y().unwrap_or(0.0));
        dom::apply_classes(&nav, &style.classes());
    })
}

/// Apply the stored theme and wire up the (optional) toggle buttons
pub fn theme_toggle(document: &Document) -> Result<(), JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?;

    let toggle = ThemeToggle::init(LocalStore::open());
    show_theme(document, &root, toggle.current());
    let toggle = Rc::new(RefCell::new(toggle));

    for id in ids::THEME_TOGGLES {
        let Some(button) = document.get_element_by_id(id) else {
            continue;
        };
        let toggle = toggle.clone();
        let doc = document.clone();
        let root = root.clone();
        dom::listen(&button, "click", move |_event| {
            let shown = Theme::from_attribute(root.get_attribute(THEME_ATTRIBUTE).as_deref());
            let next = toggle.borrow_mut().toggle_from(shown);
            show_theme(&doc, &root, next);
            log::info!("Theme switched to {}", next.as_str());
        })?;
    }
    Ok(())
}

fn show_theme(document: &Document, root: &Element, theme: Theme) {
    let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());

    let icons = theme.icons();
    for (selector, hidden) in [
        (selectors::SUN_ICON, icons.sun_hidden),
        (selectors::MOON_ICON, icons.moon_hidden),
    ] {
        if let Ok(icons) = dom::select_all(document, selector) {
            for icon in &icons {
                dom::apply_classes(icon, &[(classes::HIDDEN, hidden)]);
            }
        }
    }
}
