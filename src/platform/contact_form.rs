//! Contact form submission

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, FormData, HtmlElement, HtmlFormElement, Window};

use super::dom;
use super::typing::SharedContext;
use crate::consts::SENT_LABEL_MS;
use crate::contact::{ContactMessage, MailLink, SENT_BACKGROUND, compose_for_agent};
use crate::locale::Locale;
use crate::page::{ids, selectors};

/// Hand submissions of `#contact-form` off to the visitor's mail client
pub fn attach(
    window: &Window,
    document: &Document,
    ctx: SharedContext,
    recipient: String,
) -> Result<(), JsValue> {
    let form: HtmlFormElement = dom::require_as(document, ids::CONTACT_FORM)?;
    let win = window.clone();
    let target = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let locale = ctx.borrow().locale;
        if let Err(e) = submit(&win, &target, &recipient, locale) {
            log::warn!("Contact hand-off failed: {:?}", e);
        }
    })
}

fn read_message(form: &HtmlFormElement) -> Result<ContactMessage, JsValue> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactMessage {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    })
}

fn submit(window: &Window, form: &HtmlFormElement, recipient: &str, locale: Locale) -> Result<(), JsValue> {
    let message = read_message(form)?;
    let user_agent = window.navigator().user_agent().unwrap_or_default();

    match compose_for_agent(&message, recipient, &user_agent) {
        MailLink::MailTo(url) => {
            log::info!("Contact hand-off via mailto");
            window.location().set_href(&url)?;
        }
        MailLink::Webmail(url) => {
            log::info!("Contact hand-off via webmail");
            window.open_with_url_and_target(&url, "_blank")?;
        }
    }

    show_sent(window, form, locale)
}

/// Optimistic "sent" label on the submit button, reset with the form later
fn show_sent(window: &Window, form: &HtmlFormElement, locale: Locale) -> Result<(), JsValue> {
    let Some(button) = form.query_selector(selectors::SUBMIT_BUTTON)? else {
        return Ok(());
    };
    let button: HtmlElement = button.dyn_into().map_err(JsValue::from)?;

    let original = button.text_content();
    button.set_text_content(Some(locale.sent_label()));
    let _ = button.style().set_property("background", SENT_BACKGROUND);

    let form = form.clone();
    dom::set_timeout(window, SENT_LABEL_MS, move || {
        button.set_text_content(original.as_deref());
        let _ = button.style().remove_property("background");
        form.reset();
    })?;
    Ok(())
}
