//! Display languages and the page context that tracks the active one

use serde::{Deserialize, Serialize};

use crate::typewriter::Typewriter;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Id];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Locale::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Markup attribute holding this locale's text (`data-en`, `data-id`)
    pub fn attribute(&self) -> &'static str {
        match self {
            Locale::En => "data-en",
            Locale::Id => "data-id",
        }
    }

    /// Typewriter phrases
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            Locale::En => &[
                "Machine Learning Engineer",
                "AI Research Enthusiast",
                "Deep Learning Developer",
                "Data Science Specialist",
            ],
            Locale::Id => &[
                "Insinyur Machine Learning",
                "Peneliti Kecerdasan Buatan",
                "Pengembang Deep Learning",
                "Spesialis Data Science",
            ],
        }
    }

    /// Contact button label after a hand-off
    pub fn sent_label(&self) -> &'static str {
        match self {
            Locale::En => "Message Sent!",
            Locale::Id => "Pesan Terkirim!",
        }
    }
}

/// Text of a translatable element in both locales
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translations {
    pub en: Option<String>,
    pub id: Option<String>,
}

impl Translations {
    /// Text for `locale`, if present and non-empty
    pub fn get(&self, locale: Locale) -> Option<&str> {
        let text = match locale {
            Locale::En => self.en.as_deref(),
            Locale::Id => self.id.as_deref(),
        };
        text.filter(|t| !t.is_empty())
    }
}

/// Replacement content for an element after switching to `locale`.
///
/// `None` leaves the element as it is.
pub fn translate(element: &Translations, locale: Locale) -> Option<&str> {
    element.get(locale)
}

/// Result of [`PageContext::switch_locale`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSwitch<T> {
    /// Requested locale was already active
    Unchanged,
    /// Locale changed; `stale_timer` is the typewriter timer to cancel
    Switched { stale_timer: Option<T> },
}

/// Mutable page state shared by the locale toggle and the typewriter.
///
/// Generic over the host timer handle so the browser layer can keep its
/// pending `setTimeout` id here.
#[derive(Debug, Clone, Default)]
pub struct PageContext<T = i32> {
    pub locale: Locale,
    pub typewriter: Typewriter,
    /// The one typewriter timer allowed to be pending
    pub pending_timer: Option<T>,
}

impl<T> PageContext<T> {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            typewriter: Typewriter::new(),
            pending_timer: None,
        }
    }

    /// Switch to `locale`, resetting the typewriter to its first phrase
    pub fn switch_locale(&mut self, locale: Locale) -> LocaleSwitch<T> {
        if locale == self.locale {
            return LocaleSwitch::Unchanged;
        }
        self.locale = locale;
        self.typewriter.reset();
        LocaleSwitch::Switched {
            stale_timer: self.pending_timer.take(),
        }
    }

    /// Run one typewriter step in the active locale
    pub fn type_step(&mut self) -> crate::typewriter::Frame {
        self.typewriter.step(self.locale.phrases())
    }

    /// Remember the newly scheduled timer, returning any it replaces
    pub fn set_pending_timer(&mut self, handle: T) -> Option<T> {
        self.pending_timer.replace(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(en: &str, id: &str) -> Translations {
        Translations {
            en: Some(en.to_string()),
            id: Some(id.to_string()),
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code(" ID "), Some(Locale::Id));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::Id.attribute(), "data-id");
    }

    #[test]
    fn test_phrase_tables_match() {
        assert_eq!(Locale::En.phrases().len(), Locale::Id.phrases().len());
    }

    #[test]
    fn test_empty_translation_leaves_element() {
        let el = Translations {
            en: Some("About".to_string()),
            id: Some(String::new()),
        };
        assert_eq!(translate(&el, Locale::En), Some("About"));
        assert_eq!(translate(&el, Locale::Id), None);
    }

    #[test]
    fn test_switch_and_back_restores_text_and_typewriter() {
        let elements = [element("About", "Tentang"), element("<b>Projects</b>", "<b>Proyek</b>")];
        let mut shown: Vec<String> = elements.iter().map(|e| e.en.clone().unwrap()).collect();
        let original = shown.clone();

        let mut ctx: PageContext<u32> = PageContext::new(Locale::En);
        for _ in 0..7 {
            ctx.type_step();
        }
        ctx.set_pending_timer(11);

        for locale in [Locale::Id, Locale::En] {
            let switch = ctx.switch_locale(locale);
            for (el, text) in elements.iter().zip(shown.iter_mut()) {
                if let Some(t) = translate(el, locale) {
                    *text = t.to_string();
                }
            }
            if locale == Locale::Id {
                assert_eq!(shown, vec!["Tentang", "<b>Proyek</b>"]);
                assert_eq!(switch, LocaleSwitch::Switched { stale_timer: Some(11) });
                ctx.set_pending_timer(12);
            } else {
                assert_eq!(switch, LocaleSwitch::Switched { stale_timer: Some(12) });
            }
        }

        assert_eq!(shown, original);
        assert_eq!(ctx.typewriter.phrase_index, 0);
        assert_eq!(ctx.typewriter.visible_text(ctx.locale.phrases()), "");
        assert!(ctx.pending_timer.is_none());
    }

    #[test]
    fn test_switch_to_active_locale_is_noop() {
        let mut ctx: PageContext<u32> = PageContext::new(Locale::En);
        ctx.type_step();
        ctx.set_pending_timer(3);
        assert_eq!(ctx.switch_locale(Locale::En), LocaleSwitch::Unchanged);
        assert_eq!(ctx.pending_timer, Some(3));
        assert_eq!(ctx.typewriter.char_index, 1);
    }

    #[test]
    fn test_type_step_uses_active_locale() {
        let mut ctx: PageContext<u32> = PageContext::new(Locale::Id);
        assert_eq!(ctx.type_step().text, "I");
        assert_eq!(Locale::Id.sent_label(), "Pesan Terkirim!");
    }
}
