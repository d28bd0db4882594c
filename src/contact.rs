//! Contact form hand-off to the visitor's mail client
//!
//! Nothing is sent from the page. The form fields are templated into either
//! a `mailto:` URI (mobile) or a webmail compose URL (desktop), which the
//! browser layer then opens.

/// Subject line prefix
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";
/// Webmail compose endpoint used on desktop
pub const WEBMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1";
/// Submit button background while showing the sent label
pub const SENT_BACKGROUND: &str = "#64B5F6";

/// User agent fragments treated as mobile (matched case-insensitively)
pub const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Submitted form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("{}{}", SUBJECT_PREFIX, self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}

/// Where the hand-off goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailLink {
    /// Navigate the current page to a `mailto:` URI
    MailTo(String),
    /// Open a webmail compose page in a new tab
    Webmail(String),
}

impl MailLink {
    #[cfg(test)]
    pub fn url(&self) -> &str {
        match self {
            MailLink::MailTo(url) | MailLink::Webmail(url) => url,
        }
    }
}

/// Coarse mobile check on the user agent string
pub fn is_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|agent| ua.contains(agent))
}

/// Build the hand-off link for `msg`
pub fn compose(msg: &ContactMessage, recipient: &str, mobile: bool) -> MailLink {
    let subject = urlencoding::encode(&msg.subject()).into_owned();
    let body = urlencoding::encode(&msg.body()).into_owned();

    if mobile {
        MailLink::MailTo(format!(
            "mailto:{}?subject={}&body={}",
            recipient, subject, body
        ))
    } else {
        MailLink::Webmail(format!(
            "{}&to={}&su={}&body={}",
            WEBMAIL_COMPOSE_URL, recipient, subject, body
        ))
    }
}

/// Build the hand-off link, picking the target from the user agent
pub fn compose_for_agent(msg: &ContactMessage, recipient: &str, user_agent: &str) -> MailLink {
    compose(msg, recipient, is_mobile(user_agent))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    const PHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
    const ENCODED_BODY: &str = "Name%3A%20A%0AEmail%3A%20b%40c.com%0A%0AMessage%3A%0Ahi";

    fn sample() -> ContactMessage {
        ContactMessage {
            name: "A".to_string(),
            email: "b@c.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_desktop_webmail_link() {
        let link = compose_for_agent(&sample(), "me@site.dev", DESKTOP_UA);
        let url = match link {
            MailLink::Webmail(url) => url,
            other => panic!("expected webmail link, got {:?}", other),
        };
        assert!(url.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=me@site.dev"));
        assert!(url.contains("su=Portfolio%20Contact%3A%20A"));
        assert!(url.ends_with(&format!("&body={}", ENCODED_BODY)));
    }

    #[test]
    fn test_mobile_mailto_link() {
        let link = compose_for_agent(&sample(), "me@site.dev", PHONE_UA);
        assert_eq!(
            link,
            MailLink::MailTo(format!(
                "mailto:me@site.dev?subject=Portfolio%20Contact%3A%20A&body={}",
                ENCODED_BODY
            ))
        );
    }

    #[test]
    fn test_mobile_detection() {
        assert!(is_mobile("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(is_mobile("mozilla/5.0 (IPAD; cpu os 16_0)"));
        assert!(!is_mobile(DESKTOP_UA));
        assert!(!is_mobile(""));
    }

    #[test]
    fn test_body_template() {
        assert_eq!(sample().body(), "Name: A\nEmail: b@c.com\n\nMessage:\nhi");
        assert_eq!(sample().subject(), "Portfolio Contact: A");
    }

    #[test]
    fn test_special_characters_encoded() {
        let msg = ContactMessage {
            name: "Ana & Bo?".to_string(),
            email: "x@y.z".to_string(),
            message: "a=b#c".to_string(),
        };
        let link = compose(&msg, "me@site.dev", false);
        assert!(link.url().contains("su=Portfolio%20Contact%3A%20Ana%20%26%20Bo%3F&"));
        assert!(link.url().contains("a%3Db%23c"));
    }

    #[test]
    fn test_non_ascii_fields_encoded_for_both_targets() {
        let msg = ContactMessage {
            name: "Budi Ñ".to_string(),
            email: "budi@contoh.id".to_string(),
            message: "Halo 👋".to_string(),
        };
        for mobile in [true, false] {
            let link = compose(&msg, "me@site.dev", mobile);
            assert!(link.url().contains("Portfolio%20Contact%3A%20Budi%20%C3%91"));
            assert!(link.url().ends_with("Halo%20%F0%9F%91%8B"));
            assert!(link.url().is_ascii());
        }
    }
}
