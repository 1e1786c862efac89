//! Turns the contact form into the WhatsApp message and deep link.
//!
//! Normalization runs twice: live on every keystroke (name and email) for the
//! user's benefit, and again at submission so the outgoing text is correct
//! even when the live pass was skipped (autofill, paste without input event).

use std::fmt::Write as _;
use std::str::FromStr;

use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    General,
    Courses,
    Enterprise,
    Certification,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact subject {0:?}")]
pub struct UnknownSubject(pub String);

impl Subject {
    /// In the order the select lists them.
    pub const ALL: [Subject; 5] = [
        Subject::General,
        Subject::Courses,
        Subject::Enterprise,
        Subject::Certification,
        Subject::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Courses => "courses",
            Subject::Enterprise => "enterprise",
            Subject::Certification => "certification",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::General => "Consulta general",
            Subject::Courses => "Información sobre cursos",
            Subject::Enterprise => "Capacitación empresas",
            Subject::Certification => "Certificación",
            Subject::Other => "Otro",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, UnknownSubject> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.key() == key)
            .ok_or_else(|| UnknownSubject(key.to_string()))
    }

    /// Select values come from `Subject::ALL`, so a miss is a bug: panic in
    /// debug builds, degrade to `Other` in release.
    pub fn from_key_or_other(key: &str) -> Self {
        match Subject::from_key(key) {
            Ok(subject) => subject,
            Err(err) => {
                log::error!("{}", err);
                if cfg!(debug_assertions) {
                    panic!("{}", err);
                }
                Subject::Other
            }
        }
    }
}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::from_key(s)
    }
}

/// Uppercases the first character of every space-separated word and
/// lowercases the rest. Runs of spaces are kept as they are.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn normalize_name(name: &str) -> String {
    capitalize_words(name.trim())
}

/// Whitespace as browsers match `\s`: Unicode `White_Space` minus U+0085,
/// plus the byte order mark U+FEFF.
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

pub fn normalize_email(email: &str) -> String {
    email.to_lowercase().chars().filter(|&c| !is_form_whitespace(c)).collect()
}

pub fn normalize_phone(phone: &str) -> String {
    phone.trim().to_string()
}

/// Value to put into the phone field when it gains focus, if any.
pub fn prefill_phone(current: &str) -> Option<String> {
    current.is_empty().then(|| config::PHONE_PREFIX.to_string())
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("{}/{}?text={}", config::WHATSAPP_BASE_URL, number, urlencoding::encode(message))
}

pub fn course_inquiry_message(course_name: &str) -> String {
    format!("Hola, quisiera saber más sobre el curso de {}", course_name)
}

pub fn course_inquiry_link(course_name: &str) -> String {
    whatsapp_link(config::COURSE_INQUIRY_WHATSAPP_NUMBER, &course_inquiry_message(course_name))
}

/// Hero "Cotizar para empresas" button.
pub fn enterprise_quote_link() -> String {
    whatsapp_link(config::CONTACT_WHATSAPP_NUMBER, "Hola, quisiera cotizar capacitaciones para mi empresa")
}

/// Floating WhatsApp button.
pub fn greeting_link() -> String {
    whatsapp_link(config::CONTACT_WHATSAPP_NUMBER, "Hola, quisiera más información sobre los cursos")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactRequest {
    /// Submission-time normalization. The message body is left untouched.
    pub fn normalized(&self) -> ContactRequest {
        ContactRequest {
            name: normalize_name(&self.name),
            email: normalize_email(&self.email),
            phone: normalize_phone(&self.phone),
            subject: self.subject,
            message: self.message.clone(),
        }
    }

    pub fn compose_message(&self) -> String {
        let request = self.normalized();
        let mut text = format!(
            "Hola, mi nombre es {}\n\n*Motivo:* {}",
            request.name,
            request.subject.label()
        );

        if !request.email.is_empty() {
            let _ = write!(text, "\n\n*Email:* {}", request.email);
        }

        if !request.phone.is_empty() {
            // Without an email line the phone gets its own blank-line gap.
            let gap = if request.email.is_empty() { "\n\n" } else { "\n" };
            let _ = write!(text, "{}*Teléfono:* {}", gap, request.phone);
        }

        let _ = write!(text, "\n\n*Mensaje:*\n{}", request.message);
        text
    }

    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(config::CONTACT_WHATSAPP_NUMBER, &self.compose_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(name: &str, email: &str, phone: &str, subject: Subject, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            subject,
            message: message.to_string(),
        }
    }

    fn text_param(link: &str) -> (url::Url, String) {
        let url = url::Url::parse(link).unwrap();
        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        (url, text)
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(normalize_name("ana maria"), "Ana Maria");
        assert_eq!(normalize_name("  jUAN   pÉREZ "), "Juan   Pérez");
        assert_eq!(capitalize_words("josé "), "José ");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn email_loses_case_and_all_whitespace() {
        assert_eq!(normalize_email(" John.Doe@Example.COM "), "john.doe@example.com");
        assert_eq!(normalize_email("ana @ mail .cl"), "ana@mail.cl");
        assert_eq!(normalize_email("a\tb\nc@x.cl"), "abc@x.cl");
    }

    #[test]
    fn email_whitespace_matches_browser_set() {
        assert_eq!(normalize_email("\u{FEFF}ana@mail.cl"), "ana@mail.cl");
        assert_eq!(normalize_email("ana\u{00A0}@mail.cl\u{3000}"), "ana@mail.cl");
        assert_eq!(normalize_email("ana\u{85}@mail.cl"), "ana\u{85}@mail.cl");
    }

    #[test]
    fn phone_is_only_trimmed() {
        assert_eq!(normalize_phone("  +56 9 1234 5678 "), "+56 9 1234 5678");
    }

    #[test]
    fn phone_prefix_only_fills_an_empty_field() {
        assert_eq!(prefill_phone(""), Some("+56 ".to_string()));
        assert_eq!(prefill_phone("+56 9"), None);
    }

    #[test]
    fn subject_table() {
        let labels: Vec<_> = Subject::ALL.iter().map(|s| (s.key(), s.label())).collect();
        assert_eq!(
            labels,
            vec![
                ("general", "Consulta general"),
                ("courses", "Información sobre cursos"),
                ("enterprise", "Capacitación empresas"),
                ("certification", "Certificación"),
                ("other", "Otro"),
            ]
        );
        assert_eq!("enterprise".parse::<Subject>(), Ok(Subject::Enterprise));
        assert_eq!(Subject::from_key("billing"), Err(UnknownSubject("billing".to_string())));
        assert_eq!(Subject::default(), Subject::General);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown contact subject")]
    fn unknown_subject_is_loud_in_debug_builds() {
        Subject::from_key_or_other("billing");
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn unknown_subject_falls_back_to_other() {
        assert_eq!(Subject::from_key_or_other("billing"), Subject::Other);
    }

    #[test]
    fn message_without_optional_fields() {
        let text = request("juan perez", "", "", Subject::Courses, "Quiero información").compose_message();
        assert_eq!(
            text,
            "Hola, mi nombre es Juan Perez\n\n*Motivo:* Información sobre cursos\n\n*Mensaje:*\nQuiero información"
        );
        assert!(text.lines().any(|line| line == "*Motivo:* Información sobre cursos"));
        assert!(!text.contains("*Email:*"));
        assert!(!text.contains("*Teléfono:*"));
        assert!(text.ends_with("*Mensaje:*\nQuiero información"));
    }

    #[test]
    fn message_with_email_and_phone() {
        let text = request(
            "maría  josé",
            " Maria@Correo.CL",
            " +56 9 1234 5678 ",
            Subject::Enterprise,
            "Somos 20 personas",
        )
        .compose_message();
        assert_eq!(
            text,
            "Hola, mi nombre es María  José\n\n*Motivo:* Capacitación empresas\n\n\
             *Email:* maria@correo.cl\n*Teléfono:* +56 9 1234 5678\n\n*Mensaje:*\nSomos 20 personas"
        );
    }

    #[test]
    fn phone_without_email_gets_a_blank_line() {
        let text = request("ana", "", "+56 9 8765 4321", Subject::General, "Hola").compose_message();
        assert_eq!(
            text,
            "Hola, mi nombre es Ana\n\n*Motivo:* Consulta general\n\n*Teléfono:* +56 9 8765 4321\n\n*Mensaje:*\nHola"
        );
    }

    #[test]
    fn whitespace_only_optionals_are_omitted() {
        let text = request("ana", "   ", "  ", Subject::Other, "x").compose_message();
        assert!(!text.contains("*Email:*"));
        assert!(!text.contains("*Teléfono:*"));
    }

    #[test]
    fn message_body_is_not_normalized() {
        let text = request("ana", "", "", Subject::Other, "  HOLA   Mundo  ").compose_message();
        assert!(text.ends_with("*Mensaje:*\n  HOLA   Mundo  "));
    }

    #[test]
    fn contact_link_targets_the_contact_number() {
        let contact = request("juan perez", "", "", Subject::Courses, "Quiero información");
        let (url, text) = text_param(&contact.whatsapp_link());
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path_segments().unwrap().next(), Some(config::CONTACT_WHATSAPP_NUMBER));
        assert_eq!(text, contact.compose_message());
    }

    #[test]
    fn link_percent_encodes_markup_newlines_and_accents() {
        let link = whatsapp_link("56900000000", "*Motivo:* Información\nsí");
        assert!(link.starts_with("https://wa.me/56900000000?text="));
        assert!(link.contains("%2AMotivo%3A%2A"));
        assert!(link.contains("%0A"));
        assert!(link.contains("Informaci%C3%B3n"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn course_inquiry_uses_its_own_number() {
        let (url, text) = text_param(&course_inquiry_link("Trauma"));
        assert_eq!(url.path_segments().unwrap().next(), Some(config::COURSE_INQUIRY_WHATSAPP_NUMBER));
        assert_eq!(text, "Hola, quisiera saber más sobre el curso de Trauma");
        assert_ne!(config::COURSE_INQUIRY_WHATSAPP_NUMBER, config::CONTACT_WHATSAPP_NUMBER);
    }

    #[test]
    fn canned_links_go_to_the_contact_number() {
        for link in [enterprise_quote_link(), greeting_link()] {
            let (url, text) = text_param(&link);
            assert_eq!(url.path_segments().unwrap().next(), Some(config::CONTACT_WHATSAPP_NUMBER));
            assert!(text.starts_with("Hola, quisiera"));
        }
    }

    proptest! {
        #[test]
        fn name_normalization_is_idempotent(name in "[a-zA-ZáéíóúñÁÉÍÓÚÑ ]{0,30}") {
            let once = normalize_name(&name);
            prop_assert_eq!(normalize_name(&once), once);
        }

        #[test]
        fn normalized_email_has_no_whitespace(email in "\\PC*") {
            prop_assert!(!normalize_email(&email).chars().any(is_form_whitespace));
        }

        #[test]
        fn link_text_decodes_to_the_message(message in "\\PC*") {
            let (url, text) = text_param(&whatsapp_link(config::CONTACT_WHATSAPP_NUMBER, &message));
            prop_assert_eq!(url.host_str(), Some("wa.me"));
            prop_assert_eq!(text, message);
        }
    }
}
