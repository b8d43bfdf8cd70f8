// src/infrastructure/locale.rs
use crate::application::ports::locale::{Localizer, MessageKey};
use crate::domain::errors::{DomainError, DomainResult};

pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja"];

/// Compiled-in message catalog.
#[derive(Debug, Clone)]
pub struct StaticLocalizer {
    locale: &'static str,
}

impl StaticLocalizer {
    pub fn new(locale: &str) -> DomainResult<Self> {
        SUPPORTED_LOCALES
            .iter()
            .copied()
            .find(|supported| *supported == locale)
            .map(|locale| Self { locale })
            .ok_or_else(|| DomainError::Validation(format!("unsupported locale '{locale}'")))
    }
}

impl Default for StaticLocalizer {
    fn default() -> Self {
        Self { locale: "en" }
    }
}

impl Localizer for StaticLocalizer {
    fn locale(&self) -> &str {
        self.locale
    }

    fn message(&self, key: MessageKey) -> String {
        let text = match (self.locale, key) {
            ("ja", MessageKey::Untitled) => "無題",
            ("ja", MessageKey::UrlnameBlank) => "URL名を入力してください",
            ("ja", MessageKey::UrlnameFormat) => "URL名には英数字とハイフンのみ使用できます",
            ("ja", MessageKey::UrlnameTaken) => "URL名はすでに使用されています",
            (_, MessageKey::Untitled) => "Untitled",
            (_, MessageKey::UrlnameBlank) => "urlname can't be blank",
            (_, MessageKey::UrlnameFormat) => {
                "urlname may only contain letters, digits and hyphens"
            }
            (_, MessageKey::UrlnameTaken) => "urlname has already been taken",
        };
        text.to_owned()
    }
}
