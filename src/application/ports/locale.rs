// src/application/ports/locale.rs

/// Display strings the article core needs from the localization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Untitled,
    UrlnameBlank,
    UrlnameFormat,
    UrlnameTaken,
}

pub trait Localizer: Send + Sync {
    fn locale(&self) -> &str;
    fn message(&self, key: MessageKey) -> String;
}
