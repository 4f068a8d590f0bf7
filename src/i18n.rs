//! Locale bundles and locale-prefixed paths

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const TR_BUNDLE: &str = include_str!("../locales/tr.json");
const EN_BUNDLE: &str = include_str!("../locales/en.json");
const RU_BUNDLE: &str = include_str!("../locales/ru.json");

/// Supported site locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Tr, Locale::En, Locale::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Tr => Self::En,
            Self::En => Self::Ru,
            Self::Ru => Self::Tr,
        }
    }

    /// Split a locale-prefixed path into its locale and the remaining path.
    ///
    /// `/en/contact` resolves to `(En, "/contact")`. Paths without a known
    /// prefix resolve to the default locale and are returned unchanged.
    pub fn split_path(path: &str) -> (Self, &str) {
        let trimmed = path.trim_start_matches('/');
        let (head, rest) = match trimmed.find('/') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
            None => (trimmed, "/"),
        };

        match Self::from_code(head) {
            Some(locale) => (locale, rest),
            None if path.is_empty() => (Self::default(), "/"),
            None => (Self::default(), path),
        }
    }

    fn bundle(&self) -> &'static str {
        match self {
            Self::Tr => TR_BUNDLE,
            Self::En => EN_BUNDLE,
            Self::Ru => RU_BUNDLE,
        }
    }
}

/// Translated strings for one locale, with the default locale as fallback
#[derive(Debug, Clone)]
pub struct Messages {
    locale: Locale,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Messages {
    /// Resolve the bundle for a locale
    pub fn load(locale: Locale) -> Result<Self, serde_json::Error> {
        let strings: HashMap<String, String> = serde_json::from_str(locale.bundle())?;
        let fallback = if locale == Locale::default() {
            HashMap::new()
        } else {
            serde_json::from_str(Locale::default().bundle())?
        };

        Ok(Self {
            locale,
            strings,
            fallback,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a message. Missing keys fall back to the default locale and
    /// then to the key itself.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}
