use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// languages the site is published in
//
// the locale is the first path segment of every page, and it is forwarded to the api as
// Accept-Language so that vehicle and location names come back translated
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("unsupported locale '{0}'")]
pub struct LocaleError(pub String);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    // pick the english or german rendering of a user-visible string
    pub fn pick(&self, en: &'static str, de: &'static str) -> &'static str {
        match self {
            Locale::En => en,
            Locale::De => de,
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            other => Err(LocaleError(other.to_owned())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
