use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Languages the ratings API can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Pl,
    De,
    Ru,
    Br,
    Es,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Pl,
        Language::De,
        Language::Ru,
        Language::Br,
        Language::Es,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pl => "pl",
            Language::De => "de",
            Language::Ru => "ru",
            Language::Br => "br",
            Language::Es => "es",
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == lower)
            .ok_or_else(|| {
                AppError::ValidationError(format!("lang must be en/ru/pl/de/br/es, got '{}'", s))
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validated lookup request for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileQuery {
    username: String,
    language: Language,
}

impl ProfileQuery {
    pub fn new(username: &str, language_code: &str) -> Result<Self, AppError> {
        let language = language_code.parse()?;
        Self::with_language(username, language)
    }

    pub fn for_user(username: &str) -> Result<Self, AppError> {
        Self::with_language(username, Language::default())
    }

    pub fn with_language(username: &str, language: Language) -> Result<Self, AppError> {
        if username.is_empty() {
            return Err(AppError::ValidationError("Please specify a username".to_string()));
        }

        Ok(ProfileQuery {
            username: username.to_string(),
            language,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
