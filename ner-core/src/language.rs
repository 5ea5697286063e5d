//! Idiomas suportados pelo reconhecedor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NerError;

/// Idioma do texto de entrada. Cada idioma tem o seu próprio modelo.
///
/// Na interface e na API os valores trafegam como `"pt"` e `"en"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Português (idioma padrão da página)
    #[default]
    Pt,
    /// Inglês
    En,
}

impl Language {
    /// Todos os idiomas, na ordem em que aparecem no seletor.
    pub const ALL: [Language; 2] = [Language::Pt, Language::En];

    /// Código curto usado na API (`"pt"`, `"en"`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Nome exibido no seletor da página
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Pt => "Portuguese",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = NerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            other => Err(NerError::UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(
            "fr".parse::<Language>(),
            Err(NerError::UnknownLanguage("fr".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
        assert_eq!(Language::default(), Language::Pt);
    }
}
