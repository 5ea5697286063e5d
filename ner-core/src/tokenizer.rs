//! # Tokenizador PT/EN
//!
//! Divide o texto bruto em tokens (palavras e pontuações) preservando a posição
//! original de cada um. Os offsets são **bytes** no texto UTF-8 e sempre caem em
//! fronteiras de caractere, de modo que `&text[token.start..token.end]` é válido.
//!
//! ## Esquema
//!
//! A segmentação base segue as fronteiras de palavra do Unicode (UAX #29), via
//! `unicode-segmentation`. Sobre ela aplicamos três ajustes:
//!
//! - **Abreviações**: `"Dr"` + `"."` vira `"Dr."` (lista por idioma).
//! - **Hífens internos**: `"terça"` + `"-"` + `"feira"` vira `"terça-feira"`.
//! - **Possessivo inglês**: `"Brazil's"` vira `"Brazil"` + `"'s"`.
//!
//! ```rust
//! use ner_core::{tokenizer::tokenize, Language};
//!
//! let tokens = tokenize("Dr. Silva chegou na terça-feira.", Language::Pt);
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["Dr.", "Silva", "chegou", "na", "terça-feira", "."]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::language::Language;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "Guedes", ",", "terça-feira").
    pub text: String,
    /// Byte inicial no texto original (inclusive).
    pub start: usize,
    /// Byte final no texto original (exclusivo).
    pub end: usize,
    /// Posição sequencial do token (0, 1, 2...).
    pub index: usize,
}

impl Token {
    /// Primeira letra maiúscula (ex: "Brasil", "IMF")
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Começa com letra minúscula (ex: "visitou", "de", "iPhone")
    pub fn is_lowercase(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_lowercase)
    }

    /// Token formado apenas por pontuação/símbolos
    pub fn is_punctuation(&self) -> bool {
        !self.text.chars().any(char::is_alphanumeric)
    }
}

/// Abreviações que absorvem o ponto seguinte, por idioma
const ABBREVIATIONS_PT: &[&str] = &[
    "Dr", "Dra", "Sr", "Sra", "Srta", "Prof", "Profa", "Gov", "Dep", "Sen", "Min",
    "Gen", "Cap", "Sgt", "Cel", "Pres", "Eng", "Av", "etc", "pág", "art", "nº", "Jr",
];

const ABBREVIATIONS_EN: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sen", "Rep", "Gov", "Gen", "Col", "Lt", "Sgt",
    "St", "Jr", "Sr", "Inc", "Corp", "Ltd", "Co", "vs", "etc", "Ave", "No",
];

fn abbreviations(language: Language) -> &'static [&'static str] {
    match language {
        Language::Pt => ABBREVIATIONS_PT,
        Language::En => ABBREVIATIONS_EN,
    }
}

/// Tokeniza `text` segundo as regras do idioma.
pub fn tokenize(text: &str, language: Language) -> Vec<Token> {
    let abbreviations = abbreviations(language);
    let pieces: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut tokens: Vec<Token> = Vec::with_capacity(pieces.len());

    let mut i = 0;
    while i < pieces.len() {
        let (start, piece) = pieces[i];
        let end = start + piece.len();
        i += 1;

        if piece.chars().all(char::is_whitespace) {
            continue;
        }

        if let Some(last) = tokens.last_mut().filter(|last| last.end == start) {
            if piece == "." && abbreviations.contains(&last.text.as_str()) {
                last.text.push('.');
                last.end = end;
                continue;
            }

            // Hífen entre duas palavras coladas: "Covid-19", "Centro-Oeste"
            if piece == "-" && last.text.chars().last().is_some_and(char::is_alphanumeric) {
                if let Some(&(next_start, next)) = pieces.get(i) {
                    if next_start == end && next.chars().next().is_some_and(char::is_alphanumeric) {
                        last.text.push('-');
                        last.text.push_str(next);
                        last.end = next_start + next.len();
                        i += 1;
                        continue;
                    }
                }
            }
        }

        if language == Language::En {
            if let Some(split) = possessive_split(piece) {
                push(&mut tokens, &piece[..split], start);
                push(&mut tokens, &piece[split..], start + split);
                continue;
            }
        }

        push(&mut tokens, piece, start);
    }

    tokens
}

fn push(tokens: &mut Vec<Token>, text: &str, start: usize) {
    tokens.push(Token {
        text: text.to_string(),
        start,
        end: start + text.len(),
        index: tokens.len(),
    });
}

/// Posição do `'s` final em palavras como "Brazil's" / "Brazil’s"
fn possessive_split(word: &str) -> Option<usize> {
    ["'s", "’s", "'S", "’S"].iter().find_map(|suffix| {
        let base = word.strip_suffix(suffix)?;
        (!base.is_empty()).then_some(base.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Paulo Guedes visited Washington.", Language::En);
        assert_eq!(texts(&tokens), ["Paulo", "Guedes", "visited", "Washington", "."]);
        assert_eq!((tokens[3].start, tokens[3].end), (21, 31));
    }

    #[test]
    fn test_offsets_point_into_original_text() {
        let text = "O ministro da Economia, Paulo Guedes, participou (11/10) em Brasília.";
        let tokens = tokenize(text, Language::Pt);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(&text[token.start..token.end], token.text);
            assert_eq!(token.index, i);
        }
    }

    #[test]
    fn test_abbreviations_keep_period() {
        let tokens = tokenize("Mr. Smith met Dr. Jones.", Language::En);
        assert_eq!(texts(&tokens), ["Mr.", "Smith", "met", "Dr.", "Jones", "."]);
    }

    #[test]
    fn test_hyphenated_words_stay_together() {
        let tokens = tokenize("nesta terça-feira, Covid-19 e Rio - Niterói", Language::Pt);
        assert_eq!(
            texts(&tokens),
            ["nesta", "terça-feira", ",", "Covid-19", "e", "Rio", "-", "Niterói"]
        );
    }

    #[test]
    fn test_english_possessive_is_split() {
        let tokens = tokenize("Brazil's minister", Language::En);
        assert_eq!(texts(&tokens), ["Brazil", "'s", "minister"]);
        assert_eq!(tokens[1].start, 6);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("  \n\t ", Language::Pt).is_empty());
        assert!(tokenize("", Language::En).is_empty());
    }
}
