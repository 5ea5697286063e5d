//! # Engenharia de Features para NER
//!
//! Para cada token, extrai um vetor esparso de features binárias que o CRF usa
//! para pontuar as tags.
//!
//! ### Features do token atual
//! - Forma da palavra (lowercase), capitalização, siglas
//! - Palavras minúsculas, separando os conectores de nomes ("da", "of")
//! - Prefixos e sufixos de 2 e 3 caracteres
//! - Dígitos, hífens, pontuação
//!
//! ### Features de contexto (janela de 1 token)
//! - Palavra anterior e posterior, capitalização dos vizinhos
//! - Início de frase (capitalização no início de frase é pouco informativa)
//!
//! ### Features de léxico
//! - Pertence às listas de pessoas, locais, organizações ou miscelânea
//! - Palavra funcional (artigos, preposições) ou título ("ministro", "Mr.")

use std::collections::{HashMap, HashSet};

use crate::lexicon::Lexicon;
use crate::tokenizer::Token;

/// Features ativas de um token: `{"is_capitalized": 1.0, "word=brasil": 1.0, ...}`.
#[derive(Debug, Clone, Default)]
pub struct FeatureVector {
    pub features: HashMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.features.insert(key.into(), value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }
}

/// Conjuntos de palavras (lowercase) derivados do léxico de um idioma.
#[derive(Debug, Clone, Default)]
pub struct Gazetteers {
    pub persons: HashSet<String>,
    pub locations: HashSet<String>,
    pub organizations: HashSet<String>,
    pub misc: HashSet<String>,
    pub stopwords: HashSet<String>,
    pub titles: HashSet<String>,
    pub connectors: HashSet<String>,
}

impl Gazetteers {
    /// Quebra as entradas do léxico em palavras. Palavras funcionais
    /// ("de", "of") e palavras curtas não entram nas listas de entidades.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let stopwords = lowercase_set(lexicon.stopwords.iter().copied());
        let words = |entries: &[&str]| -> HashSet<String> {
            entries
                .iter()
                .flat_map(|entry| entry.split_whitespace())
                .map(str::to_lowercase)
                .filter(|word| word.chars().count() > 2 && !stopwords.contains(word))
                .collect()
        };

        Self {
            persons: words(lexicon.persons),
            locations: words(lexicon.locations),
            organizations: words(lexicon.organizations),
            misc: words(lexicon.misc),
            titles: lowercase_set(lexicon.titles.iter().copied()),
            connectors: lowercase_set(lexicon.connectors.iter().copied()),
            stopwords,
        }
    }
}

fn lowercase_set<'a>(words: impl Iterator<Item = &'a str>) -> HashSet<String> {
    words.map(str::to_lowercase).collect()
}

/// Gera um vetor de features por token, alinhado com `tokens`.
pub fn extract_features(tokens: &[Token], gazetteers: &Gazetteers) -> Vec<FeatureVector> {
    (0..tokens.len())
        .map(|i| extract_for_token(tokens, i, gazetteers))
        .collect()
}

/// Extrai as features do token `i` considerando seus vizinhos.
pub fn extract_for_token(tokens: &[Token], i: usize, gazetteers: &Gazetteers) -> FeatureVector {
    let mut fv = FeatureVector::new();
    let token = &tokens[i];
    let word = token.text.as_str();
    let lower = word.to_lowercase();

    fv.insert("bias", 1.0);
    fv.insert(format!("word={lower}"), 1.0);

    let sentence_start = i == 0 || matches!(tokens[i - 1].text.as_str(), "." | "!" | "?" | ":");
    if token.is_capitalized() {
        fv.insert("is_capitalized", 1.0);
        if sentence_start {
            fv.insert("cap_sentence_start", 1.0);
        }
    } else if gazetteers.connectors.contains(&lower) {
        fv.insert("is_connector", 1.0);
    } else if token.is_lowercase() {
        fv.insert("is_lowercase", 1.0);
    }
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        fv.insert("is_all_caps", 1.0);
    }

    let chars: Vec<char> = lower.chars().collect();
    for n in 2..=3 {
        if chars.len() > n {
            let prefix: String = chars[..n].iter().collect();
            let suffix: String = chars[chars.len() - n..].iter().collect();
            fv.insert(format!("prefix{n}={prefix}"), 1.0);
            fv.insert(format!("suffix{n}={suffix}"), 1.0);
        }
    }

    if word.chars().all(char::is_numeric) {
        fv.insert("is_digit", 1.0);
    } else if word.chars().any(char::is_numeric) {
        fv.insert("has_digit", 1.0);
    }
    if word.contains('-') {
        fv.insert("has_hyphen", 1.0);
    }
    if token.is_punctuation() {
        fv.insert("is_punctuation", 1.0);
    }

    match i.checked_sub(1).map(|p| &tokens[p]) {
        Some(prev) => {
            let prev_lower = prev.text.to_lowercase();
            if gazetteers.titles.contains(&prev_lower) {
                fv.insert("prev_is_title", 1.0);
            }
            if prev.is_capitalized() {
                fv.insert("prev_is_capitalized", 1.0);
            }
            fv.insert(format!("prev_word={prev_lower}"), 1.0);
        }
        None => fv.insert("BOS", 1.0),
    }

    match tokens.get(i + 1) {
        Some(next) => {
            if next.is_capitalized() {
                fv.insert("next_is_capitalized", 1.0);
            }
            fv.insert(format!("next_word={}", next.text.to_lowercase()), 1.0);
        }
        None => fv.insert("EOS", 1.0),
    }

    if gazetteers.stopwords.contains(&lower) {
        fv.insert("is_stopword", 1.0);
    }
    if gazetteers.titles.contains(&lower) {
        fv.insert("is_title", 1.0);
    }
    for (set, feature) in [
        (&gazetteers.persons, "in_person_gazetteer"),
        (&gazetteers.locations, "in_location_gazetteer"),
        (&gazetteers.organizations, "in_org_gazetteer"),
        (&gazetteers.misc, "in_misc_gazetteer"),
    ] {
        if set.contains(&lower) {
            fv.insert(feature, 1.0);
        }
    }

    fv
}
