//! # Motor de Regras — Gazetteers e Padrões
//!
//! Complementa o CRF com conhecimento explícito: frases do léxico (gazetteers),
//! títulos que antecedem nomes, sufixos de empresas, siglas e padrões regex
//! sobre o texto bruto (CNPJ, em português).
//!
//! No modo híbrido do pipeline as regras prevalecem sobre o CRF: onde uma regra
//! casou, a tag da regra é a tag final.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::features::Gazetteers;
use crate::language::Language;
use crate::lexicon::Lexicon;
use crate::tagger::{EntityCategory, Tag};
use crate::tokenizer::{tokenize, Token};

/// Tag atribuída a um token por uma regra
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub tag: Tag,
    pub rule: &'static str,
}

type Phrase = (Vec<String>, EntityCategory);

/// Motor de regras de um idioma
#[derive(Debug)]
pub struct RuleEngine {
    /// Frases do léxico indexadas pela primeira palavra (lowercase),
    /// mais longas primeiro
    phrases: HashMap<String, Vec<Phrase>>,
    org_suffixes: Vec<Vec<String>>,
    person_words: HashSet<String>,
    titles: HashSet<String>,
    stopwords: HashSet<String>,
    acronym: Regex,
    patterns: Vec<(Regex, EntityCategory, &'static str)>,
}

impl RuleEngine {
    pub fn new(
        language: Language,
        lexicon: &Lexicon,
        gazetteers: &Gazetteers,
    ) -> Result<Self, regex::Error> {
        let mut phrases: HashMap<String, Vec<Phrase>> = HashMap::new();
        let sources = [
            (lexicon.persons, EntityCategory::Per),
            (lexicon.locations, EntityCategory::Loc),
            (lexicon.organizations, EntityCategory::Org),
            (lexicon.misc, EntityCategory::Misc),
        ];
        for (entries, cat) in sources {
            for entry in entries {
                let parts = lowercase_parts(entry, language);
                if let Some(first) = parts.first() {
                    phrases.entry(first.clone()).or_default().push((parts, cat));
                }
            }
        }
        for candidates in phrases.values_mut() {
            // sort estável: em caso de empate, vale a ordem das listas
            candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }

        let mut patterns = Vec::new();
        if language == Language::Pt {
            patterns.push((
                Regex::new(r"\b\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}\b")?,
                EntityCategory::Org,
                "cnpj_pattern",
            ));
        }

        Ok(Self {
            phrases,
            org_suffixes: lexicon
                .org_suffixes
                .iter()
                .map(|suffix| lowercase_parts(suffix, language))
                .collect(),
            person_words: gazetteers.persons.clone(),
            titles: gazetteers.titles.clone(),
            stopwords: gazetteers.stopwords.clone(),
            acronym: Regex::new(r"^[A-Z]{2,6}$")?,
            patterns,
        })
    }

    /// Aplica todas as regras. Retorna uma posição por token; `None` onde
    /// nenhuma regra casou. Regras anteriores têm precedência.
    pub fn apply(&self, text: &str, tokens: &[Token]) -> Vec<Option<RuleMatch>> {
        let n = tokens.len();
        let mut result: Vec<Option<RuleMatch>> = vec![None; n];
        let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

        // 1. Padrões sobre o texto bruto
        for (regex, cat, rule) in &self.patterns {
            for found in regex.find_iter(text) {
                let covered: Vec<usize> = tokens
                    .iter()
                    .filter(|t| t.start >= found.start() && t.end <= found.end())
                    .map(|t| t.index)
                    .collect();
                if let (Some(&first), Some(&last)) = (covered.first(), covered.last()) {
                    mark(&mut result, first, last + 1 - first, *cat, *rule);
                }
            }
        }

        // 2. Frases do léxico, a mais longa vence
        let mut i = 0;
        while i < n {
            match self.longest_phrase_at(tokens, &lower, &result, i) {
                Some((len, cat)) => {
                    mark(&mut result, i, len, cat, "gazetteer");
                    i += len;
                }
                None => i += 1,
            }
        }

        // 3. Nomes e sobrenomes isolados: "Guedes", "Smith"
        for i in 0..n {
            if result[i].is_some()
                || !tokens[i].is_capitalized()
                || !self.person_words.contains(&lower[i])
            {
                continue;
            }
            let continues_person = i > 0
                && result[i - 1]
                    .as_ref()
                    .is_some_and(|m| m.tag.category() == Some(EntityCategory::Per));
            let tag = if continues_person {
                Tag::Inside(EntityCategory::Per)
            } else {
                Tag::Begin(EntityCategory::Per)
            };
            result[i] = Some(RuleMatch {
                tag,
                rule: "person_gazetteer",
            });
        }

        // 4. Título seguido de palavras capitalizadas: "ministro Fulano Beltrano"
        for i in 0..n.saturating_sub(1) {
            if !self.titles.contains(&lower[i]) {
                continue;
            }
            let len = self.capitalized_run(tokens, &lower, &result, i + 1, n);
            if len > 0 {
                mark(&mut result, i + 1, len, EntityCategory::Per, "title_pattern");
            }
        }

        // 5. Sufixo de empresa: "Acme Comércio Ltda" → ORG
        for i in 1..n {
            if tokens[i].is_lowercase() {
                continue;
            }
            let Some(suffix_len) = self
                .org_suffixes
                .iter()
                .find(|parts| matches_at(&lower, i, parts))
                .map(Vec::len)
            else {
                continue;
            };
            if (i..i + suffix_len).any(|j| result[j].is_some()) {
                continue;
            }
            let mut start = i;
            while start > 0 && self.is_free_name(tokens, &lower, &result, start - 1) {
                start -= 1;
            }
            if start < i {
                mark(&mut result, start, i + suffix_len - start, EntityCategory::Org, "org_suffix_pattern");
            }
        }

        // 6. Siglas: "IMF", "STF" → ORG
        for i in 0..n {
            if result[i].is_none()
                && !self.stopwords.contains(&lower[i])
                && self.acronym.is_match(&tokens[i].text)
            {
                mark(&mut result, i, 1, EntityCategory::Org, "acronym_pattern");
            }
        }

        result
    }

    fn longest_phrase_at(
        &self,
        tokens: &[Token],
        lower: &[String],
        result: &[Option<RuleMatch>],
        i: usize,
    ) -> Option<(usize, EntityCategory)> {
        if result[i].is_some() || !tokens[i].is_capitalized() {
            return None;
        }
        self.phrases
            .get(&lower[i])?
            .iter()
            .find(|(parts, _)| {
                matches_at(lower, i, parts)
                    && (i..i + parts.len()).all(|j| {
                        result[j].is_none()
                            && (!tokens[j].is_lowercase() || self.stopwords.contains(&lower[j]))
                    })
            })
            .map(|(parts, cat)| (parts.len(), *cat))
    }

    /// Quantos tokens a partir de `from` formam um nome capitalizado livre
    fn capitalized_run(
        &self,
        tokens: &[Token],
        lower: &[String],
        result: &[Option<RuleMatch>],
        from: usize,
        n: usize,
    ) -> usize {
        (from..n)
            .take_while(|&j| self.is_free_name(tokens, lower, result, j))
            .count()
    }

    fn is_free_name(
        &self,
        tokens: &[Token],
        lower: &[String],
        result: &[Option<RuleMatch>],
        j: usize,
    ) -> bool {
        result[j].is_none()
            && tokens[j].is_capitalized()
            && !tokens[j].is_punctuation()
            && !self.stopwords.contains(&lower[j])
            && !self.titles.contains(&lower[j])
    }
}

fn lowercase_parts(entry: &str, language: Language) -> Vec<String> {
    tokenize(entry, language)
        .into_iter()
        .map(|t| t.text.to_lowercase())
        .collect()
}

fn matches_at(lower: &[String], i: usize, parts: &[String]) -> bool {
    lower.get(i..i + parts.len()) == Some(parts)
}

fn mark(
    result: &mut [Option<RuleMatch>],
    start: usize,
    len: usize,
    cat: EntityCategory,
    rule: &'static str,
) {
    for (offset, slot) in result[start..start + len].iter_mut().enumerate() {
        let tag = if offset == 0 {
            Tag::Begin(cat)
        } else {
            Tag::Inside(cat)
        };
        *slot = Some(RuleMatch { tag, rule });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::lexicon;

    fn engine(language: Language) -> RuleEngine {
        let lex = lexicon(language);
        RuleEngine::new(language, lex, &Gazetteers::from_lexicon(lex)).unwrap()
    }

    fn tags(language: Language, text: &str) -> Vec<Option<Tag>> {
        let tokens = tokenize(text, language);
        engine(language)
            .apply(text, &tokens)
            .into_iter()
            .map(|m| m.map(|m| m.tag))
            .collect()
    }

    #[test]
    fn test_multiword_phrase() {
        let tags = tags(Language::Pt, "o Fundo Monetário Internacional anunciou");
        assert_eq!(tags[0], None);
        assert_eq!(tags[1], Some(Tag::Begin(EntityCategory::Org)));
        assert_eq!(tags[2], Some(Tag::Inside(EntityCategory::Org)));
        assert_eq!(tags[3], Some(Tag::Inside(EntityCategory::Org)));
        assert_eq!(tags[4], None);
    }

    #[test]
    fn test_longest_phrase_wins() {
        // "World Bank Group" (3) vence "World Bank" (2)
        let tags = tags(Language::En, "the World Bank Group said");
        assert_eq!(tags[3], Some(Tag::Inside(EntityCategory::Org)));
    }

    #[test]
    fn test_phrase_requires_capitalization() {
        let tags = tags(Language::Pt, "a vale do rio");
        assert!(tags.iter().all(Option::is_none));
    }

    #[test]
    fn test_phrase_rejects_lowercase_continuation() {
        // "guedes" minúsculo não completa "Paulo Guedes"; sobra só "Paulo"
        let text = "Paulo guedes chegou";
        let tokens = tokenize(text, Language::Pt);
        let matches = engine(Language::Pt).apply(text, &tokens);
        assert_eq!(matches[0].as_ref().unwrap().tag, Tag::Begin(EntityCategory::Per));
        assert!(matches[1].is_none());
    }

    #[test]
    fn test_person_words_join() {
        let tags = tags(Language::Pt, "João Guedes chegou");
        assert_eq!(tags[0], Some(Tag::Begin(EntityCategory::Per)));
        assert_eq!(tags[1], Some(Tag::Inside(EntityCategory::Per)));
    }

    #[test]
    fn test_title_pattern() {
        let text = "a ministra Fulana Beltrana anunciou";
        let tokens = tokenize(text, Language::Pt);
        let matches = engine(Language::Pt).apply(text, &tokens);
        assert_eq!(matches[2].as_ref().unwrap().rule, "title_pattern");
        assert_eq!(matches[3].as_ref().unwrap().tag, Tag::Inside(EntityCategory::Per));
        assert!(matches[4].is_none());
    }

    #[test]
    fn test_org_suffix_pattern() {
        let tags = tags(Language::En, "shares of Acme Widgets Inc. rose");
        assert_eq!(tags[2], Some(Tag::Begin(EntityCategory::Org)));
        assert_eq!(tags[3], Some(Tag::Inside(EntityCategory::Org)));
        assert_eq!(tags[4], Some(Tag::Inside(EntityCategory::Org)));
    }

    #[test]
    fn test_lowercase_word_is_not_a_suffix() {
        // "me" também é o sufixo "ME"
        let tags = tags(Language::Pt, "a Joana Prates me ligou");
        assert!(tags.iter().all(Option::is_none), "{tags:?}");
    }

    #[test]
    fn test_acronym_and_cnpj() {
        let text = "a XPTO tem CNPJ 12.345.678/0001-90";
        let tokens = tokenize(text, Language::Pt);
        let matches = engine(Language::Pt).apply(text, &tokens);
        assert_eq!(matches[1].as_ref().unwrap().rule, "acronym_pattern");
        let cnpj: Vec<&str> = matches
            .iter()
            .filter_map(|m| m.as_ref())
            .map(|m| m.rule)
            .filter(|rule| *rule == "cnpj_pattern")
            .collect();
        assert_eq!(cnpj.len(), 3);
    }
}
