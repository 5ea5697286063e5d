//! # Modelos de Linguagem
//!
//! Um [`LanguageModel`] encapsula tudo o que o reconhecimento de um idioma precisa:
//! - **Pesos CRF** heurísticos (ortografia, contexto, gazetteers, palavras-pista)
//! - **Gazetteers** derivados do léxico do idioma
//! - **Motor de Regras** com as frases do léxico e os padrões do idioma
//!
//! Os modelos são carregados uma única vez na inicialização e depois só lidos.
//! Em um sistema real os pesos seriam treinados; aqui eles codificam os padrões
//! mais fortes de cada idioma.

use std::collections::HashSet;

use tracing::info;

use crate::crf::CrfModel;
use crate::error::{NerError, Result};
use crate::features::{extract_features, Gazetteers};
use crate::language::Language;
use crate::lexicon::{lexicon, Lexicon};
use crate::rule_based::{RuleEngine, RuleMatch};
use crate::tagger::{tokens_to_spans, EntityCategory, EntitySpan, Tag};
use crate::tokenizer::{tokenize, Token};
use crate::viterbi::viterbi_decode;

/// Modelo NER de um idioma.
#[derive(Debug)]
pub struct LanguageModel {
    language: Language,
    crf: CrfModel,
    rules: RuleEngine,
    gazetteers: Gazetteers,
}

impl LanguageModel {
    /// Carrega o modelo embutido do idioma.
    pub fn load(language: Language) -> Result<Self> {
        Self::from_lexicon(language, lexicon(language))
    }

    /// Constrói um modelo a partir de um léxico arbitrário.
    ///
    /// Falha com [`NerError::ModelLoad`] se o léxico for inválido.
    pub fn from_lexicon(language: Language, lexicon: &Lexicon) -> Result<Self> {
        let load_error = |reason: String| NerError::ModelLoad { language, reason };

        lexicon.validate().map_err(load_error)?;
        let gazetteers = Gazetteers::from_lexicon(lexicon);
        let rules = RuleEngine::new(language, lexicon, &gazetteers)
            .map_err(|e| load_error(e.to_string()))?;
        let crf = build_crf_model(lexicon);

        info!(
            %language,
            features = crf.feature_count(),
            persons = gazetteers.persons.len(),
            locations = gazetteers.locations.len(),
            organizations = gazetteers.organizations.len(),
            "modelo carregado"
        );

        Ok(Self {
            language,
            crf,
            rules,
            gazetteers,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Reconhece as entidades de `text`, em ordem e sem sobreposição.
    ///
    /// 1. Tokenização
    /// 2. Extração de features
    /// 3. Motor de regras
    /// 4. Viterbi sobre o CRF
    /// 5. Fusão (regras prevalecem) e agrupamento BIO
    pub fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let tokens = tokenize(text, self.language);
        if tokens.is_empty() {
            return vec![];
        }

        let features = extract_features(&tokens, &self.gazetteers);
        let rule_matches = self.rules.apply(text, &tokens);
        let decoded = viterbi_decode(&self.crf, &features);

        let tags = merge_tags(&tokens, decoded.tags, &rule_matches, &self.gazetteers.connectors);
        tokens_to_spans(&tokens, &tags)
    }
}

/// Fusão híbrida: a tag da regra prevalece; as tags do CRF passam por ajustes.
///
/// - Palavra minúscula só fica numa entidade do CRF se for conector ("da",
///   "of") entre dois tokens capitalizados da mesma categoria.
/// - `I-X` do CRF logo após um token marcado por regra vira `B-X`: a regra
///   já delimitou a entidade anterior.
fn merge_tags(
    tokens: &[Token],
    crf_tags: Vec<Tag>,
    rules: &[Option<RuleMatch>],
    connectors: &HashSet<String>,
) -> Vec<Tag> {
    let from_rule: Vec<bool> = rules.iter().map(Option::is_some).collect();
    let mut tags: Vec<Tag> = crf_tags
        .into_iter()
        .zip(rules)
        .map(|(crf_tag, rule)| rule.as_ref().map_or(crf_tag, |m| m.tag))
        .collect();

    for i in 0..tags.len() {
        if from_rule[i] {
            continue;
        }
        let Some(cat) = tags[i].category() else {
            continue;
        };
        let after_rule = i > 0 && from_rule[i - 1];

        if tokens[i].is_lowercase() {
            let bridges = connectors.contains(&tokens[i].text.to_lowercase())
                && !after_rule
                && i > 0
                && tags[i - 1].category() == Some(cat)
                && tokens.get(i + 1).is_some_and(Token::is_capitalized)
                && tags.get(i + 1) == Some(&Tag::Inside(cat));
            tags[i] = if bridges { Tag::Inside(cat) } else { Tag::Outside };
        } else if after_rule && tags[i] == Tag::Inside(cat) {
            tags[i] = Tag::Begin(cat);
        }
    }

    tags
}

/// Pesos de emissão e transição do CRF.
///
/// # Intuição
/// - Palavra capitalizada no meio da frase é forte indício de entidade; PER é
///   o palpite padrão para nomes desconhecidos. `B-X` supera o viés de `O`
///   somado à transição `O → O`.
/// - No início da frase a capitalização pouco informa.
/// - Palavra minúscula fica fora de entidades; só conectores ("da", "of")
///   podem continuar um nome.
/// - Gazetteers decidem a categoria.
/// - Palavras funcionais, títulos e pontuação ficam fora de entidades.
/// - Palavras-pista do idioma ("em", "banco", "copa") puxam a próxima palavra
///   para LOC, ORG ou MISC.
fn build_crf_model(lexicon: &Lexicon) -> CrfModel {
    use EntityCategory::{Loc, Misc, Org, Per};

    let mut model = CrfModel::new();
    let b = Tag::Begin;
    let i = Tag::Inside;

    model.set_emission("bias", &Tag::Outside, 1.0);

    // --- capitalização ---
    for (cat, begin, inside) in [(Per, 3.0, 2.0), (Org, 2.4, 1.8), (Loc, 2.4, 1.8), (Misc, 1.8, 1.4)] {
        model.set_emission("is_capitalized", &b(cat), begin);
        model.set_emission("is_capitalized", &i(cat), inside);
        model.set_emission("is_connector", &i(cat), 5.0);
    }
    model.set_emission("cap_sentence_start", &Tag::Outside, 2.5);
    model.set_emission("is_lowercase", &Tag::Outside, 4.0);
    model.set_emission("is_all_caps", &b(Org), 1.2);
    model.set_emission("prev_is_title", &b(Per), 1.5);

    // --- gazetteers ---
    for (feature, cat) in [
        ("in_person_gazetteer", Per),
        ("in_location_gazetteer", Loc),
        ("in_org_gazetteer", Org),
        ("in_misc_gazetteer", Misc),
    ] {
        model.set_emission(feature, &b(cat), 3.0);
        model.set_emission(feature, &i(cat), 2.5);
    }

    // --- nunca entidade ---
    model.set_emission("is_stopword", &Tag::Outside, 5.0);
    model.set_emission("is_title", &Tag::Outside, 4.0);
    model.set_emission("is_punctuation", &Tag::Outside, 6.0);
    model.set_emission("is_digit", &Tag::Outside, 2.0);
    model.set_emission("has_digit", &b(Misc), 0.8);

    // --- palavras-pista do idioma ---
    for (cues, cat) in [
        (lexicon.location_cues, Loc),
        (lexicon.organization_cues, Org),
        (lexicon.misc_cues, Misc),
    ] {
        for cue in cues {
            model.set_emission(&format!("prev_word={}", cue.to_lowercase()), &b(cat), 1.2);
        }
    }

    // --- transições ---
    for cat in EntityCategory::ALL {
        model.set_transition(&b(cat), &i(cat), 1.5);
        model.set_transition(&i(cat), &i(cat), 1.0);
    }
    model.set_transition(&Tag::Outside, &Tag::Outside, 0.5);
    model.penalize_invalid_transitions(-10.0);

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::PORTUGUESE;
    use crate::samples::sample_text;
    use proptest::prelude::*;
    use std::sync::OnceLock;
    use crate::tagger::EntityCategory::{Loc, Per};

    fn entities(model: &LanguageModel, text: &str) -> Vec<(String, String)> {
        model
            .recognize(text)
            .into_iter()
            .map(|span| (text[span.start..span.end].to_string(), span.label))
            .collect()
    }

    fn has(found: &[(String, String)], text: &str, label: &str) -> bool {
        found.iter().any(|(t, l)| t == text && l == label)
    }

    #[test]
    fn test_english_scenario() {
        let model = LanguageModel::load(Language::En).unwrap();
        let found = entities(&model, "Paulo Guedes visited Washington.");
        assert_eq!(
            found,
            vec![
                ("Paulo Guedes".to_string(), "PER".to_string()),
                ("Washington".to_string(), "LOC".to_string()),
            ]
        );
    }

    #[test]
    fn test_portuguese_sample() {
        let model = LanguageModel::load(Language::Pt).unwrap();
        let found = entities(&model, sample_text(Language::Pt));
        assert!(has(&found, "Paulo Guedes", "PER"), "{found:?}");
        assert!(has(&found, "Fundo Monetário Internacional", "ORG"), "{found:?}");
        assert!(has(&found, "Washington", "LOC"), "{found:?}");
        assert!(has(&found, "Estados Unidos", "LOC"), "{found:?}");
    }

    #[test]
    fn test_spans_are_sorted_and_disjoint() {
        for lang in Language::ALL {
            let model = LanguageModel::load(lang).unwrap();
            let text = sample_text(lang);
            let spans = model.recognize(text);
            assert!(!spans.is_empty());
            for pair in spans.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{pair:?}");
            }
            for span in &spans {
                assert!(span.text(text).is_some());
            }
        }
    }

    #[test]
    fn test_unknown_capitalized_name_mid_sentence() {
        let model = LanguageModel::load(Language::Pt).unwrap();
        let found = entities(&model, "ontem a ministra Joana Prates falou");
        assert!(has(&found, "Joana Prates", "PER"), "{found:?}");
    }

    #[test]
    fn test_unknown_name_without_title() {
        let en = LanguageModel::load(Language::En).unwrap();
        assert_eq!(
            entities(&en, "The report praised Nakamura yesterday."),
            vec![("Nakamura".to_string(), "PER".to_string())]
        );
        let pt = LanguageModel::load(Language::Pt).unwrap();
        assert_eq!(
            entities(&pt, "O relatório elogiou Nakamura ontem."),
            vec![("Nakamura".to_string(), "PER".to_string())]
        );
    }

    #[test]
    fn test_lowercase_words_stay_outside() {
        let pt = LanguageModel::load(Language::Pt).unwrap();
        assert_eq!(
            entities(&pt, "Ontem o ministro visitou Curitiba."),
            vec![("Curitiba".to_string(), "LOC".to_string())]
        );
        let texts: Vec<String> = entities(&pt, "the World Cup in Brazil")
            .into_iter()
            .map(|(text, _)| text)
            .collect();
        assert_eq!(texts, vec!["World Cup", "Brazil"]);

        let en = LanguageModel::load(Language::En).unwrap();
        let found = entities(&en, "Paulo Guedes visited Kowalski.");
        assert!(has(&found, "Paulo Guedes", "PER"), "{found:?}");
        assert!(found.iter().all(|(text, _)| !text.contains("visited")), "{found:?}");
    }

    fn rule(tag: Tag) -> Option<RuleMatch> {
        Some(RuleMatch { tag, rule: "gazetteer" })
    }

    fn merged(text: &str, crf: Vec<Tag>, rules: Vec<Option<RuleMatch>>) -> Vec<Tag> {
        let tokens = tokenize(text, Language::Pt);
        let gazetteers = Gazetteers::from_lexicon(&PORTUGUESE);
        merge_tags(&tokens, crf, &rules, &gazetteers.connectors)
    }

    #[test]
    fn test_merge_drops_crf_continuation_after_rule() {
        let tags = merged(
            "Paulo Guedes visitou Curitiba hoje",
            vec![Tag::Outside, Tag::Outside, Tag::Inside(Per), Tag::Begin(Loc), Tag::Outside],
            vec![rule(Tag::Begin(Per)), rule(Tag::Inside(Per)), None, rule(Tag::Begin(Loc)), None],
        );
        assert_eq!(
            tags,
            vec![Tag::Begin(Per), Tag::Inside(Per), Tag::Outside, Tag::Begin(Loc), Tag::Outside]
        );

        let tags = merged(
            "Paulo Guedes Kowalski",
            vec![Tag::Begin(Per), Tag::Inside(Per), Tag::Inside(Per)],
            vec![rule(Tag::Begin(Per)), rule(Tag::Inside(Per)), None],
        );
        assert_eq!(tags, vec![Tag::Begin(Per), Tag::Inside(Per), Tag::Begin(Per)]);
    }

    #[test]
    fn test_merge_keeps_connector_between_names() {
        let crf = vec![Tag::Begin(Per), Tag::Inside(Per), Tag::Inside(Per)];
        assert_eq!(merged("Joana da Xavier", crf.clone(), vec![None; 3]), crf);
        assert_eq!(
            merged("Joana da casa", crf, vec![None; 3]),
            vec![Tag::Begin(Per), Tag::Outside, Tag::Outside]
        );
    }

    #[test]
    fn test_empty_and_lowercase_text() {
        let model = LanguageModel::load(Language::En).unwrap();
        assert!(model.recognize("").is_empty());
        assert!(model.recognize("   ").is_empty());
        assert!(model.recognize("nothing to see here.").is_empty());
    }

    #[test]
    fn test_invalid_lexicon_fails_to_load() {
        let broken = Lexicon {
            organizations: &[],
            ..PORTUGUESE
        };
        let err = LanguageModel::from_lexicon(Language::Pt, &broken).unwrap_err();
        assert!(matches!(err, NerError::ModelLoad { language: Language::Pt, .. }));
    }

    fn models() -> &'static [LanguageModel] {
        static MODELS: OnceLock<Vec<LanguageModel>> = OnceLock::new();
        MODELS.get_or_init(|| Language::ALL.into_iter().map(|l| LanguageModel::load(l).unwrap()).collect())
    }

    const WORDS: &[&str] = &[
        "Paulo", "Guedes", "visited", "Washington", "Nakamura", "de", "da", "the", "of", "report",
        "in", "Brasil", "World", "Cup", "ministro", "Kenji", "e", "and", ".", ",", "casa", "FMI",
        "Silva", "van", "praised",
    ];

    proptest! {
        #[test]
        fn prop_spans_never_end_on_plain_lowercase_word(
            words in prop::collection::vec(prop::sample::select(WORDS), 1..12),
            lang in prop::sample::select(Language::ALL.to_vec()),
        ) {
            let text = words.join(" ");
            let model = models().iter().find(|m| m.language() == lang).unwrap();
            let tokens = tokenize(&text, lang);
            let connectors = lexicon(lang).connectors;
            let allowed = |token: &Token| {
                !token.is_lowercase() || connectors.contains(&token.text.to_lowercase().as_str())
            };

            for span in model.recognize(&text) {
                let first = tokens.iter().find(|t| t.start == span.start).unwrap();
                let last = tokens.iter().find(|t| t.end == span.end).unwrap();
                prop_assert!(allowed(first), "{text:?} {span:?}");
                prop_assert!(allowed(last), "{text:?} {span:?}");
            }
        }
    }
}
