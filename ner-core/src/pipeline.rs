//! # Pipeline NER — Fonte de Entidades
//!
//! O pipeline guarda um [`LanguageModel`] por idioma, carregados uma única vez,
//! e expõe o reconhecimento através do trait [`EntitySource`]. O restante do
//! sistema (renderização, tabela, handler de atualização) enxerga apenas o trait.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{NerError, Result};
use crate::language::Language;
use crate::model::LanguageModel;
use crate::tagger::EntitySpan;

/// Tamanho máximo de texto aceito por padrão (bytes).
pub const DEFAULT_MAX_TEXT_BYTES: usize = 100_000;

/// Fonte de entidades: dado um texto e um idioma, devolve spans ordenados e
/// sem sobreposição.
pub trait EntitySource: Send + Sync {
    fn recognize(&self, text: &str, language: Language) -> Result<Vec<EntitySpan>>;
}

/// Pipeline com um modelo por idioma.
#[derive(Debug)]
pub struct NerPipeline {
    models: HashMap<Language, LanguageModel>,
    max_text_bytes: usize,
}

impl NerPipeline {
    /// Carrega os modelos de português e inglês em paralelo.
    pub fn load() -> Result<Self> {
        let (pt, en) = rayon::join(
            || LanguageModel::load(Language::Pt),
            || LanguageModel::load(Language::En),
        );
        let pipeline = Self::from_models([pt?, en?]);
        info!(languages = pipeline.models.len(), "pipeline NER pronto");
        Ok(pipeline)
    }

    /// Monta o pipeline com os modelos informados. Um modelo repetido
    /// substitui o anterior do mesmo idioma.
    pub fn from_models(models: impl IntoIterator<Item = LanguageModel>) -> Self {
        Self {
            models: models.into_iter().map(|m| (m.language(), m)).collect(),
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
        }
    }

    pub fn with_max_text_bytes(mut self, max_text_bytes: usize) -> Self {
        self.max_text_bytes = max_text_bytes;
        self
    }

    pub fn max_text_bytes(&self) -> usize {
        self.max_text_bytes
    }

    /// Idiomas com modelo carregado, na ordem de [`Language::ALL`].
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.models.contains_key(lang))
            .collect()
    }
}

impl EntitySource for NerPipeline {
    fn recognize(&self, text: &str, language: Language) -> Result<Vec<EntitySpan>> {
        if text.len() > self.max_text_bytes {
            return Err(NerError::TextTooLarge {
                len: text.len(),
                max: self.max_text_bytes,
            });
        }
        let model = self
            .models
            .get(&language)
            .ok_or(NerError::ModelUnavailable(language))?;
        if text.trim().is_empty() {
            return Ok(vec![]);
        }

        let spans = model.recognize(text);
        debug!(%language, bytes = text.len(), entities = spans.len(), "texto analisado");
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_both_languages() {
        let pipeline = NerPipeline::load().unwrap();
        assert_eq!(pipeline.languages(), vec![Language::Pt, Language::En]);
        assert_eq!(pipeline.max_text_bytes(), DEFAULT_MAX_TEXT_BYTES);
    }

    #[test]
    fn test_recognize_english() {
        let pipeline = NerPipeline::load().unwrap();
        let spans = pipeline
            .recognize("Paulo Guedes visited Washington.", Language::En)
            .unwrap();
        assert_eq!(
            spans,
            vec![EntitySpan::new(0, 12, "PER"), EntitySpan::new(21, 31, "LOC")]
        );
    }

    #[test]
    fn test_blank_text_has_no_entities() {
        let pipeline = NerPipeline::load().unwrap();
        assert_eq!(pipeline.recognize("", Language::Pt).unwrap(), vec![]);
        assert_eq!(pipeline.recognize(" \n\t", Language::En).unwrap(), vec![]);
    }

    #[test]
    fn test_text_too_large() {
        let pipeline = NerPipeline::load().unwrap().with_max_text_bytes(8);
        let err = pipeline.recognize("Paulo Guedes", Language::Pt).unwrap_err();
        assert!(matches!(err, NerError::TextTooLarge { len: 12, max: 8 }));
    }

    #[test]
    fn test_missing_model() {
        let pipeline = NerPipeline::from_models([LanguageModel::load(Language::Pt).unwrap()]);
        assert_eq!(pipeline.languages(), vec![Language::Pt]);
        let err = pipeline.recognize("Washington", Language::En).unwrap_err();
        assert!(matches!(err, NerError::ModelUnavailable(Language::En)));
    }
}
