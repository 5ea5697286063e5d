//! # Atualização Reativa
//!
//! A cada mudança de texto ou idioma a página recalcula, do zero, o destaque
//! inline e a tabela. [`update`] faz esse recálculo e nunca falha: em caso de
//! erro devolve a visão de contingência (texto cru + linha substituta) junto
//! com o motivo, que é registrado no log.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::colors::LabelColorMap;
use crate::error::NerError;
use crate::language::Language;
use crate::pipeline::EntitySource;
use crate::render::{render, to_rows, DisplaySegment, TableRow};

/// Conteúdo da área de destaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Highlighted {
    /// Segmentos coloridos
    Rendered(Vec<DisplaySegment>),
    /// Texto sem destaque (contingência)
    Raw(String),
}

impl Highlighted {
    pub fn text(&self) -> String {
        match self {
            Highlighted::Rendered(segments) => crate::render::plain_text(segments),
            Highlighted::Raw(text) => text.clone(),
        }
    }

    /// Segmentos a exibir; o texto cru vira um único segmento simples.
    pub fn segments(&self) -> Vec<DisplaySegment> {
        match self {
            Highlighted::Rendered(segments) => segments.clone(),
            Highlighted::Raw(text) if text.is_empty() => vec![],
            Highlighted::Raw(text) => vec![DisplaySegment::plain(text.as_str())],
        }
    }
}

/// O que a página mostra para um par (texto, idioma).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub highlighted: Highlighted,
    pub rows: Vec<TableRow>,
}

impl View {
    /// Texto cru e linha substituta.
    pub fn fallback(text: &str) -> Self {
        Self {
            highlighted: Highlighted::Raw(text.to_string()),
            rows: vec![TableRow::placeholder()],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.highlighted, Highlighted::Raw(_))
    }
}

/// Resultado de uma atualização: a visão sempre completa e, se houve, a falha.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub view: View,
    pub failure: Option<NerError>,
}

/// Recalcula a visão de `text` no idioma `language`.
///
/// - Falha de reconhecimento: texto cru + linha substituta.
/// - Falha de renderização (rótulo sem cor, span malformado): texto cru,
///   mas a tabela mantém as entidades reconhecidas.
pub fn update<S>(source: &S, colors: &LabelColorMap, text: &str, language: Language) -> Update
where
    S: EntitySource + ?Sized,
{
    let spans = match source.recognize(text, language) {
        Ok(spans) => spans,
        Err(err) => {
            warn!(%language, error = %err, "reconhecimento falhou, exibindo texto sem destaque");
            return Update {
                view: View::fallback(text),
                failure: Some(err),
            };
        }
    };

    let rows = to_rows(&spans, text);
    match render(text, &spans, colors) {
        Ok(segments) => Update {
            view: View {
                highlighted: Highlighted::Rendered(segments),
                rows,
            },
            failure: None,
        },
        Err(err) => {
            warn!(%language, error = %err, "renderização falhou, exibindo texto sem destaque");
            Update {
                view: View {
                    highlighted: Highlighted::Raw(text.to_string()),
                    rows,
                },
                failure: Some(err.into()),
            }
        }
    }
}
