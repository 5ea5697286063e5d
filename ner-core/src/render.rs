//! # Renderização de Destaques e Tabela de Entidades
//!
//! Transforma `(texto, spans)` em duas visões:
//!
//! - [`render`]: segmentos de exibição, alternando trechos simples e entidades
//!   coloridas. A concatenação dos segmentos reproduz o texto original.
//! - [`to_rows`]: uma linha `(texto, rótulo)` por entidade, ou a linha
//!   `("None", "None")` quando não há nenhuma.

use serde::{Deserialize, Serialize};

use crate::colors::LabelColorMap;
use crate::error::RenderError;
use crate::tagger::EntitySpan;

/// Trecho de texto pronto para exibição.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplaySegment {
    Plain { text: String },
    Entity { text: String, label: String, color: String },
}

impl DisplaySegment {
    pub fn plain(text: impl Into<String>) -> Self {
        DisplaySegment::Plain { text: text.into() }
    }

    pub fn entity(text: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        DisplaySegment::Entity {
            text: text.into(),
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            DisplaySegment::Plain { text } | DisplaySegment::Entity { text, .. } => text,
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, DisplaySegment::Entity { .. })
    }
}

/// Intercala trechos simples e entidades usando um cursor sobre o texto.
///
/// Os spans precisam estar em ordem, sem sobreposição, com `start < end` e
/// offsets em fronteiras de caractere; do contrário o resultado é
/// [`RenderError::MalformedSpan`]. Rótulos sem cor seguem a política do mapa.
pub fn render(
    text: &str,
    spans: &[EntitySpan],
    colors: &LabelColorMap,
) -> Result<Vec<DisplaySegment>, RenderError> {
    let mut segments = Vec::with_capacity(2 * spans.len() + 1);
    let mut cursor = 0;

    for span in spans {
        let malformed = || RenderError::MalformedSpan {
            start: span.start,
            end: span.end,
            len: text.len(),
        };
        if span.start < cursor {
            return Err(malformed());
        }
        let entity = span.text(text).ok_or_else(malformed)?;
        let color = colors.color(&span.label)?;

        if span.start > cursor {
            segments.push(DisplaySegment::plain(&text[cursor..span.start]));
        }
        segments.push(DisplaySegment::entity(entity, span.label.as_str(), color));
        cursor = span.end;
    }

    if cursor < text.len() {
        segments.push(DisplaySegment::plain(&text[cursor..]));
    }
    Ok(segments)
}

/// Concatena os textos dos segmentos.
pub fn plain_text(segments: &[DisplaySegment]) -> String {
    segments.iter().map(DisplaySegment::text).collect()
}

/// Linha da tabela de entidades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub text: String,
    pub label: String,
}

impl TableRow {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Linha exibida quando não há entidades.
    pub fn placeholder() -> Self {
        Self::new("None", "None")
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

/// Uma linha por span, na ordem dos spans; só a linha substituta se não houver
/// spans ou se algum span não corresponder a um trecho válido do texto.
pub fn to_rows(spans: &[EntitySpan], text: &str) -> Vec<TableRow> {
    let rows: Option<Vec<TableRow>> = spans
        .iter()
        .map(|span| span.text(text).map(|t| TableRow::new(t, span.label.as_str())))
        .collect();

    match rows {
        Some(rows) if !rows.is_empty() => rows,
        _ => vec![TableRow::placeholder()],
    }
}
