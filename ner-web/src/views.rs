//! Templates askama da página e do fragmento de resultado.

use askama::Template;
use ner_core::{DisplaySegment, Language, TableRow, View};

/// Opção do seletor de idioma
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub checked: bool,
}

pub struct SegmentView {
    pub text: String,
    pub label: String,
    pub color: String,
    pub entity: bool,
}

/// Destaque + tabela, no formato consumido pelos templates.
pub struct ResultView {
    pub segments: Vec<SegmentView>,
    pub rows: Vec<TableRow>,
}

impl From<&View> for ResultView {
    fn from(view: &View) -> Self {
        let segments = view
            .highlighted
            .segments()
            .into_iter()
            .map(|segment| match segment {
                DisplaySegment::Plain { text } => SegmentView {
                    text,
                    label: String::new(),
                    color: String::new(),
                    entity: false,
                },
                DisplaySegment::Entity { text, label, color } => SegmentView {
                    text,
                    label,
                    color,
                    entity: true,
                },
            })
            .collect();

        Self {
            segments,
            rows: view.rows.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub languages: Vec<LanguageOption>,
    pub text: String,
    pub result: ResultView,
}

impl IndexTemplate {
    pub fn new(selected: Language, text: &str, view: &View) -> Self {
        Self {
            languages: Language::ALL
                .into_iter()
                .map(|lang| LanguageOption {
                    code: lang.code(),
                    name: lang.display_name(),
                    checked: lang == selected,
                })
                .collect(),
            text: text.to_string(),
            result: view.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub result: ResultView,
}

impl From<&View> for ResultTemplate {
    fn from(view: &View) -> Self {
        Self { result: view.into() }
    }
}
