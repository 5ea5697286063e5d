//! # Mapa de Cores dos Rótulos
//!
//! Cada rótulo de entidade é desenhado com uma cor de fundo. O mapa parte da
//! paleta padrão de rótulos (no estilo displaCy), recebe as cores próprias desta
//! aplicação (`PER`, `MISC`) e, por fim, as cores extras vindas da configuração.
//! Depois de construído ele não muda mais.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Paleta padrão de rótulos.
pub const DEFAULT_LABEL_COLORS: &[(&str, &str)] = &[
    ("ORG", "#7aecec"),
    ("PRODUCT", "#bfeeb7"),
    ("GPE", "#feca74"),
    ("LOC", "#ff9561"),
    ("PERSON", "#aa9cfc"),
    ("NORP", "#c887fb"),
    ("FAC", "#9cc9cc"),
    ("EVENT", "#ffeb80"),
    ("LAW", "#ff8197"),
    ("LANGUAGE", "#ff8197"),
    ("WORK_OF_ART", "#f0d0ff"),
    ("DATE", "#bfe1d9"),
    ("TIME", "#bfe1d9"),
    ("MONEY", "#e4e7d2"),
    ("QUANTITY", "#e4e7d2"),
    ("ORDINAL", "#e4e7d2"),
    ("CARDINAL", "#e4e7d2"),
    ("PERCENT", "#e4e7d2"),
];

/// Cores dos rótulos que a paleta padrão não conhece.
pub const CUSTOM_LABEL_COLORS: &[(&str, &str)] = &[("PER", "#aa9cfc"), ("MISC", "#9cc9cc")];

/// Cor usada para rótulos desconhecidos com [`UnknownLabelPolicy::Neutral`].
pub const NEUTRAL_COLOR: &str = "#ddd";

/// O que fazer com um rótulo sem cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLabelPolicy {
    /// Erro de configuração ([`RenderError::UnknownLabel`])
    #[default]
    Fail,
    /// Desenha com [`NEUTRAL_COLOR`]
    Neutral,
}

/// Mapa imutável rótulo → cor CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelColorMap {
    colors: BTreeMap<String, String>,
    unknown: UnknownLabelPolicy,
}

impl LabelColorMap {
    /// Paleta padrão + cores próprias + `overrides`, nessa ordem. Entradas
    /// posteriores substituem a cor de um rótulo, nunca o removem.
    pub fn new<I, K, V>(overrides: I, unknown: UnknownLabelPolicy) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut colors: BTreeMap<String, String> = DEFAULT_LABEL_COLORS
            .iter()
            .chain(CUSTOM_LABEL_COLORS)
            .map(|(label, color)| (label.to_string(), color.to_string()))
            .collect();
        colors.extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self { colors, unknown }
    }

    /// Paleta padrão + cores próprias, sem extras.
    pub fn standard() -> Self {
        Self::new(std::iter::empty::<(String, String)>(), UnknownLabelPolicy::Fail)
    }

    /// Cor de `label`, respeitando a política para rótulos desconhecidos.
    pub fn color(&self, label: &str) -> Result<&str, RenderError> {
        match (self.colors.get(label), self.unknown) {
            (Some(color), _) => Ok(color.as_str()),
            (None, UnknownLabelPolicy::Neutral) => Ok(NEUTRAL_COLOR),
            (None, UnknownLabelPolicy::Fail) => Err(RenderError::UnknownLabel {
                label: label.to_string(),
            }),
        }
    }

    /// Cor configurada para `label`, sem aplicar a política.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.colors.get(label).map(String::as_str)
    }

    /// Rótulos de `labels` sem cor configurada.
    pub fn covers<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        labels
            .into_iter()
            .filter(|label| !self.colors.contains_key(*label))
            .collect()
    }

    pub fn policy(&self) -> UnknownLabelPolicy {
        self.unknown
    }

    /// Quantidade de rótulos com cor configurada.
    pub fn label_count(&self) -> usize {
        self.colors.len()
    }
}

impl Default for LabelColorMap {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::EntityCategory;

    #[test]
    fn test_every_model_label_has_a_color() {
        let colors = LabelColorMap::standard();
        let labels = EntityCategory::ALL.map(|cat| cat.label());
        assert!(colors.covers(labels).is_empty());
    }

    #[test]
    fn test_custom_colors() {
        let colors = LabelColorMap::standard();
        assert_eq!(colors.color("PER"), Ok("#aa9cfc"));
        assert_eq!(colors.color("MISC"), Ok("#9cc9cc"));
        assert_eq!(colors.color("ORG"), Ok("#7aecec"));
        assert_eq!(colors.color("LOC"), Ok("#ff9561"));
        assert_eq!(colors.label_count(), DEFAULT_LABEL_COLORS.len() + CUSTOM_LABEL_COLORS.len());
    }

    #[test]
    fn test_overrides_replace_but_keep_labels() {
        let colors = LabelColorMap::new([("LOC", "#123456"), ("EXTRA", "#abcdef")], UnknownLabelPolicy::Fail);
        assert_eq!(colors.get("LOC"), Some("#123456"));
        assert_eq!(colors.get("EXTRA"), Some("#abcdef"));
        assert_eq!(colors.get("ORG"), Some("#7aecec"));
        assert_eq!(colors.label_count(), LabelColorMap::standard().label_count() + 1);
    }

    #[test]
    fn test_unknown_label_policy() {
        let strict = LabelColorMap::standard();
        assert_eq!(
            strict.color("ALIEN"),
            Err(RenderError::UnknownLabel { label: "ALIEN".into() })
        );
        assert_eq!(strict.covers(["PER", "ALIEN"]), vec!["ALIEN"]);

        let lenient = LabelColorMap::new(std::iter::empty::<(&str, &str)>(), UnknownLabelPolicy::Neutral);
        assert_eq!(lenient.color("ALIEN"), Ok(NEUTRAL_COLOR));
        assert_eq!(lenient.policy(), UnknownLabelPolicy::Neutral);
    }
}
