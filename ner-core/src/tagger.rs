//! # Esquema de Tags BIO e Spans de Entidade
//!
//! Define o esquema de anotação **BIO** (Beginning-Inside-Outside) usado pelo
//! decodificador e a conversão das tags por token em [`EntitySpan`]s.
//!
//! | Rótulo | Significado         | Exemplos                          |
//! |--------|---------------------|-----------------------------------|
//! | PER    | Pessoa              | Paulo Guedes, Barack Obama        |
//! | ORG    | Organização         | Fundo Monetário Internacional     |
//! | LOC    | Local/Geográfico    | Washington, Estados Unidos        |
//! | MISC   | Miscelânea          | Copa do Mundo, Covid-19           |

use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// Categorias de entidade produzidas pelos modelos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Per,
    Org,
    Loc,
    Misc,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 4] = [
        EntityCategory::Per,
        EntityCategory::Org,
        EntityCategory::Loc,
        EntityCategory::Misc,
    ];

    /// Rótulo textual da categoria, como aparece na tabela e no mapa de cores
    pub fn label(&self) -> &'static str {
        match self {
            EntityCategory::Per => "PER",
            EntityCategory::Org => "ORG",
            EntityCategory::Loc => "LOC",
            EntityCategory::Misc => "MISC",
        }
    }
}

/// Tag BIO aplicada a um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// Primeiro token de uma entidade. Ex: **Paulo** (B-PER) Guedes.
    Begin(EntityCategory),
    /// Continuação de uma entidade. Ex: Paulo **Guedes** (I-PER).
    Inside(EntityCategory),
    /// Fora de qualquer entidade.
    Outside,
}

impl Tag {
    /// Número total de tags possíveis
    pub const COUNT: usize = 9;

    /// Representação textual da tag (ex: "B-PER", "I-ORG", "O")
    pub fn label(&self) -> String {
        match self {
            Tag::Begin(cat) => format!("B-{}", cat.label()),
            Tag::Inside(cat) => format!("I-{}", cat.label()),
            Tag::Outside => "O".to_string(),
        }
    }

    /// Índice da tag nas matrizes do CRF (0..9)
    pub fn index(&self) -> usize {
        match self {
            Tag::Outside => 0,
            Tag::Begin(cat) => 1 + 2 * cat.ordinal(),
            Tag::Inside(cat) => 2 + 2 * cat.ordinal(),
        }
    }

    /// Todas as tags, ordenadas pelo índice
    pub fn all() -> [Tag; Tag::COUNT] {
        let mut tags = [Tag::Outside; Tag::COUNT];
        for cat in EntityCategory::ALL {
            tags[Tag::Begin(cat).index()] = Tag::Begin(cat);
            tags[Tag::Inside(cat).index()] = Tag::Inside(cat);
        }
        tags
    }

    pub fn category(&self) -> Option<EntityCategory> {
        match self {
            Tag::Begin(c) | Tag::Inside(c) => Some(*c),
            Tag::Outside => None,
        }
    }

    /// `I-X` só pode seguir `B-X` ou `I-X`; o resto é sempre válido.
    pub fn is_valid_transition(prev: &Tag, next: &Tag) -> bool {
        match next {
            Tag::Inside(cat) => prev.category() == Some(*cat),
            _ => true,
        }
    }
}

impl EntityCategory {
    fn ordinal(&self) -> usize {
        match self {
            EntityCategory::Per => 0,
            EntityCategory::Org => 1,
            EntityCategory::Loc => 2,
            EntityCategory::Misc => 3,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Uma entidade reconhecida: intervalo de bytes `[start, end)` no texto e rótulo.
///
/// O rótulo é uma string (e não [`EntityCategory`]) porque a renderização aceita
/// rótulos de qualquer fonte de entidades; só o mapa de cores decide se ele é conhecido.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Trecho do texto coberto pelo span, se os offsets forem válidos
    pub fn text<'a>(&self, text: &'a str) -> Option<&'a str> {
        if self.start >= self.end {
            return None;
        }
        text.get(self.start..self.end)
    }
}

/// Converte as tags BIO de cada token em spans de entidade.
///
/// - `B-X` abre uma entidade nova.
/// - `I-X` estende a entidade aberta se ela for da mesma categoria; caso
///   contrário abre uma nova (tolerância a sequências BIO inválidas).
/// - `O` fecha a entidade aberta.
///
/// # Exemplo
/// `[B-PER, I-PER, O, B-LOC]` → `[EntitySpan(PER), EntitySpan(LOC)]`
pub fn tokens_to_spans(tokens: &[Token], tags: &[Tag]) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut open: Option<(EntityCategory, usize, usize)> = None;

    for (token, tag) in tokens.iter().zip(tags) {
        open = match (*tag, open) {
            (Tag::Inside(cat), Some((open_cat, start, _))) if cat == open_cat => {
                Some((cat, start, token.end))
            }
            (Tag::Begin(cat) | Tag::Inside(cat), previous) => {
                close(&mut spans, previous);
                Some((cat, token.start, token.end))
            }
            (Tag::Outside, previous) => {
                close(&mut spans, previous);
                None
            }
        };
    }
    close(&mut spans, open);

    spans
}

fn close(spans: &mut Vec<EntitySpan>, open: Option<(EntityCategory, usize, usize)>) {
    if let Some((cat, start, end)) = open {
        spans.push(EntitySpan::new(start, end, cat.label()));
    }
}
