//! # ner-core — Reconhecimento de Entidades Nomeadas com Destaque Inline
//!
//! Este crate reconhece entidades nomeadas (pessoas, organizações, locais e
//! miscelânea) em textos em Português ou Inglês e prepara o resultado para
//! exibição: trechos destacados com a cor de cada rótulo e uma tabela de
//! entidades.
//!
//! ## Arquitetura
//!
//! 1.  **Entrada**: texto bruto e [`Language`].
//! 2.  **Fonte de Entidades** ([`pipeline`]): um [`LanguageModel`] por idioma
//!     tokeniza ([`tokenizer`]), extrai features ([`features`]), aplica regras
//!     ([`rule_based`]) e decodifica o CRF com Viterbi ([`crf`], [`viterbi`]).
//! 3.  **Renderização** ([`render`]): spans viram [`DisplaySegment`]s coloridos
//!     segundo o [`LabelColorMap`] ([`colors`]) e linhas de tabela.
//! 4.  **Atualização** ([`handler`]): junta tudo e cai para o texto cru quando
//!     o reconhecimento falha.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use ner_core::{update, Language, LabelColorMap, NerPipeline};
//!
//! let pipeline = NerPipeline::load().unwrap();
//! let colors = LabelColorMap::standard();
//!
//! let result = update(&pipeline, &colors, "Paulo Guedes visited Washington.", Language::En);
//! for row in &result.view.rows {
//!     println!("{} -> {}", row.text, row.label);
//! }
//! assert!(result.failure.is_none());
//! ```

pub mod colors;
pub mod crf;
pub mod error;
pub mod features;
pub mod handler;
pub mod language;
pub mod lexicon;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod rule_based;
pub mod samples;
pub mod tagger;
pub mod tokenizer;
pub mod viterbi;

pub use colors::{LabelColorMap, UnknownLabelPolicy};
pub use error::{NerError, RenderError, Result};
pub use handler::{update, Highlighted, Update, View};
pub use language::Language;
pub use model::LanguageModel;
pub use pipeline::{EntitySource, NerPipeline, DEFAULT_MAX_TEXT_BYTES};
pub use render::{render, to_rows, DisplaySegment, TableRow};
pub use tagger::{EntityCategory, EntitySpan, Tag};
pub use tokenizer::Token;
