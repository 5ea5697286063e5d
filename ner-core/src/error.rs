//! # Erros do Reconhecimento e da Renderização
//!
//! Dois níveis de falha convivem no sistema:
//!
//! - [`RenderError`]: o texto foi reconhecido, mas os spans não podem ser
//!   desenhados (rótulo sem cor configurada, span fora do texto ou fora de ordem).
//! - [`NerError`]: falhas do pipeline como um todo (texto grande demais, idioma
//!   sem modelo, falha ao carregar um modelo) e, por conversão, erros de renderização.

use thiserror::Error;

use crate::language::Language;

/// Falha ao transformar spans em segmentos de exibição.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// O rótulo não tem entrada no [`LabelColorMap`](crate::colors::LabelColorMap).
    #[error("rótulo sem cor configurada: {label}")]
    UnknownLabel { label: String },

    /// Span vazio, fora dos limites, fora de uma fronteira de caractere
    /// ou sobreposto ao span anterior.
    #[error("span malformado [{start}, {end}) em texto de {len} bytes")]
    MalformedSpan { start: usize, end: usize, len: usize },
}

/// Erro principal do crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NerError {
    #[error("texto com {len} bytes excede o limite de {max} bytes")]
    TextTooLarge { len: usize, max: usize },

    #[error("nenhum modelo carregado para o idioma '{0}'")]
    ModelUnavailable(Language),

    #[error("falha ao carregar o modelo '{language}': {reason}")]
    ModelLoad { language: Language, reason: String },

    #[error("idioma desconhecido: '{0}'")]
    UnknownLanguage(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T, E = NerError> = std::result::Result<T, E>;
