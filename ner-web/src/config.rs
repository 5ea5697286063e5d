//! Configuração do servidor, lida de `ner-web.toml` no diretório atual.
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 5000
//! max_text_bytes = 100000
//! unknown_label = "fail"   # ou "neutral"
//!
//! [colors]
//! LOC = "#ff9561"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ner_core::{LabelColorMap, UnknownLabelPolicy, DEFAULT_MAX_TEXT_BYTES};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Arquivo procurado no diretório de trabalho.
pub const CONFIG_FILE: &str = "ner-web.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("falha ao ler {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuração TOML inválida: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cor inválida para o rótulo {label}: {color:?}")]
    InvalidColor { label: String, color: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub max_text_bytes: usize,
    pub unknown_label: UnknownLabelPolicy,
    /// Cores extras ou substitutas por rótulo
    pub colors: BTreeMap<String, String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
            unknown_label: UnknownLabelPolicy::default(),
            colors: BTreeMap::new(),
        }
    }
}

impl WebConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn label_colors(&self) -> LabelColorMap {
        LabelColorMap::new(self.colors.clone(), self.unknown_label)
    }

    /// As cores vão para um atributo `style`; recusa o que poderia escapar dele.
    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |color: &str| color.trim().is_empty() || color.contains(&[';', '"', '<', '>', '{', '}'][..]);
        match self.colors.iter().find(|(_, color)| invalid(color)) {
            Some((label, color)) => Err(ConfigError::InvalidColor {
                label: label.clone(),
                color: color.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Lê a configuração de `path`. Arquivo ausente → configuração padrão.
pub fn load_config(path: impl AsRef<Path>) -> Result<WebConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "arquivo de configuração ausente, usando padrões");
            return Ok(WebConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = parse_config(&content)?;
    info!(path = %path.display(), "configuração carregada");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<WebConfig, ConfigError> {
    let config: WebConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, WebConfig::default());
        assert_eq!(config.address(), "127.0.0.1:5000");
        assert_eq!(config.max_text_bytes, 100_000);
        assert_eq!(config.unknown_label, UnknownLabelPolicy::Fail);
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r##"
            host = "0.0.0.0"
            port = 8080
            unknown_label = "neutral"

            [colors]
            LOC = "#000000"
            EXTRA = "rgb(1, 2, 3)"
            "##,
        )
        .unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");

        let colors = config.label_colors();
        assert_eq!(colors.get("LOC"), Some("#000000"));
        assert_eq!(colors.get("EXTRA"), Some("rgb(1, 2, 3)"));
        assert_eq!(colors.get("PER"), Some("#aa9cfc"));
        assert_eq!(colors.policy(), UnknownLabelPolicy::Neutral);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(parse_config("porta = 1"), Err(ConfigError::Parse(_))));
        assert!(matches!(parse_config("unknown_label = \"maybe\""), Err(ConfigError::Parse(_))));
        assert!(matches!(
            parse_config("[colors]\nPER = \"red; display: none\""),
            Err(ConfigError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config("/nonexistent/dir/ner-web.toml").unwrap();
        assert_eq!(config, WebConfig::default());
    }
}
