//! Servidor web Axum + htmx que destaca entidades nomeadas enquanto o texto é digitado

mod config;
mod routes;
mod views;

use std::sync::Arc;

use anyhow::Context;
use ner_core::NerPipeline;
use tracing::info;

use crate::config::{load_config, CONFIG_FILE};
use crate::routes::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = load_config(CONFIG_FILE).context("falha ao carregar a configuração")?;

    let pipeline = tokio::task::spawn_blocking(NerPipeline::load)
        .await
        .context("carregamento dos modelos interrompido")?
        .context("falha ao carregar os modelos NER")?
        .with_max_text_bytes(config.max_text_bytes);

    let colors = config.label_colors();
    info!(labels = colors.label_count(), policy = ?colors.policy(), "mapa de cores pronto");

    let state = Arc::new(AppState { pipeline, colors });
    let app = router(state);

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("falha ao escutar em {address}"))?;
    info!("🚀 Servidor NER iniciado em http://{address}");
    axum::serve(listener, app).await.context("servidor encerrado com erro")?;

    Ok(())
}
