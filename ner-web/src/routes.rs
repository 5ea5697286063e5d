//! Rotas HTTP: página, fragmento htmx, API JSON e WebSocket.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use ner_core::{
    samples::{sample_text, samples},
    update, DisplaySegment, LabelColorMap, Language, NerPipeline, TableRow, View,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, error, info};

use crate::views::{IndexTemplate, ResultTemplate};

/// Estado compartilhado da aplicação
pub struct AppState {
    pub pipeline: NerPipeline,
    pub colors: LabelColorMap,
}

impl AppState {
    fn view(&self, text: &str, language: Language) -> View {
        update(&self.pipeline, &self.colors, text, language).view
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("falha ao renderizar template: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "erro interno");
        (StatusCode::INTERNAL_SERVER_ERROR, "erro interno do servidor").into_response()
    }
}

/// Campos do formulário da página. Campos ausentes valem texto vazio e `pt`.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    text: String,
    #[serde(default)]
    lang: Language,
}

/// Corpo de `POST /analyze` e das mensagens do WebSocket
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    text: String,
    #[serde(default)]
    lang: Language,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    segments: Vec<DisplaySegment>,
    rows: Vec<TableRow>,
    fallback: bool,
}

impl From<View> for AnalyzeResponse {
    fn from(view: View) -> Self {
        Self {
            segments: view.highlighted.segments(),
            fallback: view.is_fallback(),
            rows: view.rows,
        }
    }
}

#[derive(Debug, Serialize)]
struct SampleResponse {
    lang: Language,
    name: &'static str,
    text: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/update", post(update_handler))
        .route("/analyze", post(analyze_handler))
        .route("/ws", get(ws_handler))
        .route("/samples", get(samples_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Página principal, já com o resultado do texto de exemplo
async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let language = Language::default();
    let text = sample_text(language);
    let view = state.view(text, language);
    Ok(Html(IndexTemplate::new(language, text, &view).render()?))
}

/// Fragmento de resultado para o htmx (destaque + tabela)
async fn update_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UpdateForm>,
) -> Result<Html<String>, WebError> {
    debug!(lang = %form.lang, bytes = form.text.len(), "atualização via formulário");
    let view = state.view(&form.text, form.lang);
    Ok(Html(ResultTemplate::from(&view).render()?))
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    Json(state.view(&req.text, req.lang).into())
}

async fn samples_handler() -> Json<Vec<SampleResponse>> {
    Json(
        samples()
            .map(|(lang, text)| SampleResponse {
                lang,
                name: lang.display_name(),
                text,
            })
            .collect(),
    )
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Cada mensagem `{text, lang}` recebe uma visão completa em JSON. Mensagens
/// que não são JSON são tratadas como texto no idioma padrão.
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(raw) => {
                let req = serde_json::from_str::<AnalyzeRequest>(&raw).unwrap_or_else(|_| AnalyzeRequest {
                    text: raw.to_string(),
                    lang: Language::default(),
                });
                let response = AnalyzeResponse::from(state.view(&req.text, req.lang));
                let json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(err) => {
                        error!(error = %err, "falha ao serializar resposta");
                        continue;
                    }
                };
                if socket.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
            Message::Ping(payload) => {
                if socket.send(Message::Pong(payload)).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!("WebSocket desconectado");
}
