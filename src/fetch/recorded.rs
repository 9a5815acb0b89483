//! Fetcher em memória com respostas pré-gravadas.
//!
//! Usado nos testes e para reproduzir avaliações sem rede. Registra
//! cada chamada recebida para que os testes contem requisições.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::base::{FetchOutcome, JsonFetcher, QueryParams};

/// Uma chamada registrada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// URL sem query string.
    pub url: String,

    /// Parâmetros enviados.
    pub params: Vec<(String, String)>,
}

/// Fetcher com respostas fixas por URL.
///
/// URLs sem resposta gravada devolvem [`FetchOutcome::Transport`].
#[derive(Default)]
pub struct RecordedFetcher {
    routes: HashMap<String, FetchOutcome>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordedFetcher {
    /// Cria um fetcher vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grava uma resposta para a URL.
    #[must_use]
    pub fn with_route(mut self, url: impl Into<String>, outcome: FetchOutcome) -> Self {
        self.routes.insert(url.into(), outcome);
        self
    }

    /// Grava uma resposta JSON para a URL.
    #[must_use]
    pub fn with_json(self, url: impl Into<String>, status: u16, body: Value) -> Self {
        self.with_route(url, FetchOutcome::json(status, body))
    }

    /// Chamadas recebidas até agora.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Número de chamadas recebidas.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl JsonFetcher for RecordedFetcher {
    async fn fetch(&self, url: &str, params: QueryParams<'_>) -> FetchOutcome {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                url: url.to_string(),
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });
        }

        self.routes
            .get(url)
            .cloned()
            .unwrap_or(FetchOutcome::Transport)
    }
}
