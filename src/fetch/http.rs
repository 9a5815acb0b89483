//! Fetcher HTTP real, baseado em reqwest.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;

use super::base::{FetchOutcome, JsonFetcher, QueryParams};
use crate::types::config::Config;
use crate::{HirelensError, HirelensResult};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Fetcher que fala com a API do GitHub via HTTP.
pub struct HttpFetcher {
    client: Client,
    authenticated: bool,
}

impl HttpFetcher {
    /// Cria um novo fetcher.
    ///
    /// # Argumentos
    /// - `timeout`: Tempo máximo por requisição
    /// - `user_agent`: Valor do header User-Agent
    /// - `token`: Token Bearer opcional
    pub fn new(timeout: Duration, user_agent: &str, token: Option<&str>) -> HirelensResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| HirelensError::HttpClient(format!("token inválido: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| HirelensError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            authenticated: token.is_some(),
        })
    }

    /// Cria o fetcher a partir da configuração.
    pub fn from_config(config: &Config) -> HirelensResult<Self> {
        let token = config.github.resolve_token();
        if token.is_none() {
            tracing::warn!(
                env = %config.github.token_env,
                "GitHub token not set. You may hit rate limits."
            );
        }

        Self::new(
            Duration::from_secs(config.general.timeout_secs),
            &config.github.user_agent,
            token.as_deref(),
        )
    }

    /// Indica se as requisições levam token.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, params: QueryParams<'_>) -> FetchOutcome {
        tracing::debug!(url, "GET");

        let response = match self.client.get(url).query(params).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(url, error = %e, "Transport failure");
                return FetchOutcome::Transport;
            }
        };

        let status = response.status().as_u16();

        // Corpo ilegível conta como não-parseável, não como falha de transporte
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(url, status, error = %e, "Failed to read body");
                return FetchOutcome::Unparsed { status };
            }
        };

        match serde_json::from_str(&text) {
            Ok(body) => FetchOutcome::Json { status, body },
            Err(_) => FetchOutcome::Unparsed { status },
        }
    }
}
