//! Trait base para buscas HTTP com corpo JSON.

use async_trait::async_trait;
use serde_json::Value;

/// Parâmetros de query string, na ordem em que são enviados.
pub type QueryParams<'a> = &'a [(&'a str, String)];

/// Resultado de uma busca.
///
/// Nunca é um erro: falhas de transporte viram [`FetchOutcome::Transport`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Sem resposta (DNS, timeout, conexão recusada...).
    Transport,

    /// Houve resposta, mas o corpo não é JSON válido.
    Unparsed {
        /// Código HTTP.
        status: u16,
    },

    /// Resposta com corpo JSON.
    Json {
        /// Código HTTP.
        status: u16,
        /// Corpo parseado.
        body: Value,
    },
}

impl FetchOutcome {
    /// Atalho para respostas JSON.
    pub fn json(status: u16, body: Value) -> Self {
        Self::Json { status, body }
    }

    /// Código HTTP, se houve resposta.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport => None,
            Self::Unparsed { status } | Self::Json { status, .. } => Some(*status),
        }
    }

    /// Corpo parseado, se houver.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Json { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Consome o resultado e devolve o corpo.
    pub fn into_body(self) -> Option<Value> {
        match self {
            Self::Json { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Verifica se o status é 200.
    pub fn is_ok(&self) -> bool {
        self.status() == Some(200)
    }
}

/// Trait para quem sabe fazer um GET e devolver JSON.
///
/// Implementações não fazem retry nem cache; cada chamada é uma requisição.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Executa um GET em `url` com os parâmetros dados.
    async fn fetch(&self, url: &str, params: QueryParams<'_>) -> FetchOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_has_no_status() {
        let outcome = FetchOutcome::Transport;
        assert_eq!(outcome.status(), None);
        assert!(outcome.body().is_none());
        assert!(!outcome.is_ok());
    }

    #[test]
    fn test_unparsed_keeps_status() {
        let outcome = FetchOutcome::Unparsed { status: 200 };
        assert_eq!(outcome.status(), Some(200));
        assert!(outcome.is_ok());
        assert!(outcome.into_body().is_none());
    }

    #[test]
    fn test_json_outcome() {
        let outcome = FetchOutcome::json(404, json!({"message": "Not Found"}));
        assert_eq!(outcome.status(), Some(404));
        assert!(!outcome.is_ok());
        assert_eq!(outcome.body().unwrap()["message"], "Not Found");
    }
}
