//! Tipos de requisição do Hirelens.

use serde::{Deserialize, Serialize};

use crate::{HirelensError, HirelensResult};

/// Requisição de avaliação de um perfil.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationRequest {
    /// ID único da requisição (usado nos logs).
    pub request_id: String,

    /// Username do GitHub, já normalizado.
    pub username: String,
}

impl EvaluationRequest {
    /// Cria uma requisição a partir de um username já limpo.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            username: username.into(),
        }
    }

    /// Cria uma requisição a partir do texto enviado pelo usuário.
    ///
    /// Aceita tanto `octocat` quanto `https://github.com/octocat/`:
    /// remove espaços, query string, fragmento e barras finais e usa o
    /// último segmento do caminho.
    pub fn from_input(input: &str) -> HirelensResult<Self> {
        let username = Self::parse_username(input).ok_or(HirelensError::InvalidUsername)?;
        Ok(Self::new(username))
    }

    /// Extrai o username do texto informado.
    pub fn parse_username(input: &str) -> Option<String> {
        let path = input.trim().split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let last = trimmed.rsplit('/').next().unwrap_or_default().trim();

        if last.is_empty() {
            None
        } else {
            Some(last.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_username() {
        assert_eq!(
            EvaluationRequest::parse_username("octocat"),
            Some("octocat".to_string())
        );
    }

    #[test]
    fn test_parse_profile_url_with_trailing_slash() {
        assert_eq!(
            EvaluationRequest::parse_username("  https://github.com/octocat/  "),
            Some("octocat".to_string())
        );
        assert_eq!(
            EvaluationRequest::parse_username("github.com/torvalds///"),
            Some("torvalds".to_string())
        );
    }

    #[test]
    fn test_parse_url_with_query_and_fragment() {
        assert_eq!(
            EvaluationRequest::parse_username("https://github.com/octocat?tab=repositories"),
            Some("octocat".to_string())
        );
        assert_eq!(
            EvaluationRequest::parse_username("https://github.com/octocat/#readme"),
            Some("octocat".to_string())
        );
        assert_eq!(EvaluationRequest::parse_username("?tab=stars"), None);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(EvaluationRequest::parse_username(""), None);
        assert_eq!(EvaluationRequest::parse_username("   /// "), None);
    }

    #[test]
    fn test_from_input_rejects_empty() {
        let err = EvaluationRequest::from_input("/").unwrap_err();
        assert!(matches!(err, HirelensError::InvalidUsername));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = EvaluationRequest::new("octocat");
        let b = EvaluationRequest::new("octocat");
        assert_ne!(a.request_id, b.request_id);
    }
}
