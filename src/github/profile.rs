//! Validação do perfil e listagem de repositórios.

use serde_json::Value;

use super::endpoints::GithubApi;
use crate::fetch::{FetchOutcome, JsonFetcher};
use crate::{HirelensError, HirelensResult};

const STATUS_OK: u16 = 200;
const STATUS_FORBIDDEN: u16 = 403;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// GitHub sinaliza limite de requisições com 403 (e às vezes 429).
fn is_rate_limited(outcome: &FetchOutcome) -> bool {
    matches!(
        outcome.status(),
        Some(STATUS_FORBIDDEN) | Some(STATUS_TOO_MANY_REQUESTS)
    )
}

/// Busca o perfil e a lista de repositórios de um usuário.
///
/// Faz exatamente duas chamadas quando o perfil existe; não guarda nada.
pub struct ProfileFetcher<'a, F: JsonFetcher + ?Sized> {
    fetcher: &'a F,
    api: &'a GithubApi,
}

impl<'a, F: JsonFetcher + ?Sized> ProfileFetcher<'a, F> {
    /// Cria um novo fetcher de perfil.
    pub fn new(fetcher: &'a F, api: &'a GithubApi) -> Self {
        Self { fetcher, api }
    }

    /// Valida o perfil e devolve os repositórios, do mais recente ao mais antigo.
    pub async fn fetch_repos(&self, username: &str) -> HirelensResult<Vec<Value>> {
        self.check_profile(username).await?;
        self.list_repos(username).await
    }

    /// Confirma que a conta existe.
    pub async fn check_profile(&self, username: &str) -> HirelensResult<()> {
        let outcome = self.fetcher.fetch(&self.api.user(username), &[]).await;

        if outcome.status() == Some(STATUS_NOT_FOUND) {
            return Err(HirelensError::ProfileNotFound);
        }
        if is_rate_limited(&outcome) {
            return Err(HirelensError::RateLimited);
        }

        match outcome {
            FetchOutcome::Json {
                status: STATUS_OK,
                body: Value::Object(_),
            } => Ok(()),
            other => {
                tracing::warn!(username, status = ?other.status(), "Unexpected profile response");
                Err(HirelensError::ProfileUnavailable)
            }
        }
    }

    /// Lista a primeira página de repositórios.
    pub async fn list_repos(&self, username: &str) -> HirelensResult<Vec<Value>> {
        let params = self.api.user_repos_params();
        let outcome = self
            .fetcher
            .fetch(&self.api.user_repos(username), &params)
            .await;

        if is_rate_limited(&outcome) {
            return Err(HirelensError::RateLimited);
        }

        match outcome {
            FetchOutcome::Json {
                status: STATUS_OK,
                body: Value::Array(repos),
            } => Ok(repos),
            other => {
                tracing::warn!(username, status = ?other.status(), "Unexpected repository list response");
                Err(HirelensError::ReposUnavailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::RecordedFetcher;
    use serde_json::json;

    const BASE: &str = "http://gh.test";

    fn api() -> GithubApi {
        GithubApi::new(BASE)
    }

    #[tokio::test]
    async fn test_profile_not_found() {
        let fetcher = RecordedFetcher::new().with_json(
            format!("{}/users/ghost", BASE),
            404,
            json!({"message": "Not Found"}),
        );
        let api = api();

        let err = ProfileFetcher::new(&fetcher, &api)
            .fetch_repos("ghost")
            .await
            .unwrap_err();

        assert!(matches!(err, HirelensError::ProfileNotFound));
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_profile_rate_limited() {
        let fetcher = RecordedFetcher::new().with_json(
            format!("{}/users/octocat", BASE),
            403,
            json!({"message": "API rate limit exceeded"}),
        );
        let api = api();

        let err = ProfileFetcher::new(&fetcher, &api)
            .fetch_repos("octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, HirelensError::RateLimited));
    }

    #[tokio::test]
    async fn test_profile_transport_failure() {
        let fetcher = RecordedFetcher::new();
        let api = api();

        let err = ProfileFetcher::new(&fetcher, &api)
            .fetch_repos("octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, HirelensError::ProfileUnavailable));
    }

    #[tokio::test]
    async fn test_profile_body_not_object() {
        let fetcher =
            RecordedFetcher::new().with_json(format!("{}/users/octocat", BASE), 200, json!([]));
        let api = api();

        let err = ProfileFetcher::new(&fetcher, &api)
            .check_profile("octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, HirelensError::ProfileUnavailable));
    }

    #[tokio::test]
    async fn test_repo_list_rate_limited() {
        let fetcher = RecordedFetcher::new()
            .with_json(format!("{}/users/octocat", BASE), 200, json!({"login": "octocat"}))
            .with_json(format!("{}/users/octocat/repos", BASE), 403, json!({}));
        let api = api();

        let err = ProfileFetcher::new(&fetcher, &api)
            .fetch_repos("octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, HirelensError::RateLimited));
    }

    #[tokio::test]
    async fn test_repo_list_unparsed() {
        let fetcher = RecordedFetcher::new()
            .with_json(format!("{}/users/octocat", BASE), 200, json!({"login": "octocat"}))
            .with_route(
                format!("{}/users/octocat/repos", BASE),
                FetchOutcome::Unparsed { status: 200 },
            );
        let api = api();

        let err = ProfileFetcher::new(&fetcher, &api)
            .fetch_repos("octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, HirelensError::ReposUnavailable));
    }

    #[tokio::test]
    async fn test_repo_list_success_sends_paging_params() {
        let fetcher = RecordedFetcher::new()
            .with_json(format!("{}/users/octocat", BASE), 200, json!({"login": "octocat"}))
            .with_json(
                format!("{}/users/octocat/repos", BASE),
                200,
                json!([{"name": "a"}, {"name": "b"}]),
            );
        let api = api();

        let repos = ProfileFetcher::new(&fetcher, &api)
            .fetch_repos("octocat")
            .await
            .unwrap();

        assert_eq!(repos.len(), 2);

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1].params,
            vec![
                ("per_page".to_string(), "50".to_string()),
                ("sort".to_string(), "updated".to_string()),
            ]
        );
    }
}
