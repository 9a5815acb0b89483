//! URLs da API REST do GitHub.

use crate::types::config::GithubConfig;

/// Monta as URLs usadas na avaliação.
#[derive(Debug, Clone)]
pub struct GithubApi {
    base: String,
    per_page: u32,
    sort: String,
}

impl GithubApi {
    /// Cria a partir de uma URL base (sem barra final).
    pub fn new(base: impl Into<String>) -> Self {
        let defaults = GithubConfig::default();
        Self::from_parts(base.into(), defaults.per_page, defaults.sort)
    }

    /// Cria a partir da configuração.
    pub fn from_config(config: &GithubConfig) -> Self {
        Self::from_parts(config.api_base.clone(), config.per_page, config.sort.clone())
    }

    fn from_parts(base: String, per_page: u32, sort: String) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            per_page,
            sort,
        }
    }

    /// URL base.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET /users/{username}`
    pub fn user(&self, username: &str) -> String {
        format!("{}/users/{}", self.base, username)
    }

    /// `GET /users/{username}/repos`
    pub fn user_repos(&self, username: &str) -> String {
        format!("{}/users/{}/repos", self.base, username)
    }

    /// Parâmetros da listagem de repositórios (primeira página apenas).
    pub fn user_repos_params(&self) -> [(&'static str, String); 2] {
        [
            ("per_page", self.per_page.to_string()),
            ("sort", self.sort.clone()),
        ]
    }

    /// `GET /repos/{username}/{repo}/readme`
    pub fn readme(&self, username: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/readme", self.base, username, repo)
    }

    /// `GET /repos/{username}/{repo}/commits`
    pub fn commits(&self, username: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/commits", self.base, username, repo)
    }

    /// `GET /rate_limit`
    pub fn rate_limit(&self) -> String {
        format!("{}/rate_limit", self.base)
    }
}

impl Default for GithubApi {
    fn default() -> Self {
        Self::from_config(&GithubConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = GithubApi::new("https://api.github.com/");

        assert_eq!(api.user("octocat"), "https://api.github.com/users/octocat");
        assert_eq!(
            api.user_repos("octocat"),
            "https://api.github.com/users/octocat/repos"
        );
        assert_eq!(
            api.readme("octocat", "hello"),
            "https://api.github.com/repos/octocat/hello/readme"
        );
        assert_eq!(
            api.commits("octocat", "hello"),
            "https://api.github.com/repos/octocat/hello/commits"
        );
    }

    #[test]
    fn test_repo_list_params() {
        let api = GithubApi::default();
        let params = api.user_repos_params();

        assert_eq!(params[0], ("per_page", "50".to_string()));
        assert_eq!(params[1], ("sort", "updated".to_string()));
    }
}
