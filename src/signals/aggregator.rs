//! Agregador de sinais dos repositórios.
//!
//! Responsável por:
//! - Percorrer apenas os primeiros N repositórios (ordem de atualização)
//! - Somar estrelas, linguagens e completude a partir da listagem
//! - Consultar README e commits recentes de cada repositório amostrado

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::Value;
use std::collections::BTreeSet;

use super::repo::RepoSummary;
use crate::fetch::{FetchOutcome, JsonFetcher};
use crate::github::GithubApi;
use crate::types::config::ScanConfig;

/// Contadores brutos de uma avaliação.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSignals {
    /// Total de repositórios na listagem.
    pub total_repos: usize,

    /// Tamanho efetivo da amostra, `clamp(total, 1, max)`.
    pub scanned: usize,

    /// Repositórios amostrados com README.
    pub readme_hits: u32,

    /// Soma de estrelas.
    pub star_sum: u64,

    /// Linguagens distintas (ordenadas).
    pub languages: BTreeSet<String>,

    /// Repositórios com descrição e licença.
    pub complete_count: u32,

    /// Commits dentro da janela recente.
    pub recent_commit_sum: u64,
}

impl RawSignals {
    /// Linguagens separadas por ", " ou "N/A".
    pub fn languages_label(&self) -> String {
        if self.languages.is_empty() {
            "N/A".to_string()
        } else {
            self.languages
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Tamanho da amostra: ao menos 1 (evita divisão por zero), no máximo `max`.
pub fn scanned_count(total: usize, max: usize) -> usize {
    total.min(max).max(1)
}

/// Agregador de sinais.
pub struct SignalAggregator<'a, F: JsonFetcher + ?Sized> {
    fetcher: &'a F,
    api: &'a GithubApi,
    max_repos: usize,
    commit_window: Duration,
}

impl<'a, F: JsonFetcher + ?Sized> SignalAggregator<'a, F> {
    /// Cria um agregador com a amostra padrão.
    pub fn new(fetcher: &'a F, api: &'a GithubApi) -> Self {
        Self::with_scan_config(fetcher, api, &ScanConfig::default())
    }

    /// Cria um agregador com a configuração de amostragem dada.
    pub fn with_scan_config(fetcher: &'a F, api: &'a GithubApi, scan: &ScanConfig) -> Self {
        Self {
            fetcher,
            api,
            max_repos: scan.max_repos_to_scan.max(1),
            commit_window: Duration::days(scan.commit_window_days),
        }
    }

    /// Valor do parâmetro `since` para o instante dado (UTC, sufixo `Z`).
    pub fn since_param(&self, now: DateTime<Utc>) -> String {
        (now - self.commit_window).to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Agrega os sinais usando o relógio atual.
    pub async fn aggregate(&self, username: &str, repos: &[Value]) -> RawSignals {
        self.aggregate_at(username, repos, Utc::now()).await
    }

    /// Agrega os sinais com um instante de referência explícito.
    ///
    /// Falhas nas consultas de README e commits contam como zero; a
    /// agregação nunca é abortada.
    pub async fn aggregate_at(
        &self,
        username: &str,
        repos: &[Value],
        now: DateTime<Utc>,
    ) -> RawSignals {
        let since = self.since_param(now);
        let mut signals = RawSignals {
            total_repos: repos.len(),
            scanned: scanned_count(repos.len(), self.max_repos),
            ..RawSignals::default()
        };

        // Os primeiros N, na ordem recebida (mais recentes primeiro)
        for value in repos.iter().take(self.max_repos) {
            let Some(repo) = RepoSummary::from_value(value) else {
                continue;
            };

            signals.star_sum = signals.star_sum.saturating_add(repo.stars);
            if let Some(language) = &repo.language {
                signals.languages.insert(language.clone());
            }
            if repo.is_complete() {
                signals.complete_count += 1;
            }

            let Some(name) = repo.name.as_deref() else {
                continue;
            };

            if self.has_readme(username, name).await {
                signals.readme_hits += 1;
            }
            let commits = self.recent_commits(username, name, &since).await;
            signals.recent_commit_sum = signals.recent_commit_sum.saturating_add(commits);
        }

        tracing::debug!(
            username,
            total = signals.total_repos,
            scanned = signals.scanned,
            readmes = signals.readme_hits,
            commits = signals.recent_commit_sum,
            "Signals aggregated"
        );

        signals
    }

    async fn has_readme(&self, username: &str, repo: &str) -> bool {
        let outcome = self.fetcher.fetch(&self.api.readme(username, repo), &[]).await;
        if outcome.status().is_none() {
            tracing::warn!(username, repo, "README probe failed");
        }
        outcome.is_ok()
    }

    async fn recent_commits(&self, username: &str, repo: &str, since: &str) -> u64 {
        let params = [("since", since.to_string())];
        let outcome = self
            .fetcher
            .fetch(&self.api.commits(username, repo), &params)
            .await;

        match outcome {
            FetchOutcome::Json {
                status: 200,
                body: Value::Array(commits),
            } => commits.len() as u64,
            other => {
                tracing::warn!(username, repo, status = ?other.status(), "Commit lookup failed");
                0
            }
        }
    }
}

impl<F: JsonFetcher + ?Sized> std::fmt::Debug for SignalAggregator<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalAggregator")
            .field("max_repos", &self.max_repos)
            .field("commit_window_days", &self.commit_window.num_days())
            .finish()
    }
}
