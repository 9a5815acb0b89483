//! Motor de avaliação do Hirelens.
//!
//! Orquestra o fluxo completo de uma avaliação:
//! cache → perfil e repositórios → sinais → pontuação → feedback → cache.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::Instrument;

use crate::cache::{CacheStats, EvaluationCache};
use crate::fetch::{HttpFetcher, JsonFetcher};
use crate::github::{GithubApi, ProfileFetcher};
use crate::scoring::{FeedbackGenerator, ScoringEngine};
use crate::signals::SignalAggregator;
use crate::types::config::{Config, ScanConfig};
use crate::types::requests::EvaluationRequest;
use crate::types::responses::EvaluationResult;
use crate::HirelensResult;

/// Motor de avaliação de perfis.
///
/// O cache pertence à instância; chamadas concorrentes para o mesmo
/// username podem, no pior caso, buscar duas vezes no GitHub.
pub struct Evaluator<F: JsonFetcher> {
    fetcher: F,
    api: GithubApi,
    scan: ScanConfig,
    scoring: ScoringEngine,
    cache: Option<Mutex<EvaluationCache>>,
}

impl Evaluator<HttpFetcher> {
    /// Cria um avaliador que fala com o GitHub de verdade.
    pub fn from_config(config: &Config) -> HirelensResult<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::from_config(config)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: JsonFetcher> Evaluator<F> {
    /// Cria um avaliador com o fetcher dado.
    pub fn new(fetcher: F, config: &Config) -> Self {
        let cache = config.cache.enabled.then(|| {
            Mutex::new(EvaluationCache::new(
                config.cache.capacity,
                Duration::from_secs(config.cache.ttl_secs),
            ))
        });

        Self {
            fetcher,
            api: GithubApi::from_config(&config.github),
            scan: config.scan.clone(),
            scoring: ScoringEngine::new(config.scan.max_repos_to_scan),
            cache,
        }
    }

    /// Substitui o cache (ex.: TTL ou capacidade diferentes).
    #[must_use]
    pub fn with_cache(mut self, cache: EvaluationCache) -> Self {
        self.cache = Some(Mutex::new(cache));
        self
    }

    /// Desliga o cache.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// Fetcher em uso.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Avalia um username ou URL de perfil.
    pub async fn evaluate(&self, input: &str) -> HirelensResult<EvaluationResult> {
        let request = EvaluationRequest::from_input(input)?;
        let span = tracing::info_span!(
            "evaluate",
            request_id = %request.request_id,
            username = %request.username
        );

        self.evaluate_request(&request).instrument(span).await
    }

    /// Mesmo contrato de [`Evaluator::evaluate`], como par
    /// `(resultado, erro)` com exatamente um lado preenchido.
    pub async fn evaluate_pair(&self, input: &str) -> (Option<EvaluationResult>, Option<String>) {
        match self.evaluate(input).await {
            Ok(result) => (Some(result), None),
            Err(e) => (None, Some(e.to_string())),
        }
    }

    async fn evaluate_request(&self, request: &EvaluationRequest) -> HirelensResult<EvaluationResult> {
        let username = request.username.as_str();

        if let Some(cached) = self.cached(username).await {
            tracing::info!("Cache hit");
            return Ok(cached);
        }

        tracing::info!("Evaluating profile");

        let repos = ProfileFetcher::new(&self.fetcher, &self.api)
            .fetch_repos(username)
            .await
            .inspect_err(|e| tracing::info!(error = %e, "Evaluation failed"))?;

        let signals = SignalAggregator::with_scan_config(&self.fetcher, &self.api, &self.scan)
            .aggregate(username, &repos)
            .await;

        let card = self.scoring.score(signals.total_repos, &signals);
        let feedback = FeedbackGenerator::generate(&card.subs);

        let result = EvaluationResult {
            repos: signals.total_repos,
            readmes: signals.readme_hits,
            stars: signals.star_sum,
            languages: signals.languages_label(),
            rating: card.rating,
            verdict: card.verdict,
            verdict_color: card.verdict_color,
            subs: card.subs,
            positives: feedback.positives,
            concerns: feedback.concerns,
            actions: feedback.actions,
        };

        tracing::info!(rating = result.rating, verdict = %result.verdict, "Evaluation complete");

        if let Some(cache) = &self.cache {
            cache.lock().await.insert(username, result.clone());
        }

        Ok(result)
    }

    async fn cached(&self, username: &str) -> Option<EvaluationResult> {
        let cache = self.cache.as_ref()?;
        let mut cache = cache.lock().await;
        cache.get(username).cloned()
    }

    /// Estatísticas do cache, se habilitado.
    pub async fn cache_stats(&self) -> Option<CacheStats> {
        match &self.cache {
            Some(cache) => Some(cache.lock().await.stats()),
            None => None,
        }
    }

    /// Esquece o resultado de um username.
    pub async fn invalidate(&self, username: &str) {
        if let Some(cache) = &self.cache {
            cache.lock().await.invalidate(username);
        }
    }
}
