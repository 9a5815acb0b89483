//! Motor de pontuação do Hirelens.
//!
//! Converte os contadores brutos em cinco sub-scores (0-100), combina
//! os sub-scores com pesos fixos e classifica a nota final.

use crate::signals::{scanned_count, RawSignals};
use crate::types::config::MAX_REPOS_TO_SCAN;
use crate::types::responses::{SubScores, Verdict, VerdictColor};

/// Pesos de cada sub-score, em pontos percentuais (somam 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub documentation: u32,
    pub activity: u32,
    pub organization: u32,
    pub tech_depth: u32,
    pub impact: u32,
}

impl Weights {
    /// Soma dos pesos.
    pub fn total(&self) -> u32 {
        self.documentation + self.activity + self.organization + self.tech_depth + self.impact
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            documentation: 30,
            activity: 20,
            organization: 20,
            tech_depth: 15,
            impact: 15,
        }
    }
}

/// Commits esperados por repositório amostrado para Activity = 100.
const COMMITS_PER_REPO_TARGET: u64 = 4;

/// Pontos de Tech Depth por linguagem distinta.
const POINTS_PER_LANGUAGE: u64 = 20;

/// Estrelas que saturam o Impact.
const STARS_FOR_FULL_IMPACT: u64 = 10;

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 10.0;

/// Resultado numérico da pontuação.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorecard {
    /// Sub-scores.
    pub subs: SubScores,

    /// Score ponderado (0-100), truncado.
    pub final_score: u8,

    /// Nota (1.0 - 10.0).
    pub rating: f64,

    /// Veredito.
    pub verdict: Verdict,

    /// Cor do veredito.
    pub verdict_color: VerdictColor,
}

/// Motor de pontuação.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    weights: Weights,
    max_repos: usize,
}

impl ScoringEngine {
    /// Cria um motor com o tamanho de amostra dado.
    pub fn new(max_repos: usize) -> Self {
        Self {
            weights: Weights::default(),
            max_repos: max_repos.max(1),
        }
    }

    /// Substitui os pesos.
    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Pesos em uso.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Pontua os sinais de uma avaliação.
    pub fn score(&self, total: usize, signals: &RawSignals) -> Scorecard {
        let subs = self.sub_scores(total, signals);
        let final_score = self.weighted(&subs);
        let rating = Self::rating(final_score);
        let verdict = Verdict::from_rating(rating);

        Scorecard {
            subs,
            final_score,
            rating,
            verdict,
            verdict_color: verdict.color(),
        }
    }

    /// Calcula os cinco sub-scores.
    ///
    /// Aritmética inteira: toda divisão trunca.
    pub fn sub_scores(&self, total: usize, signals: &RawSignals) -> SubScores {
        let scanned = scanned_count(total, self.max_repos) as u64;

        // Contagens vêm do upstream: multiplicações saturam em vez de estourar
        let documentation = percent(u64::from(signals.readme_hits) * 100 / scanned);
        let activity = percent(
            signals.recent_commit_sum.saturating_mul(100)
                / scanned.saturating_mul(COMMITS_PER_REPO_TARGET),
        );
        let organization = percent(u64::from(signals.complete_count) * 100 / scanned);
        let tech_depth = percent(signals.languages.len() as u64 * POINTS_PER_LANGUAGE);
        let impact = percent(signals.star_sum.saturating_mul(100) / STARS_FOR_FULL_IMPACT);

        SubScores {
            documentation,
            activity,
            organization,
            tech_depth,
            impact,
        }
    }

    /// Combina os sub-scores com os pesos (0-100, truncado).
    pub fn weighted(&self, subs: &SubScores) -> u8 {
        let w = &self.weights;
        let sum = w.documentation * u32::from(subs.documentation)
            + w.activity * u32::from(subs.activity)
            + w.organization * u32::from(subs.organization)
            + w.tech_depth * u32::from(subs.tech_depth)
            + w.impact * u32::from(subs.impact);

        (sum / w.total().max(1)).min(100) as u8
    }

    /// Converte o score 0-100 em nota com uma casa decimal, limitada a [1, 10].
    pub fn rating(final_score: u8) -> f64 {
        (f64::from(final_score) / 10.0).clamp(MIN_RATING, MAX_RATING)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(MAX_REPOS_TO_SCAN)
    }
}

/// Limita em 100.
fn percent(value: u64) -> u8 {
    value.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(readmes: u32, complete: u32, langs: &[&str], stars: u64, commits: u64) -> RawSignals {
        RawSignals {
            readme_hits: readmes,
            complete_count: complete,
            languages: langs.iter().map(|l| l.to_string()).collect(),
            star_sum: stars,
            recent_commit_sum: commits,
            ..RawSignals::default()
        }
    }

    #[test]
    fn test_reference_fixture() {
        let engine = ScoringEngine::default();
        let card = engine.score(10, &signals(3, 3, &["Python", "Go"], 5, 15));

        assert_eq!(card.subs.documentation, 100);
        assert_eq!(card.subs.organization, 100);
        assert_eq!(card.subs.tech_depth, 40);
        assert_eq!(card.subs.activity, 100);
        assert_eq!(card.subs.impact, 50);
        assert_eq!(card.final_score, 83);
        assert_eq!(card.rating, 8.3);
        assert_eq!(card.verdict, Verdict::StrongFit);
        assert_eq!(card.verdict_color, VerdictColor::Green);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let engine = ScoringEngine::default();
        let card = engine.score(3, &signals(0, 0, &[], u64::MAX, u64::MAX));

        assert_eq!(card.subs.impact, 100);
        assert_eq!(card.subs.activity, 100);
        assert_eq!(card.final_score, 35);
    }

    #[test]
    fn test_zero_repos_collapses_to_lowest_tier() {
        let engine = ScoringEngine::default();
        let card = engine.score(0, &RawSignals::default());

        assert_eq!(card.subs, SubScores::default());
        assert_eq!(card.final_score, 0);
        assert_eq!(card.rating, 1.0);
        assert_eq!(card.verdict, Verdict::NotReady);
        assert_eq!(card.verdict_color, VerdictColor::Red);
    }

    #[test]
    fn test_partial_sample_truncates() {
        let engine = ScoringEngine::default();
        // 2 de 3 com README: 66.6 -> 66
        let subs = engine.sub_scores(5, &signals(2, 1, &["Rust"], 0, 5));

        assert_eq!(subs.documentation, 66);
        assert_eq!(subs.organization, 33);
        // 5 / 12 * 100 = 41.6 -> 41
        assert_eq!(subs.activity, 41);
        assert_eq!(subs.tech_depth, 20);
        assert_eq!(subs.impact, 0);
    }

    #[test]
    fn test_small_profiles_scale_by_actual_sample() {
        let engine = ScoringEngine::default();
        // 1 repositório, com README e 4 commits: tudo no máximo
        let subs = engine.sub_scores(1, &signals(1, 1, &["Rust"], 1, 4));

        assert_eq!(subs.documentation, 100);
        assert_eq!(subs.activity, 100);
        assert_eq!(subs.organization, 100);
        assert_eq!(subs.impact, 10);
    }

    #[test]
    fn test_caps_at_100() {
        let engine = ScoringEngine::default();
        let subs = engine.sub_scores(
            3,
            &signals(3, 3, &["A", "B", "C", "D", "E", "F", "G"], 500, 900),
        );

        assert_eq!(subs.activity, 100);
        assert_eq!(subs.tech_depth, 100);
        assert_eq!(subs.impact, 100);

        let card = engine.score(3, &signals(3, 3, &["A", "B", "C", "D", "E"], 10, 12));
        assert_eq!(card.final_score, 100);
        assert_eq!(card.rating, 10.0);
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(ScoringEngine::rating(0), 1.0);
        assert_eq!(ScoringEngine::rating(9), 1.0);
        assert_eq!(ScoringEngine::rating(49), 4.9);
        assert_eq!(ScoringEngine::rating(50), 5.0);
        assert_eq!(ScoringEngine::rating(80), 8.0);
        assert_eq!(ScoringEngine::rating(100), 10.0);
    }

    #[test]
    fn test_weighted_truncates() {
        let engine = ScoringEngine::default();
        let subs = SubScores {
            documentation: 33,
            activity: 0,
            organization: 0,
            tech_depth: 0,
            impact: 0,
        };
        // 0.30 * 33 = 9.9 -> 9
        assert_eq!(engine.weighted(&subs), 9);
    }

    #[test]
    fn test_default_weights_sum_to_100() {
        assert_eq!(Weights::default().total(), 100);
    }
}
