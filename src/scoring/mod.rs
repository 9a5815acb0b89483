//! Pontuação e feedback do Hirelens.
//!
//! ## Sub-scores
//!
//! - **Documentation**: repositórios amostrados com README
//! - **Activity**: commits recentes contra 4 por repositório
//! - **Organization**: repositórios com descrição e licença
//! - **Tech Depth**: 20 pontos por linguagem distinta
//! - **Impact**: estrelas, saturando em 10
//!
//! ## Exemplo
//!
//! ```rust,ignore
//! use hirelens::scoring::{FeedbackGenerator, ScoringEngine};
//!
//! let card = ScoringEngine::default().score(signals.total_repos, &signals);
//! let feedback = FeedbackGenerator::generate(&card.subs);
//! println!("{} ({})", card.rating, card.verdict);
//! ```

mod engine;
mod feedback;

pub use engine::{Scorecard, ScoringEngine, Weights};
pub use feedback::{
    Feedback, FeedbackGenerator, ACTION_COUNT, DEFAULT_ACTIONS, FALLBACK_CONCERN,
    FALLBACK_POSITIVE,
};
