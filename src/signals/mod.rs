//! Coleta de sinais dos repositórios amostrados.
//!
//! A amostra é sempre os primeiros repositórios da listagem (ordenada
//! por atualização), nunca uma seleção por estrelas ou aleatória.

mod aggregator;
mod repo;

pub use aggregator::{scanned_count, RawSignals, SignalAggregator};
pub use repo::RepoSummary;
