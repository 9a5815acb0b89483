//! Cache LRU para resultados de avaliação.
//!
//! Guarda o último resultado bem-sucedido de cada username por um
//! tempo de vida fixo, evitando novas chamadas ao GitHub.

mod lru;

pub use lru::{CacheStats, CachedResult, EvaluationCache};
