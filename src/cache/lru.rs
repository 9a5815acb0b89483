//! Cache LRU para resultados de avaliação.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use lru::LruCache;

use crate::types::responses::EvaluationResult;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(cap) => cap,
    None => unreachable!(),
};

/// Resultado em cache.
#[derive(Debug, Clone)]
pub struct CachedResult {
    /// Resultado da avaliação.
    pub result: EvaluationResult,

    /// Momento em que foi cacheado.
    pub cached_at: DateTime<Utc>,
}

impl CachedResult {
    /// Cria um novo resultado em cache.
    pub fn new(result: EvaluationResult) -> Self {
        Self::at(result, Utc::now())
    }

    /// Cria um resultado em cache com instante explícito.
    pub fn at(result: EvaluationResult, cached_at: DateTime<Utc>) -> Self {
        Self { result, cached_at }
    }

    /// Expirado quando `now - cached_at >= ttl`.
    pub fn is_expired_at(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let elapsed = now
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        elapsed >= ttl
    }
}

/// Estatísticas do cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Número atual de entradas (inclui expiradas ainda não sobrescritas).
    pub size: usize,

    /// Capacidade máxima.
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache LRU de avaliações, indexado por username.
///
/// Entradas expiradas não são removidas na leitura: viram miss e são
/// sobrescritas na próxima avaliação bem-sucedida (ou expulsas pelo LRU).
pub struct EvaluationCache {
    cache: LruCache<String, CachedResult>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EvaluationCache {
    /// Cria um novo cache.
    ///
    /// # Argumentos
    /// - `capacity`: Número máximo de entradas
    /// - `ttl`: Tempo de vida das entradas
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            cache: LruCache::new(cap),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cria um cache com configuração padrão.
    pub fn default_config() -> Self {
        Self::new(DEFAULT_CAPACITY.get(), Duration::from_secs(600)) // 10 minutos TTL
    }

    /// Tempo de vida configurado.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Busca no cache.
    ///
    /// Retorna `None` se não encontrado ou se expirado.
    pub fn get(&mut self, username: &str) -> Option<&EvaluationResult> {
        self.get_at(username, Utc::now())
    }

    /// Busca no cache com instante de referência explícito.
    pub fn get_at(&mut self, username: &str, now: DateTime<Utc>) -> Option<&EvaluationResult> {
        // peek não altera a ordem LRU; só um acerto conta como uso
        let fresh = self
            .cache
            .peek(username)
            .map(|c| !c.is_expired_at(self.ttl, now));

        if fresh == Some(true) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            self.cache.get(username).map(|c| &c.result)
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// Insere no cache, substituindo qualquer entrada anterior.
    pub fn insert(&mut self, username: impl Into<String>, result: EvaluationResult) {
        self.cache.put(username.into(), CachedResult::new(result));
    }

    /// Insere com instante explícito.
    pub fn insert_at(
        &mut self,
        username: impl Into<String>,
        result: EvaluationResult,
        cached_at: DateTime<Utc>,
    ) {
        self.cache
            .put(username.into(), CachedResult::at(result, cached_at));
    }

    /// Invalida uma entrada específica.
    pub fn invalidate(&mut self, username: &str) {
        self.cache.pop(username);
    }

    /// Limpa todo o cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Remove entradas expiradas.
    pub fn cleanup_expired(&mut self) {
        let now = Utc::now();
        let expired_keys: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, v)| v.is_expired_at(self.ttl, now))
            .map(|(k, _)| k.clone())
            .collect();

        for key in expired_keys {
            self.cache.pop(&key);
        }
    }
}

impl Default for EvaluationCache {
    fn default() -> Self {
        Self::default_config()
    }
}
