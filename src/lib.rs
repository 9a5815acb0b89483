//! # Hirelens
//!
//! Avalia um perfil público do GitHub com uma rubrica fixa e produz
//! uma nota de prontidão para recrutadores.
//!
//! ## Módulos
//!
//! - [`engine`] - Motor de avaliação (ponto de entrada)
//! - [`fetch`] - Acesso HTTP que nunca falha (resultado em três estados)
//! - [`github`] - Endpoints e validação do perfil
//! - [`signals`] - Agregação dos sinais dos repositórios amostrados
//! - [`scoring`] - Sub-scores, nota, veredito e feedback
//! - [`cache`] - Cache LRU com TTL dos resultados
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod fetch;
pub mod github;
pub mod scoring;
pub mod signals;
pub mod types;

pub use engine::Evaluator;
pub use types::config::Config;
pub use types::errors::{ErrorKind, HirelensError, HirelensResult};
