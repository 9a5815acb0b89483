//! Camada de acesso HTTP do Hirelens.
//!
//! Toda chamada ao GitHub passa pelo trait [`JsonFetcher`], que nunca
//! falha: o resultado é sempre um [`FetchOutcome`] com três estados
//! (JSON, corpo ilegível, ou falha de transporte).

mod base;
mod http;
mod recorded;

pub use base::{FetchOutcome, JsonFetcher, QueryParams};
pub use http::HttpFetcher;
pub use recorded::{RecordedCall, RecordedFetcher};
