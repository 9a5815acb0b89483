//! Tipos compartilhados do Hirelens.

pub mod config;
pub mod errors;
pub mod requests;
pub mod responses;
