//! Acesso à API do GitHub.
//!
//! - [`GithubApi`] monta as URLs dos endpoints usados
//! - [`ProfileFetcher`] valida o perfil e lista os repositórios,
//!   convertendo status HTTP em erros de domínio

mod endpoints;
mod profile;

pub use endpoints::GithubApi;
pub use profile::ProfileFetcher;
