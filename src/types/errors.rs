//! Tipos de erro do Hirelens.

use thiserror::Error;

/// Tipo de resultado padrão do Hirelens.
pub type HirelensResult<T> = Result<T, HirelensError>;

/// Erros possíveis no Hirelens.
///
/// As variantes de avaliação carregam a mensagem exibida ao usuário final
/// diretamente no `Display`.
#[derive(Error, Debug)]
pub enum HirelensError {
    #[error("GitHub profile not found.")]
    ProfileNotFound,

    #[error("GitHub API rate limit reached. Please try again later.")]
    RateLimited,

    #[error("GitHub API error while fetching profile.")]
    ProfileUnavailable,

    #[error("Unable to fetch repositories.")]
    ReposUnavailable,

    #[error("Please provide a GitHub username or profile URL.")]
    InvalidUsername,

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Falha ao criar cliente HTTP: {0}")]
    HttpClient(String),

    #[error("{0}")]
    Other(String),
}

/// Classificação grossa dos erros, para quem chama o motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Perfil inexistente no GitHub.
    ProfileNotFound,
    /// GitHub respondeu com limite de requisições.
    RateLimited,
    /// Qualquer outra falha no perfil ou na lista de repositórios.
    UpstreamError,
    /// Entrada do usuário inválida.
    InvalidInput,
    /// Falha local (config, IO, cliente HTTP).
    Internal,
}

impl HirelensError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Retorna a classe do erro.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProfileNotFound => ErrorKind::ProfileNotFound,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::ProfileUnavailable | Self::ReposUnavailable => ErrorKind::UpstreamError,
            Self::InvalidUsername => ErrorKind::InvalidInput,
            _ => ErrorKind::Internal,
        }
    }
}
