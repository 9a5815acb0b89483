//! Interface de linha de comando do Hirelens.

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hirelens - nota de prontidão para recrutadores de perfis do GitHub.
#[derive(Parser, Debug)]
#[command(name = "hirelens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração (padrão: ./hirelens.toml ou o diretório do usuário).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Avalia um perfil do GitHub.
    Evaluate {
        /// Username ou URL do perfil (ex.: https://github.com/octocat).
        profile: String,

        /// Imprime o resultado em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Mostra a configuração efetiva.
    Config,

    /// Diagnostica configuração e acesso à API.
    Doctor,

    /// Mostra versão.
    Version,
}
