//! Implementação dos comandos CLI do Hirelens.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::render::render_text;
use crate::engine::Evaluator;
use crate::fetch::{FetchOutcome, HttpFetcher, JsonFetcher};
use crate::github::GithubApi;
use crate::types::config::{Config, CONFIG_FILE_NAME};
use crate::types::errors::ErrorKind;
use crate::types::requests::EvaluationRequest;
use crate::HirelensResult;

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> HirelensResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        println!("Use 'hirelens config' to inspect it.");
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Hirelens initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Export a token to avoid rate limits: export GITHUB_TOKEN=...");
    println!("  2. Check the setup: hirelens doctor");
    println!("  3. Evaluate a profile: hirelens evaluate https://github.com/octocat");

    Ok(())
}

/// Avalia um perfil e imprime o relatório.
///
/// Retorna `false` quando a avaliação falhou por motivo do usuário ou
/// do GitHub (a mensagem já foi impressa).
pub async fn evaluate(profile: &str, json: bool, config: &Config) -> HirelensResult<bool> {
    let evaluator = Evaluator::from_config(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Analisando {}...", profile.trim()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = evaluator.evaluate(profile).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let username = EvaluationRequest::parse_username(profile).unwrap_or_default();
                print!("{}", render_text(&username, &result));
            }
            Ok(true)
        }
        Err(e) if e.kind() != ErrorKind::Internal => {
            eprintln!("{}", e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Mostra a configuração efetiva, com o token mascarado.
pub fn show_config(config: &Config) -> HirelensResult<()> {
    let mut shown = config.clone();
    if shown.github.token.is_some() {
        shown.github.token = Some("********".to_string());
    }

    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}

/// Diagnostica problemas de configuração.
pub async fn doctor(config: &Config) -> HirelensResult<()> {
    println!("Diagnosticando configuração do Hirelens...\n");

    let mut issues: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    match config.validate() {
        Ok(()) => println!("✓ Configuração válida"),
        Err(e) => issues.push(e.to_string()),
    }

    if config.github.resolve_token().is_some() {
        println!("✓ Token do GitHub configurado");
    } else {
        warnings.push(format!(
            "Token não configurado ({}); o limite de requisições será baixo",
            config.github.token_env
        ));
    }

    let fetcher = HttpFetcher::from_config(config)?;
    let api = GithubApi::from_config(&config.github);

    match fetcher.fetch(&api.rate_limit(), &[]).await {
        FetchOutcome::Json { status: 200, body } => {
            let remaining = body["rate"]["remaining"].as_u64();
            let limit = body["rate"]["limit"].as_u64();
            match (remaining, limit) {
                (Some(remaining), Some(limit)) => {
                    println!("✓ API acessível ({}/{} requisições restantes)", remaining, limit);
                    // Uma avaliação faz até 2 * amostra + 2 chamadas
                    let needed = (2 * config.scan.max_repos_to_scan + 2) as u64;
                    if remaining < needed {
                        warnings.push(format!(
                            "Restam {} requisições; uma avaliação precisa de até {}",
                            remaining, needed
                        ));
                    }
                }
                _ => println!("✓ API acessível"),
            }
        }
        FetchOutcome::Transport => {
            issues.push(format!("Sem conexão com {}", api.base()));
        }
        other => {
            issues.push(format!(
                "API respondeu com status {}",
                other.status().unwrap_or_default()
            ));
        }
    }

    println!();
    if issues.is_empty() && warnings.is_empty() {
        println!("✓ Tudo OK! Hirelens está pronto para uso.");
    } else {
        if !warnings.is_empty() {
            println!("Avisos:");
            for warning in warnings {
                println!("  ⚠ {}", warning);
            }
        }
        if !issues.is_empty() {
            println!("Problemas:");
            for issue in issues {
                println!("  ✗ {}", issue);
            }
        }
    }

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("hirelens {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Recruiter-readiness scoring for GitHub profiles");
}
