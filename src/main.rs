//! application entry point

use crate::backoffice::model::config::AppConfig;
use crate::backoffice::Cli;
use anyhow::Context;
use clap::Parser;
use derive_more::Display;
use log::{info, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

mod backoffice;

const DEFAULT_API_BASE_URL: &str = "https://sal-707-dl.onrender.com";
const DEFAULT_SESSION_FILE: &str = ".backoffice-session.json";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "30";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => Ok(()), // provided by the deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    if let Err(e) = dotenv {
        warn!("failed to load envs from .env.dev, using process env only, {}", e);
    }

    // c. run command
    let timeout_secs: u64 = env::var("REQUEST_TIMEOUT_SECS")
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
        .parse()
        .context("failed to parse REQUEST_TIMEOUT_SECS")?;
    let config = AppConfig::new(
        env::var("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL.to_string()),
        PathBuf::from(env::var("SESSION_FILE").unwrap_or(DEFAULT_SESSION_FILE.to_string())),
        Duration::from_secs(timeout_secs),
    );

    info!("back office starting in env={}, api={}", env, config.api_base_url);

    backoffice::run(config, cli).await
}

#[derive(Debug, Display, PartialEq)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
