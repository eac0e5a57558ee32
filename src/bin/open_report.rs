// src/bin/open_report.rs
//! Open a sealed report by public key and print it

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use grade_vault::{load_config, load_report, Credentials};
use rpassword::prompt_password;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

struct Args {
    public_key: String,
    dir: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut public_key = None;
    let mut dir = None;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--dir" => dir = Some(PathBuf::from(it.next().context("--dir needs a value")?)),
            flag if flag.starts_with("--") => bail!("unknown flag {flag:?}"),
            _ if public_key.is_none() => public_key = Some(arg),
            _ => bail!("unexpected argument {arg:?}"),
        }
    }

    match public_key {
        Some(public_key) => Ok(Args { public_key, dir }),
        None => bail!("usage: open_report <public_key> [--dir DIR]"),
    }
}

fn run() -> Result<ExitCode> {
    let config = load_config();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    let args = parse_args()?;
    let dir = args.dir.unwrap_or_else(|| config.paths.analysis_dir.clone());
    let private_key = prompt_password("Private key: ")?;

    let credentials = match Credentials::new(args.public_key, private_key.trim_end()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    info!("Opening report {} from {}", credentials.public_key(), dir.display());
    match load_report(&dir, &credentials) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!(error = %e, "load failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
