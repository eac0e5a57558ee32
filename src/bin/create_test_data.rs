// src/bin/create_test_data.rs
//! Seal a sample student report into the analysis directory

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use grade_vault::file_ops::write_payload;
use grade_vault::report::{StudentReport, Subject};
use grade_vault::{load_config, seal};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_PUBLIC_KEY: &str = "student_test";
const DEFAULT_PRIVATE_KEY: &str = "my_secret_password_123";

struct Args {
    dir: Option<PathBuf>,
    public_key: String,
    private_key: String,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        dir: None,
        public_key: DEFAULT_PUBLIC_KEY.to_owned(),
        private_key: DEFAULT_PRIVATE_KEY.to_owned(),
    };

    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--dir" => args.dir = Some(PathBuf::from(value()?)),
            "--public-key" => args.public_key = value()?,
            "--password" => args.private_key = value()?,
            other => bail!(
                "unknown argument {other:?}\nusage: create_test_data [--dir DIR] [--public-key KEY] [--password PW]"
            ),
        }
    }
    Ok(args)
}

fn sample_report() -> StudentReport {
    let subject = |name: &str, rank, degree, average_degree| Subject {
        name: name.to_owned(),
        full_degree: 100.0,
        rank,
        degree,
        average_degree,
    };

    StudentReport {
        student_name: "Alex Doe".into(),
        is_male: true,
        rank: 5,
        total_degree: 850.0,
        accuracy: Some(92.5),
        full_degree: 1000.0,
        subjects: vec![
            subject("Mathematics", 3, 95.0, 80.0),
            subject("Physics", 12, 88.0, 75.0),
            subject("Chemistry", 0, 78.0, 70.0),
            subject("Biology", 0, 92.0, 85.0),
            subject("English", 8, 85.0, 82.0),
        ],
    }
}

fn main() -> Result<()> {
    let config = load_config();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    let args = parse_args()?;
    let dir = args.dir.unwrap_or_else(|| config.paths.analysis_dir.clone());

    info!("Generating test data...");
    let report = serde_json::to_string(&sample_report())?;
    let payload = seal(&report, &args.private_key).context("sealing sample report")?;

    // Named after the public key with no extension; the loader tries that first.
    let path = dir.join(&args.public_key);
    write_payload(&path, &payload)
        .with_context(|| format!("writing {}", path.display()))?;

    info!("Data saved to {}", path.display());
    println!("Open the dashboard with:");
    println!(
        "?public_key={}&private_key={}",
        args.public_key, args.private_key
    );
    Ok(())
}
