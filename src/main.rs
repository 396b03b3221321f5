use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

mod cli;

use cli::{display_banner, Args};
use quark_hash::algorithms::{self, HashAlgorithm};
use quark_hash::difficulty::{nbits_to_target, parse_nbits, to_display_hex};
use quark_hash::header::{decode_hex, BlockHeader, HEADER_SIZE};
use quark_hash::primitives::Slot;
use quark_hash::Quark;

/// One line of `--json` output
#[derive(Debug, Serialize)]
struct HashReport {
    algorithm: String,
    input_len: usize,
    hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    meets_target: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<&'static str>>,
}

/// Result of hashing one input on the blocking pool
struct HashOutcome {
    input_len: usize,
    hash: [u8; 32],
    target: Option<[u8; 32]>,
    path: Option<[Slot; 9]>,
}

async fn read_stdin_inputs() -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

async fn run(args: Args) -> Result<()> {
    let algo: Arc<dyn HashAlgorithm> = algorithms::by_name(&args.algo)?.into();
    let explicit_target = args
        .bits
        .as_deref()
        .map(parse_nbits)
        .transpose()?
        .map(nbits_to_target);

    let raw_inputs = if args.headers.is_empty() {
        read_stdin_inputs().await?
    } else {
        args.headers.clone()
    };

    // Reject anything that is not a byte sequence before hashing
    let inputs = raw_inputs
        .iter()
        .enumerate()
        .map(|(i, hex)| decode_hex(hex).with_context(|| format!("Input #{}", i + 1)))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!("Hashing {} input(s) with {}", inputs.len(), algo.name());

    let want_path = args.path && algo.name() == "quark";
    let mut handles = Vec::with_capacity(inputs.len());
    for input in inputs {
        let algo = algo.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let (hash, path) = if want_path {
                let (hash, path) = Quark::new().compute_with_path(&input);
                (hash, Some(path))
            } else {
                (algo.hash(&input), None)
            };
            let target = explicit_target.or_else(|| {
                (input.len() == HEADER_SIZE)
                    .then(|| BlockHeader::from_bytes(&input).ok())
                    .flatten()
                    .map(|header| nbits_to_target(header.bits))
            });
            HashOutcome {
                input_len: input.len(),
                hash,
                target,
                path,
            }
        }));
    }

    for (index, handle) in handles.into_iter().enumerate() {
        let outcome = handle.await.context("Hash task failed")?;
        let hash_hex = if args.raw {
            hex::encode(outcome.hash)
        } else {
            to_display_hex(&outcome.hash)
        };
        let meets_target = outcome
            .target
            .map(|target| algo.meets_target(&outcome.hash, &target));

        tracing::debug!(
            "Input #{}: {} bytes -> {}",
            index + 1,
            outcome.input_len,
            hash_hex
        );

        if args.json {
            let report = HashReport {
                algorithm: algo.name().to_string(),
                input_len: outcome.input_len,
                hash: hash_hex,
                meets_target,
                path: outcome
                    .path
                    .map(|path| path.iter().map(Slot::as_str).collect()),
            };
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        let status = match meets_target {
            Some(true) => "✓ meets target".green().to_string(),
            Some(false) => "✗ above target".red().to_string(),
            None => String::new(),
        };
        println!(
            "{:<6} {} {}",
            format!("#{}", index + 1).green(),
            hash_hex.bright_white(),
            status
        );
        if let Some(path) = outcome.path {
            let names: Vec<&str> = path.iter().map(Slot::as_str).collect();
            println!("       {}", names.join(" → ").bright_black());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if !args.json {
        display_banner();
    }

    if let Err(e) = run(args).await {
        eprintln!("{}", format!("Error: {:#}", e).red().bold());
        std::process::exit(1);
    }
}
