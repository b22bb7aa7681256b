//! testlet - randomize a testlet from the command line
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │  Config  │───▶│  Items   │───▶│  Testlet  │───▶│  Output  │
//! │  (YAML)  │    │  (YAML)  │    │ (Validate)│    │ (stdout) │
//! └──────────┘    └──────────┘    └───────────┘    └──────────┘
//! ```
//!
//! Flags:
//! - `--env <name>`   config file `config/<name>.yaml` (default: dev)
//! - `--items <path>` item list (default: fixtures/items.yaml)
//! - `--id <id>`      testlet id (default: testlet-1)
//! - `--seed <u64>`   reproducible order
//! - `--json`         print JSON instead of a table

use std::fs;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use testlet::config::AppConfig;
use testlet::{Item, Testlet};

// ============================================================
// ARGUMENTS
// ============================================================

fn get_arg(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_env() -> String {
    get_arg(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

fn get_items_path() -> String {
    get_arg(&["--items"]).unwrap_or_else(|| "fixtures/items.yaml".to_string())
}

fn get_testlet_id() -> String {
    get_arg(&["--id"]).unwrap_or_else(|| "testlet-1".to_string())
}

fn get_seed() -> Result<Option<u64>> {
    get_arg(&["--seed"])
        .map(|s| s.parse::<u64>().with_context(|| format!("invalid --seed: {}", s)))
        .transpose()
}

fn use_json_output() -> bool {
    std::env::args().any(|a| a == "--json")
}

// ============================================================
// MAIN
// ============================================================

fn load_items(path: &str) -> Result<Vec<Item>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read items file: {}", path))?;
    serde_yaml::from_str(&content).with_context(|| format!("failed to parse items file: {}", path))
}

fn main() -> Result<()> {
    let env = get_env();
    let app_config =
        AppConfig::load(&env).with_context(|| format!("failed to load config: {}", env))?;
    let _log_guard = testlet::logging::init_logging(&app_config);

    tracing::info!("Starting testlet in {} mode", env);

    let items_path = get_items_path();
    let items = load_items(&items_path)?;
    tracing::info!("Loaded {} items from {}", items.len(), items_path);

    let testlet = Testlet::with_config(get_testlet_id(), items, app_config.testlet.clone())?;

    let order = match get_seed()? {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            testlet.randomize_with(&mut StdRng::seed_from_u64(seed))
        }
        None => testlet.randomize(),
    };

    if use_json_output() {
        println!("{}", serde_json::to_string_pretty(&order)?);
    } else {
        let head = testlet.config().head.count;
        println!("=== Testlet {} ===", testlet.testlet_id());
        for (pos, item) in order.iter().enumerate() {
            let segment = if pos < head { "head" } else { "tail" };
            println!("{:>3}  {:<4}  {}", pos + 1, segment, item);
        }
    }

    Ok(())
}
