mod cli;

use cli::{ArgParser, parse_config, usage_and_exit};
use dfslib::{FileName, Store};
use std::path::Path;
use std::process;

const USAGE: &str = "Usage: cargo run --example replicate -- --peers URL[,URL...] <LOCAL_FILE>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut parser = ArgParser::new(USAGE);
    let config = parse_config(&mut parser)?;
    let peers: Vec<String> = parser
        .take_value(&["--peers"])
        .unwrap_or_else(|| usage_and_exit(USAGE))
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    let positionals = parser.remaining();
    if positionals.len() != 1 || peers.is_empty() {
        usage_and_exit(USAGE);
    }

    let local = Path::new(&positionals[0]);
    let name = match local.file_name() {
        Some(name) => FileName::new(name.to_string_lossy()),
        None => usage_and_exit(USAGE),
    };
    let content = tokio::fs::read(local).await?;

    let store = Store::new(config)?;
    let results = store.replicate_to_peers(&peers, &name, &content).await;

    let mut failed = false;
    for (peer, result) in results {
        match result {
            Ok(()) => println!("{}: ok", peer),
            Err(e) => {
                println!("{}: {}", peer, e);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
    Ok(())
}
