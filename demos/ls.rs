//! Example: List files on a DFS server
//!
//! Usage:
//!   cargo run --example ls -- [--server URL] [--proxy PROXY] [--html]

mod cli;

use cli::{ArgParser, parse_config};
use dfslib::{ListView, Store};
use std::process;

const USAGE: &str =
    "Usage: cargo run --example ls -- [--server URL] [--proxy PROXY] [--timeout SECS] [--html]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut parser = ArgParser::new(USAGE);
    let config = parse_config(&mut parser)?;
    let html = parser.take_flag(&["--html"]);

    println!("Listing {}\n", config.server_url);
    let store = Store::new(config)?;
    let view = ListView::new();

    if let Err(e) = store.refresh_list(&view).await {
        eprintln!("Failed to list: {}", e);
        process::exit(1);
    }

    if html {
        print!("{}", view.render_html());
    } else if view.entries().is_empty() {
        println!("  (empty)");
    } else {
        for entry in view.entries() {
            println!("  {}  {}", entry.name, entry.href);
        }
    }

    Ok(())
}
