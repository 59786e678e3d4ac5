mod cli;

use cli::{ArgParser, parse_config, usage_and_exit};
use dfslib::{DfsError, ListView, PendingUpload, RefreshPolicy, Store, UploadOutcome};
use std::process;

const USAGE: &str = "Usage: cargo run --example upload -- [--server URL] [--proxy PROXY] [--strict] [LOCAL_FILE]

Without LOCAL_FILE nothing is uploaded and the list is shown as is.
--strict skips the refresh when the server rejects the upload.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut parser = ArgParser::new(USAGE);
    let mut config = parse_config(&mut parser)?;
    if parser.take_flag(&["--strict"]) {
        config = config.with_refresh_policy(RefreshPolicy::OnSuccess);
    }
    let positionals = parser.remaining();
    if positionals.len() > 1 {
        usage_and_exit(USAGE);
    }

    let store = Store::new(config)?;
    let view = ListView::new();

    println!("Listing files...");
    if let Err(e) = store.refresh_list(&view).await {
        eprintln!("Warning: initial listing failed: {}", e);
    }

    let selection = match positionals.first() {
        Some(path) => Some(PendingUpload::from_path(path).await?),
        None => None,
    };

    match store.upload_selected(selection, &view).await {
        Ok(UploadOutcome::NothingSelected) => println!("No file selected."),
        Ok(UploadOutcome::Sent { file, status, refresh }) => {
            println!("Uploaded {} (status {})", file, status);
            if refresh.is_none() {
                println!("List not refreshed.");
            }
        }
        Err(DfsError::RefreshAfterUpload {
            file,
            status,
            source,
        }) => {
            println!("Uploaded {} (status {})", file, status);
            eprintln!("Warning: list not refreshed: {}", source);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    print!("{}", view.render_text());
    Ok(())
}
