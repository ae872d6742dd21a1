//! Maintain the region name store
//!
//! Usage:
//!   cargo run --bin manage_regions -- list
//!   cargo run --bin manage_regions -- add 市级 珠海
//!   cargo run --bin manage_regions -- remove 市级 珠海
//!   cargo run --bin manage_regions -- rename 市级 珠海 珠海市
//!   cargo run --bin manage_regions -- --regions custom.json list

use keyword_locator::regions::{JsonFileStore, KeywordListStore, DEFAULT_REGIONS_FILE};
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("Usage: manage_regions [--regions <file>] list|add|remove|rename <level> <name> [new]");
    ExitCode::from(2)
}

fn run(store: &JsonFileStore, command: &[String]) -> keyword_locator::Result<bool> {
    match command {
        [cmd] if cmd == "list" => {
            let catalog = store.load()?;
            for level in catalog.levels() {
                let names = catalog.level(level).unwrap_or_default();
                println!("{} ({}): {}", level, names.len(), names.join("，"));
            }
        },
        [cmd, level, name] if cmd == "add" => {
            let name = store.add(level, name)?;
            println!("Added {} to {}", name, level);
        },
        [cmd, level, name] if cmd == "remove" => {
            store.remove(level, name)?;
            println!("Removed {} from {}", name, level);
        },
        [cmd, level, old, new] if cmd == "rename" => {
            let new = store.rename(level, old, new)?;
            println!("Renamed {} to {} in {}", old, new, level);
        },
        _ => return Ok(false),
    }
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut regions_file = DEFAULT_REGIONS_FILE.to_string();
    if args.first().map(String::as_str) == Some("--regions") {
        if args.len() < 2 {
            return usage();
        }
        regions_file = args[1].clone();
        args.drain(..2);
    }

    let store = JsonFileStore::new(regions_file);
    match run(&store, &args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => usage(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
