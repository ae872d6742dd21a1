//! Locate keywords in a Word document
//!
//! Scans one `.docx` file and prints the JSON report.
//!
//! Usage:
//!   cargo run --release --bin locate_keywords -- report.docx --keywords "北京，上海"
//!   cargo run --release --bin locate_keywords -- report.docx --check-type china_regions
//!
//! Options:
//!   --keywords <list>        keywords separated by the configured separator
//!   --check-type <type>      custom (default) or china_regions
//!   --regions <file>         region store file (default china_regions.json)
//!   --config <file>          JSON file with LocatorConfig fields
//!   --include-tables         also scan paragraphs inside tables
//!   --pretty                 pretty-print the JSON report

use keyword_locator::api::{CheckType, ErrorReport, KeywordLocator, ScanReport};
use keyword_locator::config::LocatorConfig;
use keyword_locator::reader::ReaderOptions;
use keyword_locator::regions::{JsonFileStore, DEFAULT_REGIONS_FILE};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

struct CliConfig {
    input: Option<PathBuf>,
    keywords: Option<String>,
    check_type: String,
    regions_file: PathBuf,
    config_file: Option<PathBuf>,
    include_tables: bool,
    pretty: bool,
}

impl CliConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut config = Self {
            input: None,
            keywords: None,
            check_type: CheckType::Custom.as_str().to_string(),
            regions_file: PathBuf::from(DEFAULT_REGIONS_FILE),
            config_file: None,
            include_tables: false,
            pretty: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--keywords" | "-k" => {
                    i += 1;
                    config.keywords = args.get(i).cloned();
                },
                "--check-type" => {
                    i += 1;
                    if let Some(value) = args.get(i) {
                        config.check_type = value.clone();
                    }
                },
                "--regions" => {
                    i += 1;
                    if let Some(value) = args.get(i) {
                        config.regions_file = PathBuf::from(value);
                    }
                },
                "--config" => {
                    i += 1;
                    config.config_file = args.get(i).map(PathBuf::from);
                },
                "--include-tables" => config.include_tables = true,
                "--pretty" => config.pretty = true,
                other => {
                    if config.input.is_none() && !other.starts_with("--") {
                        config.input = Some(PathBuf::from(other));
                    } else {
                        eprintln!("Ignoring unknown argument: {}", other);
                    }
                },
            }
            i += 1;
        }

        config
    }
}

fn run(cli: &CliConfig, input: &Path) -> keyword_locator::Result<ScanReport> {
    let config = match &cli.config_file {
        Some(path) => LocatorConfig::from_json_file(path)?,
        None => LocatorConfig::default(),
    };
    let check_type: CheckType = cli.check_type.parse()?;
    let locator = KeywordLocator::new(config)
        .with_reader_options(ReaderOptions::default().with_include_tables(cli.include_tables));
    let store = JsonFileStore::new(&cli.regions_file);

    let filename = input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(input)?;

    locator.check(&filename, &bytes, check_type, cli.keywords.as_deref(), &store)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode report: {}", e),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = CliConfig::from_args();
    let Some(input) = cli.input.clone() else {
        eprintln!("Usage: locate_keywords <file.docx> [--keywords <list>] [--check-type <type>]");
        return ExitCode::from(2);
    };

    match run(&cli, &input) {
        Ok(report) => {
            print_json(&report, cli.pretty);
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::error!("Error processing file {}: {}", input.display(), e);
            print_json(&ErrorReport::from(&e), cli.pretty);
            ExitCode::FAILURE
        },
    }
}
