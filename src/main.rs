//! Cluster Conf Command Line Tool
//!
//! Resolves the client configuration and prints it, or a single key.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, info};
use serde_json::{json, Map, Value};

use cluster_conf::common::{init_logger, ConfError, Result};
use cluster_conf::{ConfResolver, Configuration, SettingsLoader, APP_NAME, VERSION};

/// Output format for the resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `key=value  # source` lines
    Text,
    /// JSON object with resources and properties
    Json,
}

/// Cluster Conf: resolve a cluster client configuration
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Args {
    /// Settings file (TOML or JSON)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Settings override, e.g. model.local-computation=false (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Cluster conf directory (defaults to $HADOOP_CONF_DIR, then /etc/hadoop/conf)
    #[arg(long)]
    conf_dir: Option<PathBuf>,

    /// Print only the value of this key
    #[arg(long)]
    key: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(&args.log_level);
    debug!("Starting {} v{}", APP_NAME, VERSION);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = &args.settings {
        loader = loader.with_file(path);
    }
    for assignment in &args.overrides {
        loader = loader.with_assignment(assignment)?;
    }
    let settings = loader.load()?;

    let mut resolver = ConfResolver::new(&settings);
    if let Some(dir) = &args.conf_dir {
        resolver = resolver.with_conf_dir(dir);
    }
    let conf = resolver.resolve()?;
    info!("Resolved {} properties", conf.len());

    if let Some(key) = &args.key {
        return Ok(match conf.get(key) {
            Some(value) => {
                println!("{}", value);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("{}: {} is not set", APP_NAME, key);
                ExitCode::from(2)
            }
        });
    }

    match args.format {
        Format::Text => print_text(&conf),
        Format::Json => print_json(&conf)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn print_text(conf: &Configuration) {
    for (key, value) in conf.iter() {
        match conf.property_source(key) {
            Some(source) => println!("{}={}  # {}", key, value, source),
            None => println!("{}={}", key, value),
        }
    }
}

fn print_json(conf: &Configuration) -> Result<()> {
    let mut properties = Map::new();
    for (key, value) in conf.iter() {
        let source = conf.property_source(key).map(|s| s.to_string());
        properties.insert(key.to_string(), json!({ "value": value, "source": source }));
    }

    let resources: Vec<Value> = conf
        .resources()
        .iter()
        .map(|url| Value::String(url.to_string()))
        .collect();

    let dump = json!({ "resources": resources, "properties": properties });
    let out = serde_json::to_string_pretty(&dump).map_err(|e| ConfError::Io(e.into()))?;
    println!("{}", out);
    Ok(())
}
