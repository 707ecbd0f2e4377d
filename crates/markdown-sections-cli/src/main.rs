use anyhow::{Context, Result};
use markdown_sections_config::Config;
use markdown_sections_engine::{io, parse_lines, parsing::snapshot};
use std::{env, path::PathBuf, process};

#[derive(Debug, PartialEq)]
struct Args {
    file: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    match args {
        [file] => Some(Args {
            file: PathBuf::from(file),
            config: None,
        }),
        [file, flag, config] if flag == "--config" => Some(Args {
            file: PathBuf::from(file),
            config: Some(PathBuf::from(config)),
        }),
        [flag, config, file] if flag == "--config" => Some(Args {
            file: PathBuf::from(file),
            config: Some(PathBuf::from(config)),
        }),
        _ => None,
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(Config::config_path);
    let config = Config::load_or_default(&config_path)?;
    log::info!(
        "Indentation from {}: use_tab={} tab_size={}",
        config_path.display(),
        config.indentation.use_tab,
        config.indentation.tab_size
    );
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("markdown-sections-cli", String::as_str);
    let Some(parsed) = parse_args(args.get(1..).unwrap_or(&[])) else {
        eprintln!("Usage: {program} <file.md> [--config <config.toml>]");
        process::exit(1);
    };

    let config = load_config(parsed.config)?;
    let lines = io::read_lines(&parsed.file)
        .with_context(|| format!("Failed to read {}", parsed.file.display()))?;

    let doc = parse_lines(&lines, config.indentation);
    log::info!(
        "Parsed {} lines into {} sections",
        lines.len(),
        doc.count()
    );

    print!("{}", snapshot::to_treeviz(&doc));
    Ok(())
}
