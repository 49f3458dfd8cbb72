use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use chatmark::{Config, Document, annotate_bytes, to_json};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = chatmark::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

fn annotate_or_exit(input: &[u8], cfg: Config) -> Document {
    match annotate_bytes(input, Some(cfg)) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate { file, pretty } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let pretty = pretty || cfg.output.pretty;

            let input = read_all(file.as_ref())?;
            let doc = annotate_or_exit(&input, cfg);

            let json = to_json(&doc, pretty).map_err(io::Error::other)?;
            println!("{json}");
            Ok(())
        }
        Commands::Parse { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;

            let input = read_all(file.as_ref())?;
            let doc = annotate_or_exit(&input, cfg);

            print!("{doc}");
            Ok(())
        }
    }
}
