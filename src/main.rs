use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use env_logger::Env;

use gfwlist_domains::{Source, OUTPUT_FILE};

/// Generate domain.conf from gfwlist.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Local AutoProxy list to read instead of downloading gfwlist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let source = Source::from_arg(args.file);
    let result = match gfwlist_domains::run(&source, Path::new(OUTPUT_FILE)) {
        Ok(result) => result,
        Err(error) => {
            log::error!("{}", error);
            process::exit(1);
        }
    };

    log::info!(
        "{} domains written to {} (already removed {} duplicated).",
        result.domains.len(),
        OUTPUT_FILE,
        result.dup_count
    );
    if !result.unhandled.is_empty() {
        log::info!("{} lines can't transform.", result.unhandled.len());
    }
}
