//! CLI entry point for turning route files into mazes

use clap::Parser;
use routemaze::io::cli::{Cli, FileProcessor};

fn main() -> routemaze::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
