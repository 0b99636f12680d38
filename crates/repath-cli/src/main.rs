use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use repath_core::{patch_tree, Rule};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rewrite quoted github.com/biogo/hts import paths to github.com/grailbio/hts, in place",
    long_about = None
)]
struct Args {
    #[arg(help = "Directory tree to patch [default: current directory]")]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));

    let rule = Rule::hts_imports();
    let patched = patch_tree(&root, &rule)?;
    debug!("Rewrote {} files under {:?}", patched, root);

    Ok(())
}
