//! Detect command implementation

use anyhow::Result;
use clap::Args;
use conf_resolve::detect_path;
use std::path::PathBuf;

#[derive(Args)]
pub struct DetectArgs {
    /// File names or paths to classify
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<PathBuf>,
}

pub fn run(args: DetectArgs) -> Result<()> {
    for name in &args.names {
        let format = detect_path(name).map(|f| f.as_str()).unwrap_or("unsupported");
        println!("{}\t{}", name.display(), format);
    }
    Ok(())
}
