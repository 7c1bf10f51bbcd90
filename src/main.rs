//! conf-resolve: inspect merged startup configuration
//!
//! Resolves the same configuration an application would see at startup and
//! prints keys, the merged table, or the files that contributed to it.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
