//! `slipway symbols` command

use std::path::Path;

use anyhow::Result;

use crate::cli::SymbolsArgs;
use slipway::builder::symbols::SymbolManifest;

pub fn execute(_args: SymbolsArgs, manifest_path: Option<&Path>) -> Result<()> {
    let project = super::locate_project(manifest_path)?;

    let symbols_path = project.symbols_path();
    let manifest = SymbolManifest::load(&symbols_path)?;

    if manifest.is_empty() {
        eprintln!("    No symbols listed in {}", symbols_path.display());
        return Ok(());
    }

    for name in manifest.names() {
        println!("{}", name);
    }

    Ok(())
}
