//! `slipway targets` command

use std::path::Path;

use anyhow::Result;

use crate::cli::TargetsArgs;
use slipway::core::extension::TargetOrigin;
use slipway::ops::collect::{collect_extensions, CollectOptions};

pub fn execute(args: TargetsArgs, manifest_path: Option<&Path>) -> Result<()> {
    let project = super::locate_project(manifest_path)?;

    let opts = CollectOptions {
        host: args.host.as_deref().map(str::parse).transpose()?,
        ..Default::default()
    };
    let plan = collect_extensions(&project, &opts)?;

    // With no filter both kinds are shown; with both filters, also both
    let show_declared = args.declared || !args.discovered;
    let show_discovered = args.discovered || !args.declared;

    for target in plan.targets() {
        let shown = match target.origin {
            TargetOrigin::Declared => show_declared,
            TargetOrigin::Discovered => show_discovered,
        };
        if shown {
            println!("{}  [{}]", target.name, target.origin.as_str());
        }
    }

    Ok(())
}
