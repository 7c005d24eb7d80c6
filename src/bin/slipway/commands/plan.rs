//! `slipway plan` command

use std::path::Path;

use anyhow::Result;

use crate::cli::PlanArgs;
use slipway::ops::collect::{collect_extensions, CollectOptions};
use slipway::util::fs::write_string;

pub fn execute(args: PlanArgs, manifest_path: Option<&Path>) -> Result<()> {
    let project = super::locate_project(manifest_path)?;

    let opts = collect_options(&args)?;
    let plan = collect_extensions(&project, &opts)?;

    let json = if args.pretty {
        plan.to_json_pretty()?
    } else {
        plan.to_json()?
    };

    match &args.output {
        Some(path) => {
            write_string(path, &json)?;
            eprintln!(
                "    Wrote plan ({} targets) to {}",
                plan.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    eprintln!("    Plan digest: {}", plan.digest()?);

    Ok(())
}

fn collect_options(args: &PlanArgs) -> Result<CollectOptions> {
    let host = args.host.as_deref().map(str::parse).transpose()?;

    let macos_version = args.macos_version.as_deref().map(str::parse).transpose()?;

    let inherited_cflags = args
        .cflags
        .as_deref()
        .map(|flags| flags.split_whitespace().map(String::from).collect())
        .unwrap_or_default();

    Ok(CollectOptions {
        host,
        release: args.release,
        inherited_cflags,
        macos_version,
    })
}
