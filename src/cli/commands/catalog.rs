//! `grt catalog` command - show the FMEA lookup catalog
//!
//! `grt catalog -f yaml > catalog.yaml` produces a file that `--catalog`
//! accepts, which is the easiest way to start a custom catalog.

use console::style;
use miette::Result;

use crate::cli::commands::utils::load_catalog;
use crate::cli::helpers::resolve_format;
use crate::cli::{output, render, GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Only check that the catalog loads; print nothing on success
    #[arg(long)]
    pub validate: bool,
}

pub fn run(args: CatalogArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = load_catalog(global, &config)?;

    if args.validate {
        output::success(
            global,
            format!("Catalog is valid: {} scenario(s)", style(catalog.len()).cyan()),
        );
        return Ok(());
    }

    let format = resolve_format(
        global.format,
        config.default_format.as_deref(),
        OutputFormat::Tsv,
    );
    print!("{}", render::catalog(&catalog, format)?);

    if matches!(format, OutputFormat::Tsv) {
        println!();
        output::hint(
            global,
            format!(
                "{} scenario(s). Save with {} to customize.",
                catalog.len(),
                style("grt catalog -f yaml > catalog.yaml").yellow()
            ),
        );
    }

    Ok(())
}
