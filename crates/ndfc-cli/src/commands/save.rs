//! `save` command: store a template for offline use.
//!
//! The written file is read back with `--from-file`. Saving the catalog
//! alongside (`--with-catalog`) lays out a directory usable as a complete
//! offline source.

use super::common::{ControllerArgs, InputArgs, open_source};
use anyhow::{Context, Result};
use clap::Args;
use ndfc_client::file::{CATALOG_FILE_NAME, write_template_json};
use ndfc_core::TemplateName;
use ndfc_core::cli::ExitCode;
use ndfc_core::traits::TemplateSource;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments of the `save` command.
#[derive(Args, Debug, Clone)]
pub struct SaveArgs {
    /// Template name
    pub template: TemplateName,

    /// Output file, or directory to write `<TEMPLATE>.json` into
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Resolves the file the template is written to.
///
/// An existing directory, or a path ending in a separator, receives
/// `<name>.json`.
pub async fn output_path(output: &Path, name: &TemplateName) -> PathBuf {
    let is_dir = tokio::fs::metadata(output).await.is_ok_and(|m| m.is_dir())
        || output.as_os_str().to_string_lossy().ends_with(std::path::MAIN_SEPARATOR);
    if is_dir {
        output.join(format!("{}.json", name.as_str()))
    } else {
        output.to_path_buf()
    }
}

/// Writes template `name` (and the catalog, when `with_catalog`) from `source`.
///
/// Returns the path of the template file.
pub async fn save(
    source: &dyn TemplateSource,
    name: &TemplateName,
    output: &Path,
    with_catalog: bool,
) -> Result<PathBuf> {
    let template = source
        .fetch_raw_template(name)
        .await
        .with_context(|| format!("failed to fetch template {name}"))?;
    let path = output_path(output, name).await;
    write_template_json(&path, &template).await?;
    info!(template = %name, path = %path.display(), "Saved template");

    if with_catalog {
        let catalog = source
            .fetch_raw_catalog()
            .await
            .context("failed to fetch template catalog")?;
        let catalog_path = path
            .parent()
            .map_or_else(|| PathBuf::from(CATALOG_FILE_NAME), |p| p.join(CATALOG_FILE_NAME));
        write_template_json(&catalog_path, &catalog).await?;
        info!(path = %catalog_path.display(), "Saved template catalog");
    }

    Ok(path)
}

/// Runs the `save` command.
pub async fn run(args: SaveArgs, controller: &ControllerArgs) -> Result<ExitCode> {
    let source = open_source(controller, &args.input).await?;
    let path = save(
        source.as_ref(),
        &args.template,
        &args.output,
        args.input.with_catalog,
    )
    .await?;
    eprintln!("Saved {} to {}", args.template, path.display());
    Ok(ExitCode::SUCCESS)
}
