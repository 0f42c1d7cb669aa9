//! `raw` command: print a template as the controller returns it.

use super::common::{ControllerArgs, InputArgs, open_source, write_stdout};
use anyhow::{Context, Result};
use clap::Args;
use ndfc_client::raw::strip_content;
use ndfc_core::TemplateName;
use ndfc_core::cli::{ExitCode, OutputFormat};
use ndfc_core::traits::TemplateSource;
use ndfc_docgen::Renderer;
use tracing::info;

/// Arguments of the `raw` command.
#[derive(Args, Debug, Clone)]
pub struct RawArgs {
    /// Template name
    pub template: TemplateName,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (yaml, json)
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Keep the template body (`content`, `newContent`)
    #[arg(long)]
    pub with_content: bool,
}

/// Fetches `name` and renders it without the template body.
pub async fn render_raw(
    source: &dyn TemplateSource,
    name: &TemplateName,
    format: OutputFormat,
    with_content: bool,
) -> ndfc_core::Result<String> {
    let mut template = source.fetch_raw_template(name).await?;
    if !with_content {
        strip_content(&mut template);
    }
    info!(template = %name, "Fetched raw template");
    Renderer::new(format).serialize(&template)
}

/// Runs the `raw` command.
pub async fn run(args: RawArgs, controller: &ControllerArgs) -> Result<ExitCode> {
    let source = open_source(controller, &args.input).await?;
    let output = render_raw(source.as_ref(), &args.template, args.format, args.with_content)
        .await
        .with_context(|| format!("failed to fetch template {}", args.template))?;
    write_stdout(&output)?;
    Ok(ExitCode::SUCCESS)
}
