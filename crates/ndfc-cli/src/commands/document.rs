//! `document` command: template to Ansible documentation.
//!
//! Fetches one template, normalizes its parameters and prints the rendered
//! document. Nothing is printed unless every step succeeds.

use super::common::{ControllerArgs, InputArgs, load_catalog, open_source, write_stdout};
use crate::Layout;
use crate::settings::Settings;
use anyhow::{Context, Result};
use clap::Args;
use ndfc_core::cli::{ExitCode, OutputFormat};
use ndfc_core::traits::TemplateSource;
use ndfc_core::{TemplateCatalog, TemplateName};
use ndfc_docgen::{FieldNormalizer, ModuleDocumentation, ModuleMetadata, OverrideTable, Renderer};
use tracing::info;

/// Arguments of the `document` command.
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Template name, e.g. `Easy_Fabric`
    pub template: TemplateName,

    #[command(flatten)]
    pub input: InputArgs,

    /// Document layout
    #[arg(long, value_enum, default_value_t = Layout::Options)]
    pub layout: Layout,

    /// Output format (yaml, json)
    #[arg(long, default_value = "yaml")]
    pub format: OutputFormat,

    /// Module author (module layout)
    #[arg(long)]
    pub author: Option<String>,

    /// Module name (module layout)
    #[arg(long)]
    pub module_name: Option<String>,
}

/// What to render and how.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Document layout
    pub layout: Layout,
    /// Output format
    pub format: OutputFormat,
    /// Module metadata, used by [`Layout::Module`]
    pub metadata: ModuleMetadata,
}

/// Fetches `name` from `source` and renders its documentation.
///
/// # Errors
///
/// Returns the first error of the fetch, normalization or rendering stage.
pub async fn generate(
    source: &dyn TemplateSource,
    name: &TemplateName,
    catalog: Option<&TemplateCatalog>,
    options: &DocumentOptions,
) -> ndfc_core::Result<String> {
    let template = source.fetch_template(name).await?;
    info!(
        template = template.name(),
        template_type = template.template_type().unwrap_or_default(),
        description = template.description().unwrap_or_default(),
        parameters = template.parameters().len(),
        source = %source.describe(),
        "Fetched template"
    );

    let overrides = OverrideTable::builtin();
    let mut normalizer = FieldNormalizer::new(&overrides);
    if let Some(catalog) = catalog {
        normalizer = normalizer.with_catalog(catalog);
    }
    let normalized = normalizer.normalize(&template)?;
    info!(documented = normalized.len(), "Normalized parameters");

    let renderer = Renderer::new(options.format);
    match options.layout {
        Layout::Options => renderer.render_options(&normalized),
        Layout::Module => {
            let documentation = ModuleDocumentation::build(&options.metadata, &normalized)?;
            renderer.render_module(&documentation)
        }
    }
}

/// Resolves module metadata: command-line flags over the config file.
#[must_use]
pub fn module_metadata(args: &DocumentArgs, settings: &Settings) -> ModuleMetadata {
    let mut metadata = settings.module.clone();
    if let Some(author) = &args.author {
        metadata.author = Some(author.clone());
    }
    if let Some(module_name) = &args.module_name {
        metadata.module_name.clone_from(module_name);
    }
    metadata
}

/// Runs the `document` command.
pub async fn run(
    args: DocumentArgs,
    controller: &ControllerArgs,
    settings: &Settings,
) -> Result<ExitCode> {
    let options = DocumentOptions {
        layout: args.layout,
        format: args.format,
        metadata: module_metadata(&args, settings),
    };
    if options.layout == Layout::Module {
        options.metadata.validate()?;
    }

    let source = open_source(controller, &args.input).await?;
    let catalog = load_catalog(source.as_ref(), &args.input).await?;

    let document = generate(source.as_ref(), &args.template, catalog.as_ref(), &options)
        .await
        .with_context(|| format!("failed to document template {}", args.template))?;

    write_stdout(&document)?;
    Ok(ExitCode::SUCCESS)
}
