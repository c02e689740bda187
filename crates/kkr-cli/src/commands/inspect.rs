use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use kkredit::core::models::document::Document;
use kkredit::core::models::position::AtomicPosition;
use kkredit::core::models::type_def::TypeDefinition;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct DocumentView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    type_count: Option<usize>,
    header: &'a [String],
    position_header: &'a [String],
    footer: &'a [String],
    #[serde(rename = "type")]
    types: Vec<&'a TypeDefinition>,
    #[serde(rename = "position")]
    positions: &'a [AtomicPosition],
}

pub fn run(args: InspectArgs) -> Result<()> {
    let document = kkredit::load(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    info!("Rendering {:?} as TOML", &args.input);
    print!("{}", render_toml(&document, args.used_only)?);
    Ok(())
}

pub fn render_toml(document: &Document, used_only: bool) -> Result<String> {
    let types = if used_only {
        document.referenced_type_definitions()
    } else {
        document.type_definitions().iter().collect()
    };
    let view = DocumentView {
        type_count: document.type_count(),
        header: document.header(),
        position_header: document.position_header(),
        footer: document.footer(),
        types,
        positions: document.positions(),
    };
    toml::to_string_pretty(&view)
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to render document as TOML: {}", e)))
}
