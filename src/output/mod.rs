pub mod args;
pub mod errors;

use crate::emit::{self, NamedDeclaration};
use crate::settings::GeneratorSettings;
use args::OutputFormat;
use errors::OutputError;

/// Renders the named declarations in the requested artifact format.
pub fn render(
    named: &[NamedDeclaration<'_>],
    settings: &GeneratorSettings,
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::C => Ok(emit::render_c(named, settings)),
        OutputFormat::Json => emit::render_json(named, settings)
            .map_err(|e| OutputError::SerializeError(e.to_string())),
    }
}
