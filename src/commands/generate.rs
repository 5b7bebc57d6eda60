use log::debug;

use super::stats::GenerationStats;
use crate::emit::name_declarations;
use crate::error::GenError;
use crate::output::{self, args::OutputFormat};
use crate::scan::scan;
use crate::settings::GeneratorSettings;

/// Scan, name and render in one pass. Nothing is written; the caller decides
/// where the artifact goes.
pub fn generate_source<S: AsRef<str>>(
    declarations: &[S],
    settings: &GeneratorSettings,
    format: OutputFormat,
) -> Result<(String, GenerationStats), GenError> {
    let declarations = scan(declarations)?;
    let named = name_declarations(&declarations);
    debug!(
        "variables: {}",
        named
            .iter()
            .map(|n| n.variable.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let source = output::render(&named, settings, format)?;

    let mut stats = GenerationStats::new();
    for n in &named {
        stats.add_declaration(n);
    }
    stats.output_bytes = source.len();

    Ok((source, stats))
}
