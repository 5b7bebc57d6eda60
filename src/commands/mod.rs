pub mod generate;
pub mod stats;

use std::time::Instant;

use log::info;

use crate::args::Args;
use crate::error::GenError;
use crate::settings::GeneratorSettings;
use crate::writer::write_output;
pub use stats::GenerationStats;

/// Runs the whole pipeline for one invocation and writes the artifact.
pub fn run(args: &Args) -> Result<GenerationStats, GenError> {
    let start_time = Instant::now();

    let settings = GeneratorSettings::resolve(&args.settings)?;
    let (source, mut stats) =
        generate::generate_source(&args.input.declarations, &settings, args.output.format)?;

    write_output(&args.output, &source)?;

    stats.total_duration = start_time.elapsed();
    info!(
        "generated {} declarations in {}ms",
        stats.total(),
        stats.total_duration.as_millis()
    );
    Ok(stats)
}
