use log::LevelFilter;

use crate::output::args::OutputArgs;

/// Sets up stderr logging. `RUST_LOG` takes precedence over the flags.
pub fn init(args: &OutputArgs) {
    let level = if args.quiet {
        LevelFilter::Error
    } else if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // A second init (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
