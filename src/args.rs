use crate::output::args::OutputArgs;
use crate::scan::args::DeclarationArgs;
use crate::settings::args::SettingsArgs;
use clap::Parser;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Generate an option table and entry point from argument declarations"
)]
pub struct Args {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub input: DeclarationArgs,
}
