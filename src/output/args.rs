use clap::{Args, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    C,
    Json,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the generated source to FILE instead of stdout"
    )]
    pub output: Option<String>,

    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::C,
        help = "Artifact format: C source or a JSON dump of the declarations"
    )]
    pub format: OutputFormat,

    #[arg(long, help = "Print a summary table of the declarations to stderr")]
    pub summary: bool,

    #[arg(short = 'q', long, help = "Only log errors")]
    pub quiet: bool,

    #[arg(long, conflicts_with = "quiet", help = "Log debug output")]
    pub verbose: bool,
}
