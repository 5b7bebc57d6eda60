use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Generator settings file (toml/yaml/json)"
    )]
    pub settings: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        help = "Header to include for the option-parsing library [default: parse_args.h]"
    )]
    pub header: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        help = "Identifier of the generated option table [default: options]"
    )]
    pub table: Option<String>,
}
