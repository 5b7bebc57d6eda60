use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct DeclarationArgs {
    #[arg(
        value_name = "DECLARATION",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Argument declarations, e.g. '-c,--count,int' '-v,--verbose' filename (use '--' before a leading flag entry)"
    )]
    pub declarations: Vec<String>,
}
