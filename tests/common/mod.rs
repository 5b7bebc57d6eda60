#![allow(dead_code)]

use std::fs;

use argsgen::args::Args;
use argsgen::commands::generate::generate_source;
use argsgen::output::args::{OutputArgs, OutputFormat};
use argsgen::scan::args::DeclarationArgs;
use argsgen::settings::GeneratorSettings;
use argsgen::settings::args::SettingsArgs;

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

pub fn write_settings_file(file_stem: &str, ext: &str, contents: &str) -> String {
    ensure_out_dir();
    let path = format!("out/{}.{}", file_stem, ext);
    fs::write(&path, contents).expect("write settings file");
    path
}

pub fn build_args(declarations: &[&str], output: Option<&str>, format: OutputFormat) -> Args {
    Args {
        settings: SettingsArgs::default(),
        output: OutputArgs {
            output: output.map(|s| s.to_string()),
            format,
            summary: false,
            quiet: true,
            verbose: false,
        },
        input: DeclarationArgs {
            declarations: declarations.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// Generated C source with default settings.
pub fn c_source(declarations: &[&str]) -> String {
    generate_source(declarations, &GeneratorSettings::default(), OutputFormat::C)
        .expect("generation succeeds")
        .0
}

/// Lines of the registration table between `{` and `};`.
pub fn table_rows(source: &str) -> Vec<String> {
    source
        .lines()
        .skip_while(|l| !l.starts_with("args_option_t "))
        .skip(2)
        .take_while(|l| *l != "};")
        .map(|l| l.trim().trim_end_matches(',').to_string())
        .collect()
}

/// Variable declaration lines between the includes and the table.
pub fn declaration_lines(source: &str) -> Vec<String> {
    source
        .lines()
        .skip_while(|l| l.starts_with("#include") || l.is_empty())
        .take_while(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

pub fn read_out_file(path: &str) -> String {
    fs::read_to_string(path).expect("output file exists")
}
