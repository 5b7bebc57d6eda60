pub mod naming;
mod template;

use log::debug;
use serde_json::json;

use crate::scan::{Declaration, OptionKind};
use crate::settings::GeneratorSettings;
pub use naming::{NameAllocator, NamedDeclaration, name_declarations};

/// Renders the complete C source: includes, variables, option table and the
/// entry point.
pub fn render_c(named: &[NamedDeclaration<'_>], settings: &GeneratorSettings) -> String {
    let mut out = String::new();

    for header in template::STD_INCLUDES {
        out.push_str(&format!("#include <{header}>\n"));
    }
    out.push_str(&format!("#include \"{}\"\n\n", settings.header));

    for n in named {
        out.push_str(&declaration_line(n));
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&registration_table(named, settings));
    out.push_str(&template::entry_point(&settings.table_name));

    debug!("rendered {} declarations", named.len());
    out
}

/// `int int_val = 0;`, `char *char_val = NULL;`, ...
pub fn declaration_line(named: &NamedDeclaration<'_>) -> String {
    let t = named.declaration.arg_type;
    let storage = t.storage_type();
    let sep = if storage.ends_with('*') { "" } else { " " };
    format!("{storage}{sep}{} = {};", named.variable, t.default_value())
}

/// The option table with one row per declaration and the terminator row.
pub fn registration_table(
    named: &[NamedDeclaration<'_>],
    settings: &GeneratorSettings,
) -> String {
    let indent = " ".repeat(settings.indent);
    let rows: Vec<String> = named
        .iter()
        .map(table_row)
        .chain(std::iter::once(template::END_OF_OPTIONS.to_string()))
        .map(|row| format!("{indent}{row}"))
        .collect();

    format!(
        "args_option_t {}[] =\n{{\n{}\n}};\n",
        settings.table_name,
        rows.join(",\n")
    )
}

/// A single table row, without indentation or trailing comma.
pub fn table_row(named: &NamedDeclaration<'_>) -> String {
    let decl: &Declaration = named.declaration;
    let var = &named.variable;
    match decl.kind {
        OptionKind::Positional => {
            format!("ARGS_POSITIONAL_ARG({}, &{var})", decl.arg_type.tag())
        }
        OptionKind::ValueOption => format!(
            "ARGS_OPTION({}, {}, {}, &{var})",
            c_string(decl.short_flag.as_deref()),
            c_string(decl.long_flag.as_deref()),
            decl.arg_type.tag()
        ),
        OptionKind::Flag => format!(
            "ARGS_FLAG({}, {}, &{var})",
            c_string(decl.short_flag.as_deref()),
            c_string(decl.long_flag.as_deref())
        ),
    }
}

fn c_string(flag: Option<&str>) -> String {
    match flag {
        Some(f) => format!("\"{}\"", f.replace('\\', "\\\\").replace('"', "\\\"")),
        None => "NULL".to_string(),
    }
}

/// Machine-readable dump of the named declarations.
pub fn render_json(
    named: &[NamedDeclaration<'_>],
    settings: &GeneratorSettings,
) -> Result<String, serde_json::Error> {
    let doc = json!({
        "header": settings.header,
        "table": settings.table_name,
        "declarations": named,
    });
    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    Ok(text)
}
