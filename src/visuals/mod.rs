mod formatters;

use crate::commands::stats::GenerationStats;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_bytes, format_flag, format_kind};

// Stdout carries the generated source, so everything here goes to stderr.

pub fn print_summary(stats: &GenerationStats) {
    eprintln!(
        "✓ Generated {} declarations ({} options, {} flags, {} positionals) in {}ms",
        stats.total(),
        stats.options,
        stats.flags,
        stats.positionals,
        stats.total_duration.as_millis()
    );
}

pub fn print_detailed(stats: &GenerationStats) {
    eprintln!("{}", detail_table(stats));
    eprintln!("Output size: {}", format_bytes(stats.output_bytes));
}

pub fn detail_table(stats: &GenerationStats) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Kind").add_attribute(Attribute::Bold),
            Cell::new("Short").add_attribute(Attribute::Bold),
            Cell::new("Long").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Variable").add_attribute(Attribute::Bold),
        ]);

    for decl in &stats.declaration_stats {
        let kind = match &decl.name {
            Some(name) => format!("{} ({})", format_kind(decl.kind), name),
            None => format_kind(decl.kind).to_string(),
        };
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(format_flag(decl.short_flag.as_deref())),
            Cell::new(format_flag(decl.long_flag.as_deref())),
            Cell::new(decl.arg_type.name()),
            Cell::new(&decl.variable),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::generate_source;
    use crate::output::args::OutputFormat;
    use crate::settings::GeneratorSettings;

    #[test]
    fn table_has_one_row_per_declaration() {
        let (_, stats) = generate_source(
            &["-c,--count,int", "-v", "path"],
            &GeneratorSettings::default(),
            OutputFormat::C,
        )
        .unwrap();
        let table = detail_table(&stats);
        assert_eq!(table.row_iter().count(), 3);

        let rendered = table.to_string();
        assert!(rendered.contains("--count"));
        assert!(rendered.contains("positional (path)"));
        assert!(rendered.contains("flag_val"));
    }
}
