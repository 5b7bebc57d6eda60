use std::time::Duration;

use crate::emit::NamedDeclaration;
use crate::scan::OptionKind;
use crate::types::ArgType;

#[derive(Debug, Clone)]
pub struct DeclarationStat {
    pub kind: OptionKind,
    pub short_flag: Option<String>,
    pub long_flag: Option<String>,
    pub arg_type: ArgType,
    pub variable: String,
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct GenerationStats {
    pub options: usize,
    pub flags: usize,
    pub positionals: usize,
    pub output_bytes: usize,
    pub total_duration: Duration,
    pub declaration_stats: Vec<DeclarationStat>,
}

impl Default for GenerationStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationStats {
    pub fn new() -> Self {
        Self {
            options: 0,
            flags: 0,
            positionals: 0,
            output_bytes: 0,
            total_duration: Duration::from_secs(0),
            declaration_stats: Vec::new(),
        }
    }

    pub fn add_declaration(&mut self, named: &NamedDeclaration<'_>) {
        let decl = named.declaration;
        match decl.kind {
            OptionKind::ValueOption => self.options += 1,
            OptionKind::Flag => self.flags += 1,
            OptionKind::Positional => self.positionals += 1,
        }
        self.declaration_stats.push(DeclarationStat {
            kind: decl.kind,
            short_flag: decl.short_flag.clone(),
            long_flag: decl.long_flag.clone(),
            arg_type: decl.arg_type,
            variable: named.variable.clone(),
            name: decl.name.clone(),
        });
    }

    pub fn total(&self) -> usize {
        self.options + self.flags + self.positionals
    }
}
