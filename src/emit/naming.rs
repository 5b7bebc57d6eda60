use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::scan::{Declaration, Declarations};

/// Hands out variable names, one sequence per variable stem.
///
/// Owned by a single emission pass; build a new one for every run.
#[derive(Debug, Default)]
pub struct NameAllocator {
    seen: HashMap<&'static str, usize>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<stem>_val` for the first use of a stem, `<stem>_valN` for the Nth.
    pub fn allocate(&mut self, stem: &'static str) -> String {
        let count = self.seen.entry(stem).or_default();
        *count += 1;
        if *count == 1 {
            format!("{stem}_val")
        } else {
            format!("{stem}_val{count}")
        }
    }
}

/// A declaration paired with the variable that will hold its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDeclaration<'a> {
    pub declaration: &'a Declaration,
    pub variable: String,
}

/// Names every declaration in emission order.
pub fn name_declarations(declarations: &Declarations) -> Vec<NamedDeclaration<'_>> {
    let mut names = NameAllocator::new();
    declarations
        .in_emission_order()
        .map(|declaration| NamedDeclaration {
            declaration,
            variable: names.allocate(declaration.arg_type.stem()),
        })
        .collect()
}

impl Serialize for NamedDeclaration<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let decl = self.declaration;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &decl.kind)?;
        map.serialize_entry("short_flag", &decl.short_flag)?;
        map.serialize_entry("long_flag", &decl.long_flag)?;
        map.serialize_entry("type", &decl.arg_type)?;
        map.serialize_entry("tag", decl.arg_type.tag())?;
        map.serialize_entry("variable", &self.variable)?;
        if let Some(name) = &decl.name {
            map.serialize_entry("name", name)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;

    #[test]
    fn suffix_counts_from_two() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("int"), "int_val");
        assert_eq!(names.allocate("int"), "int_val2");
        assert_eq!(names.allocate("flag"), "flag_val");
        assert_eq!(names.allocate("int"), "int_val3");
    }

    #[test]
    fn hex_and_long_share_a_sequence() {
        let d = scan(&["-l,long", "-x,hex", "-y,--why,long"]).unwrap();
        let vars: Vec<_> = name_declarations(&d)
            .into_iter()
            .map(|n| n.variable)
            .collect();
        assert_eq!(vars, ["long_val", "long_val2", "long_val3"]);
    }

    #[test]
    fn flags_do_not_share_with_int() {
        let d = scan(&["-q", "-n,int", "count"]).unwrap();
        let vars: Vec<_> = name_declarations(&d)
            .into_iter()
            .map(|n| n.variable)
            .collect();
        assert_eq!(vars, ["int_val", "flag_val", "char_val"]);
    }

    #[test]
    fn fresh_allocator_per_pass() {
        let d = scan(&["-a,int", "-b,int"]).unwrap();
        let first: Vec<_> = name_declarations(&d).into_iter().map(|n| n.variable).collect();
        let second: Vec<_> = name_declarations(&d).into_iter().map(|n| n.variable).collect();
        assert_eq!(first, second);
    }
}
