pub mod args;
pub mod entry;
pub mod errors;
mod validate;

use log::debug;
use serde::Serialize;

use crate::types::ArgType;
use entry::split_entry;
use errors::ScanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Positional,
    ValueOption,
    Flag,
}

/// One argument declaration recovered from an input entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: OptionKind,
    pub short_flag: Option<String>,
    pub long_flag: Option<String>,
    pub arg_type: ArgType,
    /// Source word of a positional; `None` for options and flags.
    pub name: Option<String>,
}

/// Scanner output, grouped by kind. Each group keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub positionals: Vec<Declaration>,
    pub options: Vec<Declaration>,
    pub flags: Vec<Declaration>,
}

impl Declarations {
    pub fn len(&self) -> usize {
        self.positionals.len() + self.options.len() + self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value options, then flags, then positionals.
    pub fn in_emission_order(&self) -> impl Iterator<Item = &Declaration> {
        self.options
            .iter()
            .chain(&self.flags)
            .chain(&self.positionals)
    }
}

/// Scans every entry of a declaration list (program name excluded).
///
/// Stops at the first problem found; entries are checked in order before the
/// cross-entry flag checks run.
pub fn scan<S: AsRef<str>>(entries: &[S]) -> Result<Declarations, ScanError> {
    let mut out = Declarations::default();

    for entry in entries {
        let decl = classify(entry.as_ref())?;
        debug!(
            "entry '{}' -> {:?} ({})",
            entry.as_ref(),
            decl.kind,
            decl.arg_type
        );
        match decl.kind {
            OptionKind::Positional => out.positionals.push(decl),
            OptionKind::ValueOption => out.options.push(decl),
            OptionKind::Flag => out.flags.push(decl),
        }
    }

    validate::verify_flags(&out.options, &out.flags)?;

    debug!(
        "scanned {} options, {} flags, {} positionals",
        out.options.len(),
        out.flags.len(),
        out.positionals.len()
    );
    Ok(out)
}

/// Turns a single entry into a declaration.
pub fn classify(entry: &str) -> Result<Declaration, ScanError> {
    let fields = split_entry(entry)?;
    let short_flag = fields.short_flag.map(str::to_string);
    let long_flag = fields.long_flag.map(str::to_string);

    let decl = match (fields.has_flags(), fields.word) {
        (false, Some(word)) => Declaration {
            kind: OptionKind::Positional,
            short_flag: None,
            long_flag: None,
            // A known type name types the positional; anything else names a
            // string positional.
            arg_type: ArgType::from_name(word).unwrap_or(ArgType::Str),
            name: Some(word.to_string()),
        },
        (true, None) => Declaration {
            kind: OptionKind::Flag,
            short_flag,
            long_flag,
            arg_type: ArgType::Flag,
            name: None,
        },
        (true, Some(word)) => Declaration {
            kind: OptionKind::ValueOption,
            short_flag,
            long_flag,
            arg_type: ArgType::from_name(word)
                .ok_or_else(|| ScanError::UnknownArgType(word.to_string()))?,
            name: None,
        },
        (false, None) => return Err(ScanError::EmptyEntry(entry.to_string())),
    };

    Ok(decl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_the_three_kinds() {
        let d = scan(&["-c,--count,int", "-v,--verbose", "filename"]).unwrap();

        assert_eq!(d.options.len(), 1);
        assert_eq!(d.options[0].short_flag.as_deref(), Some("-c"));
        assert_eq!(d.options[0].long_flag.as_deref(), Some("--count"));
        assert_eq!(d.options[0].arg_type, ArgType::Int);

        assert_eq!(d.flags.len(), 1);
        assert_eq!(d.flags[0].kind, OptionKind::Flag);
        assert_eq!(d.flags[0].arg_type, ArgType::Flag);

        assert_eq!(d.positionals.len(), 1);
        assert_eq!(d.positionals[0].name.as_deref(), Some("filename"));
        assert_eq!(d.positionals[0].arg_type, ArgType::Str);
    }

    #[test]
    fn positional_type_placeholder() {
        let d = scan(&["hex", "double"]).unwrap();
        let types: Vec<_> = d.positionals.iter().map(|p| p.arg_type).collect();
        assert_eq!(types, [ArgType::Hex, ArgType::Double]);
    }

    #[test]
    fn unknown_option_type() {
        assert_eq!(
            scan(&["-b,--bool,bool"]),
            Err(ScanError::UnknownArgType("bool".to_string()))
        );
    }

    #[test]
    fn emission_order_puts_positionals_last() {
        let d = scan(&["input", "-q", "-n,int"]).unwrap();
        let kinds: Vec<_> = d.in_emission_order().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            [
                OptionKind::ValueOption,
                OptionKind::Flag,
                OptionKind::Positional
            ]
        );
    }

    #[test]
    fn entry_errors_win_over_collisions() {
        // The collision between the first two entries is only detected after
        // every entry is classified, so the bad type is reported.
        assert_eq!(
            scan(&["-a", "-a", "-t,bogus"]),
            Err(ScanError::UnknownArgType("bogus".to_string()))
        );
    }

    #[test]
    fn no_entries_is_valid() {
        let d = scan::<&str>(&[]).unwrap();
        assert!(d.is_empty());
    }
}
