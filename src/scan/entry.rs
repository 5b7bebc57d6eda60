use super::errors::{FieldKind, ScanError};

/// The fields of a single comma-delimited entry, before classification.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EntryFields<'a> {
    pub short_flag: Option<&'a str>,
    pub long_flag: Option<&'a str>,
    pub word: Option<&'a str>,
}

impl EntryFields<'_> {
    pub fn has_flags(&self) -> bool {
        self.short_flag.is_some() || self.long_flag.is_some()
    }
}

/// Splits one entry such as `-c,--count,int` into its fields.
///
/// Fields may come in any order. Surrounding whitespace is trimmed and empty
/// fields are skipped, so `"-c, --count, int"` is accepted as well.
pub fn split_entry(entry: &str) -> Result<EntryFields<'_>, ScanError> {
    let mut fields = EntryFields::default();

    for field in entry.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        let (slot, kind) = if field.starts_with("--") {
            (&mut fields.long_flag, FieldKind::LongFlag)
        } else if field.starts_with('-') {
            (&mut fields.short_flag, FieldKind::ShortFlag)
        } else {
            (&mut fields.word, FieldKind::DataType)
        };

        if slot.is_some() {
            return Err(ScanError::AmbiguousEntry {
                kind,
                entry: entry.to_string(),
            });
        }
        *slot = Some(field);
    }

    if !fields.has_flags() && fields.word.is_none() {
        return Err(ScanError::EmptyEntry(entry.to_string()));
    }

    Ok(fields)
}
