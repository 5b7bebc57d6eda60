use indexmap::IndexMap;

use super::Declaration;
use super::errors::ScanError;

/// Checks flag uniqueness and the short-flag requirement across every
/// option and flag. The first offending declaration (options first, then
/// flags, each in input order) determines the error.
pub fn verify_flags(options: &[Declaration], flags: &[Declaration]) -> Result<(), ScanError> {
    let declared: Vec<&Declaration> = options.iter().chain(flags).collect();

    let long_counts = count_flags(declared.iter().filter_map(|d| d.long_flag.as_deref()));
    let short_counts = count_flags(declared.iter().filter_map(|d| d.short_flag.as_deref()));

    for decl in &declared {
        if let Some(long) = decl.long_flag.as_deref() {
            if long_counts.get(long).copied().unwrap_or_default() > 1 {
                return Err(ScanError::FlagCollision(long.to_string()));
            }
        }

        if let Some(short) = decl.short_flag.as_deref() {
            if short_counts.get(short).copied().unwrap_or_default() > 1 {
                return Err(ScanError::FlagCollision(short.to_string()));
            }
        }

        if decl.short_flag.is_none() {
            return Err(ScanError::MissingShortFlag(
                decl.long_flag.clone().unwrap_or_default(),
            ));
        }
    }

    Ok(())
}

fn count_flags<'a>(flags: impl Iterator<Item = &'a str>) -> IndexMap<&'a str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for flag in flags {
        *counts.entry(flag).or_default() += 1;
    }
    counts
}
