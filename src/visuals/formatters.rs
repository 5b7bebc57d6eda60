use crate::scan::OptionKind;

pub fn format_kind(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::ValueOption => "option",
        OptionKind::Flag => "flag",
        OptionKind::Positional => "positional",
    }
}

pub fn format_flag(flag: Option<&str>) -> String {
    flag.unwrap_or("-").to_string()
}

pub fn format_bytes(bytes: usize) -> String {
    let s = bytes.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect::<String>() + " bytes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_get_thousands_separators() {
        assert_eq!(format_bytes(7), "7 bytes");
        assert_eq!(format_bytes(1234567), "1,234,567 bytes");
    }

    #[test]
    fn missing_flag_is_a_dash() {
        assert_eq!(format_flag(None), "-");
        assert_eq!(format_flag(Some("--all")), "--all");
    }
}
