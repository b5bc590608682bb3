//! Text formatting for chart labels and card values

/// Format an accuracy percentage using the shortest decimal form (`94.2%`, `90%`).
pub fn format_accuracy(value: f64) -> String {
    format!("{value}%")
}

/// Format a plain count without separators (`1196`).
pub fn format_count(value: u32) -> String {
    value.to_string()
}

/// Format an axis tick: integers without decimals, everything else with one.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Shorten `label` to at most `width` characters, ending in `…` when cut.
pub fn truncate_label(label: &str, width: usize) -> String {
    let len = label.chars().count();
    if len <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = label.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_accuracy() {
        assert_eq!(format_accuracy(94.2), "94.2%");
        assert_eq!(format_accuracy(90.0), "90%");
        assert_eq!(format_accuracy(100.0), "100%");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(84.0), "84");
        assert_eq!(format_tick(1600.0), "1600");
        assert_eq!(format_tick(82.5), "82.5");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("COPD", 10), "COPD");
        assert_eq!(truncate_label("COPD", 4), "COPD");
        assert_eq!(truncate_label("Parkinson's Disease", 8), "Parkins…");
        assert_eq!(truncate_label("Bronchitis", 1), "…");
        assert_eq!(truncate_label("Bronchitis", 0), "");
    }
}
