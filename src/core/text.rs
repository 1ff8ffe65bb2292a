//! String cleanup and human-readable formatting.

/// Zero-width and format characters that `char::is_whitespace` does not cover.
const INVISIBLE: [char; 6] = [
    '\u{180B}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}',
];

/// Removes all whitespace from `input`, including zero-width characters.
pub fn strip_blanks(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !INVISIBLE.contains(c))
        .collect()
}

/// Renders a duration in seconds as hours, minutes and seconds.
///
/// Hours and minutes are whole floats and keep their `.0` (e.g. `1.0 hours`).
/// Negative or NaN input renders as zero.
pub fn display_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);

    let minutes = (seconds / 60.0).floor();
    let secs = seconds - minutes * 60.0;
    let hours = (minutes / 60.0).floor();
    let minutes = minutes - hours * 60.0;

    format!("{hours:?} hours, {minutes:?} minutes, and {secs:.2} seconds")
}

/// Formats an integer with `,` between groups of three digits.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_blanks() {
        assert_eq!(strip_blanks(" a b\tc\nd  "), "abcd");
        assert_eq!(strip_blanks("zero\u{200B}width\u{FEFF}"), "zerowidth");
        assert_eq!(strip_blanks("no\u{00A0}break\u{3000}ideo"), "nobreakideo");
        assert_eq!(strip_blanks(""), "");
    }

    #[test]
    fn test_display_time() {
        assert_eq!(display_time(0.0), "0.0 hours, 0.0 minutes, and 0.00 seconds");
        assert_eq!(display_time(61.5), "0.0 hours, 1.0 minutes, and 1.50 seconds");
        assert_eq!(display_time(3723.0), "1.0 hours, 2.0 minutes, and 3.00 seconds");
    }

    #[test]
    fn test_display_time_invalid_input() {
        assert_eq!(display_time(-5.0), "0.0 hours, 0.0 minutes, and 0.00 seconds");
        assert_eq!(display_time(f64::NAN), "0.0 hours, 0.0 minutes, and 0.00 seconds");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(100_000), "100,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
