//! Display utilities for CLI output formatting.
//!
//! Timing results are rendered as a table sized to the terminal, durations are
//! scaled to a readable unit, and lists are joined for plain-text output.

use tabled::{Table, Tabled};

use super::types::TimingStats;

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Scales a duration in seconds to ns, µs, ms or s.
///
/// # Examples
///
/// ```
/// use cutils::core::display::format_seconds;
///
/// assert_eq!(format_seconds(0.0000005), "500.000 ns");
/// assert_eq!(format_seconds(0.25), "250.000 ms");
/// assert_eq!(format_seconds(3.0), "3.000 s");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    let abs = seconds.abs();

    if abs < 1e-6 {
        format!("{:.3} ns", seconds * 1e9)
    } else if abs < 1e-3 {
        format!("{:.3} µs", seconds * 1e6)
    } else if abs < 1.0 {
        format!("{:.3} ms", seconds * 1e3)
    } else {
        format!("{:.3} s", seconds)
    }
}

/// Renders timing statistics as a bordered two-column table.
pub fn stats_table(label: &str, stats: &TimingStats) -> String {
    let rows = vec![
        StatRow {
            metric: "Function",
            value: label.to_string(),
        },
        StatRow {
            metric: "Iterations",
            value: super::text::format_thousands(stats.iterations()),
        },
        StatRow {
            metric: "Average",
            value: format_seconds(stats.avg),
        },
        StatRow {
            metric: "Min",
            value: format_seconds(stats.min),
        },
        StatRow {
            metric: "Max",
            value: format_seconds(stats.max),
        },
        StatRow {
            metric: "Std dev",
            value: format_seconds(stats.sd),
        },
        StatRow {
            metric: "Total",
            value: format_seconds(stats.total),
        },
    ];

    // Get terminal width, fallback to 80 if unavailable
    let terminal_width = if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size()
    {
        w as usize
    } else {
        80
    };

    let mut table = Table::new(rows);
    table
        .with(tabled::settings::Style::modern())
        .with(tabled::settings::Width::wrap(terminal_width.saturating_sub(4)))
        .with(tabled::settings::Padding::new(1, 1, 0, 0));

    table.to_string()
}

/// Joins displayable items with single spaces.
pub fn join_items<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds_units() {
        assert_eq!(format_seconds(0.0), "0.000 ns");
        assert_eq!(format_seconds(0.000_002_5), "2.500 µs");
        assert_eq!(format_seconds(0.0125), "12.500 ms");
        assert_eq!(format_seconds(90.0), "90.000 s");
    }

    #[test]
    fn test_stats_table_contains_metrics() {
        let stats = TimingStats::from_samples(vec![0.001, 0.003]).unwrap();
        let table = stats_table("get_factors(12)", &stats);

        for needle in ["Metric", "get_factors(12)", "Iterations", "2.000 ms", "Std dev"] {
            assert!(table.contains(needle), "missing {needle} in\n{table}");
        }
    }

    #[test]
    fn test_join_items() {
        assert_eq!(join_items(&[1, 2, 3]), "1 2 3");
        assert_eq!(join_items::<u8>(&[]), "");
    }
}
