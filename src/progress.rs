//! Summary output for warming runs
//!
//! Warming runs are short, so there is no live progress display - just
//! a styled header before the run and a summary after it. The bare
//! total additionally goes to stderr (see `main.rs`) so scripts can
//! consume it regardless of these niceties.

use console::style;
use std::time::Duration;

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a header at the start of the run
pub fn print_header(roots: &[std::path::PathBuf], workers: usize, strategy: &str) {
    println!();
    println!(
        "{} {}",
        style("warmdents").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    for root in roots {
        println!("  {} {}", style("Root:").bold(), root.display());
    }
    println!("  {} {}", style("Workers:").bold(), workers);
    println!("  {} {}", style("Lock:").bold(), strategy);
    println!();
}

/// Print a summary of the run results
pub fn print_summary(total: u64, seeded: u64, duration: Duration) {
    let secs = duration.as_secs_f64();
    let rate = if secs > 0.0 { total as f64 / secs } else { 0.0 };

    println!();
    println!("{}", style("Warm Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Entries:").bold(), format_number(total));
    println!("  {} {}", style("Seeded:").bold(), format_number(seeded));
    println!(
        "  {} {:.2}s ({:.0} entries/sec)",
        style("Duration:").bold(),
        secs,
        rate
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }
}
