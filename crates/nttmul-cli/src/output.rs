//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use nttmul_core::digits::DigitVector;

/// Format a product for display, truncating long values unless `verbose`.
#[must_use]
pub fn format_result(value: &DigitVector, verbose: bool) -> String {
    let s = value.render();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the product line to `out`.
pub fn write_product(out: &mut dyn Write, value: &DigitVector) -> io::Result<()> {
    writeln!(out, "{}", value.render())
}

/// Write the product line to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, value: &DigitVector) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_product(&mut file, value)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn format_result_short() {
        let value = DigitVector::parse("0012345").unwrap();
        assert_eq!(format_result(&value, false), "12345");
    }

    #[test]
    fn format_result_truncates_long_values() {
        let value = DigitVector::parse(&"7".repeat(150)).unwrap();
        let s = format_result(&value, false);
        assert!(s.ends_with("(150 digits)"));
        assert_eq!(format_result(&value, true).len(), 150);
    }

    #[test]
    fn write_product_appends_newline() {
        let mut buf = Vec::new();
        write_product(&mut buf, &DigitVector::from_u64(56_088)).unwrap();
        assert_eq!(buf, b"56088\n");
    }

    #[test]
    fn write_to_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.txt");
        write_to_file(&path, &DigitVector::from_u64(0)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n");
    }
}
