//! Formatting utilities.

/// Binary unit labels used by [`human_readable_size`], smallest first.
const SIZE_UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Significant digits shown for sizes of one kilobyte and above.
const SIZE_PRECISION: i32 = 3;

/// Format a byte count as a human-readable size.
///
/// Uses 1024-based units with three significant digits and strips
/// insignificant trailing zeros, so `1024` is `"1 KB"` and `1536` is
/// `"1.5 KB"`.
pub fn human_readable_size(bytes: u64) -> String {
    if bytes < 1024 {
        let unit = if bytes == 1 { "Byte" } else { SIZE_UNITS[0] };
        return format!("{} {}", bytes, unit);
    }

    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }

    format!("{} {}", round_significant(value), SIZE_UNITS[unit_idx])
}

/// Round to [`SIZE_PRECISION`] significant digits and trim trailing zeros.
fn round_significant(value: f64) -> String {
    let digits = value.abs().log10().floor() as i32 + 1;
    let decimals = SIZE_PRECISION - digits;

    let rounded = if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        let factor = 10f64.powi(-decimals);
        format!("{:.0}", (value / factor).round() * factor)
    };

    if rounded.contains('.') {
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rounded
    }
}

/// Divisor and label for each step of [`humanize_time`], smallest first.
const TIME_STEPS: [(u64, &str); 3] = [(60, "s"), (60, "m"), (24, "h")];

/// Format a duration in seconds as `"1h 1m 1s"`.
///
/// Units are only emitted while the remaining total is positive, so
/// `59` is `"59s"` and `0` is the empty string. Whole days left over
/// after the hour step are dropped.
pub fn humanize_time(seconds: u64) -> String {
    let mut remaining = seconds;
    let mut parts = Vec::with_capacity(TIME_STEPS.len());

    for (count, name) in TIME_STEPS {
        if remaining == 0 {
            break;
        }
        parts.push(format!("{}{}", remaining % count, name));
        remaining /= count;
    }

    parts.reverse();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_readable_size_bytes() {
        assert_eq!(human_readable_size(0), "0 Bytes");
        assert_eq!(human_readable_size(1), "1 Byte");
        assert_eq!(human_readable_size(500), "500 Bytes");
        assert_eq!(human_readable_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_human_readable_size_units() {
        assert_eq!(human_readable_size(1024), "1 KB");
        assert_eq!(human_readable_size(1536), "1.5 KB");
        assert_eq!(human_readable_size(1_234_567), "1.18 MB");
        assert_eq!(human_readable_size(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(human_readable_size(1024u64.pow(4)), "1 TB");
    }

    #[test]
    fn test_human_readable_size_significant_digits() {
        // 1000 KB worth of bytes keeps three significant digits
        assert_eq!(human_readable_size(1_048_000), "1020 KB");
        assert_eq!(human_readable_size(10 * 1024 + 512), "10.5 KB");
        assert_eq!(human_readable_size(123 * 1024), "123 KB");
    }

    #[test]
    fn test_human_readable_size_max() {
        assert_eq!(human_readable_size(u64::MAX), "16 EB");
    }

    #[test]
    fn test_humanize_time() {
        assert_eq!(humanize_time(0), "");
        assert_eq!(humanize_time(45), "45s");
        assert_eq!(humanize_time(59), "59s");
        assert_eq!(humanize_time(60), "1m 0s");
        assert_eq!(humanize_time(3661), "1h 1m 1s");
    }

    #[test]
    fn test_humanize_time_drops_days() {
        // 1 day, 2 hours, 3 minutes, 4 seconds
        assert_eq!(humanize_time(86_400 + 7_200 + 180 + 4), "2h 3m 4s");
        assert_eq!(humanize_time(86_400), "0h 0m 0s");
    }
}
