//! Size formatting utilities — human-readable byte counts.
//!
//! All internal sizes are `u64` bytes. Floating point is only used at the
//! display-formatting boundary.

/// Format a byte count with the nearest binary unit, using up to two
/// decimals and trimming trailing zeros: "512 B", "1.5 KB", "2 GB".
///
/// Binary units (1 KB = 1024 B) with common short labels, because that is
/// what users expect in a disk tool.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut order = 0;
    while size >= 1024.0 && order < UNITS.len() - 1 {
        size /= 1024.0;
        order += 1;
    }

    if order == 0 {
        return format!("{bytes} B");
    }

    let rounded = format!("{size:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[order])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_stay_unscaled() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn kilobytes() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1792), "1.75 KB");
    }

    #[test]
    fn megabytes() {
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(2_621_440), "2.5 MB");
    }

    #[test]
    fn gigabytes_and_terabytes() {
        assert_eq!(format_size(1_073_741_824), "1 GB");
        assert_eq!(format_size(1_099_511_627_776), "1 TB");
    }

    /// Values beyond the last unit keep scaling in TB rather than panicking.
    #[test]
    fn petabyte_range_stays_in_tb() {
        assert_eq!(format_size(1_099_511_627_776 * 2048), "2048 TB");
    }
}
