/// Formats a millisecond count as `MM:SS.CC` (minutes, seconds, hundredths).
///
/// Every field is floored, never rounded, and zero-padded to two digits.
/// Minutes grow past two digits rather than wrapping.
pub fn clock(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let hundredths = (ms % 1_000) / 10;

    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(clock(0), "00:00.00");
    }

    #[test]
    fn floors_each_field() {
        assert_eq!(clock(1_500), "00:01.50");
        assert_eq!(clock(61_230), "01:01.23");
        assert_eq!(clock(9), "00:00.00");
        assert_eq!(clock(999), "00:00.99");
        assert_eq!(clock(59_999), "00:59.99");
        assert_eq!(clock(60_000), "01:00.00");
    }

    #[test]
    fn does_not_clamp_minutes() {
        assert_eq!(clock(6_000_000), "100:00.00");
        assert_eq!(clock(3_599_990), "59:59.99");
    }

    #[test]
    fn round_trips_below_one_hour() {
        for ms in (0u64..3_600_000).step_by(10) {
            let text = clock(ms);
            let (mm, rest) = text.split_once(':').unwrap();
            let (ss, cc) = rest.split_once('.').unwrap();
            let mm: u64 = mm.parse().unwrap();
            let ss: u64 = ss.parse().unwrap();
            let cc: u64 = cc.parse().unwrap();

            assert_eq!(mm * 60_000 + ss * 1_000 + cc * 10, ms, "{text}");
        }
    }
}
