/// Minecraft runs at 20 game ticks per real-time second.
pub const TICKS_PER_SECOND: u64 = 20;

/// Convert a play-time tick count to a `"{days}days {hours}h {minutes}m"`
/// display string. Every component truncates toward zero; the seconds
/// remainder is dropped from the output.
pub fn format_play_time(ticks: u64) -> String {
    let total_seconds = ticks / TICKS_PER_SECOND;
    let total_minutes = total_seconds / 60;
    let total_hours = total_minutes / 60;

    let days = total_hours / 24;
    let hours = total_hours % 24;
    let minutes = total_minutes % 60;

    format!("{days}days {hours}h {minutes}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ticks() {
        assert_eq!(format_play_time(0), "0days 0h 0m");
    }

    #[test]
    fn one_real_hour() {
        assert_eq!(format_play_time(72_000), "0days 1h 0m");
    }

    #[test]
    fn exactly_one_day() {
        assert_eq!(format_play_time(1_728_000), "1days 0h 0m");
    }

    #[test]
    fn truncates_partial_minutes() {
        // 119 seconds of ticks is still 1 minute, never rounded up
        assert_eq!(format_play_time(119 * TICKS_PER_SECOND), "0days 0h 1m");
        // 19 ticks is less than a second
        assert_eq!(format_play_time(19), "0days 0h 0m");
    }

    #[test]
    fn components_stay_within_unit_bounds() {
        for ticks in [1, 1199, 72_001, 1_727_999, 1_728_000, 987_654_321] {
            let display = format_play_time(ticks);
            let (days, rest) = display.split_once("days ").unwrap();
            let (hours, rest) = rest.split_once("h ").unwrap();
            let minutes = rest.strip_suffix('m').unwrap();

            let days: u64 = days.parse().unwrap();
            let hours: u64 = hours.trim().parse().unwrap();
            let minutes: u64 = minutes.trim().parse().unwrap();

            assert!(hours < 24, "{display}");
            assert!(minutes < 60, "{display}");

            // The display is the floor of the total duration in minutes
            let floor_seconds = days * 86_400 + hours * 3_600 + minutes * 60;
            let total_seconds = ticks / TICKS_PER_SECOND;
            assert!(floor_seconds <= total_seconds, "{display}");
            assert!(total_seconds < floor_seconds + 60, "{display}");
        }
    }
}
