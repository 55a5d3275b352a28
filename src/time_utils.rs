// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for elapsed-time formatting.

/// Elapsed milliseconds decomposed into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub centis: u64,
}

/// Decompose elapsed milliseconds into hours/minutes/seconds/centiseconds.
pub fn clock_parts(ms: u64) -> ClockParts {
    ClockParts {
        hours: ms / 3_600_000,
        minutes: (ms % 3_600_000) / 60_000,
        seconds: (ms % 60_000) / 1_000,
        centis: (ms % 1_000) / 10,
    }
}

/// Format elapsed milliseconds as the main display: `HH:MM:SS.cc`, zero-padded.
pub fn format_clock(ms: u64) -> String {
    let p = clock_parts(ms);
    format!(
        "{:02}:{:02}:{:02}.{:02}",
        p.hours, p.minutes, p.seconds, p.centis
    )
}

/// Format elapsed milliseconds in the compact lap form.
///
/// Hours are omitted when zero; minutes too when also zero, leaving a bare
/// `S.cc` with unpadded seconds.
pub fn format_lap(ms: u64) -> String {
    let p = clock_parts(ms);
    if p.hours > 0 {
        format!(
            "{:02}:{:02}:{:02}.{:02}",
            p.hours, p.minutes, p.seconds, p.centis
        )
    } else if p.minutes > 0 {
        format!("{:02}:{:02}.{:02}", p.minutes, p.seconds, p.centis)
    } else {
        format!("{}.{:02}", p.seconds, p.centis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_parts_decomposition() {
        // 1h 2m 3s 450ms
        let ms = 3_600_000 + 2 * 60_000 + 3_000 + 450;
        let p = clock_parts(ms);
        assert_eq!(p.hours, 1);
        assert_eq!(p.minutes, 2);
        assert_eq!(p.seconds, 3);
        assert_eq!(p.centis, 45);
    }

    #[test]
    fn test_format_clock_zero_padded() {
        assert_eq!(format_clock(0), "00:00:00.00");
        assert_eq!(format_clock(3_600_000 + 2 * 60_000 + 3_000 + 450), "01:02:03.45");
    }

    #[test]
    fn test_format_lap_omits_leading_fields() {
        // Bare seconds when under a minute, seconds unpadded
        assert_eq!(format_lap(7_890), "7.89");
        assert_eq!(format_lap(450), "0.45");
        // Minutes shown (padded) once over a minute
        assert_eq!(format_lap(60_000 + 7_890), "01:07.89");
        // Full form once over an hour
        assert_eq!(format_lap(3_600_000 + 7_890), "01:00:07.89");
    }

    #[test]
    fn test_centiseconds_truncate() {
        // 999 ms is 99 centis, never rounds up to the next second
        assert_eq!(format_lap(999), "0.99");
        assert_eq!(format_clock(59_999), "00:00:59.99");
    }
}
