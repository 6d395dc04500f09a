//! Lenient parser for kernel build dates.
//!
//! Kernel dates come from `uname -v` (`Wed Jul  5 22:21:56 PDT 2023`) rather
//! than from a mail header, so the year trails the zone and the day may be
//! space padded. Fields are recognised by shape instead of by position, which
//! also accepts canonical RFC 2822 strings (`Wed, 05 Jul 2023 22:21:56 -0700`).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use std::mem;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Parse a kernel build date, returning `None` for anything unrecognised.
///
/// Missing and unknown alphabetic zones are read as UTC.
pub fn parse_kernel_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    let first = tokens.first()?;
    if first.ends_with(',') || WEEKDAYS.iter().any(|day| first.eq_ignore_ascii_case(day)) {
        tokens.remove(0);
    }

    let (mut day, mut month, mut year, mut time, mut zone) = match tokens.as_slice() {
        [d, m, y, t, z, ..] => (*d, *m, *y, *t, Some(*z)),
        [d, m, y, t] => (*d, *m, *y, *t, None),
        _ => return None,
    };

    if month_number(month).is_none() {
        mem::swap(&mut day, &mut month);
    }
    let month = month_number(month)?;
    let day: u32 = day.trim_end_matches(',').parse().ok()?;

    if year.contains(':') {
        mem::swap(&mut year, &mut time);
    }
    if !year.starts_with(|c: char| c.is_ascii_digit()) {
        let displaced = zone?;
        zone = Some(year);
        year = displaced;
    }

    let year = full_year(year.trim_end_matches(',').parse().ok()?);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = parse_time(time.trim_end_matches(','))?;
    let offset = FixedOffset::east_opt(zone_offset_seconds(zone)?)?;
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
}

fn month_number(token: &str) -> Option<u32> {
    let lowered = token.to_ascii_lowercase();
    let key = lowered.get(..3)?;
    MONTHS
        .iter()
        .position(|m| *m == key)
        .map(|idx| idx as u32 + 1)
}

fn full_year(year: i32) -> i32 {
    match year {
        0..=68 => year + 2000,
        69..=99 => year + 1900,
        _ => year,
    }
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = token.split(':').collect();
    let (hour, minute, second) = match parts.as_slice() {
        [h, m] => (*h, *m, "0"),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, second.parse().ok()?)
}

fn zone_offset_seconds(zone: Option<&str>) -> Option<i32> {
    let Some(zone) = zone else {
        return Some(0);
    };

    if let Some(digits) = zone.strip_prefix('+').or_else(|| zone.strip_prefix('-')) {
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let hours: i32 = digits[..2].parse().ok()?;
        let minutes: i32 = digits[2..].parse().ok()?;
        let magnitude = hours * 3600 + minutes * 60;
        return Some(if zone.starts_with('-') { -magnitude } else { magnitude });
    }

    let hours = match zone.to_ascii_uppercase().as_str() {
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        "AST" => -4,
        "ADT" => -3,
        _ => 0,
    };
    Some(hours * 3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms_offset(value: &str) -> (String, i32) {
        let parsed = parse_kernel_date(value).expect("date parses");
        (
            parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
            parsed.offset().local_minus_utc(),
        )
    }

    #[test]
    fn parses_uname_style_dates() {
        assert_eq!(
            ymd_hms_offset("Wed Jul 5 22:21:56 PDT 2023"),
            ("2023-07-05 22:21:56".to_string(), -7 * 3600)
        );
        assert_eq!(
            ymd_hms_offset("Sun Dec 17 22:18:09 PST 2023"),
            ("2023-12-17 22:18:09".to_string(), -8 * 3600)
        );
    }

    #[test]
    fn tolerates_padded_day() {
        assert_eq!(
            ymd_hms_offset("Thu Jul  6 22:12:47 PDT 2023"),
            ("2023-07-06 22:12:47".to_string(), -7 * 3600)
        );
    }

    #[test]
    fn parses_canonical_rfc2822() {
        assert_eq!(
            ymd_hms_offset("Wed, 05 Jul 2023 22:21:56 -0700"),
            ("2023-07-05 22:21:56".to_string(), -7 * 3600)
        );
        assert_eq!(
            ymd_hms_offset("5 Jul 2023 22:21:56 +0130"),
            ("2023-07-05 22:21:56".to_string(), 90 * 60)
        );
    }

    #[test]
    fn unknown_or_missing_zone_is_utc() {
        assert_eq!(ymd_hms_offset("Wed Jul 5 22:21:56 CEST 2023").1, 0);
        assert_eq!(ymd_hms_offset("5 Jul 2023 22:21").1, 0);
    }

    #[test]
    fn expands_two_digit_years() {
        assert_eq!(
            ymd_hms_offset("Fri Apr 30 23:26:14 PDT 99").0,
            "1999-04-30 23:26:14"
        );
        assert_eq!(ymd_hms_offset("Mon Jan 2 10:00:00 GMT 23").0, "2023-01-02 10:00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_kernel_date("").is_none());
        assert!(parse_kernel_date("not a date").is_none());
        assert!(parse_kernel_date("Wed Foo 5 22:21:56 PDT 2023").is_none());
        assert!(parse_kernel_date("Wed Feb 30 22:21:56 PDT 2023").is_none());
        assert!(parse_kernel_date("Wed Jul 5 25:21:56 PDT 2023").is_none());
        assert!(parse_kernel_date("Wed Jul 5 22:21:56 +07 2023").is_none());
    }
}
