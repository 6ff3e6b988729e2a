//! Frontmatter date parsing and localized formatting.
//!
//! Provides a lightweight `DateTime` struct for the `date` frontmatter field.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTime::parse("2024-06-15").unwrap();
//! let dt = DateTime::parse("2024-06-15T14:30:45Z").unwrap();
//!
//! assert_eq!(dt.to_localized("en-US"), "June 15, 2024");
//! assert_eq!(dt.to_localized("zh-CN"), "2024年6月15日");
//! ```

use anyhow::{Result, bail};

/// Calendar date with optional time of day, no timezone handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM:SS[Z]`
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second) = match &bytes[10..] {
            [] => (0, 0, 0),
            [b'T' | b' ', time @ ..] => parse_time(time)?,
            _ => return None,
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Long date for a page language tag (`en-US`, `zh-CN`, `de`, ...).
    ///
    /// Unknown languages fall back to English.
    pub fn to_localized(self, lang: &str) -> String {
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];

        let primary = lang
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "zh" | "ja" => format!("{}年{}月{}日", self.year, self.month, self.day),
            "ko" => format!("{}년 {}월 {}일", self.year, self.month, self.day),
            "de" | "ru" | "uk" => format!("{}.{}.{}", self.day, self.month, self.year),
            _ => format!(
                "{} {}, {}",
                MONTHS[(self.month - 1) as usize],
                self.day,
                self.year
            ),
        }
    }
}

/// Parse `HH:MM`, `HH:MM:SS` with an optional trailing `Z`
fn parse_time(bytes: &[u8]) -> Option<(u8, u8, u8)> {
    let bytes = bytes.strip_suffix(b"Z").unwrap_or(bytes);
    match bytes {
        [h1, h2, b':', m1, m2] => Some((parse_u8(&[*h1, *h2])?, parse_u8(&[*m1, *m2])?, 0)),
        [h1, h2, b':', m1, m2, b':', s1, s2] => Some((
            parse_u8(&[*h1, *h2])?,
            parse_u8(&[*m1, *m2])?,
            parse_u8(&[*s1, *s2])?,
        )),
        _ => None,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
