//! Calendar scalars used on the wire.
//!
//! | Type | Wire form | Default |
//! |------|-----------|---------|
//! | [`Date`] | `YYYY-MM-DD` | `0001-01-01` |
//! | [`Time`] | `HH:MM:SS` | `00:00:00` |
//! | [`DateTime`] | `YYYY-MM-DDTHH:MM:SS` | `0001-01-01T00:00:00` |
//!
//! Parsing is strict: components must be zero-padded and nothing may trail
//! the value. Formatting always emits the padded form.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Month, OffsetDateTime, PrimitiveDateTime};

use crate::FormatError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

fn epoch() -> time::Date {
    time::Date::from_calendar_date(1, Month::January, 1).unwrap_or(time::Date::MIN)
}

/// Calendar date without time-of-day or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(time::Date);

impl Date {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidDate {
            value: format!("{year:04}-{month:02}-{day:02}"),
        };
        let month = Month::try_from(month).map_err(|_| invalid())?;
        time::Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Current UTC calendar date.
    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, FormatError> {
        time::Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| FormatError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn to_iso_string(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn into_inner(self) -> time::Date {
        self.0
    }
}

impl Default for Date {
    fn default() -> Self {
        Self(epoch())
    }
}

impl From<time::Date> for Date {
    fn from(value: time::Date) -> Self {
        Self(value)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Date {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Time-of-day without date or offset, second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(time::Time);

impl Time {
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, FormatError> {
        time::Time::from_hms(hour, minute, second)
            .map(Self)
            .map_err(|_| FormatError::InvalidTime {
                value: format!("{hour:02}:{minute:02}:{second:02}"),
            })
    }

    pub fn parse(input: &str) -> Result<Self, FormatError> {
        time::Time::parse(input, TIME_FORMAT)
            .map(Self)
            .map_err(|_| FormatError::InvalidTime {
                value: input.to_owned(),
            })
    }

    pub fn to_iso_string(self) -> String {
        self.0
            .format(TIME_FORMAT)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    pub fn hour(self) -> u8 {
        self.0.hour()
    }

    pub fn minute(self) -> u8 {
        self.0.minute()
    }

    pub fn second(self) -> u8 {
        self.0.second()
    }

    pub fn into_inner(self) -> time::Time {
        self.0
    }
}

impl Default for Time {
    fn default() -> Self {
        Self(time::Time::MIDNIGHT)
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Time {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Local date and time-of-day with no offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(PrimitiveDateTime);

impl DateTime {
    pub fn new(date: Date, time: Time) -> Self {
        Self(PrimitiveDateTime::new(date.0, time.0))
    }

    pub fn parse(input: &str) -> Result<Self, FormatError> {
        PrimitiveDateTime::parse(input, DATE_TIME_FORMAT)
            .map(Self)
            .map_err(|_| FormatError::InvalidDateTime {
                value: input.to_owned(),
            })
    }

    pub fn to_iso_string(self) -> String {
        self.0
            .format(DATE_TIME_FORMAT)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    pub fn date(self) -> Date {
        Date(self.0.date())
    }

    pub fn time(self) -> Time {
        Time(self.0.time())
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self(PrimitiveDateTime::new(epoch(), time::Time::MIDNIGHT))
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for DateTime {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Inclusive span of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRange {
    pub from_date: Date,
    pub to_date: Date,
}

impl DateRange {
    pub fn new(from_date: Date, to_date: Date) -> Result<Self, FormatError> {
        if to_date < from_date {
            return Err(FormatError::InvertedRange {
                from: from_date.to_iso_string(),
                to: to_date.to_iso_string(),
            });
        }

        Ok(Self { from_date, to_date })
    }

    pub fn contains(&self, date: Date) -> bool {
        self.from_date <= date && date <= self.to_date
    }
}
