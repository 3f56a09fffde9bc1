use crate::error::{IntervalError, Result};
use derive_more::From;
use jiff::{civil, tz::TimeZone, Span, Timestamp, Zoned};

#[derive(Clone, Debug, From)]
pub enum InstantLike {
    Instant(Zoned),
    Text(String),
}

impl From<&Zoned> for InstantLike {
    fn from(value: &Zoned) -> Self {
        InstantLike::Instant(value.clone())
    }
}

impl From<Timestamp> for InstantLike {
    fn from(value: Timestamp) -> Self {
        InstantLike::Instant(value.to_zoned(TimeZone::UTC))
    }
}

impl From<&str> for InstantLike {
    fn from(value: &str) -> Self {
        InstantLike::Text(value.to_string())
    }
}

#[derive(Clone, Debug, From)]
pub enum DurationLike {
    Span(Span),
    Text(String),
}

impl From<&str> for DurationLike {
    fn from(value: &str) -> Self {
        DurationLike::Text(value.to_string())
    }
}

pub fn instant(value: impl Into<InstantLike>) -> Result<Zoned> {
    match value.into() {
        InstantLike::Instant(zoned) => Ok(zoned),
        InstantLike::Text(text) => parse_instant(&text),
    }
}

// accepted textual forms, tried from most to least specific. civil forms
// carry no zone of their own and resolve at midnight UTC.
fn parse_instant(text: &str) -> Result<Zoned> {
    if let Ok(zoned) = text.parse::<Zoned>() {
        return Ok(zoned);
    }
    if let Ok(timestamp) = text.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::UTC));
    }
    if let Ok(datetime) = text.parse::<civil::DateTime>() {
        return Ok(datetime.to_zoned(TimeZone::UTC)?);
    }
    if let Ok(date) = text.parse::<civil::Date>() {
        return Ok(date.to_zoned(TimeZone::UTC)?);
    }
    Err(IntervalError::Validation(format!(
        "unparsable instant: {:?}",
        text
    )))
}

pub fn duration(value: impl Into<DurationLike>) -> Result<Span> {
    match value.into() {
        DurationLike::Span(span) => Ok(span),
        DurationLike::Text(text) => text.parse::<Span>().map_err(|err| {
            IntervalError::Validation(format!("unparsable duration {:?}: {}", text, err))
        }),
    }
}

pub fn year(value: i64) -> Result<i16> {
    i16::try_from(value)
        .ok()
        .filter(|year| (-9999..=9999).contains(year))
        .ok_or_else(|| {
            IntervalError::Validation(format!("year {} is outside the supported calendar", value))
        })
}

pub fn range(name: &'static str, value: i64, min: i64, max: i64) -> Result<i64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(IntervalError::Range {
            name,
            value,
            min,
            max,
        })
    }
}
