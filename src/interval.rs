use crate::{
    error::{IntervalError, Result},
    validate::{self, DurationLike, InstantLike},
};
use jiff::{
    civil::{Date, ISOWeekDate, Weekday},
    tz::TimeZone,
    SignedDuration, Span, ToSpan, Unit, Zoned,
};
use serde::{Deserialize, Serialize};
use std::{
    cmp,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

// a half-open slice of the timeline: start is inside, end is not. endpoint
// ordering is checked on every construction, so an existing value always
// satisfies start <= end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    start: Zoned,
    end: Zoned,
}

impl Interval {
    pub fn new(start: impl Into<InstantLike>, end: impl Into<InstantLike>) -> Result<Self> {
        let start = validate::instant(start)?;
        let end = validate::instant(end)?;
        if start > end {
            return Err(IntervalError::Ordering {
                start: Box::new(start),
                end: Box::new(end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn from_duration(
        start: impl Into<InstantLike>,
        duration: impl Into<DurationLike>,
    ) -> Result<Self> {
        let start = validate::instant(start)?;
        let span = validate::duration(duration)?;
        let end = start.checked_add(span)?;
        Self::new(start, end)
    }

    pub fn from_week(year: i64, week: i64) -> Result<Self> {
        let year = validate::year(year)?;
        let week = validate::range("week", week, 1, 53)? as i8;
        let monday = ISOWeekDate::new(year, week, Weekday::Monday).map_err(|_| {
            IntervalError::Validation(format!("{} has no ISO week {}", year, week))
        })?;
        Self::from_duration(utc_midnight(Date::from_iso_week_date(monday))?, 1.week())
    }

    pub fn from_month(year: i64, month: i64) -> Result<Self> {
        let year = validate::year(year)?;
        let month = validate::range("month", month, 1, 12)? as i8;
        Self::from_duration(utc_midnight(Date::new(year, month, 1)?)?, 1.month())
    }

    pub fn from_quarter(year: i64, quarter: i64) -> Result<Self> {
        let year = validate::year(year)?;
        let quarter = validate::range("quarter", quarter, 1, 4)?;
        let month = ((quarter - 1) * 3 + 1) as i8;
        Self::from_duration(utc_midnight(Date::new(year, month, 1)?)?, 3.months())
    }

    pub fn from_semester(year: i64, semester: i64) -> Result<Self> {
        let year = validate::year(year)?;
        let semester = validate::range("semester", semester, 1, 2)?;
        let month = ((semester - 1) * 6 + 1) as i8;
        Self::from_duration(utc_midnight(Date::new(year, month, 1)?)?, 6.months())
    }

    pub fn from_year(year: i64) -> Result<Self> {
        let year = validate::year(year)?;
        Self::from_duration(utc_midnight(Date::new(year, 1, 1)?)?, 1.year())
    }

    pub fn start(&self) -> &Zoned {
        &self.start
    }

    pub fn end(&self) -> &Zoned {
        &self.end
    }

    // the chronological distance between the endpoints, computed on demand
    // and kept at hour-largest units so it stays exact under DST.
    pub fn duration(&self) -> Result<Span> {
        Ok(self.start.until((Unit::Hour, &self.end))?)
    }

    pub fn with_start(&self, start: impl Into<InstantLike>) -> Result<Self> {
        Self::new(start, self.end.clone())
    }

    pub fn with_end(&self, end: impl Into<InstantLike>) -> Result<Self> {
        Self::new(self.start.clone(), end)
    }

    pub fn with_duration(&self, duration: impl Into<DurationLike>) -> Result<Self> {
        Self::from_duration(self.start.clone(), duration)
    }

    pub fn shifted_by(&self, duration: impl Into<DurationLike>) -> Result<Self> {
        let span = validate::duration(duration)?;
        Self::new(self.start.checked_add(span)?, self.end.checked_add(span)?)
    }

    pub fn extended_by(&self, duration: impl Into<DurationLike>) -> Result<Self> {
        let span = validate::duration(duration)?;
        Self::new(self.start.clone(), self.end.checked_add(span)?)
    }

    pub fn shortened_by(&self, duration: impl Into<DurationLike>) -> Result<Self> {
        let span = validate::duration(duration)?;
        Self::new(self.start.clone(), self.end.checked_sub(span)?)
    }

    // the inherited length is the chronological distance between the
    // endpoints, not the calendar unit the receiver was built from; stepping
    // by a uniform calendar unit takes next_by with an explicit span.
    pub fn next(&self) -> Result<Self> {
        self.next_by(self.duration()?)
    }

    pub fn next_by(&self, duration: impl Into<DurationLike>) -> Result<Self> {
        let span = validate::duration(duration)?;
        Self::new(self.end.clone(), self.end.checked_add(span)?)
    }

    pub fn previous(&self) -> Result<Self> {
        self.previous_by(self.duration()?)
    }

    pub fn previous_by(&self, duration: impl Into<DurationLike>) -> Result<Self> {
        let span = validate::duration(duration)?;
        Self::new(self.start.checked_sub(span)?, self.start.clone())
    }

    pub fn contains(&self, instant: &Zoned) -> bool {
        *instant >= self.start && *instant < self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    // bounding union over the receiver and any number of intervals. the
    // smallest start never exceeds the largest end, so this cannot fail.
    pub fn merge<'a>(&self, others: impl IntoIterator<Item = &'a Interval>) -> Interval {
        let mut start = &self.start;
        let mut end = &self.end;
        for other in others {
            start = cmp::min(start, &other.start);
            end = cmp::max(end, &other.end);
        }
        Interval {
            start: start.clone(),
            end: end.clone(),
        }
    }

    pub fn intersect(&self, other: &Self) -> Result<Self> {
        if !self.overlaps(other) {
            return Err(IntervalError::Logic(format!(
                "cannot intersect non-overlapping intervals {} and {}",
                self, other
            )));
        }
        Self::new(
            cmp::max(&self.start, &other.start).clone(),
            cmp::min(&self.end, &other.end).clone(),
        )
    }

    pub fn gap(&self, other: &Self) -> Result<Self> {
        if self.overlaps(other) {
            return Err(IntervalError::Logic(format!(
                "no gap between overlapping intervals {} and {}",
                self, other
            )));
        }
        let (earlier, later) = if self.end <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Self::new(earlier.end.clone(), later.start.clone())
    }

    pub fn duration_greater_than(&self, other: &Self) -> bool {
        self.elapsed() > other.elapsed()
    }

    pub fn same_duration_as(&self, other: &Self) -> bool {
        self.elapsed() == other.elapsed()
    }

    fn elapsed(&self) -> SignedDuration {
        self.start.duration_until(&self.end)
    }
}

fn utc_midnight(date: Date) -> Result<Zoned> {
    Ok(date.to_zoned(TimeZone::UTC)?)
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.timestamp().display_with_offset(self.start.offset()),
            self.end.timestamp().display_with_offset(self.end.offset()),
        )
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s.split_once('/').ok_or_else(|| {
            IntervalError::Validation(format!("expected \"<start>/<end>\", got {:?}", s))
        })?;
        Self::new(start.trim(), end.trim())
    }
}

impl TryFrom<String> for Interval {
    type Error = IntervalError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}
