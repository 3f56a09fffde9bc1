use jiff::Zoned;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntervalError>;

#[derive(Error, Debug)]
pub enum IntervalError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("{name} {value} is out of range {min}..={max}")]
    Range {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("start {start} must not come after end {end}")]
    Ordering { start: Box<Zoned>, end: Box<Zoned> },

    #[error("{0}")]
    Logic(String),

    #[error(transparent)]
    Time(#[from] jiff::Error),
}
