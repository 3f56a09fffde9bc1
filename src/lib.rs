mod error;
mod interval;
mod tests;
pub mod validate;

pub use crate::{
    error::{IntervalError, Result},
    interval::Interval,
    validate::{DurationLike, InstantLike},
};
