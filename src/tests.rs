#![cfg(test)]
use crate::{error::IntervalError, interval::Interval};

fn quarters(year: i64) -> Vec<Interval> {
    (1..=4)
        .map(|quarter| Interval::from_quarter(year, quarter).unwrap())
        .collect()
}

#[test]
fn test_reporting_year_calculus() {
    let quarters = quarters(2012);

    for pair in quarters.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]));
        assert!(!pair[0].overlaps(&pair[1]));
    }

    let year = quarters[0].merge(quarters.iter().skip(1));
    assert_eq!(year, Interval::from_year(2012).unwrap());

    let gap = quarters[0].gap(&quarters[3]).unwrap();
    assert_eq!(gap, quarters[1].merge([&quarters[2]]));

    let semester = Interval::from_semester(2012, 1).unwrap();
    assert_eq!(semester.intersect(&quarters[1]).unwrap(), quarters[1]);
    assert!(matches!(
        semester.intersect(&quarters[2]),
        Err(IntervalError::Logic(_))
    ));
    assert!(matches!(
        semester.gap(&quarters[1]),
        Err(IntervalError::Logic(_))
    ));
}

#[test]
fn test_billing_period_chain() {
    let mut period = Interval::from_month(2014, 11).unwrap();
    let mut starts = Vec::new();

    for _ in 0..4 {
        starts.push(period.start().clone());
        period = period.next_by("1 month").unwrap();
    }

    assert_eq!(period, Interval::from_month(2015, 3).unwrap());
    assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_canonical_form_round_trip() {
    let interval = Interval::from_month(2012, 1).unwrap();
    let rendered = interval.to_string();
    assert_eq!(
        rendered,
        "2012-01-01T00:00:00+00:00/2012-02-01T00:00:00+00:00"
    );
    assert_eq!(rendered.parse::<Interval>().unwrap(), interval);

    assert!(matches!(
        "2012-01-01".parse::<Interval>(),
        Err(IntervalError::Validation(_))
    ));
}

#[test]
fn test_serde_uses_canonical_form() {
    let interval = Interval::from_month(2012, 1).unwrap();
    let json = serde_json::to_string(&interval).unwrap();
    assert_eq!(json, format!("\"{}\"", interval));

    let parsed: Interval = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, interval);

    // deserialization goes through the same validating constructor
    assert!(serde_json::from_str::<Interval>(
        "\"2012-02-01T00:00:00+00:00/2012-01-01T00:00:00+00:00\""
    )
    .is_err());
}
