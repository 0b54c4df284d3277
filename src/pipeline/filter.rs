//! Record selection stages

use chrono::{Datelike, NaiveDate};

use crate::model::EarningsRecord;

/// Keep the records reporting in the calendar month closest to `today`.
///
/// Distance is measured on the month of the year alone (`0..=11`): the year is
/// ignored and December is 11 months away from January, not one. Every record
/// at the smallest distance is kept. Records without a parseable `reportDate`
/// have no month and are dropped.
pub fn nearest_month<'r>(records: &[&'r EarningsRecord], today: NaiveDate) -> Vec<&'r EarningsRecord> {
    let current = today.month0() as i32;

    let distances: Vec<Option<i32>> = records
        .iter()
        .map(|record| record.report_date_value().map(|date| (date.month0() as i32 - current).abs()))
        .collect();

    let Some(closest) = distances.iter().flatten().min().copied() else {
        return Vec::new();
    };

    records
        .iter()
        .zip(distances)
        .filter(|(_, distance)| *distance == Some(closest))
        .map(|(record, _)| *record)
        .collect()
}

/// Keep the records whose currency is in `currencies`, or all of them when no list is given.
///
/// Codes are compared exactly; `eur` does not match `EUR`.
pub fn by_currencies<'r>(records: &[&'r EarningsRecord], currencies: Option<&[String]>) -> Vec<&'r EarningsRecord> {
    let Some(currencies) = currencies else {
        return records.to_vec();
    };

    records
        .iter()
        .filter(|record| {
            record
                .currency
                .as_deref()
                .is_some_and(|code| currencies.iter().any(|wanted| wanted == code))
        })
        .copied()
        .collect()
}
