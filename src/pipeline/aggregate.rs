//! Currency conversion and averaging

use crate::model::{EarningsRecord, ExchangeRate};
use crate::pipeline::PipelineError;

/// Mean of the estimates converted with `rate`.
///
/// Records without a finite numeric estimate are left out of both the sum and
/// the count. Every estimate is converted with the same rate, whatever the
/// record's own currency.
pub fn average_converted(records: &[&EarningsRecord], rate: &ExchangeRate) -> Result<f64, PipelineError> {
    let converted: Vec<f64> = records
        .iter()
        .filter_map(|record| record.estimate_value())
        .map(|estimate| estimate * rate.rate)
        .collect();

    tracing::debug!(
        valid = converted.len(),
        skipped = records.len() - converted.len(),
        rate = rate.rate,
        "converted estimates"
    );

    if converted.is_empty() {
        return Err(PipelineError::NoValidEstimates);
    }

    let average = converted.iter().sum::<f64>() / converted.len() as f64;
    if !average.is_finite() {
        return Err(PipelineError::NonFiniteAverage);
    }
    Ok(average)
}
