use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Formats a unix timestamp (seconds) for pointer readouts.
///
/// Timestamps outside chrono's representable range fall back to the raw
/// number so a readout never fails.
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() {
        return seconds.to_string();
    }
    let millis = (seconds * 1000.0).round() as i64;
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => seconds.to_string(),
    }
}

/// Formats a price label with as many decimals as `step` needs to stay distinct.
#[must_use]
pub fn format_price(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).clamp(0.0, 8.0) as usize
    } else {
        2
    };
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::{format_price, format_timestamp};

    #[test]
    fn price_label_decimals_follow_step_magnitude() {
        assert_eq!(format_price(30_012.345, 25.0), "30012");
        assert_eq!(format_price(1.23456, 0.05), "1.23");
        assert_eq!(format_price(7.0, 0.0), "7.00");
    }

    #[test]
    fn timestamp_readout_is_utc() {
        assert_eq!(format_timestamp(0.0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_timestamp(f64::NAN), "NaN");
    }
}
