use std::ops::{Deref, Range};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::normalizer::to_pixel_x;
use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Price extremes a sample contributes to autoscaling.
pub trait Sample: Copy + std::fmt::Debug {
    fn timestamp(&self) -> f64;

    /// Upper extreme used for the visible top (`high` or `value`).
    fn high(&self) -> f64;

    /// Lower extreme used for the visible bottom (`low` or `value`).
    fn low(&self) -> f64;

    /// `false` when any field is NaN or infinite.
    fn is_finite(&self) -> bool;
}

/// One candlestick entry.
///
/// `low <= open, close <= high` is expected but not enforced; `high`/`low`
/// are always used as wick extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcSample {
    pub timestamp: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcSample {
    pub fn new(timestamp: f64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !timestamp.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        Ok(Self {
            timestamp,
            open,
            high,
            low,
            close,
        })
    }

    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Returns `true` when close price is strictly above open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close > self.open
    }
}

impl Sample for OhlcSample {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn low(&self) -> f64 {
        self.low
    }

    fn is_finite(&self) -> bool {
        self.timestamp.is_finite()
            && self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
    }
}

/// One line-chart entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarSample {
    pub timestamp: f64,
    pub value: f64,
}

impl ScalarSample {
    pub fn new(timestamp: f64, value: f64) -> ChartResult<Self> {
        if !timestamp.is_finite() || !value.is_finite() {
            return Err(ChartError::InvalidData(
                "sample timestamp and value must be finite".to_owned(),
            ));
        }
        Ok(Self { timestamp, value })
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(value, "value")?,
        )
    }
}

impl Sample for ScalarSample {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }

    fn high(&self) -> f64 {
        self.value
    }

    fn low(&self) -> f64 {
        self.value
    }

    fn is_finite(&self) -> bool {
        self.timestamp.is_finite() && self.value.is_finite()
    }
}

/// Chronologically ordered samples, shared immutably between frames.
///
/// A reload replaces the whole sequence; nothing mutates it in place.
#[derive(Debug, Clone)]
pub struct History<T> {
    samples: Arc<[T]>,
}

impl<T> History<T> {
    #[must_use]
    pub fn new(samples: Vec<T>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }
}

impl<T: Sample> History<T> {
    /// Rejects histories holding non-finite samples.
    ///
    /// Sample fields are public, so values built without `new` are checked here.
    pub fn validate(self) -> ChartResult<Self> {
        if let Some(index) = self.samples.iter().position(|sample| !sample.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "sample {index} has non-finite fields"
            )));
        }
        Ok(self)
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for History<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.samples
    }
}

impl<T> From<Vec<T>> for History<T> {
    fn from(samples: Vec<T>) -> Self {
        Self::new(samples)
    }
}

/// Extreme price with the History index it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    pub value: f64,
}

/// Which extreme `extrema` searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceField {
    /// Maximum over `Sample::high`.
    High,
    /// Minimum over `Sample::low`.
    Low,
}

/// Index range of samples whose projected X lies strictly inside `(0, width)`.
///
/// X is monotonic in index, so the visible subset is always contiguous.
#[must_use]
pub fn visible_range(sample_count: usize, viewport: Viewport, width: f64) -> Range<usize> {
    let is_visible = |index: usize| {
        let x = to_pixel_x(index, viewport, sample_count);
        x > 0.0 && x < width
    };

    let Some(start) = (0..sample_count).find(|&index| is_visible(index)) else {
        return 0..0;
    };
    let end = (start..sample_count)
        .find(|&index| !is_visible(index))
        .unwrap_or(sample_count);
    start..end
}

/// Samples of `history` inside the visible range, paired with their History index.
pub fn visible_subset<T: Sample>(
    history: &[T],
    viewport: Viewport,
    width: f64,
) -> impl Iterator<Item = (usize, &T)> {
    let range = visible_range(history.len(), viewport, width);
    history[range.clone()]
        .iter()
        .enumerate()
        .map(move |(offset, sample)| (range.start + offset, sample))
}

/// First-wins extreme of `field` over an indexed subset.
///
/// Returns `None` for an empty subset.
pub fn extrema<'a, T, I>(subset: I, field: PriceField) -> Option<Extremum>
where
    T: Sample + 'a,
    I: IntoIterator<Item = (usize, &'a T)>,
{
    let mut best: Option<Extremum> = None;
    for (index, sample) in subset {
        let value = match field {
            PriceField::High => sample.high(),
            PriceField::Low => sample.low(),
        };
        let replaces = match best {
            None => true,
            Some(current) => match field {
                PriceField::High => value > current.value,
                PriceField::Low => value < current.value,
            },
        };
        if replaces {
            best = Some(Extremum { index, value });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{PriceField, ScalarSample, extrema};

    #[test]
    fn extrema_keeps_first_of_equal_values() {
        let samples = [
            ScalarSample::new(0.0, 5.0).expect("sample"),
            ScalarSample::new(1.0, 9.0).expect("sample"),
            ScalarSample::new(2.0, 9.0).expect("sample"),
            ScalarSample::new(3.0, 1.0).expect("sample"),
            ScalarSample::new(4.0, 1.0).expect("sample"),
        ];
        let indexed = || samples.iter().enumerate();

        let top = extrema(indexed(), PriceField::High).expect("top");
        let bottom = extrema(indexed(), PriceField::Low).expect("bottom");
        assert_eq!((top.index, top.value), (1, 9.0));
        assert_eq!((bottom.index, bottom.value), (3, 1.0));
    }

    #[test]
    fn extrema_of_empty_subset_is_none() {
        let samples: [ScalarSample; 0] = [];
        assert!(extrema(samples.iter().enumerate(), PriceField::High).is_none());
    }
}
