use super::{TDistError, check_degrees_of_freedom};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Theoretical mean, variance, skewness and excess kurtosis of a distribution.
///
/// Moments that do not exist are `NaN` (undefined) or `+inf` (divergent).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl Moments {
    /// Closed-form moments of Student's t with `df` degrees of freedom.
    ///
    /// | moment   | value          | df > | `+inf` for | `NaN` for |
    /// |----------|----------------|------|------------|-----------|
    /// | mean     | 0              | 1    |            | df <= 1   |
    /// | variance | df / (df - 2)  | 2    | 1 < df <= 2 | df <= 1  |
    /// | skewness | 0              | 3    |            | df <= 3   |
    /// | kurtosis | 6 / (df - 4)   | 4    | 2 < df <= 4 | df <= 2  |
    pub fn student_t(df: f64) -> Result<Self, TDistError> {
        check_degrees_of_freedom(df)?;

        let mean = if df > 1.0 { 0.0 } else { f64::NAN };
        let variance = if df > 2.0 {
            df / (df - 2.0)
        } else if df > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        };
        let skewness = if df > 3.0 { 0.0 } else { f64::NAN };
        let kurtosis = if df > 4.0 {
            6.0 / (df - 4.0)
        } else if df > 2.0 {
            f64::INFINITY
        } else {
            f64::NAN
        };

        Ok(Self {
            mean,
            variance,
            skewness,
            kurtosis,
        })
    }
}

impl fmt::Display for Moments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.mean, self.variance, self.skewness, self.kurtosis
        )
    }
}
