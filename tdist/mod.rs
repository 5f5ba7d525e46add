//! # Student's t Sampling and Statistics
//!
//! Draws a reproducible sample from Student's t, summarises it, and reports
//! the closed-form moments of the distribution for a set of degrees of freedom.
//!
//! The random generator is always owned by the caller and passed in by
//! `&mut`, so the same seed reproduces the same sample on every run.

use crate::config::RunConfig;
use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StudentT};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod moments;

pub use moments::Moments;

#[derive(Error, Debug)]
pub enum TDistError {
    #[error("Degrees of freedom must be finite and positive, got {0}.")]
    InvalidDegreesOfFreedom(f64),
    #[error("Cannot summarise an empty sample.")]
    EmptySample,
    #[error("Non-finite value {value} at position {index} of the sample.")]
    NonFiniteSample { index: usize, value: f64 },
    #[error("Reported df {reported} is not among the moment dfs {available:?}.")]
    UnlistedReportedDf { reported: f64, available: Vec<f64> },
}

pub(crate) fn check_degrees_of_freedom(df: f64) -> Result<(), TDistError> {
    if df.is_finite() && df > 0.0 {
        Ok(())
    } else {
        Err(TDistError::InvalidDegreesOfFreedom(df))
    }
}

/// A generator seeded once at creation.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `size` independent values from Student's t with `df` degrees of freedom.
pub fn sample_student_t<R: Rng + ?Sized>(
    rng: &mut R,
    df: f64,
    size: usize,
) -> Result<Array1<f64>, TDistError> {
    check_degrees_of_freedom(df)?;
    let dist = StudentT::new(df).map_err(|_| TDistError::InvalidDegreesOfFreedom(df))?;
    Ok(Array1::from_iter((0..size).map(|_| dist.sample(rng))))
}

/// Descriptive statistics of a sample. `variance` is the population
/// variance (divisor `n`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub len: usize,
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

/// Mean, population variance, min and max of `sample`.
pub fn summarize(sample: ArrayView1<'_, f64>) -> Result<SampleSummary, TDistError> {
    if sample.is_empty() {
        return Err(TDistError::EmptySample);
    }
    if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(TDistError::NonFiniteSample { index, value });
    }

    let len = sample.len();
    let mean = sample.sum() / len as f64;
    let variance = sample.fold(0.0, |acc, &x| acc + (x - mean) * (x - mean)) / len as f64;
    let min = sample.fold(f64::INFINITY, |a, &b| a.min(b));
    let max = sample.fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    Ok(SampleSummary {
        len,
        mean,
        variance,
        min,
        max,
    })
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.mean)?;
        writeln!(f, "{}", self.variance)?;
        writeln!(f, "{}", self.min)?;
        write!(f, "{}", self.max)
    }
}

/// Everything one sampling run produces.
#[derive(Clone, Debug)]
pub struct SamplingReport {
    pub sample: Array1<f64>,
    pub summary: SampleSummary,
    /// Moments for every configured df, in configuration order.
    pub moments: Vec<(f64, Moments)>,
    pub reported_df: f64,
    reported: usize,
}

impl SamplingReport {
    /// The moments selected for printing.
    pub fn reported_moments(&self) -> &Moments {
        &self.moments[self.reported].1
    }
}

/// Seeds a generator, draws the sample, summarises it and computes the
/// theoretical moments for each configured df.
pub fn run_sampling(config: &RunConfig) -> Result<SamplingReport, TDistError> {
    let reported = config
        .moment_dfs
        .iter()
        .position(|&df| df == config.reported_df)
        .ok_or_else(|| TDistError::UnlistedReportedDf {
            reported: config.reported_df,
            available: config.moment_dfs.clone(),
        })?;

    log::info!(
        "Sampling {} values from Student's t (df = {}) with seed {}",
        config.sample_size,
        config.sample_df,
        config.seed
    );
    let mut rng = seeded_rng(config.seed);
    let sample = sample_student_t(&mut rng, config.sample_df, config.sample_size)?;
    let summary = summarize(sample.view())?;

    let mut moments = Vec::with_capacity(config.moment_dfs.len());
    for &df in &config.moment_dfs {
        let m = Moments::student_t(df)?;
        log::debug!("Theoretical moments for df = {df}: {m}");
        moments.push((df, m));
    }

    Ok(SamplingReport {
        sample,
        summary,
        moments,
        reported_df: config.reported_df,
        reported,
    })
}
