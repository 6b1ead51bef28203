//! False discovery rate cutoffs for multiple hypothesis testing.
//!
//! Implements the Benjamini–Hochberg step-up procedure and its
//! Benjamini–Yekutieli variant. Given m p-values sorted ascending, the cutoff
//! rank is the largest k with
//!
//! ```text
//! p_(k) <= k / (m * c_m) * alpha
//! ```
//!
//! where `c_m = 1` when the tests are independent or positively correlated and
//! `c_m = H_m = sum_{i=1}^{m} 1/i` when they may be negatively correlated (or no
//! dependence assumption is made). Every hypothesis with `p <= p_(k)` is
//! rejected. If no rank qualifies the cutoff is `0` and nothing is rejected.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Dependence assumption among the test statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMode {
    /// Independent or positively correlated statistics (Benjamini–Hochberg).
    #[default]
    Independent,
    /// Negatively correlated statistics, or no assumption (Benjamini–Yekutieli).
    Negative,
}

impl CorrelationMode {
    pub fn from_negatively_correlated(negatively_correlated: bool) -> Self {
        if negatively_correlated {
            CorrelationMode::Negative
        } else {
            CorrelationMode::Independent
        }
    }

    pub fn is_negative(self) -> bool {
        self == CorrelationMode::Negative
    }

    /// Correction constant `c_m` for `m` tests.
    pub fn correction_factor(self, m: usize) -> f64 {
        match self {
            CorrelationMode::Independent => 1.0,
            CorrelationMode::Negative => by_correction_factor(m),
        }
    }
}

impl std::fmt::Display for CorrelationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationMode::Independent => write!(f, "independent"),
            CorrelationMode::Negative => write!(f, "negative"),
        }
    }
}

/// Benjamini–Yekutieli correction factor: the m-th harmonic number.
///
/// Returns `0.0` for `m == 0`.
pub fn by_correction_factor(m: usize) -> f64 {
    (1..=m).map(|i| 1.0 / i as f64).sum()
}

/// Outcome of a step-up FDR computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FdrCutoff {
    /// Largest qualifying p-value, or `0.0` when nothing qualifies.
    pub cutoff: f64,
    /// 1-based rank of the cutoff in the sorted p-values; `0` when nothing qualifies.
    pub rank: usize,
    /// Number of hypotheses tested.
    pub m: usize,
    /// Correction constant `c_m` that was applied.
    pub correction: f64,
}

impl FdrCutoff {
    /// Whether any hypothesis is rejected.
    pub fn rejects_any(&self) -> bool {
        self.rank > 0
    }

    /// Whether a hypothesis with p-value `p` is rejected at this cutoff.
    pub fn rejects(&self, p: f64) -> bool {
        self.rank > 0 && p <= self.cutoff
    }
}

/// Invalid input to [`fdr_cutoff_checked`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FdrError {
    #[error("no p-values supplied")]
    EmptyInput,

    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("p-value at index {index} must be in [0, 1], got {value}")]
    InvalidPValue { index: usize, value: f64 },
}

/// FDR cutoff over `p_values` at significance level `alpha`.
///
/// Returns the largest p-value whose use as a rejection threshold controls the
/// false discovery rate at `alpha`, or `0.0` if no p-value qualifies. The
/// caller's slice is not reordered.
///
/// Preconditions are not checked: `alpha` should lie in (0, 1) and
/// `p_values` should be non-empty. An empty slice yields `0.0`. NaN p-values
/// never qualify. Use [`fdr_cutoff_checked`] to validate inputs.
pub fn fdr_cutoff(alpha: f64, p_values: &[f64], negatively_correlated: bool) -> f64 {
    step_up(
        alpha,
        p_values,
        CorrelationMode::from_negatively_correlated(negatively_correlated),
    )
    .cutoff
}

/// Validating form of [`fdr_cutoff`] that also reports the cutoff rank.
pub fn fdr_cutoff_checked(
    alpha: f64,
    p_values: &[f64],
    mode: CorrelationMode,
) -> Result<FdrCutoff, FdrError> {
    if p_values.is_empty() {
        return Err(FdrError::EmptyInput);
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(FdrError::InvalidAlpha(alpha));
    }
    if let Some((index, &value)) = p_values
        .iter()
        .enumerate()
        .find(|(_, p)| !(0.0..=1.0).contains(*p))
    {
        return Err(FdrError::InvalidPValue { index, value });
    }
    Ok(step_up(alpha, p_values, mode))
}

fn step_up(alpha: f64, p_values: &[f64], mode: CorrelationMode) -> FdrCutoff {
    let m = p_values.len();
    let correction = mode.correction_factor(m);
    let none = FdrCutoff {
        cutoff: 0.0,
        rank: 0,
        m,
        correction,
    };
    if m == 0 {
        return none;
    }

    let mut sorted = p_values.to_vec();
    sorted.sort_by(nan_last);

    let denom = m as f64 * correction;
    for (idx, &p) in sorted.iter().enumerate().rev() {
        let rank = idx + 1;
        if p <= (rank as f64 / denom) * alpha {
            return FdrCutoff {
                cutoff: p,
                rank,
                m,
                correction,
            };
        }
    }
    none
}

/// Ascending order with NaN of either sign after every number.
fn nan_last(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: [f64; 9] = [0.8, 0.01, 0.2, 0.07, 0.003, 0.9, 0.05, 0.03, 0.0001];

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn bh_reference_case() {
        assert_eq!(fdr_cutoff(0.05, &P, false), 0.01);
    }

    #[test]
    fn by_reference_case() {
        assert_eq!(fdr_cutoff(0.05, &P, true), 0.003);
    }

    #[test]
    fn checked_reports_rank() {
        let bh = fdr_cutoff_checked(0.05, &P, CorrelationMode::Independent).unwrap();
        assert_eq!(bh.rank, 3);
        assert_eq!(bh.m, 9);
        assert_eq!(bh.correction, 1.0);
        assert!(bh.rejects(0.01));
        assert!(!bh.rejects(0.03));

        let by = fdr_cutoff_checked(0.05, &P, CorrelationMode::Negative).unwrap();
        assert_eq!(by.rank, 2);
        assert!(approx_eq(by.correction, by_correction_factor(9), 1e-15));
    }

    #[test]
    fn caller_slice_not_reordered() {
        let p = P;
        let _ = fdr_cutoff(0.05, &p, false);
        assert_eq!(p, P);
    }

    #[test]
    fn nothing_qualifies_yields_zero() {
        let p = [0.5, 0.6, 0.9];
        assert_eq!(fdr_cutoff(0.05, &p, false), 0.0);
        let result = fdr_cutoff_checked(0.05, &p, CorrelationMode::Independent).unwrap();
        assert!(!result.rejects_any());
        assert!(!result.rejects(0.0));
    }

    #[test]
    fn all_qualify_yields_max() {
        let p = [0.001, 0.002, 0.003];
        assert_eq!(fdr_cutoff(0.05, &p, false), 0.003);
    }

    #[test]
    fn step_up_skips_failing_low_ranks() {
        // Rank 1 fails (0.02 > 0.0125) but rank 4 passes (0.04 <= 0.05).
        let p = [0.02, 0.03, 0.035, 0.04];
        assert_eq!(fdr_cutoff(0.05, &p, false), 0.04);
    }

    #[test]
    fn duplicates_are_allowed() {
        let p = [0.01, 0.01, 0.01, 0.9];
        assert_eq!(fdr_cutoff(0.05, &p, false), 0.01);
    }

    #[test]
    fn empty_input_is_zero_unchecked() {
        assert_eq!(fdr_cutoff(0.05, &[], false), 0.0);
        assert_eq!(fdr_cutoff(0.05, &[], true), 0.0);
    }

    #[test]
    fn nan_never_qualifies() {
        let p = [f64::NAN, 0.001];
        assert_eq!(fdr_cutoff(0.05, &p, false), 0.001);
    }

    #[test]
    fn nan_sign_does_not_shift_ranks() {
        assert_eq!(fdr_cutoff(0.05, &[f64::NAN, 0.04], false), 0.0);
        assert_eq!(fdr_cutoff(0.05, &[-f64::NAN, 0.04], false), 0.0);
        assert_eq!(fdr_cutoff(0.05, &[0.04, -f64::NAN], true), 0.0);

        let p = [-f64::NAN, 0.02, f64::NAN, 0.001];
        let result = step_up(0.05, &p, CorrelationMode::Independent);
        assert_eq!(result.rank, 2);
        assert_eq!(result.cutoff, 0.02);
    }

    #[test]
    fn checked_rejects_bad_input() {
        assert_eq!(
            fdr_cutoff_checked(0.05, &[], CorrelationMode::Independent),
            Err(FdrError::EmptyInput)
        );
        assert_eq!(
            fdr_cutoff_checked(1.0, &P, CorrelationMode::Independent),
            Err(FdrError::InvalidAlpha(1.0))
        );
        assert!(matches!(
            fdr_cutoff_checked(f64::NAN, &P, CorrelationMode::Independent),
            Err(FdrError::InvalidAlpha(_))
        ));
        assert_eq!(
            fdr_cutoff_checked(0.05, &[0.1, 1.5], CorrelationMode::Negative),
            Err(FdrError::InvalidPValue {
                index: 1,
                value: 1.5
            })
        );
        assert!(matches!(
            fdr_cutoff_checked(0.05, &[f64::NAN], CorrelationMode::Negative),
            Err(FdrError::InvalidPValue { index: 0, .. })
        ));
    }

    #[test]
    fn harmonic_numbers() {
        assert_eq!(by_correction_factor(0), 0.0);
        assert_eq!(by_correction_factor(1), 1.0);
        assert!(approx_eq(by_correction_factor(2), 1.5, 1e-15));
        assert!(approx_eq(by_correction_factor(4), 25.0 / 12.0, 1e-15));
    }

    #[test]
    fn correlation_mode_serde() {
        let json = serde_json::to_string(&CorrelationMode::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
        let back: CorrelationMode = serde_json::from_str("\"independent\"").unwrap();
        assert_eq!(back, CorrelationMode::Independent);
        assert_eq!(CorrelationMode::default(), CorrelationMode::Independent);
    }
}
