//! FDR-controlled selection over a batch of independence tests.
//!
//! Each test asks whether two nodes are independent; its p-value is the
//! evidence against independence. The null of independence is rejected for
//! every test at or below the FDR cutoff, so those pairs are judged
//! dependent. Everything else is judged independent.

use cdt_common::Fact;
use cdt_config::{ConfigError, FdrPolicy};
use cdt_math::{fdr_cutoff_checked, CorrelationMode, FdrError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::oracle::FactSet;

/// One independence test over an unordered node pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndependenceTest {
    pub fact: Fact,
    pub p_value: f64,
}

impl IndependenceTest {
    pub fn new(fact: Fact, p_value: f64) -> Self {
        Self { fact, p_value }
    }
}

/// Result of FDR selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdrSelectionResult {
    pub alpha: f64,
    pub correlation: CorrelationMode,
    /// Whether the multiple testing correction was applied.
    pub corrected: bool,
    /// Rejection threshold; `0.0` means nothing was rejected.
    pub cutoff: f64,
    /// Number of tests considered.
    pub m: usize,
    /// Correction constant `c_m` applied (1.0 when uncorrected).
    pub correction: f64,
    /// Number of tests whose independence null was rejected.
    pub selected_k: usize,
    /// Tests judged dependent.
    pub dependent: Vec<IndependenceTest>,
    /// Tests judged independent.
    pub independent: Vec<IndependenceTest>,
}

impl FdrSelectionResult {
    /// The independence judgments as a fact set.
    pub fn independent_facts(&self) -> FactSet {
        self.independent.iter().map(|t| t.fact.clone()).collect()
    }

    /// The dependence judgments as a fact set.
    pub fn dependent_facts(&self) -> FactSet {
        self.dependent.iter().map(|t| t.fact.clone()).collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("FDR error: {0}")]
    Fdr(#[from] FdrError),

    #[error("invalid policy: {0}")]
    Policy(#[from] ConfigError),
}

impl From<SelectionError> for cdt_common::Error {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::Fdr(e) => cdt_common::Error::MultipleTesting(e.to_string()),
            SelectionError::Policy(e) => e.into(),
        }
    }
}

/// Partition `tests` into dependent and independent judgments under `policy`.
///
/// With the policy enabled the BH/BY cutoff is used; when disabled each test
/// is judged against `alpha` alone. An empty batch yields an empty result.
pub fn select_fdr(
    tests: &[IndependenceTest],
    policy: &FdrPolicy,
) -> Result<FdrSelectionResult, SelectionError> {
    policy.validate()?;

    let m = tests.len();
    // `threshold` is None when nothing can be rejected.
    let (cutoff, correction, threshold) = if m == 0 {
        (0.0, 1.0, None)
    } else if policy.enabled {
        let p_values: Vec<f64> = tests.iter().map(|t| t.p_value).collect();
        let result = fdr_cutoff_checked(policy.alpha, &p_values, policy.correlation)?;
        (
            result.cutoff,
            result.correction,
            result.rejects_any().then_some(result.cutoff),
        )
    } else {
        (policy.alpha, 1.0, Some(policy.alpha))
    };

    let (dependent, independent): (Vec<_>, Vec<_>) = tests
        .iter()
        .cloned()
        .partition(|t| threshold.is_some_and(|c| t.p_value <= c));

    for test in &dependent {
        trace!(fact = %test.fact, p_value = test.p_value, "independence rejected");
    }
    debug!(
        m,
        alpha = policy.alpha,
        correlation = %policy.correlation,
        corrected = policy.enabled,
        cutoff,
        selected_k = dependent.len(),
        "fdr selection complete"
    );

    Ok(FdrSelectionResult {
        alpha: policy.alpha,
        correlation: policy.correlation,
        corrected: policy.enabled,
        cutoff,
        m,
        correction,
        selected_k: dependent.len(),
        dependent,
        independent,
    })
}
