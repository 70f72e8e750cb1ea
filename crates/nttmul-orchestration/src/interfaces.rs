//! Orchestration interfaces.

use std::time::Duration;

use nttmul_core::digits::DigitVector;
use nttmul_core::multiplier::MulError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a product.
    fn present_result(
        &self,
        algorithm: &str,
        product: &DigitVector,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of several runs.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Multiplier name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<DigitVector, MulError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The product, if the run succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&DigitVector> {
        self.outcome.as_ref().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_result() {
        let result = CalculationResult {
            algorithm: "NTT".into(),
            outcome: Ok(DigitVector::from_u64(56_088)),
            duration: Duration::from_millis(100),
        };
        assert_eq!(result.algorithm, "NTT");
        assert_eq!(result.product().map(DigitVector::render).as_deref(), Some("56088"));
    }

    #[test]
    fn failed_result_has_no_product() {
        let result = CalculationResult {
            algorithm: "NTT".into(),
            outcome: Err(MulError::EmptyNumeral),
            duration: Duration::ZERO,
        };
        assert!(result.product().is_none());
    }
}
