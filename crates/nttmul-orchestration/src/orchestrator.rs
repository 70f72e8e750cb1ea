//! Core orchestration: timed execution and result analysis.
//!
//! Multipliers run one after another on the calling thread.

use std::sync::Arc;
use std::time::Instant;

use nttmul_core::digits::DigitVector;
use nttmul_core::multiplier::{MulError, Multiplier};
use nttmul_core::options::Options;

use crate::interfaces::CalculationResult;

/// Multiply `a` by `b` with every given multiplier, timing each run.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &DigitVector,
    b: &DigitVector,
    opts: &Options,
) -> Vec<CalculationResult> {
    multipliers
        .iter()
        .map(|m| {
            let span = tracing::debug_span!("multiply", algorithm = m.name());
            let _guard = span.enter();

            let start = Instant::now();
            let outcome = m.multiply(a, b, opts);
            let duration = start.elapsed();

            match &outcome {
                Ok(product) => tracing::debug!(digits = product.significant_len(), ?duration, "done"),
                Err(e) => tracing::debug!(error = %e, "failed"),
            }

            CalculationResult {
                algorithm: m.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Fails with the first error if any run failed, and with `Mismatch` if two
/// runs produced different products.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), MulError> {
    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone());
    }

    let mut valid = results.iter().filter_map(|r| r.product().map(|p| (r, p)));

    let Some((first, first_product)) = valid.next() else {
        return Err(MulError::Config("no multipliers ran".into()));
    };

    // Leading zeros differ between algorithms; compare rendered values.
    let expected = first_product.render();
    for (result, product) in valid {
        if product.render() != expected {
            tracing::warn!(
                first = %first.algorithm,
                other = %result.algorithm,
                "multipliers disagree"
            );
            return Err(MulError::Mismatch);
        }
    }

    Ok(())
}
