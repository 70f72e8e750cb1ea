//! Golden file integration tests.
//!
//! Reads tests/testdata/products_golden.json and verifies every registered
//! multiplier reproduces the known products.

use std::sync::Arc;

use nttmul_core::digits::DigitVector;
use nttmul_core::multiplier::{MulError, Multiplier};
use nttmul_core::options::Options;
use nttmul_core::registry::{DefaultFactory, MultiplierFactory};
use nttmul_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};
use nttmul_tests::load_golden_data;

/// Schoolbook is quadratic; skip it above this many digit pairs.
const SCHOOLBOOK_WORK_LIMIT: usize = 25_000_000;

fn all_multipliers() -> Vec<Arc<dyn Multiplier>> {
    let factory = DefaultFactory::new();
    factory
        .available()
        .into_iter()
        .map(|name| factory.get(name).unwrap())
        .collect()
}

fn compute(m: &dyn Multiplier, a: &str, b: &str) -> Result<String, MulError> {
    let a = DigitVector::parse(a)?;
    let b = DigitVector::parse(b)?;
    Ok(m.multiply(&a, &b, &Options::default())?.render())
}

// ---------------------------------------------------------------------------
// Golden: exact values
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_all_multipliers() {
    let data = load_golden_data().expect("failed to load golden file");
    assert!(!data.values.is_empty(), "{}", data.description);
    for m in all_multipliers() {
        for entry in &data.values {
            let result = compute(m.as_ref(), &entry.a, &entry.b).unwrap();
            assert_eq!(
                result,
                entry.product,
                "{} mismatch for {} digits x {} digits",
                m.name(),
                entry.a.len(),
                entry.b.len(),
            );
        }
    }
}

#[test]
fn golden_exact_commuted() {
    let ntt = DefaultFactory::new().get("ntt").unwrap();
    let data = load_golden_data().unwrap();
    for entry in &data.values {
        assert_eq!(compute(ntt.as_ref(), &entry.b, &entry.a).unwrap(), entry.product);
    }
}

// ---------------------------------------------------------------------------
// Golden: repdigit patterns (prefix, suffix & digit count)
// ---------------------------------------------------------------------------

#[test]
fn golden_patterns() {
    let data = load_golden_data().unwrap();
    for m in all_multipliers() {
        for pattern in &data.patterns {
            if m.name() == "Schoolbook" && pattern.len_a * pattern.len_b > SCHOOLBOOK_WORK_LIMIT {
                continue;
            }
            let (a, b) = pattern.operands();
            let s = compute(m.as_ref(), &a, &b).unwrap();
            assert_eq!(
                s.len(),
                pattern.product_digits,
                "{} digit count mismatch for {}x{}",
                m.name(),
                pattern.len_a,
                pattern.len_b,
            );
            assert!(
                s.starts_with(&pattern.product_prefix),
                "{} prefix mismatch for {}x{}",
                m.name(),
                pattern.len_a,
                pattern.len_b,
            );
            assert!(
                s.ends_with(&pattern.product_suffix),
                "{} suffix mismatch for {}x{}",
                m.name(),
                pattern.len_a,
                pattern.len_b,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Cross-algorithm agreement through the orchestrator
// ---------------------------------------------------------------------------

#[test]
fn orchestrated_comparison_agrees() {
    let data = load_golden_data().unwrap();
    let multipliers = all_multipliers();
    for entry in &data.values {
        let a = DigitVector::parse(&entry.a).unwrap();
        let b = DigitVector::parse(&entry.b).unwrap();
        let results = execute_multiplications(&multipliers, &a, &b, &Options::default());
        assert_eq!(results.len(), 3);
        assert!(analyze_comparison_results(&results).is_ok());
    }
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn edge_case_zero_operands() {
    for m in all_multipliers() {
        assert_eq!(compute(m.as_ref(), "0", "0").unwrap(), "0", "{}", m.name());
        assert_eq!(compute(m.as_ref(), "0000", "98765").unwrap(), "0", "{}", m.name());
    }
}

#[test]
fn edge_case_invalid_input() {
    for m in all_multipliers() {
        assert_eq!(
            compute(m.as_ref(), "12-3", "4"),
            Err(MulError::InvalidDigit {
                position: 2,
                found: '-'
            }),
            "{}",
            m.name(),
        );
        assert_eq!(compute(m.as_ref(), "", "4"), Err(MulError::EmptyNumeral));
    }
}

#[test]
fn edge_case_transform_limit() {
    let ntt = DefaultFactory::new().get("ntt").unwrap();
    let opts = Options {
        max_transform_size: 16,
        memory_limit: 0,
    };
    let a = DigitVector::parse(&"9".repeat(8)).unwrap();
    let fits = ntt.multiply(&a, &a, &opts).unwrap();
    assert_eq!(fits.render(), "9999999800000001");

    let b = DigitVector::parse(&"9".repeat(9)).unwrap();
    assert_eq!(
        ntt.multiply(&a, &b, &opts),
        Err(MulError::UnsupportedTransformSize {
            required: 32,
            max: 16
        })
    );
}

#[test]
fn invalid_algorithm_name() {
    let factory = DefaultFactory::new();
    assert!(matches!(factory.get("nonexistent"), Err(MulError::Config(_))));
}
