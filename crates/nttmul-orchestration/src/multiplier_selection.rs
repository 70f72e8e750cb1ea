//! Multiplier selection logic.

use std::sync::Arc;

use nttmul_core::multiplier::{MulError, Multiplier};
use nttmul_core::registry::MultiplierFactory;

/// Get multipliers to run based on algorithm selection.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, MulError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
