//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::bigint::BigUintMultiplier;
use crate::multiplier::{MulError, Multiplier};
use crate::ntt_based::NttMultiplier;
use crate::schoolbook::SchoolbookMultiplier;

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MulError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(name: &str) -> Result<Arc<dyn Multiplier>, MulError> {
        match name {
            "ntt" => Ok(Arc::new(NttMultiplier::new())),
            "schoolbook" | "long" => Ok(Arc::new(SchoolbookMultiplier::new())),
            "bigint" => Ok(Arc::new(BigUintMultiplier::new())),
            _ => Err(MulError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MulError> {
        if let Some(m) = self.cache.read().get(name) {
            return Ok(Arc::clone(m));
        }

        let m = Self::create_multiplier(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["ntt", "schoolbook", "bigint"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_each_multiplier() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("ntt").unwrap().name(), "NTT");
        assert_eq!(factory.get("schoolbook").unwrap().name(), "Schoolbook");
        assert_eq!(factory.get("long").unwrap().name(), "Schoolbook");
        assert_eq!(factory.get("bigint").unwrap().name(), "BigUint");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let first = factory.get("ntt").unwrap();
        let second = factory.get("ntt").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn factory_unknown() {
        let factory = DefaultFactory::new();
        assert!(matches!(factory.get("fft"), Err(MulError::Config(_))));
    }

    #[test]
    fn available_names_resolve() {
        let factory = DefaultFactory::new();
        for name in factory.available() {
            assert!(factory.get(name).is_ok(), "{name} should resolve");
        }
    }
}
