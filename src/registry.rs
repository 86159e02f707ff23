//! Implementation registry.
//!
//! The generative resolver needs to know which `(base, arity)` pairs have
//! an implementation, so that an invocation with a count nobody defined
//! fails resolution instead of silently emitting a name that resolves
//! nowhere. The registry holds that table, either built programmatically
//! or loaded from a TOML manifest:
//!
//! ```toml
//! [[implementation]]
//! base = "LOG"
//! arities = [0, 1, 2]
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use string_interner::{DefaultStringInterner, DefaultSymbol};
use thiserror::Error;

use crate::resolver::{is_identifier, MAX_ARITY};

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest error: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("`{name}` is not a valid base identifier")]
    InvalidBase { name: String },

    #[error("arity {arity} of `{base}` exceeds the supported maximum of {max}", max = MAX_ARITY)]
    ArityOutOfRange { base: String, arity: u8 },

    #[error("duplicate implementation: `{base}` already has a {arity}-argument form")]
    DuplicateImplementation { base: String, arity: u8 },
}

/// The table of defined implementations, keyed by base name.
///
/// Base names are interned; per-base arity lists stay sorted so that
/// diagnostics can list the defined counts in order.
#[derive(Debug, Default)]
pub struct ImplRegistry {
    interner: DefaultStringInterner,
    families: IndexMap<DefaultSymbol, Vec<u8>>,
}

impl ImplRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            interner: DefaultStringInterner::new(),
            families: IndexMap::new(),
        }
    }

    /// Builds a registry from a parsed manifest.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in &manifest.implementations {
            for &arity in &entry.arities {
                registry.register(&entry.base, arity)?;
            }
        }
        Ok(registry)
    }

    /// Registers a `(base, arity)` implementation.
    pub fn register(&mut self, base: &str, arity: u8) -> Result<(), RegistryError> {
        if !is_identifier(base) {
            return Err(RegistryError::InvalidBase {
                name: base.to_string(),
            });
        }
        if usize::from(arity) > MAX_ARITY {
            return Err(RegistryError::ArityOutOfRange {
                base: base.to_string(),
                arity,
            });
        }

        let symbol = self.interner.get_or_intern(base);
        let arities = self.families.entry(symbol).or_default();
        match arities.binary_search(&arity) {
            Ok(_) => Err(RegistryError::DuplicateImplementation {
                base: base.to_string(),
                arity,
            }),
            Err(pos) => {
                arities.insert(pos, arity);
                Ok(())
            }
        }
    }

    /// Returns true if a `(base, arity)` implementation is defined.
    pub fn contains(&self, base: &str, arity: u8) -> bool {
        self.interner
            .get(base)
            .and_then(|symbol| self.families.get(&symbol))
            .map(|arities| arities.binary_search(&arity).is_ok())
            .unwrap_or(false)
    }

    /// The sorted arities defined for a base name (empty if unknown).
    pub fn defined_arities(&self, base: &str) -> Vec<u8> {
        self.interner
            .get(base)
            .and_then(|symbol| self.families.get(&symbol))
            .cloned()
            .unwrap_or_default()
    }

    /// Iterates over registered base names in registration order.
    pub fn bases(&self) -> impl Iterator<Item = &str> {
        self.families
            .keys()
            .filter_map(|symbol| self.interner.resolve(*symbol))
    }

    /// Number of registered base-name families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// A manifest describing the implementations available for resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// The implementation families.
    #[serde(rename = "implementation", default)]
    pub implementations: Vec<ManifestEntry>,
}

/// One implementation family in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// The base name implementations share.
    pub base: String,
    /// The argument counts that have an implementation.
    pub arities: Vec<u8>,
}

impl Manifest {
    /// Parses a manifest from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes the manifest to TOML text.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// An example manifest, used by `varity manifest`.
    pub fn example() -> Self {
        Self {
            implementations: vec![
                ManifestEntry {
                    base: "LOG".to_string(),
                    arities: vec![0, 1, 2],
                },
                ManifestEntry {
                    base: "bind_fn_impl_".to_string(),
                    arities: vec![1, 2],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_and_query() {
        let mut registry = ImplRegistry::new();
        registry.register("LOG", 0).unwrap();
        registry.register("LOG", 2).unwrap();
        registry.register("LOG", 1).unwrap();

        assert!(registry.contains("LOG", 1));
        assert!(!registry.contains("LOG", 3));
        assert!(!registry.contains("TRACE", 1));
        assert_eq!(registry.defined_arities("LOG"), vec![0, 1, 2]);
        assert_eq!(registry.defined_arities("TRACE"), Vec::<u8>::new());
    }

    #[test]
    fn test_register_rejects_invalid_base() {
        let mut registry = ImplRegistry::new();
        assert!(matches!(
            registry.register("9lives", 1),
            Err(RegistryError::InvalidBase { .. })
        ));
        assert!(matches!(
            registry.register("has space", 1),
            Err(RegistryError::InvalidBase { .. })
        ));
    }

    #[test]
    fn test_register_rejects_out_of_range_arity() {
        let mut registry = ImplRegistry::new();
        assert!(matches!(
            registry.register("LOG", 10),
            Err(RegistryError::ArityOutOfRange { arity: 10, .. })
        ));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ImplRegistry::new();
        registry.register("LOG", 1).unwrap();
        assert!(matches!(
            registry.register("LOG", 1),
            Err(RegistryError::DuplicateImplementation { arity: 1, .. })
        ));
    }

    #[test]
    fn test_manifest_round_trip() {
        let manifest = Manifest::example();
        let text = manifest.to_toml_string();
        let parsed = Manifest::from_toml_str(&text).unwrap();
        assert_eq!(parsed.implementations.len(), 2);
        assert_eq!(parsed.implementations[0].base, "LOG");
        assert_eq!(parsed.implementations[0].arities, vec![0, 1, 2]);
    }

    #[test]
    fn test_manifest_to_registry() {
        let manifest = Manifest::from_toml_str(
            r#"
            [[implementation]]
            base = "LOG"
            arities = [0, 1, 2]
            "#,
        )
        .unwrap();

        let registry = ImplRegistry::from_manifest(&manifest).unwrap();
        assert!(registry.contains("LOG", 2));
        assert!(!registry.contains("LOG", 3));
    }

    #[test]
    fn test_manifest_rejects_oversized_arity() {
        let manifest = Manifest::from_toml_str(
            r#"
            [[implementation]]
            base = "LOG"
            arities = [0, 12]
            "#,
        )
        .unwrap();

        assert!(matches!(
            ImplRegistry::from_manifest(&manifest),
            Err(RegistryError::ArityOutOfRange { arity: 12, .. })
        ));
    }

    #[test]
    fn test_bases_iterates_in_registration_order() {
        let mut registry = ImplRegistry::new();
        registry.register("LOG", 0).unwrap();
        registry.register("ASSERT", 1).unwrap();
        let bases: Vec<_> = registry.bases().collect();
        assert_eq!(bases, vec!["LOG", "ASSERT"]);
    }
}
