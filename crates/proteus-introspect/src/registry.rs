//! The type registry: descriptor tables plus the assignability relation.
//!
//! [`TypeRegistry`] is the default [`TypeIntrospector`] implementation. It is
//! built once at startup (or deserialized from a generated table), immutable
//! afterwards, and shareable across threads behind an `Arc` without locking.
//!
//! # Example
//!
//! ```rust
//! use proteus_introspect::{well_known, TypeDescriptor, TypeRegistry};
//!
//! let registry = TypeRegistry::builder()
//!     .register(
//!         TypeDescriptor::builder("CommandContext")
//!             .capability(well_known::context())
//!             .build(),
//!     )
//!     .build();
//!
//! assert!(registry.is_assignable(&"CommandContext".into(), &well_known::context()));
//! assert!(!registry.is_assignable(&well_known::context(), &"CommandContext".into()));
//! ```

use crate::descriptor::{MethodDescriptor, ParameterDescriptor, TypeDescriptor, TypeName};
use crate::marker::Marker;
use crate::well_known;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Capability interface over the descriptor tables.
///
/// The method enumerator and the binding resolver consume this trait rather
/// than the concrete [`TypeRegistry`], so tests and alternate discovery
/// backends can substitute their own tables.
pub trait TypeIntrospector: Send + Sync {
    /// Looks up the descriptor for a type, if registered.
    fn descriptor(&self, ty: &TypeName) -> Option<&TypeDescriptor>;

    /// Returns `true` when `sub` may be used where `sup` is required.
    ///
    /// The relation is reflexive and follows the parent chain and the
    /// capability closure transitively. Every type is assignable to the
    /// universal root.
    fn is_assignable(&self, sub: &TypeName, sup: &TypeName) -> bool;

    /// Returns the methods declared directly on a type (all visibilities).
    fn list_methods(&self, ty: &TypeName) -> &[MethodDescriptor] {
        self.descriptor(ty).map_or(&[], TypeDescriptor::methods)
    }

    /// Returns a method's formal parameters in declaration order.
    fn list_parameters<'m>(&self, method: &'m MethodDescriptor) -> &'m [ParameterDescriptor] {
        method.parameters()
    }

    /// Returns the markers attached to a parameter.
    fn markers_of<'p>(&self, parameter: &'p ParameterDescriptor) -> &'p [Marker] {
        parameter.markers()
    }
}

/// Insertion-ordered descriptor table for all registered types.
///
/// A fresh registry is pre-seeded with the well-known framework types
/// (universal root, context capability root, service-call factory, string
/// primitive); see [`crate::well_known`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRegistry {
    types: IndexMap<TypeName, TypeDescriptor>,
}

impl TypeRegistry {
    /// Creates a new registry builder, pre-seeded with the well-known types.
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        let mut types = IndexMap::new();
        for seed in [
            TypeDescriptor::builder(well_known::root()).build(),
            TypeDescriptor::builder(well_known::context()).build(),
            TypeDescriptor::builder(well_known::service_call_factory()).build(),
            TypeDescriptor::builder(well_known::string()).build(),
        ] {
            types.insert(seed.name().clone(), seed);
        }
        TypeRegistryBuilder { types }
    }

    /// Looks up a registered type by name.
    #[must_use]
    pub fn get(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Returns `true` if the type is registered.
    #[must_use]
    pub fn contains(&self, name: &TypeName) -> bool {
        self.types.contains_key(name)
    }

    /// Returns the number of registered types, including the well-known seeds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates the registered types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Returns `true` when `sub` may be used where `sup` is required.
    ///
    /// See [`TypeIntrospector::is_assignable`].
    #[must_use]
    pub fn is_assignable(&self, sub: &TypeName, sup: &TypeName) -> bool {
        if sub == sup || sup.as_str() == well_known::ROOT {
            return true;
        }

        // Walk the parent chain and capability closure from `sub`.
        let mut seen: HashSet<&TypeName> = HashSet::new();
        let mut pending: Vec<&TypeName> = vec![sub];
        while let Some(current) = pending.pop() {
            if current == sup {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(descriptor) = self.types.get(current) {
                if let Some(parent) = descriptor.parent() {
                    pending.push(parent);
                }
                pending.extend(descriptor.capabilities());
            }
        }
        false
    }
}

impl TypeIntrospector for TypeRegistry {
    fn descriptor(&self, ty: &TypeName) -> Option<&TypeDescriptor> {
        self.types.get(ty)
    }

    fn is_assignable(&self, sub: &TypeName, sup: &TypeName) -> bool {
        Self::is_assignable(self, sub, sup)
    }
}

/// Builder for [`TypeRegistry`].
#[derive(Debug)]
pub struct TypeRegistryBuilder {
    types: IndexMap<TypeName, TypeDescriptor>,
}

impl TypeRegistryBuilder {
    /// Registers a type, replacing any previous registration of the same name.
    #[must_use]
    pub fn register(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.insert(descriptor.name().clone(), descriptor);
        self
    }

    /// Builds the immutable registry.
    #[must_use]
    pub fn build(self) -> TypeRegistry {
        TypeRegistry { types: self.types }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;

    fn registry_with_chain() -> TypeRegistry {
        TypeRegistry::builder()
            .register(
                TypeDescriptor::builder("CommandContext")
                    .capability(well_known::context())
                    .build(),
            )
            .register(
                TypeDescriptor::builder("TimedCommandContext")
                    .capability("CommandContext")
                    .build(),
            )
            .register(TypeDescriptor::builder("OrderRequest").build())
            .build()
    }

    #[test]
    fn test_builder_seeds_well_known_types() {
        let registry = TypeRegistry::builder().build();
        assert!(registry.contains(&well_known::root()));
        assert!(registry.contains(&well_known::context()));
        assert!(registry.contains(&well_known::service_call_factory()));
        assert!(registry.contains(&well_known::string()));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_assignability_is_reflexive() {
        let registry = registry_with_chain();
        let name = TypeName::new("OrderRequest");
        assert!(registry.is_assignable(&name, &name));
    }

    #[test]
    fn test_everything_is_assignable_to_root() {
        let registry = registry_with_chain();
        assert!(registry.is_assignable(&"OrderRequest".into(), &well_known::root()));
        // Even unregistered names: the root is universal.
        assert!(registry.is_assignable(&"NotRegistered".into(), &well_known::root()));
    }

    #[test]
    fn test_capability_closure_is_transitive() {
        let registry = registry_with_chain();
        assert!(registry.is_assignable(&"TimedCommandContext".into(), &"CommandContext".into()));
        assert!(registry.is_assignable(&"TimedCommandContext".into(), &well_known::context()));
    }

    #[test]
    fn test_assignability_is_directional() {
        let registry = registry_with_chain();
        assert!(!registry.is_assignable(&well_known::context(), &"CommandContext".into()));
        assert!(!registry.is_assignable(&"OrderRequest".into(), &well_known::context()));
    }

    #[test]
    fn test_parent_chain_assignability() {
        let registry = TypeRegistry::builder()
            .register(TypeDescriptor::builder("EntityBase").build())
            .register(TypeDescriptor::builder("OrderEntity").parent("EntityBase").build())
            .build();

        assert!(registry.is_assignable(&"OrderEntity".into(), &"EntityBase".into()));
        assert!(!registry.is_assignable(&"EntityBase".into(), &"OrderEntity".into()));
    }

    #[test]
    fn test_cyclic_tables_terminate() {
        // Malformed input is tolerated structurally: no semantic validation.
        let registry = TypeRegistry::builder()
            .register(TypeDescriptor::builder("A").parent("B").build())
            .register(TypeDescriptor::builder("B").parent("A").build())
            .build();

        assert!(!registry.is_assignable(&"A".into(), &"C".into()));
        assert!(registry.is_assignable(&"A".into(), &"B".into()));
    }

    #[test]
    fn test_registration_replaces_same_name() {
        let registry = TypeRegistry::builder()
            .register(TypeDescriptor::builder("Widget").build())
            .register(TypeDescriptor::builder("Widget").parent("Any").build())
            .build();

        assert_eq!(registry.get(&"Widget".into()).unwrap().parent(), Some(&"Any".into()));
    }

    #[test]
    fn test_serde_round_trip_preserves_tables() {
        let registry = registry_with_chain();
        let json = serde_json::to_string(&registry).expect("serialization should work");
        let restored: TypeRegistry = serde_json::from_str(&json).expect("deserialization should work");
        assert_eq!(registry, restored);
    }
}
