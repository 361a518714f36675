//! Method enumeration over the inheritance chain.
//!
//! [`MethodEnumerator::enumerate`] produces the publicly invocable methods of
//! a type: the type's own declared methods first, then each ancestor's in
//! turn. A method overridden in a subtype is reported once, as the subtype's
//! version; ancestor declarations with an already-seen signature are
//! suppressed.
//!
//! The per-level discovery step is pluggable through [`EnumerationStrategy`].
//! The default [`DeclaredMethods`] strategy reports public methods only;
//! [`AllVisibilities`] also reports private ones. Tests inject alternates via
//! [`MethodEnumerator::with_strategy`]; the strategy is fixed at construction,
//! so the enumerator is freely shareable across threads.
//!
//! # Example
//!
//! ```rust
//! use proteus_introspect::{
//!     MethodDescriptor, MethodEnumerator, TypeDescriptor, TypeRegistry,
//! };
//!
//! let registry = TypeRegistry::builder()
//!     .register(
//!         TypeDescriptor::builder("EntityBase")
//!             .method(MethodDescriptor::builder("audit").build())
//!             .build(),
//!     )
//!     .register(
//!         TypeDescriptor::builder("OrderEntity")
//!             .parent("EntityBase")
//!             .method(MethodDescriptor::builder("place_order").build())
//!             .build(),
//!     )
//!     .build();
//!
//! let methods = MethodEnumerator::new().enumerate(&registry, &"OrderEntity".into());
//! let names: Vec<&str> = methods.iter().map(|m| m.name()).collect();
//! assert_eq!(names, vec!["place_order", "audit"]);
//! ```

use crate::descriptor::{MethodDescriptor, TypeName};
use crate::registry::TypeIntrospector;
use crate::well_known;
use std::collections::HashSet;
use std::sync::Arc;

/// Pluggable per-level method discovery.
///
/// A strategy reports the methods *declared at one level* of a type's
/// inheritance chain; the [`MethodEnumerator`] owns the chain walk and the
/// override suppression.
pub trait EnumerationStrategy: Send + Sync {
    /// Returns the methods declared directly on `ty` that this strategy
    /// considers discoverable.
    fn declared_methods(
        &self,
        introspector: &dyn TypeIntrospector,
        ty: &TypeName,
    ) -> Vec<MethodDescriptor>;
}

/// Default strategy: methods declared at the level, public only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredMethods;

impl EnumerationStrategy for DeclaredMethods {
    fn declared_methods(
        &self,
        introspector: &dyn TypeIntrospector,
        ty: &TypeName,
    ) -> Vec<MethodDescriptor> {
        introspector
            .list_methods(ty)
            .iter()
            .filter(|m| m.visibility().is_public())
            .cloned()
            .collect()
    }
}

/// Alternate strategy reporting methods of every visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllVisibilities;

impl EnumerationStrategy for AllVisibilities {
    fn declared_methods(
        &self,
        introspector: &dyn TypeIntrospector,
        ty: &TypeName,
    ) -> Vec<MethodDescriptor> {
        introspector.list_methods(ty).to_vec()
    }
}

/// Walks the inheritance chain and yields each invocable method once.
#[derive(Clone)]
pub struct MethodEnumerator {
    strategy: Arc<dyn EnumerationStrategy>,
}

impl Default for MethodEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodEnumerator {
    /// Creates an enumerator with the default [`DeclaredMethods`] strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategy: Arc::new(DeclaredMethods),
        }
    }

    /// Creates an enumerator with an injected strategy.
    #[must_use]
    pub fn with_strategy(strategy: Arc<dyn EnumerationStrategy>) -> Self {
        Self { strategy }
    }

    /// Enumerates the invocable methods of `ty`, subtype methods first.
    ///
    /// If the type has no declared parent (or its parent is the universal
    /// root), the result is exactly the type's own discoverable methods.
    /// Otherwise the type's declared methods come first, followed by the
    /// recursive enumeration of the parent; an ancestor declaration whose
    /// signature was already produced at a more derived level is suppressed.
    ///
    /// Unknown or malformed types yield an empty or best-effort list; this
    /// component validates structure, not semantics.
    #[must_use]
    pub fn enumerate(
        &self,
        introspector: &dyn TypeIntrospector,
        ty: &TypeName,
    ) -> Vec<MethodDescriptor> {
        let mut methods = Vec::new();
        let mut seen: HashSet<(String, Vec<TypeName>)> = HashSet::new();
        let mut visited: HashSet<TypeName> = HashSet::new();
        self.collect(introspector, ty, &mut methods, &mut seen, &mut visited);
        methods
    }

    fn collect(
        &self,
        introspector: &dyn TypeIntrospector,
        ty: &TypeName,
        methods: &mut Vec<MethodDescriptor>,
        seen: &mut HashSet<(String, Vec<TypeName>)>,
        visited: &mut HashSet<TypeName>,
    ) {
        // Guards against cyclic parent declarations in malformed tables.
        if !visited.insert(ty.clone()) {
            return;
        }
        let Some(descriptor) = introspector.descriptor(ty) else {
            return;
        };

        for method in self.strategy.declared_methods(introspector, ty) {
            let signature = (
                method.name().to_string(),
                method
                    .parameters()
                    .iter()
                    .map(|p| p.declared_type().clone())
                    .collect(),
            );
            if seen.insert(signature) {
                methods.push(method);
            } else {
                tracing::debug!(
                    method = method.name(),
                    declared_in = %ty,
                    "Ancestor declaration suppressed by override"
                );
            }
        }

        match descriptor.parent() {
            None => {}
            Some(parent) if parent.as_str() == well_known::ROOT => {}
            Some(parent) => self.collect(introspector, parent, methods, seen, visited),
        }
    }
}
