//! Test fixtures for Proteus development and testing.
//!
//! This module provides a pre-built descriptor table for an order-management
//! entity that tests across the Proteus codebase share.
//!
//! # Example
//!
//! ```
//! use proteus_introspect::fixtures;
//!
//! let registry = fixtures::order_registry();
//! assert!(registry.get(&"OrderEntity".into()).is_some());
//! ```

use crate::descriptor::{MethodDescriptor, ParameterDescriptor, TypeDescriptor, Visibility};
use crate::marker::{EntityFlavor, Marker};
use crate::registry::TypeRegistry;
use crate::well_known;

/// Creates a registry describing an order-management entity.
///
/// Context hierarchy (all rooted at the context capability):
/// - `CommandContext` - implements `Context`
/// - `TimedCommandContext` - implements `CommandContext`
/// - `JournalContext` - implements `Context` (sibling of `CommandContext`)
///
/// Entity chain:
/// - `OrderEntityBase` - declares public `audit(Context)` and private
///   `rehydrate()`
/// - `OrderEntity` - extends `OrderEntityBase`; declares
///   `place_order(CommandContext, String entity-id, OrderRequest)` and
///   `cancel_order(String entity-id, CommandContext)`, and overrides
///   `audit(Context)`
///
/// # Example
///
/// ```
/// use proteus_introspect::fixtures::order_registry;
///
/// let registry = order_registry();
/// let entity = registry.get(&"OrderEntity".into()).unwrap();
/// assert_eq!(entity.methods().len(), 3);
/// ```
#[must_use]
pub fn order_registry() -> TypeRegistry {
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
        .register(
            TypeDescriptor::builder("JournalContext")
                .capability(well_known::context())
                .build(),
        )
        .register(TypeDescriptor::builder("OrderRequest").build())
        .register(TypeDescriptor::builder("CancelRequest").build())
        .register(
            TypeDescriptor::builder("OrderEntityBase")
                .method(
                    MethodDescriptor::builder("audit")
                        .parameter(ParameterDescriptor::new(well_known::context()))
                        .build(),
                )
                .method(
                    MethodDescriptor::builder("rehydrate")
                        .visibility(Visibility::Private)
                        .build(),
                )
                .build(),
        )
        .register(
            TypeDescriptor::builder("OrderEntity")
                .parent("OrderEntityBase")
                .method(
                    MethodDescriptor::builder("place_order")
                        .marker(Marker::CommandHandler(EntityFlavor::Journaled))
                        .parameter(ParameterDescriptor::new("CommandContext"))
                        .parameter(
                            ParameterDescriptor::new(well_known::string())
                                .with_marker(Marker::EntityId),
                        )
                        .parameter(ParameterDescriptor::new("OrderRequest"))
                        .build(),
                )
                .method(
                    MethodDescriptor::builder("cancel_order")
                        .marker(Marker::CommandHandler(EntityFlavor::Journaled))
                        .parameter(
                            ParameterDescriptor::new(well_known::string())
                                .with_marker(Marker::EntityId),
                        )
                        .parameter(ParameterDescriptor::new("CommandContext"))
                        .build(),
                )
                .method(
                    MethodDescriptor::builder("audit")
                        .parameter(ParameterDescriptor::new(well_known::context()))
                        .build(),
                )
                .build(),
        )
        .build()
}

/// Looks up a declared method from the fixture registry.
///
/// # Panics
///
/// Panics if the type or method is missing; fixtures are for tests.
#[must_use]
pub fn declared_method(registry: &TypeRegistry, ty: &str, method: &str) -> MethodDescriptor {
    registry
        .get(&ty.into())
        .unwrap_or_else(|| panic!("fixture type {ty} not registered"))
        .method(method)
        .unwrap_or_else(|| panic!("fixture method {ty}::{method} not declared"))
        .clone()
}
