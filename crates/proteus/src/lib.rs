//! # Proteus
//!
//! **Entity-handler introspection and parameter binding for the Nereus platform**
//!
//! Proteus reconciles user-defined entity handler signatures with the
//! platform's dynamic dispatch protocol. At registration time it:
//!
//! - enumerates a handler type's publicly invocable methods across its
//!   inheritance chain, reporting each override once
//! - classifies every formal parameter into exactly one binding strategy
//!   (context, service-call factory, entity identifier, or decoded payload)
//! - rejects ill-formed signatures with descriptive errors before any
//!   traffic is served
//!
//! The produced binding plans are cached by the invocation path and applied
//! cheaply on every call; nothing in this crate runs per request.
//!
//! ## Quick Start
//!
//! ```rust
//! use proteus::prelude::*;
//!
//! let registry = TypeRegistry::builder()
//!     .register(
//!         TypeDescriptor::builder("CommandContext")
//!             .capability(well_known::context())
//!             .build(),
//!     )
//!     .register(
//!         TypeDescriptor::builder("CartEntity")
//!             .method(
//!                 MethodDescriptor::builder("add_item")
//!                     .parameter(ParameterDescriptor::new("CommandContext"))
//!                     .parameter(
//!                         ParameterDescriptor::new(well_known::STRING)
//!                             .with_marker(Marker::EntityId),
//!                     )
//!                     .parameter(ParameterDescriptor::new("AddItem"))
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! let methods = MethodEnumerator::new().enumerate(&registry, &"CartEntity".into());
//! let plan = BindingResolver::new(&registry)
//!     .resolve(&methods[0], &"CommandContext".into())
//!     .unwrap();
//!
//! assert_eq!(plan.len(), 3);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! TypeRegistry ──► MethodEnumerator ──► MethodDescriptor*
//!                                            │ (per method, once)
//!                                            ▼
//!                                     BindingResolver ──► BindingPlan
//!                                            │
//!                                            ▼ (out of scope)
//!                                      invocation path
//! ```

#![doc(html_root_url = "https://docs.rs/proteus/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export introspection types
pub use proteus_introspect as introspect;

// Re-export binding types
pub use proteus_bind as bind;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use proteus::prelude::*;
/// ```
pub mod prelude {
    pub use proteus_introspect::{
        well_known, EntityFlavor, Marker, MethodDescriptor, MethodEnumerator,
        ParameterDescriptor, TypeDescriptor, TypeIntrospector, TypeName, TypeRegistry,
        Visibility,
    };

    // Re-export enumeration strategies
    pub use proteus_introspect::{AllVisibilities, DeclaredMethods, EnumerationStrategy};

    // Re-export binding types
    pub use proteus_bind::{
        protocol_name, validate_method_markers, BindError, BindResult, BindingPlan,
        BindingResolver, BindingStrategy, ContextTypeBound,
    };
}
