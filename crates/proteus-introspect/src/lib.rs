//! # Proteus Introspect
//!
//! Descriptor tables and method enumeration for the Proteus entity framework.
//!
//! Rust has no runtime reflection, so entity handler types are described by
//! immutable descriptor tables registered at startup (or generated ahead of
//! time and deserialized). This crate provides:
//!
//! - [`TypeDescriptor`], [`MethodDescriptor`], [`ParameterDescriptor`] - the
//!   descriptor value types, built with builders
//! - [`Marker`] - enum-like tags attached to methods and parameters at
//!   discovery time
//! - [`TypeRegistry`] - the insertion-ordered descriptor table, pre-seeded
//!   with the well-known framework types
//! - [`TypeIntrospector`] - the capability trait consumed by the enumerator
//!   and the binding resolver
//! - [`MethodEnumerator`] - inheritance-chain walk producing each publicly
//!   invocable method exactly once
//!
//! ## Example
//!
//! ```rust
//! use proteus_introspect::{
//!     MethodDescriptor, MethodEnumerator, ParameterDescriptor, TypeDescriptor, TypeRegistry,
//! };
//!
//! let registry = TypeRegistry::builder()
//!     .register(
//!         TypeDescriptor::builder("GreeterEntity")
//!             .method(
//!                 MethodDescriptor::builder("greet")
//!                     .parameter(ParameterDescriptor::new("Greeting"))
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! let methods = MethodEnumerator::new().enumerate(&registry, &"GreeterEntity".into());
//! assert_eq!(methods.len(), 1);
//! assert_eq!(methods[0].name(), "greet");
//! ```

#![doc(html_root_url = "https://docs.rs/proteus-introspect/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod descriptor;
mod enumerate;
pub mod fixtures;
mod marker;
mod registry;
pub mod well_known;

pub use descriptor::{
    MethodDescriptor, MethodDescriptorBuilder, ParameterDescriptor, TypeDescriptor,
    TypeDescriptorBuilder, TypeName, Visibility,
};
pub use enumerate::{AllVisibilities, DeclaredMethods, EnumerationStrategy, MethodEnumerator};
pub use marker::{EntityFlavor, Marker};
pub use registry::{TypeIntrospector, TypeRegistry, TypeRegistryBuilder};
