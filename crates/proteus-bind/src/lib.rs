//! # Proteus Bind
//!
//! Parameter classification and binding-plan resolution for the Proteus
//! entity framework.
//!
//! Given a method discovered by `proteus-introspect` and the context type a
//! call site expects, the [`BindingResolver`] classifies every formal
//! parameter into exactly one [`BindingStrategy`] and assembles them into an
//! ordered [`BindingPlan`]. Resolution runs once per method at registration
//! time; the invocation path applies the cached plan cheaply on every call.
//!
//! Ill-formed signatures are rejected here, before any traffic is served:
//! a context parameter outside the legal type bound or a non-string
//! entity-id parameter fails resolution with a [`BindError`] naming the
//! method and the offending types.
//!
//! ## Classification rules
//!
//! Applied per parameter in declaration order, first match wins:
//!
//! | Rule | Condition | Strategy |
//! |------|-----------|----------|
//! | 1 | type within `[Context, expected]` | [`BindingStrategy::Context`] |
//! | 2 | type implements `Context` but fails rule 1 | error |
//! | 3 | type is exactly `ServiceCallFactory` | [`BindingStrategy::ServiceFactory`] |
//! | 4 | `EntityId` marker (type must be `String`) | [`BindingStrategy::EntityId`] |
//! | 5 | anything else | [`BindingStrategy::MainArgument`] |
//!
//! ## Example
//!
//! ```rust
//! use proteus_bind::{BindingResolver, BindingStrategy};
//! use proteus_introspect::fixtures;
//!
//! let registry = fixtures::order_registry();
//! let method = fixtures::declared_method(&registry, "OrderEntity", "place_order");
//!
//! let plan = BindingResolver::new(&registry)
//!     .resolve(&method, &"CommandContext".into())
//!     .unwrap();
//!
//! assert_eq!(plan.len(), 3);
//! assert_eq!(plan.get(0), Some(&BindingStrategy::Context));
//! ```

#![doc(html_root_url = "https://docs.rs/proteus-bind/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bound;
mod error;
mod name;
mod resolver;
mod strategy;
mod validate;

pub use bound::ContextTypeBound;
pub use error::{BindError, BindResult};
pub use name::protocol_name;
pub use resolver::BindingResolver;
pub use strategy::{BindingPlan, BindingStrategy};
pub use validate::validate_method_markers;
