//! Well-known type names the framework compares against.
//!
//! These are the fixed anchors of parameter classification: the universal
//! root every type is assignable to, the context capability root, the
//! service-call factory, and the string primitive. A fresh
//! [`TypeRegistry`](crate::TypeRegistry) is pre-seeded with all of them.

use crate::descriptor::TypeName;

/// The universal root type; every registered type is assignable to it.
pub const ROOT: &str = "Any";

/// The root capability of the context type hierarchy.
pub const CONTEXT: &str = "Context";

/// The framework-provided service-call factory type.
pub const SERVICE_CALL_FACTORY: &str = "ServiceCallFactory";

/// The string primitive, the only legal type for entity-id parameters.
pub const STRING: &str = "String";

/// Returns the universal root as a [`TypeName`].
#[must_use]
pub fn root() -> TypeName {
    TypeName::from(ROOT)
}

/// Returns the context capability root as a [`TypeName`].
#[must_use]
pub fn context() -> TypeName {
    TypeName::from(CONTEXT)
}

/// Returns the service-call factory type as a [`TypeName`].
#[must_use]
pub fn service_call_factory() -> TypeName {
    TypeName::from(SERVICE_CALL_FACTORY)
}

/// Returns the string primitive as a [`TypeName`].
#[must_use]
pub fn string() -> TypeName {
    TypeName::from(STRING)
}
