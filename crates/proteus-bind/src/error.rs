//! Error types for binding resolution.
//!
//! Every variant of [`BindError`] is a structural registration-time failure:
//! the method signature itself is illegal, so nothing is transient and no
//! retry is meaningful. The surrounding framework treats resolution failure
//! as fatal at startup. By construction, once resolution succeeds for a
//! method, every later use of its [`BindingPlan`](crate::BindingPlan) is
//! classification-error free.

use proteus_introspect::{EntityFlavor, Marker, TypeName};
use thiserror::Error;

/// Result type alias using [`BindError`].
pub type BindResult<T> = Result<T, BindError>;

/// A signature classification failure.
///
/// Messages name the offending method and types verbatim so the user can
/// correct the handler signature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A parameter declares a context-capability type outside the legal
    /// bound for this call site.
    #[error(
        "Unsupported context parameter on [{method}]: [{parameter_type}] must be the same or a super type of [{expected}]"
    )]
    IllegalContextParameter {
        /// The offending method.
        method: String,
        /// The declared parameter type.
        parameter_type: TypeName,
        /// The context type the call site expects.
        expected: TypeName,
    },

    /// An entity-id marked parameter does not declare the string type.
    #[error(
        "Entity-id parameter on method [{method}] has type [{actual}], but must be [String]"
    )]
    IllegalEntityIdParameterType {
        /// The offending method.
        method: String,
        /// The declared parameter type.
        actual: TypeName,
    },

    /// A method carries a framework marker outside the allowed set for the
    /// entity flavor being registered.
    #[error("Marker [{marker}] on method [{method}] is not allowed on a {flavor} entity{hint}")]
    UnsupportedMethodMarker {
        /// The offending method.
        method: String,
        /// Display form of the rejected marker.
        marker: String,
        /// The flavor whose allowed set was checked.
        flavor: EntityFlavor,
        /// Empty, or a rendered "did you mean" suggestion.
        hint: String,
    },
}

impl BindError {
    /// Creates an illegal-context-parameter error.
    #[must_use]
    pub fn illegal_context_parameter(
        method: impl Into<String>,
        parameter_type: TypeName,
        expected: TypeName,
    ) -> Self {
        Self::IllegalContextParameter {
            method: method.into(),
            parameter_type,
            expected,
        }
    }

    /// Creates an illegal-entity-id-parameter-type error.
    #[must_use]
    pub fn illegal_entity_id_parameter_type(
        method: impl Into<String>,
        actual: TypeName,
    ) -> Self {
        Self::IllegalEntityIdParameterType {
            method: method.into(),
            actual,
        }
    }

    /// Creates an unsupported-method-marker error, rendering the optional
    /// in-flavor suggestion into the message.
    #[must_use]
    pub fn unsupported_method_marker(
        method: impl Into<String>,
        marker: &Marker,
        flavor: EntityFlavor,
        suggestion: Option<&Marker>,
    ) -> Self {
        Self::UnsupportedMethodMarker {
            method: method.into(),
            marker: marker.to_string(),
            flavor,
            hint: suggestion.map_or_else(String::new, |s| format!("; did you mean [{s}]?")),
        }
    }
}
