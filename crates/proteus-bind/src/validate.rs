//! Registration-time signature validation for method markers.
//!
//! Each entity flavor admits a fixed set of framework method markers; a
//! handler registered under one flavor but annotated with another flavor's
//! marker is rejected before any traffic is served. When an allowed marker
//! shares the offending marker's name the error suggests it, since the
//! usual mistake is importing the wrong flavor's marker.

use crate::error::{BindError, BindResult};
use proteus_introspect::{EntityFlavor, Marker, MethodDescriptor};

/// Validates that every framework method-marker is in the allowed set.
///
/// Custom markers are opaque to the framework and always pass. The allowed
/// set is normally [`EntityFlavor::allowed_markers`], but callers may narrow
/// it further.
///
/// # Errors
///
/// [`BindError::UnsupportedMethodMarker`] for the first offending method,
/// with a "did you mean" hint when an allowed marker shares the offending
/// marker's simple name.
///
/// # Example
///
/// ```rust
/// use proteus_bind::validate_method_markers;
/// use proteus_introspect::{EntityFlavor, Marker, MethodDescriptor};
///
/// let flavor = EntityFlavor::Replicated;
/// let methods = vec![
///     MethodDescriptor::builder("merge")
///         .marker(Marker::CommandHandler(EntityFlavor::Journaled))
///         .build(),
/// ];
///
/// let error = validate_method_markers(&methods, flavor, flavor.allowed_markers()).unwrap_err();
/// assert!(error.to_string().contains("did you mean"));
/// ```
pub fn validate_method_markers(
    methods: &[MethodDescriptor],
    flavor: EntityFlavor,
    allowed: &[Marker],
) -> BindResult<()> {
    for method in methods {
        for marker in method.markers() {
            if !marker.is_framework() || allowed.contains(marker) {
                continue;
            }
            let suggestion = allowed
                .iter()
                .find(|candidate| candidate.simple_name() == marker.simple_name());
            return Err(BindError::unsupported_method_marker(
                method.name(),
                marker,
                flavor,
                suggestion,
            ));
        }
    }
    Ok(())
}
