//! Handler-to-protocol name mapping.

use proteus_introspect::MethodDescriptor;

/// Returns the protocol operation name for a handler method.
///
/// Protocol operation names are capitalized; a handler named `place_order`
/// maps to `Place_order`, while an already-capitalized name is returned
/// unchanged.
#[must_use]
pub fn protocol_name(method: &MethodDescriptor) -> String {
    let name = method.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => name.to_string(),
    }
}
