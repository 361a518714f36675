//! The context type bound.
//!
//! A parameter may stand in for the call site's context when its declared
//! type sits between the most specific context the call site supplies and
//! the most general context capability: a caller holding the specific
//! context can always be treated as any of its ancestor capabilities.

use proteus_introspect::{TypeIntrospector, TypeName};
use serde::{Deserialize, Serialize};

/// An allowed `[upper, lower]` range in the context type hierarchy.
///
/// `upper` is the most general acceptable type (normally the context
/// capability root), `lower` the most specific (the context type the call
/// site expects). A candidate is within the bound when it is a
/// subtype-or-equal of `upper` and a supertype-or-equal of `lower`.
///
/// # Example
///
/// ```rust
/// use proteus_bind::ContextTypeBound;
/// use proteus_introspect::{fixtures, well_known};
///
/// let registry = fixtures::order_registry();
/// let bound = ContextTypeBound::rooted_at_context("CommandContext".into());
///
/// assert!(bound.contains(&registry, &"CommandContext".into()));
/// assert!(bound.contains(&registry, &well_known::context()));
/// assert!(!bound.contains(&registry, &"JournalContext".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTypeBound {
    upper: TypeName,
    lower: TypeName,
}

impl ContextTypeBound {
    /// Creates a bound with explicit upper and lower types.
    #[must_use]
    pub fn new(upper: TypeName, lower: TypeName) -> Self {
        Self { upper, lower }
    }

    /// Creates the bound used by context classification: upper is the
    /// context capability root, lower the expected context type.
    #[must_use]
    pub fn rooted_at_context(expected: TypeName) -> Self {
        Self {
            upper: proteus_introspect::well_known::context(),
            lower: expected,
        }
    }

    /// Returns the most general acceptable type.
    #[must_use]
    pub fn upper(&self) -> &TypeName {
        &self.upper
    }

    /// Returns the most specific acceptable type.
    #[must_use]
    pub fn lower(&self) -> &TypeName {
        &self.lower
    }

    /// Returns `true` when `candidate` lies within the bound.
    #[must_use]
    pub fn contains(&self, introspector: &dyn TypeIntrospector, candidate: &TypeName) -> bool {
        introspector.is_assignable(candidate, &self.upper)
            && introspector.is_assignable(&self.lower, candidate)
    }
}
