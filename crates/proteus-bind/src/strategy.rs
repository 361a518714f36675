//! Binding strategies and the per-method binding plan.
//!
//! A [`BindingStrategy`] tells the invocation path how to supply one
//! parameter position; a [`BindingPlan`] is the ordered list of strategies
//! for one method, aligned 1:1 with its parameter list. Plans are immutable
//! value data; callers cache them keyed by (method, expected context type).

use proteus_introspect::TypeName;
use serde::{Deserialize, Serialize};

/// How one parameter position is supplied at invocation time.
///
/// The invocation path is solely responsible for turning each variant into
/// an actual value: the context for the current call, the framework's
/// service-call factory, the entity-id string, or a payload decoded into
/// the carried target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingStrategy {
    /// Supply the call's context value.
    Context,
    /// Supply the framework-provided service-call factory.
    ServiceFactory,
    /// Supply the entity identifier for the current call.
    EntityId,
    /// Decode the request payload into the carried type.
    MainArgument {
        /// The declared parameter type to decode into.
        target: TypeName,
    },
}

impl BindingStrategy {
    /// Returns `true` for the main-argument (decoded payload) variant.
    #[must_use]
    pub fn is_main_argument(&self) -> bool {
        matches!(self, Self::MainArgument { .. })
    }

    /// Returns the decode target for a main-argument binding.
    #[must_use]
    pub fn target(&self) -> Option<&TypeName> {
        match self {
            Self::MainArgument { target } => Some(target),
            _ => None,
        }
    }
}

/// The ordered binding strategies for one method.
///
/// Always exactly one strategy per parameter position. Carries the method
/// name and the expected context type for diagnostics and cache keying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingPlan {
    method: String,
    expected_context: TypeName,
    strategies: Vec<BindingStrategy>,
}

impl BindingPlan {
    pub(crate) fn new(
        method: impl Into<String>,
        expected_context: TypeName,
        strategies: Vec<BindingStrategy>,
    ) -> Self {
        Self {
            method: method.into(),
            expected_context,
            strategies,
        }
    }

    /// Returns the name of the method this plan binds.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the context type the plan was resolved against.
    #[must_use]
    pub fn expected_context(&self) -> &TypeName {
        &self.expected_context
    }

    /// Returns the strategies in parameter order.
    #[must_use]
    pub fn strategies(&self) -> &[BindingStrategy] {
        &self.strategies
    }

    /// Returns the strategy for a parameter position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BindingStrategy> {
        self.strategies.get(index)
    }

    /// Returns the number of parameter positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns `true` for a zero-parameter method.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Iterates the strategies in parameter order.
    pub fn iter(&self) -> std::slice::Iter<'_, BindingStrategy> {
        self.strategies.iter()
    }
}

impl<'a> IntoIterator for &'a BindingPlan {
    type Item = &'a BindingStrategy;
    type IntoIter = std::slice::Iter<'a, BindingStrategy>;

    fn into_iter(self) -> Self::IntoIter {
        self.strategies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> BindingPlan {
        BindingPlan::new(
            "place_order",
            TypeName::new("CommandContext"),
            vec![
                BindingStrategy::Context,
                BindingStrategy::EntityId,
                BindingStrategy::MainArgument {
                    target: TypeName::new("OrderRequest"),
                },
            ],
        )
    }

    #[test]
    fn test_plan_accessors() {
        let plan = sample_plan();
        assert_eq!(plan.method(), "place_order");
        assert_eq!(plan.expected_context(), &TypeName::new("CommandContext"));
        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());
        assert_eq!(plan.get(1), Some(&BindingStrategy::EntityId));
        assert_eq!(plan.get(3), None);
    }

    #[test]
    fn test_main_argument_target() {
        let plan = sample_plan();
        let main = plan.get(2).unwrap();
        assert!(main.is_main_argument());
        assert_eq!(main.target(), Some(&TypeName::new("OrderRequest")));
        assert_eq!(plan.get(0).unwrap().target(), None);
    }

    #[test]
    fn test_plan_iteration_preserves_order() {
        let plan = sample_plan();
        let kinds: Vec<bool> = plan.iter().map(BindingStrategy::is_main_argument).collect();
        assert_eq!(kinds, vec![false, false, true]);
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).expect("serialization should work");
        let restored: BindingPlan = serde_json::from_str(&json).expect("deserialization should work");
        assert_eq!(plan, restored);
    }
}
