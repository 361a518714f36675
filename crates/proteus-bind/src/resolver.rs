//! The parameter binding resolver.
//!
//! [`BindingResolver::resolve`] reconciles one method signature with the
//! dynamic dispatch protocol: each parameter is classified into exactly one
//! [`BindingStrategy`], type-bound constraints are enforced, and the ordered
//! [`BindingPlan`] is assembled. Classification is total and mutually
//! exclusive; the rules run in fixed priority and the first match wins, so
//! the most framework-significant interpretation of a parameter always
//! prevails over the payload fallback.
//!
//! Resolution is a pure function of its inputs: no caching, no side effects
//! beyond the error return. Repeated calls are idempotent, merely wasteful;
//! callers cache plans keyed by (method, expected context type).

use crate::bound::ContextTypeBound;
use crate::error::{BindError, BindResult};
use crate::strategy::{BindingPlan, BindingStrategy};
use proteus_introspect::{well_known, Marker, MethodDescriptor, TypeIntrospector, TypeName};

/// Classifies method parameters against a registry's type relations.
///
/// The resolver is stateless: it borrows an introspector and produces a
/// fresh plan on every [`resolve`](Self::resolve) call.
///
/// # Example
///
/// ```rust
/// use proteus_bind::{BindingResolver, BindingStrategy};
/// use proteus_introspect::fixtures;
///
/// let registry = fixtures::order_registry();
/// let method = fixtures::declared_method(&registry, "OrderEntity", "cancel_order");
///
/// let plan = BindingResolver::new(&registry)
///     .resolve(&method, &"CommandContext".into())
///     .unwrap();
///
/// assert_eq!(
///     plan.strategies(),
///     &[BindingStrategy::EntityId, BindingStrategy::Context]
/// );
/// ```
pub struct BindingResolver<'a> {
    introspector: &'a dyn TypeIntrospector,
}

impl<'a> BindingResolver<'a> {
    /// Creates a resolver over the given introspector.
    #[must_use]
    pub fn new(introspector: &'a dyn TypeIntrospector) -> Self {
        Self { introspector }
    }

    /// Resolves the binding plan for `method` against the context type the
    /// call site expects.
    ///
    /// Parameters are classified independently, in declaration order:
    ///
    /// 1. A type within `[Context, expected]` binds the call's context; any
    ///    type between the specific required context and the general
    ///    capability is acceptable because the caller's context can be
    ///    treated as any of its ancestors.
    /// 2. A type that implements the context capability but falls outside
    ///    that bound is a signature error, not a payload.
    /// 3. The service-call factory type (exactly) binds the framework
    ///    factory.
    /// 4. The entity-id marker binds the entity identifier; the declared
    ///    type must be exactly the string primitive.
    /// 5. Everything else is the decoded request payload.
    ///
    /// # Errors
    ///
    /// [`BindError::IllegalContextParameter`] or
    /// [`BindError::IllegalEntityIdParameterType`]; resolution fails for
    /// the whole method, never producing a partial plan.
    pub fn resolve(
        &self,
        method: &MethodDescriptor,
        expected_context: &TypeName,
    ) -> BindResult<BindingPlan> {
        let bound = ContextTypeBound::rooted_at_context(expected_context.clone());
        let context_root = well_known::context();
        let factory = well_known::service_call_factory();
        let string = well_known::string();

        let parameters = self.introspector.list_parameters(method);
        let mut strategies = Vec::with_capacity(parameters.len());
        let mut main_arguments = 0usize;

        for parameter in parameters {
            let declared = parameter.declared_type();

            let strategy = if bound.contains(self.introspector, declared) {
                BindingStrategy::Context
            } else if self.introspector.is_assignable(declared, &context_root) {
                return Err(BindError::illegal_context_parameter(
                    method.name(),
                    declared.clone(),
                    expected_context.clone(),
                ));
            } else if declared == &factory {
                BindingStrategy::ServiceFactory
            } else if self
                .introspector
                .markers_of(parameter)
                .contains(&Marker::EntityId)
            {
                if declared != &string {
                    return Err(BindError::illegal_entity_id_parameter_type(
                        method.name(),
                        declared.clone(),
                    ));
                }
                BindingStrategy::EntityId
            } else {
                main_arguments += 1;
                BindingStrategy::MainArgument {
                    target: declared.clone(),
                }
            };

            strategies.push(strategy);
        }

        if main_arguments > 1 {
            // TODO: decide whether multiple payload parameters should become
            // positional extra arguments; for now every one decodes the payload.
            tracing::debug!(
                method = method.name(),
                count = main_arguments,
                "Method has more than one main-argument parameter"
            );
        }

        Ok(BindingPlan::new(
            method.name(),
            expected_context.clone(),
            strategies,
        ))
    }
}
