//! End-to-end resolution tests.
//!
//! These tests exercise the full registration path the framework runs at
//! startup: enumerate an entity's invocable methods over its inheritance
//! chain, validate its method markers, and resolve a binding plan for each
//! method against the context type the dispatch protocol supplies.

use proteus_bind::{
    protocol_name, validate_method_markers, BindError, BindingResolver, BindingStrategy,
};
use proteus_introspect::{
    fixtures, well_known, EntityFlavor, Marker, MethodDescriptor, MethodEnumerator,
    ParameterDescriptor, TypeName, TypeRegistry,
};

fn resolve_all(
    registry: &TypeRegistry,
    entity: &str,
    expected: &str,
) -> Vec<(String, proteus_bind::BindingPlan)> {
    let resolver = BindingResolver::new(registry);
    MethodEnumerator::new()
        .enumerate(registry, &entity.into())
        .iter()
        .map(|method| {
            let plan = resolver
                .resolve(method, &expected.into())
                .expect("fixture signatures are well-formed");
            (method.name().to_string(), plan)
        })
        .collect()
}

#[test]
fn test_three_parameter_handler_resolves_to_expected_plan() {
    let registry = fixtures::order_registry();
    let method = fixtures::declared_method(&registry, "OrderEntity", "place_order");

    let plan = BindingResolver::new(&registry)
        .resolve(&method, &"CommandContext".into())
        .unwrap();

    assert_eq!(
        plan.strategies(),
        &[
            BindingStrategy::Context,
            BindingStrategy::EntityId,
            BindingStrategy::MainArgument {
                target: "OrderRequest".into()
            },
        ]
    );
}

#[test]
fn test_unrelated_context_fails_resolution() {
    let registry = fixtures::order_registry();
    let method = MethodDescriptor::builder("handle")
        .parameter(ParameterDescriptor::new("JournalContext"))
        .build();

    let error = BindingResolver::new(&registry)
        .resolve(&method, &"CommandContext".into())
        .unwrap_err();

    assert_eq!(
        error,
        BindError::illegal_context_parameter(
            "handle",
            "JournalContext".into(),
            "CommandContext".into(),
        )
    );
}

#[test]
fn test_every_enumerated_method_resolves() {
    let registry = fixtures::order_registry();
    let plans = resolve_all(&registry, "OrderEntity", "CommandContext");

    let names: Vec<&str> = plans.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["place_order", "cancel_order", "audit"]);

    for (name, plan) in &plans {
        assert_eq!(plan.method(), name);
        assert_eq!(plan.expected_context(), &TypeName::new("CommandContext"));
    }
}

#[test]
fn test_inherited_override_resolves_as_subtype_method() {
    let registry = fixtures::order_registry();
    let methods = MethodEnumerator::new().enumerate(&registry, &"OrderEntity".into());

    let audit = methods
        .iter()
        .find(|m| m.name() == "audit")
        .expect("audit is enumerated");
    assert_eq!(audit.declaring_type(), &TypeName::from("OrderEntity"));

    let plan = BindingResolver::new(&registry)
        .resolve(audit, &"CommandContext".into())
        .unwrap();
    // The ancestor signature takes the general context capability, which is
    // within the bound for any expected context type.
    assert_eq!(plan.strategies(), &[BindingStrategy::Context]);
}

#[test]
fn test_journaled_entity_markers_validate() {
    let registry = fixtures::order_registry();
    let methods = MethodEnumerator::new().enumerate(&registry, &"OrderEntity".into());

    let flavor = EntityFlavor::Journaled;
    assert!(validate_method_markers(&methods, flavor, flavor.allowed_markers()).is_ok());
}

#[test]
fn test_registering_under_wrong_flavor_is_rejected_with_suggestion() {
    let registry = fixtures::order_registry();
    let methods = MethodEnumerator::new().enumerate(&registry, &"OrderEntity".into());

    let flavor = EntityFlavor::Replicated;
    let error = validate_method_markers(&methods, flavor, flavor.allowed_markers()).unwrap_err();
    assert!(error
        .to_string()
        .contains("did you mean [replicated::CommandHandler]?"));
}

#[test]
fn test_protocol_names_for_enumerated_methods() {
    let registry = fixtures::order_registry();
    let methods = MethodEnumerator::new().enumerate(&registry, &"OrderEntity".into());

    let names: Vec<String> = methods.iter().map(protocol_name).collect();
    assert_eq!(names, vec!["Place_order", "Cancel_order", "Audit"]);
}

#[test]
fn test_plans_serialize_for_caching() {
    let registry = fixtures::order_registry();
    let method = fixtures::declared_method(&registry, "OrderEntity", "place_order");
    let plan = BindingResolver::new(&registry)
        .resolve(&method, &"CommandContext".into())
        .unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let restored: proteus_bind::BindingPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, restored);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_parameter() -> impl Strategy<Value = ParameterDescriptor> {
        prop_oneof![
            Just(ParameterDescriptor::new("CommandContext")),
            Just(ParameterDescriptor::new(well_known::context())),
            Just(
                ParameterDescriptor::new(well_known::string()).with_marker(Marker::EntityId)
            ),
            Just(ParameterDescriptor::new(well_known::string())),
            Just(ParameterDescriptor::new("OrderRequest")),
            Just(ParameterDescriptor::new(well_known::service_call_factory())),
            Just(ParameterDescriptor::new("JournalContext")),
        ]
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic_and_length_preserving(
            parameters in prop::collection::vec(arb_parameter(), 0..8)
        ) {
            let registry = fixtures::order_registry();
            let mut builder = MethodDescriptor::builder("generated");
            for parameter in parameters {
                builder = builder.parameter(parameter);
            }
            let method = builder.build();

            let resolver = BindingResolver::new(&registry);
            let expected: TypeName = "CommandContext".into();
            let first = resolver.resolve(&method, &expected);
            let second = resolver.resolve(&method, &expected);

            prop_assert_eq!(&first, &second);
            if let Ok(plan) = first {
                prop_assert_eq!(plan.len(), method.arity());
            }
        }
    }
}
