use crate::types::Type;
use proptest::prelude::*;

fn named(name: &str) -> Type {
    Type::named(name)
}

mod construction {
    use super::*;

    #[test]
    fn non_null_is_idempotent() {
        let ty = Type::non_null(Type::non_null(named("Int")));

        assert_eq!(ty, Type::NonNull(Box::new(named("Int"))));
        assert_eq!(ty.to_string(), "Int!");
    }

    #[test]
    fn display_nested_wrappers() {
        let ty = Type::non_null(Type::list(Type::non_null(named("String"))));

        assert_eq!(ty.to_string(), "[String!]!");
        assert_eq!(ty.name(), "String");
        assert!(ty.is_non_null());
        assert!(ty.is_list());
        assert_eq!(ty.list_item_type().unwrap().to_string(), "String!");
        assert_eq!(ty.nullable().to_string(), "[String!]");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "non-null type wraps another non-null type")]
    fn hand_built_double_non_null_is_rejected() {
        let malformed = Type::NonNull(Box::new(Type::non_null(named("Int"))));
        malformed.is_compatible(&named("Int"));
    }

    #[test]
    fn named_type_has_no_item_type() {
        assert!(named("Int").list_item_type().is_none());
        assert!(!named("Int").is_list());
    }
}

mod compatibility {
    use super::*;

    #[test]
    fn non_null_satisfies_nullable() {
        let provided = Type::non_null(named("Int"));

        assert!(provided.is_compatible(&named("Int")));
        assert!(!named("Int").is_compatible(&provided));
    }

    #[test]
    fn different_names_never_match() {
        assert!(!named("Int").is_compatible(&named("Float")));
        assert!(!Type::non_null(named("ID")).is_compatible(&named("String")));
    }

    #[test]
    fn lists_are_covariant() {
        let provided = Type::list(Type::non_null(named("Int")));

        assert!(provided.is_compatible(&Type::list(named("Int"))));
        assert!(!Type::list(named("Int")).is_compatible(&provided));
    }

    #[test]
    fn list_and_named_never_match() {
        assert!(!Type::list(named("Int")).is_compatible(&named("Int")));
        assert!(!named("Int").is_compatible(&Type::list(named("Int"))));
    }
}

fn arb_type() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![
        Just(named("Int")),
        Just(named("String")),
        Just(named("Color")),
    ];
    leaf.prop_recursive(4, 16, 1, |inner| prop_oneof![
        inner.clone().prop_map(Type::list),
        inner.prop_map(Type::non_null),
    ])
}

proptest! {
    #[test]
    fn every_type_is_compatible_with_itself(ty in arb_type()) {
        prop_assert!(ty.is_compatible(&ty));
    }

    #[test]
    fn adding_non_null_keeps_compatibility(ty in arb_type()) {
        prop_assert!(Type::non_null(ty.clone()).is_compatible(&ty));
        prop_assert!(Type::non_null(ty.clone()).is_compatible(ty.nullable()));
    }

    #[test]
    fn compatibility_is_asymmetric_across_non_null(ty in arb_type()) {
        let nullable = ty.nullable().clone();
        prop_assert!(!nullable.is_compatible(&Type::non_null(nullable.clone())));
    }
}
