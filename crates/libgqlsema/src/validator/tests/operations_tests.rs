use crate::validator::tests::assert_fails;
use crate::validator::tests::assert_passes;

mod known_root_type {
    use super::*;

    #[test]
    fn supported_operation_types() {
        assert_passes("KnownRootType", "{ dog { name } }");
        assert_passes("KnownRootType", "subscription { newDog { name } }");
    }

    #[test]
    fn mutation_without_mutation_root() {
        let errors = assert_fails(
            "KnownRootType",
            "mutation M { dog { name } }",
            &["Schema does not support operation type \"mutation\""],
        );
        assert_eq!(errors[0].locations[0].line, 1);
        assert_eq!(errors[0].locations[0].column, 1);
    }
}

mod lone_anonymous_operation {
    use super::*;

    #[test]
    fn single_anonymous_operation() {
        assert_passes("LoneAnonymousOperation", "{ dog { name } }");
    }

    #[test]
    fn named_operations_only() {
        assert_passes(
            "LoneAnonymousOperation",
            "query A { dog { name } } query B { cat { name } }",
        );
    }

    #[test]
    fn anonymous_operation_alongside_others() {
        assert_fails(
            "LoneAnonymousOperation",
            "{ dog { name } } query B { cat { name } }",
            &["This anonymous operation must be the only defined operation."],
        );
    }

    #[test]
    fn multiple_anonymous_operations() {
        assert_fails(
            "LoneAnonymousOperation",
            "{ dog { name } } { cat { name } }",
            &[
                "This anonymous operation must be the only defined operation.",
                "This anonymous operation must be the only defined operation.",
            ],
        );
    }
}

mod unique_operation_names {
    use super::*;

    #[test]
    fn distinct_names() {
        assert_passes(
            "UniqueOperationNames",
            "query A { dog { name } } query B { dog { name } } subscription C { newDog { name } }",
        );
    }

    #[test]
    fn repeated_name_across_kinds() {
        let errors = assert_fails(
            "UniqueOperationNames",
            "query A { dog { name } }\nsubscription A { newDog { name } }",
            &["There can be only one operation named \"A\"."],
        );
        assert_eq!(errors[0].locations[0].line, 2);
    }
}

mod single_field_subscriptions {
    use super::*;

    #[test]
    fn one_top_level_field() {
        assert_passes(
            "SingleFieldSubscriptions",
            "subscription S { newDog { name barks } }",
        );
    }

    #[test]
    fn one_field_through_fragments() {
        assert_passes(
            "SingleFieldSubscriptions",
            r#"
            subscription S { ...F ... { newDog { name } } }
            fragment F on SubscriptionRoot { newDog { barks } }
            "#,
        );
    }

    #[test]
    fn queries_are_not_checked() {
        assert_passes("SingleFieldSubscriptions", "{ dog { name } cat { name } }");
    }

    #[test]
    fn more_than_one_field() {
        let errors = assert_fails(
            "SingleFieldSubscriptions",
            "subscription S {\n  newDog { name }\n  newCat { name }\n}",
            &["Subscription \"S\" must select only one top level field."],
        );
        assert_eq!(errors[0].locations[0].line, 3);
    }

    #[test]
    fn extra_field_from_a_fragment() {
        assert_fails(
            "SingleFieldSubscriptions",
            r#"
            subscription { newDog { name } ...F }
            fragment F on SubscriptionRoot { newCat { name } }
            "#,
            &["Anonymous Subscription must select only one top level field."],
        );
    }

    #[test]
    fn introspection_field() {
        assert_fails(
            "SingleFieldSubscriptions",
            "subscription S { __typename }",
            &["Subscription \"S\" must not select an introspection top level field."],
        );
    }
}
