use crate::validator::tests::assert_fails;
use crate::validator::tests::assert_passes;

mod fields_on_correct_type {
    use super::*;

    #[test]
    fn defined_fields_and_meta_fields() {
        assert_passes(
            "FieldsOnCorrectType",
            r#"
            {
              __typename
              __schema { queryType { name } }
              dog { name __typename ... on Pet { name } }
              catOrDog { __typename ... on Cat { meows } }
            }
            "#,
        );
    }

    #[test]
    fn unknown_field_with_field_suggestion() {
        let errors = assert_fails(
            "FieldsOnCorrectType",
            "{ dog { barkVolum } }",
            &["Cannot query field \"barkVolum\" on type \"Dog\". Did you mean \"barkVolume\"?"],
        );
        assert_eq!(errors[0].locations[0].column, 9);
    }

    #[test]
    fn abstract_parent_suggests_fragments() {
        assert_fails(
            "FieldsOnCorrectType",
            "{ pet { meowVolume } catOrDog { name } }",
            &[
                "Cannot query field \"meowVolume\" on type \"Pet\". Did you mean to use an inline fragment on \"Cat\"?",
                "Cannot query field \"name\" on type \"CatOrDog\". Did you mean to use an inline fragment on \"Being\", \"Pet\", \"Cat\", or \"Dog\"?",
            ],
        );
    }

    #[test]
    fn unknown_field_without_suggestions() {
        assert_fails(
            "FieldsOnCorrectType",
            "{ dog { zzzzzzzzzz } }",
            &["Cannot query field \"zzzzzzzzzz\" on type \"Dog\"."],
        );
    }

    #[test]
    fn fields_below_unknown_fields_are_ignored() {
        assert_fails(
            "FieldsOnCorrectType",
            "{ unknownField { deeper { deepest } } }",
            &["Cannot query field \"unknownField\" on type \"QueryRoot\"."],
        );
    }
}

mod scalar_leafs {
    use super::*;

    #[test]
    fn leaves_and_composites() {
        assert_passes(
            "ScalarLeafs",
            "{ dog { name barks doesKnowCommand(dogCommand: SIT) } human { pets { name } } }",
        );
    }

    #[test]
    fn composite_without_selection() {
        assert_fails(
            "ScalarLeafs",
            "{ human { pets } }",
            &["Field \"pets\" of type \"[Pet]\" must have a selection of subfields. Did you mean \"pets { ... }\"?"],
        );
    }

    #[test]
    fn leaf_with_selection() {
        let errors = assert_fails(
            "ScalarLeafs",
            "{\n  dog {\n    barks { sinceWhen }\n  }\n}",
            &["Field \"barks\" must not have a selection since type \"Boolean\" has no subfields."],
        );
        assert_eq!(errors[0].locations[0].line, 3);
        assert_eq!(errors[0].locations[0].column, 5);
    }
}
