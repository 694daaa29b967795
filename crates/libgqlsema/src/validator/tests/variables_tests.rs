use crate::validator::tests::assert_fails;
use crate::validator::tests::assert_passes;

mod unique_variable_names {
    use super::*;

    #[test]
    fn distinct_variables() {
        assert_passes(
            "UniqueVariableNames",
            "query A($x: Int, $y: Int) { dog { name } } query B($x: Int) { dog { name } }",
        );
    }

    #[test]
    fn repeated_variables() {
        assert_fails(
            "UniqueVariableNames",
            "query A($x: Int, $x: Boolean, $x: String) { dog { name } }",
            &[
                "There can be only one variable named \"$x\".",
                "There can be only one variable named \"$x\".",
            ],
        );
    }
}

mod variables_are_input_types {
    use super::*;

    #[test]
    fn input_types() {
        assert_passes(
            "VariablesAreInputTypes",
            "query Q($a: String, $b: [Boolean!]!, $c: ComplexInput, $d: FurColor, $e: Json) { dog { name } }",
        );
    }

    #[test]
    fn output_types() {
        assert_fails(
            "VariablesAreInputTypes",
            "query Q($a: Dog, $b: [[CatOrDog!]]!, $c: Pet) { dog { name } }",
            &[
                "Variable \"$a\" cannot be non-input type \"Dog\".",
                "Variable \"$b\" cannot be non-input type \"[[CatOrDog!]]!\".",
                "Variable \"$c\" cannot be non-input type \"Pet\".",
            ],
        );
    }

    #[test]
    fn unknown_types_are_left_to_known_type_names() {
        assert_passes("VariablesAreInputTypes", "query Q($a: Unknown) { dog { name } }");
    }
}

mod known_type_names {
    use super::*;

    #[test]
    fn known_types() {
        assert_passes(
            "KnownTypeNames",
            r#"
            query Q($id: ID, $color: FurColor) { dog { ...D ... on Dog { name } } }
            fragment D on Pet { name }
            "#,
        );
    }

    #[test]
    fn unknown_types_with_suggestions() {
        assert_fails(
            "KnownTypeNames",
            r#"
            query Q($id: Strin) { dog { ... on Dgo { name } ...F } }
            fragment F on Pett { name }
            "#,
            &[
                "Unknown type \"Strin\". Did you mean \"String\"?",
                "Unknown type \"Dgo\". Did you mean \"Dog\"?",
                "Unknown type \"Pett\". Did you mean \"Pet\"?",
            ],
        );
    }
}

mod no_undefined_variables {
    use super::*;

    #[test]
    fn all_variables_defined() {
        assert_passes(
            "NoUndefinedVariables",
            r#"
            query Q($a: Int, $b: Boolean!, $c: String) {
              complicatedArgs { intArgField(intArg: $a) ...F }
              dog @include(if: $b) { name }
            }
            fragment F on ComplicatedArgs {
              complexArgField(complexArg: {requiredField: true, stringField: $c})
            }
            "#,
        );
    }

    #[test]
    fn undefined_in_operation() {
        let errors = assert_fails(
            "NoUndefinedVariables",
            "query Q($a: Int) {\n  complicatedArgs { intArgField(intArg: $b) }\n}",
            &["Variable \"$b\" is not defined by operation \"Q\"."],
        );
        let lines: Vec<usize> = errors[0].locations.iter().map(|loc| loc.line).collect();
        assert_eq!(lines, vec![2, 1]);
    }

    #[test]
    fn undefined_in_anonymous_operation() {
        assert_fails(
            "NoUndefinedVariables",
            "{ dog @skip(if: $skip) { name } }",
            &["Variable \"$skip\" is not defined."],
        );
    }

    #[test]
    fn undefined_through_fragments_per_operation() {
        assert_fails(
            "NoUndefinedVariables",
            r#"
            query A($a: Int) { complicatedArgs { ...F } }
            query B($b: Int) { complicatedArgs { ...F } }
            fragment F on ComplicatedArgs { intArgField(intArg: $a) ...G }
            fragment G on ComplicatedArgs { floatArgField(floatArg: $b) }
            "#,
            &[
                "Variable \"$b\" is not defined by operation \"A\".",
                "Variable \"$a\" is not defined by operation \"B\".",
            ],
        );
    }
}

mod no_unused_variables {
    use super::*;

    #[test]
    fn variables_used_directly_and_in_fragments() {
        assert_passes(
            "NoUnusedVariables",
            r#"
            query Q($a: Int, $b: Int, $c: String) {
              complicatedArgs {
                intArgField(intArg: $a)
                ...F
              }
            }
            fragment F on ComplicatedArgs {
              stringListArgField(stringListArg: [$c])
              ...G
            }
            fragment G on ComplicatedArgs { floatArgField(floatArg: $b) ...F }
            "#,
        );
    }

    #[test]
    fn unused_variables() {
        let errors = assert_fails(
            "NoUnusedVariables",
            "query Q($a: Int,\n  $unused: Boolean) { complicatedArgs { intArgField(intArg: $a) } }",
            &["Variable \"$unused\" is never used in operation \"Q\"."],
        );
        assert_eq!(errors[0].locations[0].line, 2);
    }

    #[test]
    fn unused_in_anonymous_operation() {
        assert_fails(
            "NoUnusedVariables",
            "query($x: Int) { dog { name } }",
            &["Variable \"$x\" is never used."],
        );
    }
}

mod variables_in_allowed_position {
    use super::*;

    #[test]
    fn compatible_positions() {
        assert_passes(
            "VariablesInAllowedPosition",
            r#"
            query Q(
              $int: Int!
              $nullableInt: Int
              $defaulted: Int = 1
              $strings: [String!]!
              $string: String
              $flag: Boolean!
            ) {
              complicatedArgs {
                intArgField(intArg: $int)
                nonNullIntArgField(nonNullIntArg: $defaulted)
                nonNullFieldWithDefault(arg: $nullableInt)
                stringListArgField(stringListArg: $strings)
                complexArgField(complexArg: {requiredField: $flag, stringListField: [$string]})
              }
              dog @include(if: $flag) { name }
            }
            "#,
        );
    }

    #[test]
    fn nullable_variable_in_non_null_position() {
        assert_fails(
            "VariablesInAllowedPosition",
            r#"
            query Q($int: Int, $flag: Boolean) {
              complicatedArgs { nonNullIntArgField(nonNullIntArg: $int) }
              dog @skip(if: $flag) { name }
            }
            "#,
            &[
                "Variable \"$int\" of type \"Int\" used in position expecting type \"Int!\".",
                "Variable \"$flag\" of type \"Boolean\" used in position expecting type \"Boolean!\".",
            ],
        );
    }

    #[test]
    fn mismatched_types_and_lists() {
        assert_fails(
            "VariablesInAllowedPosition",
            r#"
            query Q($s: String, $list: [String]) {
              complicatedArgs {
                intArgField(intArg: $s)
                stringListNonNullArgField(stringListNonNullArg: $list)
                stringArgField(stringArg: $list)
              }
            }
            "#,
            &[
                "Variable \"$s\" of type \"String\" used in position expecting type \"Int\".",
                "Variable \"$list\" of type \"[String]\" used in position expecting type \"[String!]\".",
                "Variable \"$list\" of type \"[String]\" used in position expecting type \"String\".",
            ],
        );
    }

    #[test]
    fn checked_through_fragments() {
        assert_fails(
            "VariablesInAllowedPosition",
            r#"
            query Q($b: Boolean) { complicatedArgs { ...F } }
            fragment F on ComplicatedArgs {
              complexArgField(complexArg: {requiredField: $b})
            }
            "#,
            &["Variable \"$b\" of type \"Boolean\" used in position expecting type \"Boolean!\"."],
        );
    }
}
