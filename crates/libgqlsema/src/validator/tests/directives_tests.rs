use crate::ast::Directive;
use crate::validator::RuleSet;
use crate::validator::ValidateOptions;
use crate::validator::rules;
use crate::validator::tests::assert_fails;
use crate::validator::tests::assert_passes;
use crate::validator::tests::messages;
use crate::validator::tests::parse;
use crate::validator::tests::pets_schema;
use crate::validator::validate;

mod known_directives {
    use super::*;

    #[test]
    fn known_directives_in_valid_locations() {
        assert_passes(
            "KnownDirectives",
            r#"
            query Q($skip: Boolean!) @onQuery {
              dog @include(if: true) { name @skip(if: $skip) @onField }
              ...F @tag(name: "spread")
            }
            fragment F on QueryRoot { cat { name } }
            "#,
        );
    }

    #[test]
    fn unknown_directive() {
        assert_fails(
            "KnownDirectives",
            "{ dog @unknown { name } }",
            &["Unknown directive \"unknown\"."],
        );
    }

    #[test]
    fn misplaced_directives() {
        assert_fails(
            "KnownDirectives",
            r#"
            query Q @onField {
              dog @onQuery { name }
              ... @tag(name: "inline") { cat { name } }
            }
            "#,
            &[
                "Directive \"onField\" may not be used on QUERY.",
                "Directive \"onQuery\" may not be used on FIELD.",
                "Directive \"tag\" may not be used on INLINE_FRAGMENT.",
            ],
        );
    }

    #[test]
    fn variable_definition_location() {
        // graphql-parser does not accept directives on variable
        // definitions, so the directive is attached to the parsed
        // document by hand.
        let mut document = parse("query Q($x: Int) { dog { name } }");
        let var_def = &mut document.operations[0].variable_definitions[0];
        var_def.directives.push(Directive {
            arguments: vec![],
            name: "onField".to_string(),
            position: var_def.position.clone(),
        });

        let options = ValidateOptions::default().with_rules(
            RuleSet::empty().add_rule("KnownDirectives", rules::known_directives::create),
        );
        let errors = validate(Some(&pets_schema()), Some(&document), &options);
        assert_eq!(
            messages(&errors),
            vec!["Directive \"onField\" may not be used on VARIABLE_DEFINITION."],
        );
        assert_eq!(errors[0].locations[0].line, 1);
    }
}

mod unique_directives_per_location {
    use super::*;

    #[test]
    fn distinct_and_repeatable_directives() {
        assert_passes(
            "UniqueDirectivesPerLocation",
            r#"
            {
              dog @onField @skip(if: false) { name @onField }
              cat @tag(name: "a") @tag(name: "b") { name }
            }
            "#,
        );
    }

    #[test]
    fn repeated_directive() {
        assert_fails(
            "UniqueDirectivesPerLocation",
            "{ dog @onField @onField @onField { name } }",
            &[
                "The directive \"@onField\" can only be used once at this location.",
                "The directive \"@onField\" can only be used once at this location.",
            ],
        );
    }
}

mod provided_required_directive_arguments {
    use super::*;

    #[test]
    fn missing_directive_argument() {
        // Directives of a field are visited after its selections.
        assert_fails(
            "ProvidedRequiredArguments",
            "{ dog @include { name @tag } }",
            &[
                "Directive \"@tag\" argument \"name\" of type \"String!\" is required but not provided.",
                "Directive \"@include\" argument \"if\" of type \"Boolean!\" is required but not provided.",
            ],
        );
    }
}
