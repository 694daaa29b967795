use crate::validator::RuleSet;
use crate::validator::ValidateOptions;
use crate::validator::tests::messages;
use crate::validator::tests::parse;
use crate::validator::tests::pets_schema;
use crate::validator::validate;
use rayon::prelude::*;

const VALID_QUERY: &str = r#"
query Pets($id: ID, $withName: Boolean!, $command: DogCommand = SIT) {
  human(id: $id) {
    name
    pets {
      __typename
      ...PetFields
      ... on Dog {
        doesKnowCommand(dogCommand: $command)
        isHouseTrained
      }
    }
  }
  catOrDog {
    ... on Cat { furColor meows }
    ... on Dog { name @include(if: $withName) }
  }
}

fragment PetFields on Pet {
  name(surname: true)
  ... on Cat { meowVolume }
}

subscription NewDogs {
  newDog { ...PetFields barks }
}
"#;

#[test]
fn valid_document_with_default_rules() {
    let errors = validate(
        Some(&pets_schema()),
        Some(&parse(VALID_QUERY)),
        &ValidateOptions::default(),
    );
    assert!(errors.is_empty(), "unexpected errors: {:?}", messages(&errors));
}

#[test]
fn errors_from_several_rules() {
    let errors = validate(
        Some(&pets_schema()),
        Some(&parse("query Q($unused: Int) { dog { nam } } fragment F on Dog { name }")),
        &ValidateOptions::default(),
    );
    assert_eq!(
        errors.rule_names(),
        vec!["FieldsOnCorrectType", "NoUnusedFragments", "NoUnusedVariables"],
    );
}

#[test]
fn errors_carry_source_name() {
    let errors = validate(
        Some(&pets_schema()),
        Some(&parse("{ unknown }")),
        &ValidateOptions::default(),
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_name.as_deref(), Some("query.graphql"));
}

#[test]
fn missing_schema_or_document() {
    let schema = pets_schema();
    let document = parse("{ dog { name } }");
    let options = ValidateOptions::default();

    let errors = validate(None, Some(&document), &options);
    assert_eq!(messages(&errors), vec!["cannot validate without a schema"]);

    let errors = validate(Some(&schema), None, &options);
    assert_eq!(messages(&errors), vec!["cannot validate without a document"]);

    let errors = validate(None, None, &options);
    assert_eq!(errors.len(), 2);
    assert!(errors.rule_names().is_empty());
}

mod error_cap {
    use super::*;

    const MANY_ERRORS: &str = "{ a b c d e } fragment Unused on Dog { name }";

    #[test]
    fn uncapped() {
        let errors = validate(
            Some(&pets_schema()),
            Some(&parse(MANY_ERRORS)),
            &ValidateOptions::default(),
        );
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn stops_at_the_cap() {
        let options = ValidateOptions::default().with_max_errors(Some(2));
        let errors = validate(Some(&pets_schema()), Some(&parse(MANY_ERRORS)), &options);
        assert_eq!(
            messages(&errors),
            vec![
                "Cannot query field \"a\" on type \"QueryRoot\".",
                "Cannot query field \"b\" on type \"QueryRoot\".",
            ],
        );
    }

    #[test]
    fn zero_reports_nothing() {
        let options = ValidateOptions::default().with_max_errors(Some(0));
        let errors = validate(Some(&pets_schema()), Some(&parse(MANY_ERRORS)), &options);
        assert!(errors.is_empty());
    }

    #[test]
    fn event_crossing_the_cap_is_delivered_to_every_rule() {
        // Both rules report on the first field.
        let options = ValidateOptions::default()
            .with_max_errors(Some(1))
            .with_rules(
                RuleSet::default()
                    .remove_rule("FieldsOnCorrectType")
                    .add_rule("Second", crate::validator::rules::fields_on_correct_type::create)
                    .add_rule("First", crate::validator::rules::fields_on_correct_type::create),
            );
        let errors = validate(Some(&pets_schema()), Some(&parse(MANY_ERRORS)), &options);
        assert_eq!(errors.rule_names(), vec!["Second", "First"]);
    }
}

mod suggestions {
    use super::*;

    const TYPO: &str = "{ dog { nmae } }";

    #[test]
    fn enabled_by_default() {
        let errors = validate(
            Some(&pets_schema()),
            Some(&parse(TYPO)),
            &ValidateOptions::default(),
        );
        assert_eq!(
            messages(&errors),
            vec!["Cannot query field \"nmae\" on type \"Dog\". Did you mean \"name\"?"],
        );
    }

    #[test]
    fn disabled() {
        let options = ValidateOptions::default().with_disable_suggestions(true);
        let errors = validate(Some(&pets_schema()), Some(&parse(TYPO)), &options);
        assert_eq!(
            messages(&errors),
            vec!["Cannot query field \"nmae\" on type \"Dog\"."],
        );
    }
}

#[test]
fn shared_schema_across_threads() {
    let schema = pets_schema();
    let valid = parse(VALID_QUERY);
    let invalid = parse("{ dog { nmae } }");
    let options = ValidateOptions::default();

    let error_counts: Vec<usize> = (0..64)
        .into_par_iter()
        .map(|idx| {
            let document = if idx % 2 == 0 { &valid } else { &invalid };
            validate(Some(&schema), Some(document), &options).len()
        })
        .collect();

    for (idx, count) in error_counts.into_iter().enumerate() {
        assert_eq!(count, idx % 2, "document {idx}");
    }
}
