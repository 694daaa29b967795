use crate::validator::tests::assert_fails;
use crate::validator::tests::assert_passes;
use crate::validator::tests::validate_rule;

const RULE: &str = "OverlappingFieldsCanBeMerged";

#[test]
fn identical_fields_merge() {
    assert_passes(
        RULE,
        r#"
        {
          dog {
            name
            name
            otherName: name
            doesKnowCommand(dogCommand: SIT)
            doesKnowCommand(dogCommand: SIT)
            ...F
          }
        }
        fragment F on Dog { name barks: barks }
        "#,
    );
}

#[test]
fn argument_order_does_not_matter() {
    assert_passes(
        RULE,
        r#"
        {
          complicatedArgs {
            multipleReqs(req1: 1, req2: 2)
            multipleReqs(req2: 2, req1: 1)
          }
        }
        "#,
    );
}

#[test]
fn same_alias_different_fields() {
    let errors = assert_fails(
        RULE,
        "{\n  dog {\n    fido: name\n    fido: nickname\n  }\n}",
        &["Field dog.fido has multiple conflicting definitions:\n    Dog.name(): String\n    Dog.nickname(): String"],
    );
    let lines: Vec<usize> = errors[0].locations.iter().map(|loc| loc.line).collect();
    assert_eq!(lines, vec![3, 4]);
}

#[test]
fn different_arguments() {
    assert_fails(
        RULE,
        r#"
        {
          dog {
            doesKnowCommand(dogCommand: SIT)
            doesKnowCommand(dogCommand: HEEL)
            doesKnowCommand
          }
        }
        "#,
        &["Field dog.doesKnowCommand has multiple conflicting definitions:\n    \
           Dog.doesKnowCommand(dogCommand: SIT): Boolean\n    \
           Dog.doesKnowCommand(dogCommand: HEEL): Boolean\n    \
           Dog.doesKnowCommand(): Boolean"],
    );
}

#[test]
fn conflicting_types_through_aliases() {
    assert_fails(
        RULE,
        r#"
        {
          dog { value: barkVolume }
          dog { value: name }
        }
        "#,
        &["Field dog.value has multiple conflicting definitions:\n    \
           Dog.barkVolume(): Int\n    \
           Dog.name(): String"],
    );
}

#[test]
fn directives_are_rendered() {
    assert_fails(
        RULE,
        "{ dog { x: name @onField x: barks @skip(if: true) } }",
        &["Field dog.x has multiple conflicting definitions:\n    \
           Dog.name()@onField(): String\n    \
           Dog.barks()@skip(if: true): Boolean"],
    );
}

#[test]
fn untyped_inline_fragments_are_transparent() {
    assert_fails(
        RULE,
        "{ dog { x: name ... { x: barks } ... on Dog { x: nickname } } }",
        &["Field dog.x has multiple conflicting definitions:\n    \
           Dog.name(): String\n    \
           Dog.barks(): Boolean\n    \
           Dog.nickname(): String"],
    );
}

#[test]
fn distinct_type_conditions_do_not_conflict() {
    assert_passes(
        RULE,
        r#"
        {
          pet {
            ... on Dog { volume: barkVolume }
            ... on Cat { volume: meowVolume }
          }
          catOrDog { ...DogVolume ...CatVolume }
        }
        fragment DogVolume on Dog { volume: barkVolume }
        fragment CatVolume on Cat { volume: meows }
        "#,
    );
}

#[test]
fn conflict_between_spread_fragments() {
    assert_fails(
        RULE,
        r#"
        { dog { ...A ...B } }
        fragment A on Dog { x: name }
        fragment B on Dog { x: barks }
        "#,
        &["Field dog.x has multiple conflicting definitions:\n    \
           Dog.name(): String\n    \
           Dog.barks(): Boolean"],
    );
}

#[test]
fn conflict_inside_a_fragment_is_reported_once() {
    let errors = validate_rule(
        RULE,
        r#"
        { dog { ...A } }
        query Other { dog { ...A } }
        fragment A on Dog { x: name x: barks }
        "#,
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].locations[0].line, 4);
}

#[test]
fn nested_conflicts() {
    assert_fails(
        RULE,
        r#"
        {
          human { relatives { name } }
          human { relatives { name: iq } }
        }
        "#,
        &["Field human.relatives.name has multiple conflicting definitions:\n    \
           Human.name(): String\n    \
           Human.iq(): Int"],
    );
}

#[test]
fn recursive_fragments_terminate() {
    assert_passes(
        RULE,
        r#"
        { dog { ...A } }
        fragment A on Dog { name ...B }
        fragment B on Dog { name ...A }
        "#,
    );
}

#[test]
fn condition_on_the_enclosing_type_shares_the_bucket() {
    assert_fails(
        RULE,
        "{ dog { name ... on Dog { name: nickname } } }",
        &["Field dog.name has multiple conflicting definitions:\n    \
           Dog.name(): String\n    \
           Dog.nickname(): String"],
    );
}

mod repeated_spreads {
    use super::*;

    const CHAIN_LEN: usize = 20;

    /// `{ human { ...F0 } }` followed by a chain of fragments on `Human`
    /// where each one spreads the next through `link`. The last fragment
    /// selects `x` twice with conflicting fields.
    fn fragment_chain(link: impl Fn(usize) -> String) -> String {
        let mut query = String::from("{ human { ...F0 } }\n");
        for idx in 0..CHAIN_LEN {
            query.push_str(&format!("fragment F{idx} on Human {{ {} }}\n", link(idx + 1)));
        }
        query.push_str(&format!("fragment F{CHAIN_LEN} on Human {{ name x: name x: iq }}\n"));
        query
    }

    #[test]
    fn same_fragment_twice_per_level() {
        let query = fragment_chain(|next| format!("...F{next} ...F{next}"));
        let errors = validate_rule(RULE, &query);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Field x has multiple conflicting definitions"));
    }

    #[test]
    fn same_fragment_under_sibling_aliases() {
        let query = fragment_chain(
            |next| format!("a: relatives {{ ...F{next} }} b: relatives {{ ...F{next} }}"),
        );
        let errors = validate_rule(RULE, &query);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Field x has multiple conflicting definitions"));
    }
}
