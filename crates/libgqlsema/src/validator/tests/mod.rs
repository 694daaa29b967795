mod directives_tests;
mod fields_tests;
mod operations_tests;
mod overlapping_fields_tests;
mod validate_tests;
mod variables_tests;

use crate::GraphQLErrors;
use crate::ast::QueryDocument;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validator::DEFAULT_RULES;
use crate::validator::RuleSet;
use crate::validator::ValidateOptions;
use crate::validator::validate;

const PETS_SDL: &str = r#"
schema {
  query: QueryRoot
  subscription: SubscriptionRoot
}

directive @onField on FIELD
directive @onQuery on QUERY
directive @tag(name: String!) repeatable on FIELD | FRAGMENT_SPREAD

interface Being {
  name(surname: Boolean): String
}

interface Pet implements Being {
  name(surname: Boolean): String
}

enum DogCommand { SIT HEEL DOWN }

enum FurColor { BROWN BLACK TAN SPOTTED }

type Dog implements Being & Pet {
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHouseTrained(atOtherHomes: Boolean = true): Boolean
}

type Cat implements Being & Pet {
  name(surname: Boolean): String
  meows: Boolean
  meowVolume: Int
  furColor: FurColor
}

union CatOrDog = Cat | Dog

type Human implements Being {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]
  iq: Int
}

input ComplexInput {
  requiredField: Boolean!
  intField: Int
  stringField: String
  booleanField: Boolean
  stringListField: [String]
  nested: ComplexInput
}

scalar Json

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  stringArgField(stringArg: String): String
  booleanArgField(booleanArg: Boolean): String
  floatArgField(floatArg: Float): String
  idArgField(idArg: ID): String
  enumArgField(enumArg: FurColor): String
  stringListArgField(stringListArg: [String]): String
  stringListNonNullArgField(stringListNonNullArg: [String!]): String
  complexArgField(complexArg: ComplexInput): String
  jsonArgField(jsonArg: Json): String
  multipleReqs(req1: Int!, req2: Int!): String
  multipleOptAndReq(req1: Int!, req2: Int!, opt1: Int = 0, opt2: Int = 0): String
  nonNullFieldWithDefault(arg: Int! = 0): String
}

type QueryRoot {
  human(id: ID): Human
  dog: Dog
  cat: Cat
  pet: Pet
  catOrDog: CatOrDog
  complicatedArgs: ComplicatedArgs
}

type SubscriptionRoot {
  newDog: Dog
  newCat: Cat
}
"#;

fn pets_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(Some("pets.graphql"), PETS_SDL)
        .and_then(|builder| builder.build())
        .unwrap()
}

fn parse(query: &str) -> QueryDocument {
    QueryDocument::parse(Some("query.graphql"), query).unwrap()
}

/// Validate `query` against the pets schema with only the named rule.
fn validate_rule(rule_name: &str, query: &str) -> GraphQLErrors {
    let entry = DEFAULT_RULES.iter()
        .find(|entry| entry.name == rule_name)
        .unwrap();
    let options = ValidateOptions::default()
        .with_rules(RuleSet::empty().add_rule(entry.name, entry.factory));
    validate(Some(&pets_schema()), Some(&parse(query)), &options)
}

fn messages(errors: &GraphQLErrors) -> Vec<&str> {
    errors.iter().map(|err| err.message.as_str()).collect()
}

fn assert_passes(rule_name: &str, query: &str) {
    let errors = validate_rule(rule_name, query);
    assert!(errors.is_empty(), "unexpected errors: {:?}", messages(&errors));
}

/// Assert the rule reports exactly `expected`, in order.
fn assert_fails(rule_name: &str, query: &str, expected: &[&str]) -> GraphQLErrors {
    let errors = validate_rule(rule_name, query);
    assert_eq!(messages(&errors), expected);
    assert!(errors.rule_names().iter().all(|name| *name == rule_name));
    errors
}
