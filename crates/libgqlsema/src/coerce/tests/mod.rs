mod literal_tests;
mod native_value_tests;
mod variables_tests;

use crate::schema::Schema;
use crate::schema::SchemaBuilder;

const COERCION_SDL: &str = r#"
type Query {
  search(
    term: String!
    limit: Int = 10
    ratio: Float
    filter: Filter
    tags: [String!]
  ): [String]
}

enum Color { RED GREEN BLUE }

input Filter {
  color: Color = RED
  ids: [ID!]
  size: Int!
  nested: Inner
}

input Inner { note: String, when: Timestamp }

scalar Timestamp
"#;

fn coercion_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(Some("coercion.graphql"), COERCION_SDL)
        .and_then(|builder| builder.build())
        .unwrap()
}
