use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use indexmap::IndexMap;
use libgqlsema::ast::QueryDocument;
use libgqlsema::coerce::DefaultScalarCoercion;
use libgqlsema::coerce::NativeValue;
use libgqlsema::coerce::coerce_variable_values;
use libgqlsema::schema::Schema;
use libgqlsema::schema::SchemaBuilder;
use libgqlsema::validator::ValidateOptions;
use libgqlsema::validator::validate;

const SCHEMA_SDL: &str = r#"
type Query {
  node(id: ID!): Node
  users(first: Int = 10, filter: UserFilter): [User!]!
  search(term: String!): [SearchResult!]!
}

interface Node { id: ID! }

type User implements Node {
  id: ID!
  name: String!
  email: String
  role: Role!
  friends(first: Int = 10): [User!]!
  posts(first: Int = 10): [Post!]!
}

type Post implements Node {
  id: ID!
  title: String!
  body: String
  author: User!
  tags: [String!]!
}

union SearchResult = User | Post

enum Role { ADMIN EDITOR VIEWER }

input UserFilter {
  role: Role
  nameContains: String
  ids: [ID!]
}
"#;

const QUERY: &str = r#"
query Dashboard($first: Int = 5, $filter: UserFilter, $term: String!) {
  users(first: $first, filter: $filter) {
    ...UserFields
    friends(first: 3) { ...UserFields }
    posts { id title tags author { name } }
  }
  search(term: $term) {
    __typename
    ... on User { ...UserFields }
    ... on Post { title body }
  }
  node(id: "1") { id ... on Post { title } }
}

fragment UserFields on User { id name email role }
"#;

fn build_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(Some("bench.graphql"), SCHEMA_SDL)
        .and_then(|builder| builder.build())
        .expect("bench schema is valid")
}

/// A query selecting `width` aliased copies of the same subtree.
fn wide_query(width: usize) -> String {
    let fields: String = (0..width)
        .map(|idx| format!(
            "u{idx}: users(first: {idx}) {{ id name friends {{ id name role }} }}\n",
        ))
        .collect();
    format!("{{\n{fields}}}")
}

// ─── Group 1: Schema Building ─────────────────────────────

fn schema_build(c: &mut Criterion) {
    c.bench_function("schema_build", |b| {
        b.iter(|| black_box(build_schema()))
    });
}

// ─── Group 2: Validation ──────────────────────────────────

fn validation(c: &mut Criterion) {
    let schema = build_schema();
    let options = ValidateOptions::default();
    let mut group = c.benchmark_group("validate");

    let document = QueryDocument::parse(None, QUERY).expect("bench query parses");
    group.bench_function("dashboard", |b| {
        b.iter(|| black_box(validate(Some(&schema), Some(&document), &options)))
    });

    for width in [10, 100, 500] {
        let text = wide_query(width);
        let document = QueryDocument::parse(None, &text).expect("bench query parses");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("wide", width), &document, |b, document| {
            b.iter(|| black_box(validate(Some(&schema), Some(document), &options)))
        });
    }

    group.finish();
}

// ─── Group 3: Variable Coercion ───────────────────────────

fn variable_coercion(c: &mut Criterion) {
    let schema = build_schema();
    let document = QueryDocument::parse(None, QUERY).expect("bench query parses");
    let operation = &document.operations[0];
    let variables: IndexMap<String, NativeValue> = serde_json::from_str::<serde_json::Value>(
        r#"{"term": "rust", "filter": {"role": "ADMIN", "ids": ["1", "2", "3"]}}"#,
    )
        .map(|json| match NativeValue::from(json) {
            NativeValue::Object(fields) => fields,
            _ => IndexMap::new(),
        })
        .expect("bench variables parse");

    c.bench_function("coerce_variable_values", |b| {
        b.iter(|| black_box(coerce_variable_values(
            &schema,
            operation,
            &variables,
            &DefaultScalarCoercion,
        )))
    });
}

criterion_group!(benches, schema_build, validation, variable_coercion);
criterion_main!(benches);
