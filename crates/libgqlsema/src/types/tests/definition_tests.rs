use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::DefinitionKind;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn kind_predicates() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { a: I }\n",
            "interface I { id: ID }\n",
            "union U = Query\n",
            "enum E { A }\n",
            "input In { a: Int }",
        ))?
        .build()?;
    let lookup = |name: &str| schema.lookup_type(name).unwrap();

    assert!(lookup("Query").is_composite());
    assert!(!lookup("Query").is_abstract());
    assert!(lookup("I").is_abstract());
    assert!(lookup("U").is_abstract());
    assert!(lookup("E").is_leaf());
    assert!(lookup("E").is_input_type());
    assert!(lookup("E").is_output_type());
    assert!(lookup("Int").is_leaf());
    assert!(lookup("In").is_input_type());
    assert!(!lookup("In").is_composite());
    assert!(lookup("In").fields().is_some());
    assert!(lookup("U").fields().is_none());

    assert_eq!(lookup("In").type_kind(), TypeKind::InputObject);
    assert_eq!(lookup("In").type_kind().to_string(), "INPUT_OBJECT");
    assert!(matches!(lookup("U").kind(), DefinitionKind::Union { .. }));

    Ok(())
}

#[test]
fn named_refs_deref_through_the_schema() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query implements Node { id: ID } interface Node { id: ID }")?
        .build()?;

    let query = schema.lookup_type("Query").unwrap();
    let node = query.interfaces()[0].deref(&schema).unwrap();
    assert_eq!(node.type_kind(), TypeKind::Interface);
    assert!(query.implements("Node"));
    assert!(!query.implements("Query"));

    Ok(())
}

#[test]
fn directives_on_definitions_are_kept() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { old: Int @deprecated(reason: \"use new\") }\n",
            "scalar Url @specifiedBy(url: \"https://url.spec.whatwg.org\")",
        ))?
        .build()?;

    let old = schema.lookup_type("Query").unwrap().field("old").unwrap();
    let deprecated = &old.directives()[0];
    assert_eq!(deprecated.name, "deprecated");
    assert_eq!(
        deprecated.argument("reason").unwrap().value.to_string(),
        "\"use new\"",
    );
    assert_eq!(schema.lookup_type("Url").unwrap().directives().len(), 1);

    Ok(())
}
