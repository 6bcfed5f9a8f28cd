//! Snapshot tests for rendered output.
//!
//! These tests use insta inline snapshots to pin the exact text each
//! built-in renderer produces.

mod common;

use common::{attribute, node, point_schema, schema};
use nodedef::ast::Schema;
use nodedef::render::{
    DeclarationRenderer, IndentStyle, InstanceRenderer, PrettyRenderer, RenderOptions, Renderer,
    RendererRegistry,
};

// =============================================================================
// Pretty-Printer
// =============================================================================

#[test]
fn snapshot_pretty_point() {
    let output = PrettyRenderer::new().render_to_string(&point_schema()).unwrap();

    insta::assert_snapshot!(output, @r#"
(Schema schema=[
  (NodeDefinition nodes=(Identifier name=(id="Point"))[
    (Attribute attributes=(Identifier name=(id="x"))(TypeReference type=(Identifier id=(id="int"))(collection="false")))
  ])
])
"#);
}

#[test]
fn test_pretty_point_line_structure() {
    let output = PrettyRenderer::new().render_to_string(&point_schema()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("(Schema"));
    assert!(lines[0].ends_with('['));
    assert!(lines[1].starts_with("  (NodeDefinition"));
    assert!(lines[2].starts_with("    (Attribute"));
    assert!(lines[2].contains("(collection=\"false\")"));
    assert_eq!(lines[3], "  ])");
    assert_eq!(lines[4], "])");
}

#[test]
fn snapshot_pretty_two_definitions() {
    let tree = schema(vec![
        node(
            "Point",
            vec![attribute("x", "int", false), attribute("y", "int", false)],
        ),
        node("Empty", vec![]),
    ]);
    let output = PrettyRenderer::new()
        .with_indent(IndentStyle::Spaces4)
        .render_to_string(&tree)
        .unwrap();

    insta::assert_snapshot!(output, @r#"
(Schema schema=[
    (NodeDefinition nodes=(Identifier name=(id="Point"))[
        (Attribute attributes=(Identifier name=(id="x"))(TypeReference type=(Identifier id=(id="int"))(collection="false")))
        (Attribute attributes=(Identifier name=(id="y"))(TypeReference type=(Identifier id=(id="int"))(collection="false")))
    ])
    (NodeDefinition nodes=(Identifier name=(id="Empty"))[
    ])
])
"#);
}

#[test]
fn test_pretty_empty_schema() {
    let output = PrettyRenderer::new()
        .render_to_string(&Schema::default())
        .unwrap();
    assert_eq!(output, "(Schema schema=[\n])\n");
}

// =============================================================================
// Instance Emitter
// =============================================================================

#[test]
fn snapshot_instance_point() {
    let output = InstanceRenderer::new()
        .render_to_string(&point_schema())
        .unwrap();

    insta::assert_snapshot!(output, @r#"new Schema([new NodeDefinition(new Identifier("Point"), [new Attribute(new Identifier("x"), new TypeReference(new Identifier("int"), false))])])"#);
}

#[test]
fn test_instance_has_no_dangling_commas() {
    let tree = schema(vec![
        node("A", vec![attribute("a", "int", false), attribute("b", "A", true)]),
        node("B", vec![]),
    ]);
    let output = InstanceRenderer::new().render_to_string(&tree).unwrap();

    for bad in ["(, ", "[, ", ", )", ", ]", ",,"] {
        assert!(!output.contains(bad), "found {:?} in {}", bad, output);
    }
    assert!(output.contains("new NodeDefinition(new Identifier(\"B\"), [])"));
}

#[test]
fn test_empty_schema_instance() {
    let output = InstanceRenderer::new()
        .render_to_string(&Schema::default())
        .unwrap();
    assert_eq!(output, "new Schema([])\n");
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn snapshot_declarations() {
    let output = DeclarationRenderer::new()
        .render_to_string(&Schema::default())
        .unwrap();

    insta::assert_snapshot!(output, @r#"
export class Identifier {
  constructor(public readonly id: string) {}
}

export class TypeReference {
  constructor(public readonly id: Identifier, public readonly collection: boolean) {}
}

export class Attribute {
  constructor(public readonly name: Identifier, public readonly type: TypeReference) {}
}

export class NodeDefinition {
  constructor(public readonly name: Identifier, public readonly attributes: Attribute[]) {}
}

export class Schema {
  constructor(public readonly nodes: NodeDefinition[]) {}
}
"#);
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_fresh_renderers_produce_identical_output() {
    let tree = point_schema();
    let registry = RendererRegistry::builtin(&RenderOptions::default());

    for renderer in registry.iter() {
        let first = renderer.render_to_string(&tree).unwrap();
        let second = renderer.render_to_string(&tree).unwrap();
        assert_eq!(first, second, "renderer {} is not idempotent", renderer.id());
    }
}

#[test]
fn test_write_failure_propagates() {
    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = PrettyRenderer::new()
        .render(&point_schema(), &mut Closed)
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
}
