//! JSON input documents.
//!
//! Stands in for a grammar front end: a document like
//!
//! ```json
//! {"nodes": [{"name": "Point", "attributes": [{"name": "x", "type": "int", "collection": false}]}]}
//! ```
//!
//! is decoded with serde and then lowered into generic [`Value`]s, so every
//! node still goes through the validating constructors.

use std::path::Path;

use nodedef::ast::{Attribute, Identifier, NodeDefinition, NodeKind, Schema, TypeReference};
use nodedef::value::{Collection, Value};
use serde::Deserialize;

use crate::error::{CliError, CliResult, InputError};

/// Top-level input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    /// Node definitions in declaration order.
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,
}

/// One node definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDocument {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDocument>,
}

/// One attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub collection: bool,
}

impl SchemaDocument {
    /// Decode a document from JSON text.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Lower the document into generic values and build the typed tree.
    pub fn lower(self) -> nodedef::Result<Schema> {
        let mut nodes = Collection::new();
        for node in self.nodes {
            nodes.push(node.lower()?);
        }
        Schema::new(nodes.into())
    }
}

impl NodeDocument {
    fn lower(self) -> nodedef::Result<Value> {
        let name = name_in(self.name, NodeKind::NodeDefinition, "name")?;
        let mut attributes = Collection::new();
        for attribute in self.attributes {
            attributes.push(attribute.lower()?);
        }
        Ok(NodeDefinition::new(name, attributes.into())?.into())
    }
}

impl AttributeDocument {
    fn lower(self) -> nodedef::Result<Value> {
        let id = name_in(self.ty, NodeKind::TypeReference, "id")?;
        let ty = TypeReference::new(id, self.collection)?;
        let name = name_in(self.name, NodeKind::Attribute, "name")?;
        Ok(Attribute::new(name, ty.into())?.into())
    }
}

/// Build the identifier held by `node.field`.
fn name_in(text: String, node: NodeKind, field: &'static str) -> nodedef::Result<Value> {
    Identifier::new(text)
        .map(Value::from)
        .map_err(|e| e.in_slot(node, field))
}

/// Read, decode and build the schema at `path`.
pub fn load_schema(path: &Path) -> CliResult<Schema> {
    let source = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document = SchemaDocument::from_json(&source).map_err(|e| InputError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), nodes = document.nodes.len(), "decoded input");

    document.lower().map_err(|e| CliError::Construct {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodedef::ConstructError;

    fn lower_err(json: &str) -> ConstructError {
        SchemaDocument::from_json(json).unwrap().lower().unwrap_err()
    }

    #[test]
    fn test_decode_and_lower() {
        let document = SchemaDocument::from_json(
            r#"{"nodes": [{"name": "Point", "attributes": [
                {"name": "x", "type": "int"},
                {"name": "tags", "type": "string", "collection": true}
            ]}]}"#,
        )
        .unwrap();

        let schema = document.lower().unwrap();
        let point = &schema.nodes()[0];
        assert_eq!(point.name().name(), "Point");
        assert_eq!(point.attributes().len(), 2);
        assert!(!point.attributes()[0].ty().is_collection());
        assert!(point.attributes()[1].ty().is_collection());
        assert_eq!(point.attributes()[1].ty().id().name(), "string");
    }

    #[test]
    fn test_empty_document() {
        let document = SchemaDocument::from_json("{}").unwrap();
        assert!(document.lower().unwrap().nodes().is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(SchemaDocument::from_json(r#"{"nodes": [], "extra": 1}"#).is_err());
    }

    #[test]
    fn test_empty_attribute_type_names_its_slot() {
        let err = lower_err(
            r#"{"nodes": [{"name": "A", "attributes": [{"name": "x", "type": ""}]}]}"#,
        );
        assert_eq!(
            err,
            ConstructError::EmptyName {
                node: NodeKind::TypeReference,
                field: "id"
            }
        );
    }

    #[test]
    fn test_empty_names_are_told_apart() {
        let node_name = lower_err(r#"{"nodes": [{"name": ""}]}"#);
        let attribute_name = lower_err(
            r#"{"nodes": [{"name": "A", "attributes": [{"name": "", "type": "int"}]}]}"#,
        );

        assert_eq!(node_name.to_string(), "empty name for NodeDefinition.name");
        assert_eq!(attribute_name.to_string(), "empty name for Attribute.name");
        assert_ne!(node_name, attribute_name);
    }
}
