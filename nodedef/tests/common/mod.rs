//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::convert::Infallible;

use nodedef::ast::{Attribute, Identifier, NodeDefinition, NodeKind, Schema, TypeReference};
use nodedef::value::{Collection, Value};
use nodedef::visit::Visitor;

/// One hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Enter(NodeKind, String),
    Leave(NodeKind, String),
    CollectionEnter(String, usize),
    CollectionLeave(String),
    Text(String, String),
    Int(String, i64),
    Bool(String, bool),
}

/// Visitor that records every hook call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    fn enter(&mut self, kind: NodeKind, field: &str) -> Result<(), Infallible> {
        self.events.push(Event::Enter(kind, field.to_string()));
        Ok(())
    }

    fn leave(&mut self, kind: NodeKind, field: &str) -> Result<(), Infallible> {
        self.events.push(Event::Leave(kind, field.to_string()));
        Ok(())
    }
}

impl Visitor for Recorder {
    type Error = Infallible;

    fn enter_identifier(&mut self, field: &str) -> Result<(), Infallible> {
        self.enter(NodeKind::Identifier, field)
    }

    fn leave_identifier(&mut self, field: &str) -> Result<(), Infallible> {
        self.leave(NodeKind::Identifier, field)
    }

    fn enter_type_reference(&mut self, field: &str) -> Result<(), Infallible> {
        self.enter(NodeKind::TypeReference, field)
    }

    fn leave_type_reference(&mut self, field: &str) -> Result<(), Infallible> {
        self.leave(NodeKind::TypeReference, field)
    }

    fn enter_attribute(&mut self, field: &str) -> Result<(), Infallible> {
        self.enter(NodeKind::Attribute, field)
    }

    fn leave_attribute(&mut self, field: &str) -> Result<(), Infallible> {
        self.leave(NodeKind::Attribute, field)
    }

    fn enter_node_definition(&mut self, field: &str) -> Result<(), Infallible> {
        self.enter(NodeKind::NodeDefinition, field)
    }

    fn leave_node_definition(&mut self, field: &str) -> Result<(), Infallible> {
        self.leave(NodeKind::NodeDefinition, field)
    }

    fn enter_schema(&mut self, field: &str) -> Result<(), Infallible> {
        self.enter(NodeKind::Schema, field)
    }

    fn leave_schema(&mut self, field: &str) -> Result<(), Infallible> {
        self.leave(NodeKind::Schema, field)
    }

    fn enter_collection(&mut self, field: &str, len: usize) -> Result<(), Infallible> {
        self.events.push(Event::CollectionEnter(field.to_string(), len));
        Ok(())
    }

    fn leave_collection(&mut self, field: &str) -> Result<(), Infallible> {
        self.events.push(Event::CollectionLeave(field.to_string()));
        Ok(())
    }

    fn scalar_text(&mut self, field: &str, value: &str) -> Result<(), Infallible> {
        self.events.push(Event::Text(field.to_string(), value.to_string()));
        Ok(())
    }

    fn scalar_int(&mut self, field: &str, value: i64) -> Result<(), Infallible> {
        self.events.push(Event::Int(field.to_string(), value));
        Ok(())
    }

    fn scalar_bool(&mut self, field: &str, value: bool) -> Result<(), Infallible> {
        self.events.push(Event::Bool(field.to_string(), value));
        Ok(())
    }
}

/// Build an identifier value.
pub fn ident(name: &str) -> Value {
    Identifier::new(name).unwrap().into()
}

/// Build an attribute value through the validating constructors.
pub fn attribute(name: &str, ty: &str, collection: bool) -> Value {
    let ty = TypeReference::new(ident(ty), collection).unwrap();
    Attribute::new(ident(name), ty.into()).unwrap().into()
}

/// Build a node definition value from attribute values.
pub fn node(name: &str, attributes: Vec<Value>) -> Value {
    let attributes: Collection = attributes.into_iter().collect();
    NodeDefinition::new(ident(name), attributes.into()).unwrap().into()
}

/// Build a schema from node definition values.
pub fn schema(nodes: Vec<Value>) -> Schema {
    let nodes: Collection = nodes.into_iter().collect();
    Schema::new(nodes.into()).unwrap()
}

/// `Point { x: int }`
pub fn point_schema() -> Schema {
    schema(vec![node("Point", vec![attribute("x", "int", false)])])
}
