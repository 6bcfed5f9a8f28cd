//! Traversal protocol.
//!
//! Each typed node walks itself depth-first and calls back into a
//! [`Visitor`]. The node decides *when* hooks fire; visitors only decide
//! what to do in them. Hooks receive the field name under which the node
//! was reached, never the node itself.
//!
//! Order per kind:
//!
//! | Kind | Hook sequence |
//! |------|---------------|
//! | Identifier | enter, `scalar_text("id")`, leave |
//! | TypeReference | enter, Identifier `"id"`, `scalar_bool("collection")`, leave |
//! | Attribute | enter, Identifier `"name"`, TypeReference `"type"`, leave |
//! | NodeDefinition | enter, Identifier `"name"`, collection of Attribute `"attributes"`, leave |
//! | Schema | enter, collection of NodeDefinition `"nodes"`, leave |

use crate::ast::{Attribute, Identifier, NodeDefinition, Schema, TypeReference};

/// Callbacks fired while a tree is walked.
///
/// Every hook defaults to a no-op, so implementors override only what they
/// need. `Error` is the failure type of the visitor's own side effects
/// (usually the output sink); the walk itself never fails.
#[allow(unused_variables)]
pub trait Visitor {
    /// Error produced by hook side effects.
    type Error;

    fn enter_identifier(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_identifier(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_type_reference(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_type_reference(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_attribute(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_attribute(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_node_definition(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_node_definition(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_schema(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_schema(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the elements of a sequence field.
    fn enter_collection(&mut self, field: &str, len: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the last element of a sequence field.
    fn leave_collection(&mut self, field: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn scalar_text(&mut self, field: &str, value: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn scalar_int(&mut self, field: &str, value: i64) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Boolean scalar. Forwards to [`Visitor::scalar_int`] as 0 or 1 unless
    /// overridden.
    fn scalar_bool(&mut self, field: &str, value: bool) -> Result<(), Self::Error> {
        self.scalar_int(field, i64::from(value))
    }
}

/// A node that can walk itself.
pub trait Traverse {
    /// Walk this node, reached under `field`, calling into `visitor`.
    fn traverse<V: Visitor + ?Sized>(&self, field: &str, visitor: &mut V) -> Result<(), V::Error>;
}

impl Traverse for Identifier {
    fn traverse<V: Visitor + ?Sized>(&self, field: &str, visitor: &mut V) -> Result<(), V::Error> {
        visitor.enter_identifier(field)?;
        visitor.scalar_text("id", self.name())?;
        visitor.leave_identifier(field)
    }
}

impl Traverse for TypeReference {
    fn traverse<V: Visitor + ?Sized>(&self, field: &str, visitor: &mut V) -> Result<(), V::Error> {
        visitor.enter_type_reference(field)?;
        self.id().traverse("id", visitor)?;
        visitor.scalar_bool("collection", self.is_collection())?;
        visitor.leave_type_reference(field)
    }
}

impl Traverse for Attribute {
    fn traverse<V: Visitor + ?Sized>(&self, field: &str, visitor: &mut V) -> Result<(), V::Error> {
        visitor.enter_attribute(field)?;
        self.name().traverse("name", visitor)?;
        self.ty().traverse("type", visitor)?;
        visitor.leave_attribute(field)
    }
}

impl Traverse for NodeDefinition {
    fn traverse<V: Visitor + ?Sized>(&self, field: &str, visitor: &mut V) -> Result<(), V::Error> {
        visitor.enter_node_definition(field)?;
        self.name().traverse("name", visitor)?;
        traverse_sequence("attributes", self.attributes(), visitor)?;
        visitor.leave_node_definition(field)
    }
}

impl Traverse for Schema {
    fn traverse<V: Visitor + ?Sized>(&self, field: &str, visitor: &mut V) -> Result<(), V::Error> {
        visitor.enter_schema(field)?;
        traverse_sequence("nodes", self.nodes(), visitor)?;
        visitor.leave_schema(field)
    }
}

/// Walk a sequence field, bracketed by the collection hooks.
fn traverse_sequence<T: Traverse, V: Visitor + ?Sized>(
    field: &str,
    items: &[T],
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.enter_collection(field, items.len())?;
    for item in items {
        item.traverse(field, visitor)?;
    }
    visitor.leave_collection(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Default)]
    struct Counter {
        nodes: usize,
        scalars: usize,
        ints: Vec<i64>,
    }

    impl Visitor for Counter {
        type Error = Infallible;

        fn enter_identifier(&mut self, _field: &str) -> Result<(), Infallible> {
            self.nodes += 1;
            Ok(())
        }

        fn enter_type_reference(&mut self, _field: &str) -> Result<(), Infallible> {
            self.nodes += 1;
            Ok(())
        }

        fn scalar_text(&mut self, _field: &str, _value: &str) -> Result<(), Infallible> {
            self.scalars += 1;
            Ok(())
        }

        fn scalar_int(&mut self, _field: &str, value: i64) -> Result<(), Infallible> {
            self.scalars += 1;
            self.ints.push(value);
            Ok(())
        }
    }

    #[test]
    fn test_bool_scalar_forwards_to_int_by_default() {
        let ty = TypeReference::from_parts(Identifier::new("int").unwrap(), true);
        let mut counter = Counter::default();
        ty.traverse("type", &mut counter).unwrap();

        assert_eq!(counter.nodes, 2);
        assert_eq!(counter.scalars, 2);
        assert_eq!(counter.ints, vec![1]);
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        struct FailOnScalar;

        impl Visitor for FailOnScalar {
            type Error = &'static str;

            fn scalar_text(&mut self, _field: &str, _value: &str) -> Result<(), &'static str> {
                Err("sink closed")
            }

            fn leave_identifier(&mut self, _field: &str) -> Result<(), &'static str> {
                panic!("walk continued after error");
            }
        }

        let id = Identifier::new("x").unwrap();
        assert_eq!(id.traverse("name", &mut FailOnScalar), Err("sink closed"));
    }
}
