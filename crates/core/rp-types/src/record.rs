//! Records and the output-record builder.

use crate::schema::SchemaRef;
use crate::value::Value;
use rp_error::{Result, SchemaError};

/// One row of typed values aligned positionally with a schema.
///
/// A record is read, transformed, and emitted within a single filter call; it
/// never outlives the call that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: SchemaRef,
    values: Vec<Value>,
}

impl Record {
    /// Creates a record, checking that the value count matches the schema.
    pub fn try_new(schema: SchemaRef, values: Vec<Value>) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(SchemaError::Width {
                expected: schema.len(),
                actual: values.len(),
            }
            .into());
        }
        Ok(Self { schema, values })
    }

    /// Schema this record is aligned with.
    #[inline]
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// All values in positional order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a column position.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// Assembles one output record against a fixed schema.
///
/// Positions not explicitly set finish as null, so a builder can be completed
/// after writing only the positions a transformation touched.
#[derive(Debug)]
pub struct RecordBuilder {
    schema: SchemaRef,
    values: Vec<Value>,
}

impl RecordBuilder {
    /// Creates a builder with every position initialized to null.
    pub fn new(schema: SchemaRef) -> Self {
        let values = vec![Value::Null; schema.len()];
        Self { schema, values }
    }

    /// Writes a value at a column position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for the schema.
    pub fn set(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }

    /// Writes null at a column position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for the schema.
    pub fn set_null(&mut self, index: usize) {
        self.values[index] = Value::Null;
    }

    /// Finishes the record. Width is correct by construction.
    pub fn finish(self) -> Record {
        Record {
            schema: self.schema,
            values: self.values,
        }
    }
}
