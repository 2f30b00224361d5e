//! Base58Filter - the record filter implementation.

use crate::codec;
use crate::config::{Base58Config, ColumnRule};
use crate::planner::{ColumnAction, SchemaPlan};
use rp_error::{classify_error, ErrorScope, Result, SchemaError};
use rp_traits::RecordFilter;
use rp_types::{Column, ColumnType, Record, RecordBuilder, SchemaRef, Value};
use tracing::{error, trace};

/// Record filter converting targeted columns between hex and Base-58 text.
///
/// Implements the [`RecordFilter`] trait for use in a Rowpipe filter chain.
///
/// Construction runs schema planning once; [`RecordFilter::apply`] then
/// executes the precomputed per-output-column actions for each record. One
/// malformed cell degrades to null for that field only, while a broken schema
/// contract (a rule over a non-text column, a value contradicting its declared
/// type, a width mismatch) aborts the whole record.
#[derive(Debug)]
pub struct Base58Filter {
    /// Precomputed schemas and per-output-column actions.
    plan: SchemaPlan,

    /// Filter name for logging.
    name: String,
}

impl Base58Filter {
    /// Creates a new Base58Filter from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Filter configuration with the ordered column rules
    /// * `input_schema` - Schema of the records the filter will receive
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a rule names a source column absent
    /// from the input schema.
    pub fn new(config: &Base58Config, input_schema: SchemaRef) -> Result<Self> {
        let plan = SchemaPlan::new(input_schema, config)?;
        Ok(Self {
            plan,
            name: "base58".to_string(),
        })
    }

    /// Sets the filter name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The schema plan this filter executes.
    pub fn plan(&self) -> &SchemaPlan {
        &self.plan
    }

    /// Converts one targeted field, isolating codec failures.
    ///
    /// Returns `Ok(Value::Null)` for a null source value and for a field-scope
    /// codec failure (which is logged here with its full context); returns an
    /// error only for record-scope failures.
    fn convert_field(&self, record: &Record, rule: &ColumnRule, source: &Column) -> Result<Value> {
        let value = &record.values()[source.index()];
        if value.is_null() {
            return Ok(Value::Null);
        }

        if source.column_type() != ColumnType::Text {
            error!(
                column = source.name(),
                column_type = %source.column_type(),
                index = source.index(),
                "cannot convert base58 value of non-text column"
            );
            return Err(SchemaError::TypeMismatch {
                column: source.name().to_string(),
                index: source.index(),
                expected: ColumnType::Text.to_string(),
                actual: source.column_type().to_string(),
            }
            .into());
        }

        let text = value.as_text().ok_or_else(|| SchemaError::TypeMismatch {
            column: source.name().to_string(),
            index: source.index(),
            expected: ColumnType::Text.to_string(),
            actual: value.kind_name().to_string(),
        })?;

        let converted = if rule.encode {
            codec::encode_with_prefix(text, &rule.prefix)
        } else {
            codec::decode_with_prefix(text, &rule.prefix)
        };

        match converted {
            Ok(converted) => Ok(Value::Text(converted)),
            Err(e) => {
                let e = e.into();
                match classify_error(&e) {
                    ErrorScope::Field => {
                        error!(
                            column = source.name(),
                            column_type = %source.column_type(),
                            index = source.index(),
                            value = text,
                            method = if rule.encode { "encode" } else { "decode" },
                            prefix = %rule.prefix,
                            target_name = rule.output_name(),
                            error = %e,
                            "failed to encode/decode base58 column value"
                        );
                        Ok(Value::Null)
                    }
                    ErrorScope::Record => Err(e),
                }
            }
        }
    }
}

/// Copies an untouched value through, checking it against the declared type.
///
/// The set of kinds is closed; an unhandled pairing is a compile error, and a
/// value whose kind contradicts the column's declared type is a record-scope
/// schema error.
fn carry_value(column: &Column, value: &Value) -> Result<Value> {
    let copied = match (column.column_type(), value) {
        (ColumnType::Text, Value::Text(s)) => Value::Text(s.clone()),
        (ColumnType::Boolean, Value::Boolean(b)) => Value::Boolean(*b),
        (ColumnType::Int64, Value::Int64(v)) => Value::Int64(*v),
        (ColumnType::Float64, Value::Float64(v)) => Value::Float64(*v),
        (ColumnType::Timestamp, Value::Timestamp(ts)) => Value::Timestamp(*ts),
        (ColumnType::Json, Value::Json(v)) => Value::Json(v.clone()),
        (column_type, value) => {
            return Err(SchemaError::TypeMismatch {
                column: column.name().to_string(),
                index: column.index(),
                expected: column_type.to_string(),
                actual: value.kind_name().to_string(),
            }
            .into())
        }
    };
    Ok(copied)
}

impl RecordFilter for Base58Filter {
    fn output_schema(&self) -> &SchemaRef {
        self.plan.output()
    }

    fn apply(&self, record: Record) -> Result<Record> {
        if record.len() != self.plan.input().len() {
            return Err(SchemaError::Width {
                expected: self.plan.input().len(),
                actual: record.len(),
            }
            .into());
        }

        trace!(columns = self.plan.output().len(), "applying base58 filter");

        let mut builder = RecordBuilder::new(self.plan.output().clone());
        for (output_index, action) in self.plan.actions().iter().enumerate() {
            match action {
                ColumnAction::Carry { input_index } => {
                    let value = &record.values()[*input_index];
                    if value.is_null() {
                        builder.set_null(output_index);
                    } else {
                        let column = &self.plan.input().columns()[*input_index];
                        builder.set(output_index, carry_value(column, value)?);
                    }
                }
                ColumnAction::Convert { rule, source_index } => {
                    let source = &self.plan.input().columns()[*source_index];
                    builder.set(output_index, self.convert_field(&record, rule, source)?);
                }
            }
        }

        Ok(builder.finish())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
