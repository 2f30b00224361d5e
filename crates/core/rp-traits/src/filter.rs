//! RecordFilter trait for record processing.

use rp_error::Result;
use rp_types::{Record, SchemaRef};

/// Trait for record filters.
///
/// Filters consume one typed record and produce one typed record, enabling:
/// - Value transformation (encoding, decoding, reshaping cell values)
/// - Schema evolution (overriding a column in place, appending new columns)
///
/// A filter derives its output schema once, at construction, from the input
/// schema it is built against; [`RecordFilter::apply`] is then called once per
/// record with no further schema work.
///
/// # Thread Safety
///
/// Filters must be `Send + Sync`: after setup they are shared read-only
/// across workers, each of which owns the records it passes through.
pub trait RecordFilter: Send + Sync {
    /// Schema of the records this filter produces.
    fn output_schema(&self) -> &SchemaRef;

    /// Applies the filter to a record.
    ///
    /// # Arguments
    ///
    /// * `record` - Input record, aligned with the schema the filter was
    ///   constructed against
    ///
    /// # Returns
    ///
    /// One output record aligned with [`RecordFilter::output_schema`]
    fn apply(&self, record: Record) -> Result<Record>;

    /// Returns the name of this filter for logging.
    fn name(&self) -> &str {
        "filter"
    }
}

/// A chain of filters applied in sequence.
///
/// Each filter must be constructed against the output schema of the filter
/// before it; the chain's own output schema is the last filter's (or the
/// input schema when the chain is empty).
pub struct FilterChain {
    filters: Vec<Box<dyn RecordFilter>>,
    input_schema: SchemaRef,
    name: String,
}

impl FilterChain {
    /// Creates a new empty filter chain over an input schema.
    pub fn new(input_schema: SchemaRef) -> Self {
        Self {
            filters: Vec::new(),
            input_schema,
            name: "chain".to_string(),
        }
    }

    /// Adds a filter to the chain.
    pub fn push(mut self, filter: Box<dyn RecordFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the name of this chain.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns true if the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

impl RecordFilter for FilterChain {
    fn output_schema(&self) -> &SchemaRef {
        self.filters
            .last()
            .map_or(&self.input_schema, |f| f.output_schema())
    }

    fn apply(&self, mut record: Record) -> Result<Record> {
        for filter in &self.filters {
            record = filter.apply(record)?;
        }
        Ok(record)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// An identity filter that passes records through unchanged.
///
/// Useful as a default or placeholder.
pub struct IdentityFilter {
    schema: SchemaRef,
}

impl IdentityFilter {
    /// Creates an identity filter over a schema.
    pub fn new(schema: SchemaRef) -> Self {
        Self { schema }
    }
}

impl RecordFilter for IdentityFilter {
    fn output_schema(&self) -> &SchemaRef {
        &self.schema
    }

    fn apply(&self, record: Record) -> Result<Record> {
        Ok(record)
    }

    fn name(&self) -> &str {
        "identity"
    }
}
