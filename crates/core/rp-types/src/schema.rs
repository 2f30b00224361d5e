//! Column metadata and schemas.

use std::fmt;
use std::sync::Arc;

/// Declared type of a column.
///
/// This is a closed set: value copying and codec source checks dispatch on it
/// exhaustively, so an unhandled kind is a compile error rather than a silent
/// runtime no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// UTF-8 text
    Text,

    /// Boolean
    Boolean,

    /// 64-bit signed integer
    Int64,

    /// 64-bit floating point
    Float64,

    /// UTC timestamp
    Timestamp,

    /// Semi-structured JSON
    Json,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Boolean => write!(f, "boolean"),
            Self::Int64 => write!(f, "int64"),
            Self::Float64 => write!(f, "float64"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// A named, typed column at a fixed position in a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    index: usize,
    name: String,
    column_type: ColumnType,
}

impl Column {
    /// Creates a column. `index` must equal the column's position in its schema.
    pub fn new(index: usize, name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            index,
            name: name.into(),
            column_type,
        }
    }

    /// Position of this column in its schema.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Column name. Not required to be unique within a schema.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type.
    #[inline]
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }
}

/// An ordered sequence of columns.
///
/// Names need not be unique; [`Schema::lookup`] resolves a name to the **last**
/// column bearing it, matching the map-overwrite semantics hosts use for
/// by-name access over positional schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

/// Shared, immutable schema handle.
///
/// Schemas are planned once at pipeline setup and shared read-only across
/// workers afterward.
pub type SchemaRef = Arc<Schema>;

impl Schema {
    /// Creates a schema from fully built columns.
    ///
    /// Each column's `index` must match its position in `columns`; use
    /// [`Schema::builder`] to have positions assigned automatically.
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(columns.iter().enumerate().all(|(i, c)| c.index() == i));
        Self { columns }
    }

    /// Returns a builder that assigns column indexes in add order.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// All columns in positional order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column at a position.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Resolves a name to the last column bearing it.
    pub fn lookup(&self, name: &str) -> Option<&Column> {
        self.columns.iter().rev().find(|c| c.name() == name)
    }
}

/// Incremental schema constructor.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<Column>,
}

impl SchemaBuilder {
    /// Appends a column, assigning the next position as its index.
    pub fn add(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        let index = self.columns.len();
        self.columns.push(Column::new(index, name, column_type));
        self
    }

    /// Finishes the schema.
    pub fn build(self) -> Schema {
        Schema {
            columns: self.columns,
        }
    }
}
