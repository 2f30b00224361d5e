//! Output-schema planning.
//!
//! Planning runs once at pipeline setup: the input schema is copied in order,
//! rules without `new_name` force their column's declared type to text in
//! place, rules with `new_name` append a text column at the end. Rule lookup
//! for value-writing is keyed by output column name with later rules silently
//! winning, and is precomputed here as a per-output-column action list so the
//! per-record path never repeats name resolution.

use crate::config::{Base58Config, ColumnRule};
use rp_error::{Result, RpError};
use rp_types::{ColumnType, Schema, SchemaRef};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

/// What the transformer does for one output column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ColumnAction {
    /// Copy the value at the same position in the input record.
    Carry { input_index: usize },

    /// Convert the value read from `source_index` using `rule`.
    Convert {
        rule: ColumnRule,
        source_index: usize,
    },
}

/// The planner's result: both schemas plus the per-output-column actions.
///
/// Plans are immutable after construction and shared read-only across
/// workers, each of which owns the records it transforms.
#[derive(Debug, Clone)]
pub struct SchemaPlan {
    input: SchemaRef,
    output: SchemaRef,
    actions: Vec<ColumnAction>,
}

impl SchemaPlan {
    /// Derives the output schema and action plan from an input schema and
    /// filter configuration.
    ///
    /// Planning is pure: the same schema and rules always produce the same
    /// plan, independent of record data. Enforcement of "the source column
    /// must actually be text" happens at read time in the transformer, not
    /// here.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a rule names a source column absent
    /// from the input schema.
    pub fn new(input: SchemaRef, config: &Base58Config) -> Result<Self> {
        warn_on_duplicate_names(&input);

        // Baseline: every input column, in order, unchanged.
        let mut columns: Vec<(String, ColumnType)> = input
            .columns()
            .iter()
            .map(|c| (c.name().to_string(), c.column_type()))
            .collect();

        let mut resolved: Vec<(&ColumnRule, usize)> = Vec::with_capacity(config.columns.len());
        for rule in &config.columns {
            let source = input.lookup(&rule.name).ok_or_else(|| {
                RpError::Config(format!("no column named '{}' in input schema", rule.name))
            })?;
            resolved.push((rule, source.index()));

            match &rule.new_name {
                Some(new_name) => {
                    info!(
                        column = %new_name,
                        column_type = %ColumnType::Text,
                        index = columns.len(),
                        "added column"
                    );
                    columns.push((new_name.clone(), ColumnType::Text));
                }
                None => {
                    info!(column = %rule.name, "overriding column");
                    columns[source.index()].1 = ColumnType::Text;
                }
            }
        }

        let output = Arc::new(
            columns
                .into_iter()
                .fold(Schema::builder(), |builder, (name, column_type)| {
                    builder.add(name, column_type)
                })
                .build(),
        );

        // Rule lookup keyed by output column name; later rules silently win.
        let mut rules_by_output: HashMap<&str, (&ColumnRule, usize)> = HashMap::new();
        for (rule, source_index) in &resolved {
            if rules_by_output
                .insert(rule.output_name(), (rule, *source_index))
                .is_some()
            {
                warn!(
                    column = rule.output_name(),
                    "multiple rules write to the same output column, last wins"
                );
            }
        }

        let actions = output
            .columns()
            .iter()
            .map(|column| match rules_by_output.get(column.name()) {
                Some((rule, source_index)) => ColumnAction::Convert {
                    rule: (*rule).clone(),
                    source_index: *source_index,
                },
                None => ColumnAction::Carry {
                    input_index: column.index(),
                },
            })
            .collect();

        Ok(Self {
            input,
            output,
            actions,
        })
    }

    /// Schema the filter reads.
    #[inline]
    pub fn input(&self) -> &SchemaRef {
        &self.input
    }

    /// Schema the filter produces.
    #[inline]
    pub fn output(&self) -> &SchemaRef {
        &self.output
    }

    /// Per-output-column actions, aligned with the output schema.
    #[inline]
    pub(crate) fn actions(&self) -> &[ColumnAction] {
        &self.actions
    }
}

fn warn_on_duplicate_names(schema: &Schema) {
    let mut seen = HashSet::new();
    for column in schema.columns() {
        if !seen.insert(column.name()) {
            warn!(
                column = column.name(),
                "duplicate column name in input schema"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnRule;

    fn input_schema() -> SchemaRef {
        Arc::new(
            Schema::builder()
                .add("_id", ColumnType::Text)
                .add("count", ColumnType::Int64)
                .build(),
        )
    }

    #[test]
    fn test_plan_without_rules_is_passthrough() {
        let input = input_schema();
        let plan = SchemaPlan::new(input.clone(), &Base58Config::default()).unwrap();

        assert_eq!(plan.output(), &input);
        assert!(plan
            .actions()
            .iter()
            .enumerate()
            .all(|(i, a)| matches!(a, ColumnAction::Carry { input_index } if *input_index == i)));
    }

    #[test]
    fn test_plan_override_forces_text() {
        let config = Base58Config::new(vec![ColumnRule::new("count")]);
        let plan = SchemaPlan::new(input_schema(), &config).unwrap();

        assert_eq!(plan.output().len(), 2);
        let column = plan.output().column(1).unwrap();
        assert_eq!(column.name(), "count");
        assert_eq!(column.column_type(), ColumnType::Text);
        assert_eq!(
            plan.actions()[1],
            ColumnAction::Convert {
                rule: ColumnRule::new("count"),
                source_index: 1,
            }
        );
    }

    #[test]
    fn test_plan_append_keeps_source_column() {
        let config = Base58Config::new(vec![ColumnRule::new("count").with_new_name("count_b58")]);
        let plan = SchemaPlan::new(input_schema(), &config).unwrap();

        assert_eq!(plan.output().len(), 3);

        // Source keeps its position and original declared type.
        let source = plan.output().column(1).unwrap();
        assert_eq!(source.name(), "count");
        assert_eq!(source.column_type(), ColumnType::Int64);

        let appended = plan.output().column(2).unwrap();
        assert_eq!(appended.name(), "count_b58");
        assert_eq!(appended.column_type(), ColumnType::Text);
        assert_eq!(appended.index(), 2);
    }

    #[test]
    fn test_plan_rejects_unknown_source() {
        let config = Base58Config::new(vec![ColumnRule::new("missing")]);
        let result = SchemaPlan::new(input_schema(), &config);
        assert!(matches!(result, Err(RpError::Config(_))));
    }

    #[test]
    fn test_plan_duplicate_output_names_last_wins() {
        let input = Arc::new(
            Schema::builder()
                .add("a", ColumnType::Text)
                .add("b", ColumnType::Text)
                .build(),
        );
        let config = Base58Config::new(vec![
            ColumnRule::new("a"),
            ColumnRule::new("b").with_new_name("a"),
        ]);
        let plan = SchemaPlan::new(input, &config).unwrap();

        // Output carries both columns named "a"; every position named "a"
        // is written by the later rule, reading from "b".
        assert_eq!(plan.output().len(), 3);
        for index in [0, 2] {
            match &plan.actions()[index] {
                ColumnAction::Convert { rule, source_index } => {
                    assert_eq!(rule.name, "b");
                    assert_eq!(*source_index, 1);
                }
                other => panic!("expected Convert at {index}, got {other:?}"),
            }
        }
        assert_eq!(plan.actions()[1], ColumnAction::Carry { input_index: 1 });
    }

    #[test]
    fn test_plan_duplicate_input_names_tolerated() {
        let input = Arc::new(
            Schema::builder()
                .add("a", ColumnType::Int64)
                .add("a", ColumnType::Text)
                .build(),
        );
        let config = Base58Config::new(vec![ColumnRule::new("a")]);
        let plan = SchemaPlan::new(input, &config).unwrap();

        // The override lands on the resolved source (last occurrence); the
        // first "a" keeps its declared type, yet both positions bearing the
        // name convert from that source.
        assert_eq!(plan.output().len(), 2);
        assert_eq!(
            plan.output().column(0).unwrap().column_type(),
            ColumnType::Int64
        );
        assert_eq!(
            plan.output().column(1).unwrap().column_type(),
            ColumnType::Text
        );
        for index in [0, 1] {
            match &plan.actions()[index] {
                ColumnAction::Convert { source_index, .. } => assert_eq!(*source_index, 1),
                other => panic!("expected Convert at {index}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let config = Base58Config::new(vec![
            ColumnRule::new("_id").with_prefix("obj_").with_new_name("public_id"),
            ColumnRule::new("count"),
        ]);
        let first = SchemaPlan::new(input_schema(), &config).unwrap();
        let second = SchemaPlan::new(input_schema(), &config).unwrap();

        assert_eq!(first.output(), second.output());
        assert_eq!(first.actions(), second.actions());
    }
}
