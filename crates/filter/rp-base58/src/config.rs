//! Configuration types for the Base-58 filter.

use serde::{Deserialize, Serialize};

/// One column transformation rule.
///
/// `name` selects the source column. With `new_name` the converted value goes
/// to a new text column appended to the schema; without it the source column
/// is overridden in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Source column name.
    pub name: String,

    /// Direction: `true` = hex → Base-58, `false` = Base-58 → hex.
    #[serde(default = "default_encode")]
    pub encode: bool,

    /// Literal prefix prepended on encode and stripped (all occurrences)
    /// before decode.
    #[serde(default)]
    pub prefix: String,

    /// Output column name; absent means override the source column in place.
    #[serde(default)]
    pub new_name: Option<String>,
}

fn default_encode() -> bool {
    true
}

impl ColumnRule {
    /// Creates an encode rule for a source column, with no prefix.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encode: default_encode(),
            prefix: String::new(),
            new_name: None,
        }
    }

    /// Switches the rule to decode direction.
    pub fn decode(mut self) -> Self {
        self.encode = false;
        self
    }

    /// Sets the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the output column name.
    pub fn with_new_name(mut self, new_name: impl Into<String>) -> Self {
        self.new_name = Some(new_name.into());
        self
    }

    /// Name of the output column this rule writes to.
    pub fn output_name(&self) -> &str {
        self.new_name.as_deref().unwrap_or(&self.name)
    }
}

/// Configuration for a Base-58 filter: the ordered list of column rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Config {
    /// Rules applied in declaration order.
    pub columns: Vec<ColumnRule>,
}

impl Base58Config {
    /// Creates a config from rules.
    pub fn new(columns: Vec<ColumnRule>) -> Self {
        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_defaults() {
        let rule = ColumnRule::new("_id");
        assert_eq!(rule.name, "_id");
        assert!(rule.encode);
        assert_eq!(rule.prefix, "");
        assert!(rule.new_name.is_none());
    }

    #[test]
    fn test_rule_builders() {
        let rule = ColumnRule::new("_id")
            .decode()
            .with_prefix("obj_")
            .with_new_name("public_id");

        assert!(!rule.encode);
        assert_eq!(rule.prefix, "obj_");
        assert_eq!(rule.new_name.as_deref(), Some("public_id"));
    }

    #[test]
    fn test_output_name() {
        assert_eq!(ColumnRule::new("_id").output_name(), "_id");
        assert_eq!(
            ColumnRule::new("_id").with_new_name("public_id").output_name(),
            "public_id"
        );
    }

    #[test]
    fn test_rule_yaml_defaults() {
        let rule: ColumnRule = serde_yaml::from_str("name: _id").unwrap();
        assert_eq!(rule.name, "_id");
        assert!(rule.encode);
        assert_eq!(rule.prefix, "");
        assert!(rule.new_name.is_none());
    }

    #[test]
    fn test_config_yaml() {
        let yaml = r#"
columns:
  - name: _id
    prefix: obj_
    new_name: public_id
  - name: token
    encode: false
"#;
        let config: Base58Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].output_name(), "public_id");
        assert!(config.columns[0].encode);
        assert!(!config.columns[1].encode);
    }

    #[test]
    fn test_config_serde() {
        let config = Base58Config::new(vec![
            ColumnRule::new("_id").with_prefix("obj_"),
            ColumnRule::new("token").decode(),
        ]);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Base58Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }
}
