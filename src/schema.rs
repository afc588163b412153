//! Schema model and capability validation.
//!
//! The host supplies the schema as a JSON array of field objects, each with a
//! `Name`, optional `TypeName`/`ControlType`, and a `DataSetControls` map
//! whose keys flag what the field may participate in:
//!
//! ```json
//! [
//!   {"Name": "Genre", "TypeName": "string",
//!    "DataSetControls": {"IsGroupable": true, "Filterable": true}},
//!   {"Name": "Rating", "TypeName": "number",
//!    "DataSetControls": {"IsAggregator": true}}
//! ]
//! ```
//!
//! Capability membership is decided by KEY PRESENCE in `DataSetControls`,
//! not by the key's boolean value: `{"IsGroupable": false}` still marks the
//! field groupable. This matches the behavior host configurations rely on;
//! see the tests pinning it down.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{DatasetError, DatasetResult};

/// A capability a schema field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Field may be used as a grouping key.
    Groupable,
    /// Field may be aggregated (Average/Sum/Min/Max).
    Aggregator,
    /// Field may be filtered with a caller-supplied predicate.
    Filterable,
}

impl Capability {
    /// The `DataSetControls` key that declares this capability.
    pub fn control_key(self) -> &'static str {
        match self {
            Self::Groupable => "IsGroupable",
            Self::Aggregator => "IsAggregator",
            Self::Filterable => "Filterable",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Groupable => f.write_str("grouping"),
            Self::Aggregator => f.write_str("aggregation"),
            Self::Filterable => f.write_str("filtering"),
        }
    }
}

/// Raw wire shape of one schema field, as the host serializes it.
#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "TypeName", default)]
    type_name: Option<String>,
    #[serde(rename = "ControlType", default)]
    control_type: Option<String>,
    #[serde(rename = "DataSetControls", default)]
    controls: BTreeMap<String, serde_json::Value>,
}

/// A single named field with its declared type and capability flags.
///
/// `type_name` and `control_type` are informational only; nothing is enforced
/// against cell types at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field/column name (lookup key, compared case-insensitively).
    pub name: String,
    /// Declared logical type, e.g. `"string"` or `"number"`.
    pub type_name: Option<String>,
    /// Host UI control hint.
    pub control_type: Option<String>,
    groupable: bool,
    aggregator: bool,
    filterable: bool,
}

impl FieldDescriptor {
    /// Whether this field declares `capability` (key presence, see module
    /// docs).
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Groupable => self.groupable,
            Capability::Aggregator => self.aggregator,
            Capability::Filterable => self.filterable,
        }
    }
}

/// Parsed, ordered schema: the set of fields the dataset exposes to queries.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    /// Ordered field descriptors.
    pub fields: Vec<FieldDescriptor>,
}

impl DatasetSchema {
    /// Parse a schema from its JSON description.
    ///
    /// Fails with [`DatasetError::Configuration`] when the input is blank,
    /// is not a JSON array of field objects, or parses to an empty array.
    pub fn parse(schema_json: &str) -> DatasetResult<Self> {
        if schema_json.trim().is_empty() {
            return Err(DatasetError::Configuration {
                message: "schema description is empty".to_string(),
            });
        }

        let raw: Vec<RawField> =
            serde_json::from_str(schema_json).map_err(|e| DatasetError::Configuration {
                message: format!("schema is not a valid field array: {e}"),
            })?;

        if raw.is_empty() {
            return Err(DatasetError::Configuration {
                message: "schema contains no fields".to_string(),
            });
        }

        let fields = raw
            .into_iter()
            .map(|f| FieldDescriptor {
                groupable: f.controls.contains_key(Capability::Groupable.control_key()),
                aggregator: f.controls.contains_key(Capability::Aggregator.control_key()),
                filterable: f.controls.contains_key(Capability::Filterable.control_key()),
                name: f.name,
                type_name: f.type_name,
                control_type: f.control_type,
            })
            .collect();

        Ok(Self { fields })
    }

    /// Look up a field by name (case-insensitive).
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Look up a field and require a capability, failing fast with
    /// [`DatasetError::FieldNotSupported`] when the field is missing or does
    /// not declare the capability.
    pub fn require(&self, name: &str, capability: Capability) -> DatasetResult<&FieldDescriptor> {
        self.field(name)
            .filter(|f| f.supports(capability))
            .ok_or_else(|| DatasetError::FieldNotSupported {
                field: name.to_string(),
                capability,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{Capability, DatasetSchema};
    use crate::error::DatasetError;

    const MOVIE_SCHEMA: &str = r#"[
        {"Name": "Title", "TypeName": "string", "ControlType": "text",
         "DataSetControls": {"Filterable": true}},
        {"Name": "Genre", "TypeName": "string",
         "DataSetControls": {"IsGroupable": true, "Filterable": true}},
        {"Name": "Rating", "TypeName": "number",
         "DataSetControls": {"IsAggregator": true}}
    ]"#;

    #[test]
    fn parse_reads_names_types_and_controls() {
        let schema = DatasetSchema::parse(MOVIE_SCHEMA).unwrap();
        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.fields[0].name, "Title");
        assert_eq!(schema.fields[0].type_name.as_deref(), Some("string"));
        assert_eq!(schema.fields[0].control_type.as_deref(), Some("text"));
        assert!(schema.fields[1].supports(Capability::Groupable));
        assert!(!schema.fields[1].supports(Capability::Aggregator));
        assert!(schema.fields[2].supports(Capability::Aggregator));
    }

    #[test]
    fn parse_rejects_blank_input() {
        let err = DatasetSchema::parse("   \n ").unwrap_err();
        assert!(matches!(err, DatasetError::Configuration { .. }));
    }

    #[test]
    fn parse_rejects_non_array_document() {
        let err = DatasetSchema::parse(r#"{"Name": "Title"}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Configuration { .. }));
    }

    #[test]
    fn parse_rejects_empty_field_array() {
        let err = DatasetSchema::parse("[]").unwrap_err();
        assert!(matches!(err, DatasetError::Configuration { .. }));
    }

    #[test]
    fn capability_is_key_presence_not_truthiness() {
        let schema = DatasetSchema::parse(
            r#"[{"Name": "Genre", "DataSetControls": {"IsGroupable": false}}]"#,
        )
        .unwrap();
        assert!(schema.fields[0].supports(Capability::Groupable));
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let schema = DatasetSchema::parse(MOVIE_SCHEMA).unwrap();
        assert!(schema.field("genre").is_some());
        assert!(schema.field("GENRE").is_some());
        assert!(schema.require("rating", Capability::Aggregator).is_ok());
    }

    #[test]
    fn require_fails_for_missing_field_or_capability() {
        let schema = DatasetSchema::parse(MOVIE_SCHEMA).unwrap();

        let err = schema.require("Nope", Capability::Groupable).unwrap_err();
        assert!(
            matches!(err, DatasetError::FieldNotSupported { ref field, capability }
                if field == "Nope" && capability == Capability::Groupable)
        );

        let err = schema.require("Title", Capability::Groupable).unwrap_err();
        assert!(matches!(err, DatasetError::FieldNotSupported { .. }));
    }
}
