//! Record schemas

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{DeclaredType, SchemaError, SchemaResult};

/// A named, typed field of a record schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DeclaredType,
}

impl RecordField {
    pub fn new(name: impl Into<String>, data_type: DeclaredType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered mapping from field name to declared type
///
/// Names are unique and case-sensitive. Field order is the order of
/// declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDef", into = "SchemaDef")]
pub struct RecordSchema {
    fields: IndexMap<String, DeclaredType>,
}

impl RecordSchema {
    /// Build a schema from fields, rejecting duplicate names
    pub fn new(fields: impl IntoIterator<Item = RecordField>) -> SchemaResult<Self> {
        let mut map = IndexMap::new();
        for field in fields {
            if map.contains_key(&field.name) {
                return Err(SchemaError::duplicate_field(field.name));
            }
            map.insert(field.name, field.data_type);
        }
        Ok(Self { fields: map })
    }

    /// Start a schema builder
    pub fn builder() -> RecordSchemaBuilder {
        RecordSchemaBuilder::default()
    }

    /// Declared type of a field
    pub fn data_type_of(&self, name: &str) -> Option<&DeclaredType> {
        self.fields.get(name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over (name, type) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DeclaredType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Incremental schema construction
#[derive(Debug, Clone, Default)]
pub struct RecordSchemaBuilder {
    fields: Vec<RecordField>,
}

impl RecordSchemaBuilder {
    /// Append a field
    pub fn field(mut self, name: impl Into<String>, data_type: DeclaredType) -> Self {
        self.fields.push(RecordField::new(name, data_type));
        self
    }

    /// Finish, rejecting duplicate names
    pub fn build(self) -> SchemaResult<RecordSchema> {
        RecordSchema::new(self.fields)
    }
}

/// Wire shape: `{"fields": [{"name": .., "type": ..}]}`
#[derive(Serialize, Deserialize)]
struct SchemaDef {
    fields: Vec<RecordField>,
}

impl TryFrom<SchemaDef> for RecordSchema {
    type Error = SchemaError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        Self::new(def.fields)
    }
}

impl From<RecordSchema> for SchemaDef {
    fn from(schema: RecordSchema) -> Self {
        Self {
            fields: schema
                .fields
                .into_iter()
                .map(|(name, data_type)| RecordField { name, data_type })
                .collect(),
        }
    }
}
