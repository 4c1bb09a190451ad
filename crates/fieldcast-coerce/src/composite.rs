//! Array, map, record and choice conversions

use fieldcast_types::{DeclaredType, FieldKind, Record, RecordSchema, Value, ValueMap};
use indexmap::IndexMap;
use std::sync::Arc;

use crate::coercer::{Coercer, member_path};
use crate::error::{ConversionFailure, ConversionResult, IllegalTypeConversion};
use crate::temporal::render_text;

impl Coercer {
    /// Convert to Array; only arrays qualify
    pub(crate) fn to_array(&self, value: &Value, field: &str) -> ConversionResult<Value> {
        match value {
            Value::Array(_) => Ok(value.clone()),
            _ => Err(IllegalTypeConversion::incompatible(value, FieldKind::Array, field)),
        }
    }

    /// Convert to Map with text keys
    ///
    /// Non-text keys are rendered to text; a `null` key stays `null`. When
    /// two keys render to the same text the later entry wins. A record
    /// flattens to one entry per schema field.
    pub(crate) fn to_map(&self, value: &Value, field: &str) -> ConversionResult<Value> {
        match value {
            Value::Map(map) if map.has_text_keys() => Ok(value.clone()),
            Value::Map(map) => {
                let rendered: ValueMap = map
                    .iter()
                    .map(|(key, entry)| (text_key(key), entry.clone()))
                    .collect();
                Ok(Value::Map(rendered))
            }
            Value::Record(record) => {
                let flattened: ValueMap = record
                    .schema()
                    .field_names()
                    .map(|name| (name, record.get(name).clone()))
                    .collect();
                Ok(Value::Map(flattened))
            }
            _ => Err(IllegalTypeConversion::incompatible(value, FieldKind::Map, field)),
        }
    }

    /// Convert to Record
    ///
    /// Map entries are matched to schema fields by name and converted to the
    /// field's declared type. Unknown names and `null` keys are dropped. The
    /// first member that fails to convert fails the whole record.
    pub(crate) fn to_record(
        &self,
        value: &Value,
        schema: Option<&Arc<RecordSchema>>,
        field: &str,
    ) -> ConversionResult<Value> {
        let map = match value {
            Value::Record(_) => return Ok(value.clone()),
            Value::Map(map) => map,
            _ => return Err(IllegalTypeConversion::incompatible(value, FieldKind::Record, field)),
        };

        let Some(schema) = schema else {
            return Err(IllegalTypeConversion::new(
                value,
                FieldKind::Record,
                field,
                ConversionFailure::MissingSchema,
            ));
        };

        let mut values = IndexMap::with_capacity(map.len());
        for (key, entry) in map.iter() {
            let Some(name) = render_text(key, None) else {
                continue;
            };
            let Some(member_type) = schema.data_type_of(&name) else {
                continue;
            };
            let converted = self.convert(entry, member_type, &member_path(field, &name))?;
            values.insert(name, converted);
        }

        Ok(Value::Record(Record::new(Arc::clone(schema), values)))
    }

    /// Convert to the first candidate of a choice that accepts the value
    pub(crate) fn to_choice(&self, value: &Value, ty: &DeclaredType, field: &str) -> ConversionResult<Value> {
        match self.choose_candidate(value, ty) {
            Some(candidate) => self.convert(value, candidate, field),
            None => Err(IllegalTypeConversion::new(
                value,
                FieldKind::Choice,
                field,
                ConversionFailure::NoMatchingCandidate {
                    candidates: ty.candidates().iter().map(ToString::to_string).collect(),
                },
            )),
        }
    }
}

fn text_key(key: &Value) -> Value {
    render_text(key, None).map_or(Value::Null, Value::String)
}
