use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    comparison::{Comparison, compare_with_config},
    config::ComparisonConfig,
    errors::ComparisonError,
    utils::side::Side,
};

/// The payload of the ingestion service's accuracy endpoint:
/// `{ "original_text": ..., "ocr_text": ..., "accuracy": ... }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub original_text: String,
    pub ocr_text: String,
    pub accuracy: Option<f64>,
}

impl ServiceResponse {
    /// Parse a service payload. Missing or `null` texts become empty strings.
    ///
    /// # Errors
    ///
    /// - `ComparisonError::MalformedResponse` if the payload is not a JSON
    ///   object or its `accuracy` is not a number.
    /// - `ComparisonError::InvalidInput` if a text field holds something other
    ///   than a string.
    pub fn from_json(payload: &str) -> Result<Self, ComparisonError> {
        let value: Value = serde_json::from_str(payload).map_err(|error| {
            ComparisonError::MalformedResponse(format!("not valid JSON: {error}"))
        })?;

        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(ComparisonError::MalformedResponse(format!(
                    "expected a JSON object, found {}",
                    json_type_name(&other)
                )));
            }
        };

        Ok(Self {
            original_text: text_field(&fields, Side::Original)?,
            ocr_text: text_field(&fields, Side::Ocr)?,
            accuracy: accuracy_field(&fields)?,
        })
    }

    /// Compare the two texts locally. The service's own figure is kept as
    /// `Comparison::reported_accuracy` but the score is always recomputed.
    #[must_use]
    pub fn compare(&self, config: &ComparisonConfig) -> Comparison {
        compare_with_config(&self.original_text, &self.ocr_text, config)
            .with_reported_accuracy(self.accuracy)
    }
}

fn text_field(fields: &Map<String, Value>, side: Side) -> Result<String, ComparisonError> {
    match fields.get(side.field_name()) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(ComparisonError::InvalidInput {
            side,
            reason: format!(
                "`{}` must be a string, found {}",
                side.field_name(),
                json_type_name(other)
            ),
        }),
    }
}

fn accuracy_field(fields: &Map<String, Value>) -> Result<Option<f64>, ComparisonError> {
    match fields.get("accuracy") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(other) => Err(ComparisonError::MalformedResponse(format!(
            "`accuracy` must be a number, found {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
