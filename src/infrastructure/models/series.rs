//! Numeric series extraction shared by the builtin models

use thiserror::Error;

use crate::domain::DataPayload;

/// Errors raised while reading a numeric series out of a payload
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Field '{field}' is missing from the payload")]
    MissingField { field: String },

    #[error("Field '{field}' must be an array of numbers")]
    NotAnArray { field: String },

    #[error("Field '{field}' contains a non-numeric entry at index {index}")]
    NonNumericEntry { field: String, index: usize },

    #[error("Field '{field}' has {actual} points but at least {required} are required")]
    TooFewPoints {
        field: String,
        actual: usize,
        required: usize,
    },
}

/// Read the named payload field as a numeric series.
///
/// Accepts any JSON array whose entries are numbers (integers are widened to
/// `f64`). Enforces the minimum length so each model fails before computing
/// statistics on degenerate input.
pub fn extract_series(
    payload: &DataPayload,
    field: &str,
    min_points: usize,
) -> Result<Vec<f64>, SeriesError> {
    let value = payload.get(field).ok_or_else(|| SeriesError::MissingField {
        field: field.to_string(),
    })?;

    let entries = value.as_array().ok_or_else(|| SeriesError::NotAnArray {
        field: field.to_string(),
    })?;

    let mut series = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let number = entry
            .as_f64()
            .ok_or_else(|| SeriesError::NonNumericEntry {
                field: field.to_string(),
                index,
            })?;
        series.push(number);
    }

    if series.len() < min_points {
        return Err(SeriesError::TooFewPoints {
            field: field.to_string(),
            actual: series.len(),
            required: min_points,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::payload_from_json;

    #[test]
    fn test_extracts_mixed_integer_and_float_entries() {
        let payload = payload_from_json(json!({"values": [1, 2.5, -3]})).unwrap();

        let series = extract_series(&payload, "values", 2).unwrap();

        assert_eq!(series, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_missing_field() {
        let payload = payload_from_json(json!({"other": [1, 2]})).unwrap();

        let error = extract_series(&payload, "values", 2).unwrap_err();

        assert_eq!(
            error,
            SeriesError::MissingField {
                field: "values".to_string()
            }
        );
        assert_eq!(error.to_string(), "Field 'values' is missing from the payload");
    }

    #[test]
    fn test_non_array_field() {
        let payload = payload_from_json(json!({"values": "1,2,3"})).unwrap();

        let error = extract_series(&payload, "values", 2).unwrap_err();

        assert_eq!(
            error,
            SeriesError::NotAnArray {
                field: "values".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_entry_reports_index() {
        let payload = payload_from_json(json!({"values": [1, "two", 3]})).unwrap();

        let error = extract_series(&payload, "values", 2).unwrap_err();

        assert_eq!(
            error,
            SeriesError::NonNumericEntry {
                field: "values".to_string(),
                index: 1
            }
        );
    }

    #[test]
    fn test_too_few_points() {
        let payload = payload_from_json(json!({"values": [1]})).unwrap();

        let error = extract_series(&payload, "values", 2).unwrap_err();

        assert_eq!(
            error,
            SeriesError::TooFewPoints {
                field: "values".to_string(),
                actual: 1,
                required: 2
            }
        );
    }
}
