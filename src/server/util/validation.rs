//! Field-level validation of JSON request bodies.
//!
//! Request bodies are read as untyped JSON so every failing field can be reported at
//! once, instead of stopping at the first serde error. Each failure is recorded under
//! its field name in a `FieldErrors` map that is returned to the client verbatim.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Validation messages keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key used for failures that concern the body as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const INVALID_STRING: &str = "Not a valid string.";

/// Reads typed fields out of a JSON object, collecting every failure.
///
/// Field readers return `None` when the field is unusable and record why. Call
/// `finish` with the assembled value once all fields have been read.
pub struct ObjectValidator<'a> {
    object: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> ObjectValidator<'a> {
    /// Starts validating `value`, which must be a JSON object.
    ///
    /// # Returns
    /// - `Ok(ObjectValidator)` - Body is an object
    /// - `Err(FieldErrors)` - Body is any other JSON type, reported under `non_field_errors`
    pub fn new(value: &'a Value) -> Result<Self, FieldErrors> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                errors: FieldErrors::new(),
            }),
            other => Err(non_field_error(format!(
                "Invalid data. Expected an object, but got {}.",
                json_type_name(other)
            ))),
        }
    }

    /// Reads a required integer field that must be at least `min`.
    pub fn integer(&mut self, field: &str, min: i32) -> Option<i32> {
        match self.object.get(field) {
            None => {
                self.push(field, REQUIRED);
                None
            }
            Some(value) => self.check_integer(field, value, min),
        }
    }

    /// Reads an integer field that may be omitted. A present field is validated like
    /// `integer`.
    pub fn optional_integer(&mut self, field: &str, min: i32) -> Option<i32> {
        let value = self.object.get(field)?;
        self.check_integer(field, value, min)
    }

    /// Reads a required, non-blank string field of at most `max_length` characters.
    ///
    /// Surrounding whitespace is trimmed before the blank and length checks.
    pub fn string(&mut self, field: &str, max_length: usize) -> Option<String> {
        let value = match self.object.get(field) {
            None => {
                self.push(field, REQUIRED);
                return None;
            }
            Some(Value::Null) => {
                self.push(field, NOT_NULL);
                return None;
            }
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => {
                self.push(field, INVALID_STRING);
                return None;
            }
        };

        if value.is_empty() {
            self.push(field, NOT_BLANK);
            return None;
        }

        if value.chars().count() > max_length {
            self.push(
                field,
                &format!("Ensure this field has no more than {} characters.", max_length),
            );
            return None;
        }

        Some(value)
    }

    /// Completes validation.
    ///
    /// # Arguments
    /// - `parsed` - The value assembled from the field readers, `None` if any reader failed
    ///
    /// # Returns
    /// - `Ok(T)` - Every field was valid
    /// - `Err(FieldErrors)` - At least one field failed
    pub fn finish<T>(self, parsed: Option<T>) -> Result<T, FieldErrors> {
        match parsed {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }

    fn check_integer(&mut self, field: &str, value: &Value, min: i32) -> Option<i32> {
        let parsed = match value {
            Value::Null => {
                self.push(field, NOT_NULL);
                return None;
            }
            other => parse_integer(other),
        };

        let Some(number) = parsed else {
            self.push(field, INVALID_INTEGER);
            return None;
        };

        if number < i64::from(min) {
            self.push(
                field,
                &format!("Ensure this value is greater than or equal to {}.", min),
            );
            return None;
        }

        match i32::try_from(number) {
            Ok(number) => Some(number),
            Err(_) => {
                self.push(
                    field,
                    &format!("Ensure this value is less than or equal to {}.", i32::MAX),
                );
                None
            }
        }
    }

    fn push(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }
}

/// Validates every entry of a JSON array with `validate_entry`.
///
/// # Returns
/// - `Ok(Vec<T>)` - All entries valid, in request order
/// - `Err(BatchError::NotAList)` - Body is not an array
/// - `Err(BatchError::Entries)` - At least one entry failed; one map per entry, empty for
///   entries that passed
pub fn validate_batch<T>(
    value: &Value,
    validate_entry: impl Fn(&Value) -> Result<T, FieldErrors>,
) -> Result<Vec<T>, BatchError> {
    let Value::Array(entries) = value else {
        return Err(BatchError::NotAList(non_field_error(format!(
            "Expected a list of items but got type \"{}\".",
            json_type_name(value)
        ))));
    };

    let mut parsed = Vec::with_capacity(entries.len());
    let mut errors = Vec::with_capacity(entries.len());
    let mut failed = false;

    for entry in entries {
        match validate_entry(entry) {
            Ok(item) => {
                parsed.push(item);
                errors.push(FieldErrors::new());
            }
            Err(entry_errors) => {
                failed = true;
                errors.push(entry_errors);
            }
        }
    }

    if failed {
        return Err(BatchError::Entries(errors));
    }

    Ok(parsed)
}

/// Failure of `validate_batch`.
#[derive(Debug, PartialEq)]
pub enum BatchError {
    NotAList(FieldErrors),
    Entries(Vec<FieldErrors>),
}

/// Builds an error map holding one body-level message.
pub fn non_field_error(message: String) -> FieldErrors {
    FieldErrors::from([(NON_FIELD_ERRORS.to_string(), vec![message])])
}

/// Parses a JSON value as an integer.
///
/// Accepts integral numbers (`5`, `5.0`) and numeric strings (`"5"`, `" 5 "`, `"5.00"`).
/// Booleans, fractions and anything else are rejected.
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::String(s) => {
            let s = s.trim();
            let s = match s.split_once('.') {
                Some((whole, zeros)) if zeros.chars().all(|c| c == '0') => whole,
                Some(_) => return None,
                None => s,
            };
            s.parse::<i64>().ok()
        }
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
