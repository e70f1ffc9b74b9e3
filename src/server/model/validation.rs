use std::{collections::BTreeMap, fmt};

/// Accumulated field violations for a single payload.
///
/// Field names use their JSON spelling so the map can be returned to the client as-is.
/// Fields are kept sorted so responses are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation of `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn into_fields(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }
}

#[cfg(test)]
impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if `field` has at least one violation.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "One or more validation errors occurred")
    }
}

/// Checks that a required text field is present and its length, in characters,
/// lies within `min..=max`.
///
/// Returns the value unchanged when valid so callers can move it into their
/// parameter struct.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    min: usize,
    max: usize,
) -> Option<String> {
    let Some(value) = value else {
        errors.add(field, format!("The {} field is required", field));
        return None;
    };

    if value.trim().is_empty() {
        errors.add(field, format!("The {} field is required", field));
        return None;
    }

    let len = value.chars().count();
    if len < min {
        errors.add(
            field,
            format!("The {} field must contain at least {} characters", field, min),
        );
        return None;
    }
    if len > max {
        errors.add(
            field,
            format!("The {} field must contain at most {} characters", field, max),
        );
        return None;
    }

    Some(value)
}
