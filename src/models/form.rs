// src/models/form.rs

use std::collections::BTreeMap;
use validator::ValidationErrors;

use super::Publication;

/// Field name -> messages, rendered back with a rejected form
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result of processing a submitted form
#[derive(Debug)]
pub enum FormOutcome<T> {
    Saved(T),
    /// Rejected; the form is rendered again with these errors
    Invalid(FieldErrors),
}

/// Flatten validator output into per-field messages
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => default_message(e.code.as_ref()),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

/// Append one message to a field
pub fn add_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors.entry(field.to_string()).or_default().push(message.into());
}

pub fn published_choices() -> Vec<&'static str> {
    Publication::ALL.iter().map(|p| p.as_str()).collect()
}

fn default_message(code: &str) -> String {
    match code {
        "length" => "Ensure this value has a valid length.".to_string(),
        "email" => "Enter a valid email address.".to_string(),
        "must_match" => "The two password fields didn't match.".to_string(),
        other => format!("Invalid value ({}).", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_field_errors_names_field() {
        let errors = Named { name: String::new() }.validate().unwrap_err();
        let flat = field_errors(&errors);
        assert_eq!(
            flat.get("name").map(|m| m.as_slice()),
            Some(&["Ensure this value has a valid length.".to_string()][..])
        );
    }

    #[test]
    fn test_add_error_accumulates() {
        let mut errors = FieldErrors::new();
        add_error(&mut errors, "cover", "first");
        add_error(&mut errors, "cover", "second");
        assert_eq!(errors["cover"], vec!["first", "second"]);
    }

    #[test]
    fn test_published_choices_in_order() {
        assert_eq!(published_choices(), vec!["Public", "Private", "Shared"]);
    }
}
