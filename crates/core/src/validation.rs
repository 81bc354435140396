//! Bridges `validator` derive output into [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten field errors into `field: reason` pairs, sorted by field name so
/// messages are stable across runs. Fields are named as they appear on the
/// wire (`orgCode`, not `org_code`).
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", wire_name(field), reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// `org_translation_short` -> `orgTranslationShort`.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        code: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn valid_input_passes() {
        let input = Sample {
            code: "OSLI".into(),
            email: "admin@ucsb.edu".into(),
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let input = Sample {
            code: String::new(),
            email: "nope".into(),
        };
        let err = validate_input(&input).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "code: must not be empty; email: email");
    }

    #[derive(Validate)]
    struct Org {
        #[validate(length(min = 1, message = "must not be empty"))]
        org_code: String,
    }

    #[test]
    fn fields_are_reported_by_wire_name() {
        let err = validate_input(&Org {
            org_code: String::new(),
        })
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "orgCode: must not be empty");
    }

    #[test]
    fn wire_name_camel_cases_snake_case() {
        assert_eq!(wire_name("org_translation_short"), "orgTranslationShort");
        assert_eq!(wire_name("email"), "email");
    }
}
