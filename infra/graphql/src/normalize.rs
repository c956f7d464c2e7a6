//! Turns any [`ClientError`] into the one message format the UI shows.
//!
//! Formatting happens in two steps: [`classify`] maps the error into a list of
//! [`Failure`]s, then each failure renders itself. The whole module is pure.

use crate::error::{ClientError, RemoteError};
use std::fmt;

/// Shown when there is nothing better to say.
pub const UNKNOWN_ERROR: &str = "unknown error occurred";
/// Used for remote errors that arrive without a message.
pub const GENERIC_REMOTE_ERROR: &str = "unexpected server error";

const NON_NULLABLE_PATTERN: &str = "cannot return null for non-nullable field";

/// Schema field names mapped to the labels forms display.
static FIELD_LABELS: &[(&str, &str)] = &[
    ("answer", "Answer"),
    ("author_name", "Author name"),
    ("body", "Body"),
    ("company_name", "Company name"),
    ("content", "Content"),
    ("email", "Email address"),
    ("first_name", "First name"),
    ("honorific", "Title"),
    ("image_url", "Image"),
    ("job_title", "Job title"),
    ("last_name", "Last name"),
    ("link_url", "Link"),
    ("location", "Location"),
    ("phone", "Phone number"),
    ("published_at", "Publish date"),
    ("question", "Question"),
    ("rating", "Rating"),
    ("slug", "URL slug"),
    ("title", "Title"),
];

/// A classified failure, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A required field came back null.
    FieldValidation { type_name: String, field: String },
    /// Any other error reported by the server.
    Remote { message: String },
    /// The request itself failed.
    Network { message: String },
    Unknown,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldValidation { field, .. } => {
                write!(f, "field \"{}\" cannot be empty", field_label(field))
            },
            Self::Remote { message } => f.write_str(message),
            Self::Network { message } => write!(f, "network error: {message}"),
            Self::Unknown => f.write_str(UNKNOWN_ERROR),
        }
    }
}

/// Display label for a schema field; unmapped fields are returned verbatim.
#[must_use]
pub fn field_label(field: &str) -> &str {
    FIELD_LABELS.iter().find(|(name, _)| *name == field).map_or(field, |(_, label)| label)
}

/// Classifies `error` in display order: remote errors, then the transport failure.
///
/// Errors that carry neither yield a single `Remote` built from their own message;
/// an absent error yields `[Failure::Unknown]`.
#[must_use]
pub fn classify(error: Option<&ClientError>) -> Vec<Failure> {
    let Some(error) = error else {
        return vec![Failure::Unknown];
    };

    let mut failures: Vec<Failure> = error.remote_errors().iter().map(classify_remote).collect();

    if let Some(message) = error.transport_message() {
        failures.push(Failure::Network { message });
    }

    if failures.is_empty() {
        let message = error.to_string();
        failures.push(if message.trim().is_empty() {
            Failure::Unknown
        } else {
            Failure::Remote { message }
        });
    }

    failures
}

/// Rendered messages, one per failure.
#[must_use]
pub fn normalize_messages(error: Option<&ClientError>) -> Vec<String> {
    classify(error).iter().map(ToString::to_string).collect()
}

/// All messages joined by newlines.
#[must_use]
pub fn normalize(error: Option<&ClientError>) -> String {
    normalize_messages(error).join("\n")
}

fn classify_remote(remote: &RemoteError) -> Failure {
    let probe = remote.debug_message().or(remote.message.as_deref());
    if let Some((type_name, field)) = probe.and_then(parse_non_nullable) {
        return Failure::FieldValidation { type_name, field };
    }

    let message = remote
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_REMOTE_ERROR);

    Failure::Remote { message: message.to_owned() }
}

/// Extracts `(Type, field)` from `Cannot return null for non-nullable field "Type.field".`
fn parse_non_nullable(text: &str) -> Option<(String, String)> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let start = text.to_ascii_lowercase().find(NON_NULLABLE_PATTERN)? + NON_NULLABLE_PATTERN.len();
    let target = text[start..].split_whitespace().next()?;
    let target = target.trim_end_matches('.').trim_matches(|c| matches!(c, '"' | '\'' | '`'));

    let (type_name, field) = target.split_once('.')?;
    let is_ident = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_');
    if !is_ident(type_name) || !is_ident(field) {
        return None;
    }

    Some((type_name.to_owned(), field.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_error_is_unknown() {
        assert_eq!(normalize(None), UNKNOWN_ERROR);
    }

    #[test]
    fn parses_quoted_and_bare_targets() {
        assert_eq!(
            parse_non_nullable(r#"Cannot return null for non-nullable field "Review.author_name"."#),
            Some(("Review".to_owned(), "author_name".to_owned()))
        );
        assert_eq!(
            parse_non_nullable("cannot return null for non-nullable field Post.title"),
            Some(("Post".to_owned(), "title".to_owned()))
        );
        assert_eq!(parse_non_nullable("Cannot return null for non-nullable field"), None);
        assert_eq!(parse_non_nullable("Internal server error"), None);
    }

    #[test]
    fn unmapped_field_passes_through() {
        assert_eq!(field_label("author_name"), "Author name");
        assert_eq!(field_label("bar_baz"), "bar_baz");
    }

    #[test]
    fn remote_errors_keep_server_order() {
        let error = ClientError::Remote {
            errors: vec![
                RemoteError::new("Internal server error").with_debug_message(
                    r#"Cannot return null for non-nullable field "Review.author_name"."#,
                ),
                RemoteError::new("Slug already taken"),
                RemoteError::default(),
            ],
            context: None,
        };

        assert_eq!(
            normalize_messages(Some(&error)),
            [
                "field \"Author name\" cannot be empty",
                "Slug already taken",
                GENERIC_REMOTE_ERROR,
            ]
        );
    }

    #[test]
    fn status_errors_list_remote_before_transport() {
        let error = ClientError::Status {
            status: 500,
            errors: vec![RemoteError::new("Resolver crashed")],
            context: None,
        };

        assert_eq!(
            normalize(Some(&error)),
            "Resolver crashed\nnetwork error: Response not successful: Received status code 500"
        );
    }

    #[test]
    fn internal_error_uses_its_own_message() {
        let error = ClientError::from("response carried no data");
        assert_eq!(
            classify(Some(&error)),
            [Failure::Remote { message: "Internal client error: response carried no data".to_owned() }]
        );
    }
}
