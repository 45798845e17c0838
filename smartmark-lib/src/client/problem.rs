use serde_json::Value;

/// Pull a human-readable message out of an error response body.
///
/// An `error` field wins. Otherwise the first value of the first field is used. Anything that
/// isn't a JSON object, or whose chosen value is empty, yields [`None`].
pub fn problem_message(body: &str) -> Option<String> {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
        return None;
    };

    fields
        .get("error")
        .and_then(render)
        .or_else(|| fields.values().next().and_then(render))
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_field() {
        assert_eq!(
            problem_message(r#"{"detail": "ignored", "error": "Duplicate URL"}"#).as_deref(),
            Some("Duplicate URL")
        );
    }

    #[test]
    fn test_first_field() {
        assert_eq!(
            problem_message(r#"{"url": "must be a valid URL", "title": "too long"}"#).as_deref(),
            Some("must be a valid URL")
        );
    }

    #[test]
    fn test_empty_error_falls_through_to_first_field() {
        assert_eq!(
            problem_message(r#"{"url": "must be a valid URL", "error": ""}"#).as_deref(),
            Some("must be a valid URL")
        );
        assert_eq!(problem_message(r#"{"error": null}"#), None);
    }

    #[test]
    fn test_zero_counts_as_absent() {
        assert_eq!(problem_message(r#"{"error": 0}"#), None);
        assert_eq!(
            problem_message(r#"{"error": 0, "url": "must be a valid URL"}"#),
            None
        );
        assert_eq!(
            problem_message(r#"{"url": "must be a valid URL", "error": 0}"#).as_deref(),
            Some("must be a valid URL")
        );
        assert_eq!(problem_message(r#"{"code": 422}"#).as_deref(), Some("422"));
    }

    #[test]
    fn test_array_value() {
        assert_eq!(
            problem_message(r#"{"url": ["is invalid", "is too long"]}"#).as_deref(),
            Some("is invalid,is too long")
        );
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(problem_message(""), None);
        assert_eq!(problem_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(problem_message("{}"), None);
        assert_eq!(problem_message(r#"["not", "an", "object"]"#), None);
        assert_eq!(problem_message(r#"{"nested": {"error": "x"}}"#), None);
    }
}
