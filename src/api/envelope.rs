//! Detection and unwrapping of `{success, message?, data}` envelopes.

use serde_json::Value;

const FALLBACK_REJECTION: &str = "Request was not successful";

/// Outcome of inspecting a 2xx response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwrapped {
    /// The resource itself: either the envelope's `data` or a bare body.
    Data(Value),
    /// An envelope with `success: false`, carrying its message.
    Rejected(String),
}

/// True when `body` is an object with a boolean `success` field.
pub fn is_envelope(body: &Value) -> bool {
    matches!(body.get("success"), Some(Value::Bool(_)))
}

/// Unwrap a successful response body.
///
/// - Bare arrays/objects are returned unchanged.
/// - `success: true` with a `data` field yields `data` (including `null`).
/// - `success: true` without `data` yields the envelope unchanged.
/// - `success: false` is a rejection regardless of HTTP status.
pub fn unwrap_envelope(body: Value) -> Unwrapped {
    if !is_envelope(&body) {
        return Unwrapped::Data(body);
    }

    if body.get("success") == Some(&Value::Bool(false)) {
        return Unwrapped::Rejected(
            envelope_message(&body).unwrap_or_else(|| FALLBACK_REJECTION.to_string()),
        );
    }

    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => Unwrapped::Data(data),
            None => Unwrapped::Data(Value::Object(map)),
        },
        other => Unwrapped::Data(other),
    }
}

/// Human-readable message carried by an error body.
///
/// Reads the envelope `message`, then a `detail` string.
pub fn envelope_message(body: &Value) -> Option<String> {
    ["message", "detail"]
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_passes_through() {
        let body = json!([{"id": "1"}]);
        assert_eq!(unwrap_envelope(body.clone()), Unwrapped::Data(body));
    }

    #[test]
    fn bare_object_without_success_passes_through() {
        let body = json!({"id": "g1", "name": "Action"});
        assert_eq!(unwrap_envelope(body.clone()), Unwrapped::Data(body));
    }

    #[test]
    fn successful_envelope_yields_data() {
        let body = json!({"success": true, "message": "ok", "data": [{"id": "1"}]});
        assert_eq!(unwrap_envelope(body), Unwrapped::Data(json!([{"id": "1"}])));
    }

    #[test]
    fn successful_envelope_with_null_data_yields_null() {
        let body = json!({"success": true, "message": "ok", "data": null});
        assert_eq!(unwrap_envelope(body), Unwrapped::Data(Value::Null));
    }

    #[test]
    fn successful_envelope_without_data_is_unchanged() {
        let body = json!({"success": true, "message": "ok"});
        assert_eq!(unwrap_envelope(body.clone()), Unwrapped::Data(body));
    }

    #[test]
    fn failed_envelope_is_rejected_with_message() {
        let body = json!({"success": false, "message": "Invalid ObjectId format"});
        assert_eq!(
            unwrap_envelope(body),
            Unwrapped::Rejected("Invalid ObjectId format".to_string())
        );
    }

    #[test]
    fn failed_envelope_without_message_uses_fallback() {
        let body = json!({"success": false, "data": []});
        assert_eq!(
            unwrap_envelope(body),
            Unwrapped::Rejected(FALLBACK_REJECTION.to_string())
        );
    }

    #[test]
    fn non_boolean_success_is_not_an_envelope() {
        let body = json!({"success": "yes", "data": 1});
        assert!(!is_envelope(&body));
    }

    #[test]
    fn message_falls_back_to_detail() {
        assert_eq!(
            envelope_message(&json!({"detail": "Not Found"})).as_deref(),
            Some("Not Found")
        );
        assert_eq!(envelope_message(&json!({"message": "  "})), None);
    }
}
