//! Reply parsing and validation.
//!
//! Providers are asked for schema-constrained JSON, but the text is still
//! checked here: some models wrap it in a Markdown fence, and a reply with
//! a missing or blank field is no diagnosis at all.

use serde_json::{Map, Value};

use crate::domain::clinic::AnalysisResult;
use crate::ports::GatewayError;

/// Parses a consultation reply. Any `tcmAdvice` is ignored.
pub fn parse_consultation_reply(text: &str) -> Result<AnalysisResult, GatewayError> {
    let object = parse_object(text)?;
    Ok(AnalysisResult::new(
        required_string(&object, "condition")?,
        required_string(&object, "cause")?,
        required_string(&object, "treatment")?,
    ))
}

/// Parses a checkup reply, which must carry `tcmAdvice`.
pub fn parse_checkup_reply(text: &str) -> Result<AnalysisResult, GatewayError> {
    let object = parse_object(text)?;
    Ok(AnalysisResult::new(
        required_string(&object, "condition")?,
        required_string(&object, "cause")?,
        required_string(&object, "treatment")?,
    )
    .with_tcm_advice(required_string(&object, "tcmAdvice")?))
}

fn parse_object(text: &str) -> Result<Map<String, Value>, GatewayError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(GatewayError::malformed("empty reply"));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(GatewayError::malformed("reply is not a JSON object")),
        Err(e) => Err(GatewayError::malformed(format!("invalid JSON: {}", e))),
    }
}

/// Removes a surrounding ```/```json fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") up to the first newline.
    match rest.find('\n') {
        Some(newline) => rest[newline + 1..].trim(),
        None => rest.trim(),
    }
}

fn required_string(object: &Map<String, Value>, field: &str) -> Result<String, GatewayError> {
    match object.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(GatewayError::malformed(format!("field '{}' is blank", field))),
        Some(_) => Err(GatewayError::malformed(format!("field '{}' is not a string", field))),
        None => Err(GatewayError::malformed(format!("missing field '{}'", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_consultation_reply_round_trips() {
        let result =
            parse_consultation_reply(r#"{"condition":"A","cause":"B","treatment":"C"}"#).unwrap();
        assert_eq!(result.condition(), "A");
        assert_eq!(result.cause(), "B");
        assert_eq!(result.treatment(), "C");
        assert_eq!(result.tcm_advice(), None);
    }

    #[test]
    fn consultation_ignores_tcm_advice_and_extras() {
        let result = parse_consultation_reply(
            r#"{"condition":"A","cause":"B","treatment":"C","tcmAdvice":"D","mood":"calm"}"#,
        )
        .unwrap();
        assert_eq!(result.tcm_advice(), None);
    }

    #[test]
    fn fields_are_kept_verbatim() {
        let result =
            parse_consultation_reply(r#"{"condition":"  气虚 ","cause":"B","treatment":"C"}"#)
                .unwrap();
        assert_eq!(result.condition(), "  气虚 ");
    }

    #[test]
    fn fenced_reply_is_accepted() {
        let text = "```json\n{\"condition\":\"A\",\"cause\":\"B\",\"treatment\":\"C\"}\n```\n";
        assert_eq!(parse_consultation_reply(text).unwrap().condition(), "A");

        let bare = "```{\"condition\":\"A\",\"cause\":\"B\",\"treatment\":\"C\"}```";
        assert_eq!(parse_consultation_reply(bare).unwrap().treatment(), "C");
    }

    #[test]
    fn checkup_requires_tcm_advice() {
        let err = parse_checkup_reply(r#"{"condition":"A","cause":"B","treatment":"C"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "malformed analysis reply: missing field 'tcmAdvice'");

        let ok = parse_checkup_reply(
            r#"{"condition":"A","cause":"B","treatment":"C","tcmAdvice":"D"}"#,
        )
        .unwrap();
        assert_eq!(ok.tcm_advice(), Some("D"));
    }

    #[test]
    fn missing_field_fails() {
        let err = parse_consultation_reply(r#"{"condition":"A","treatment":"C"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field 'cause'"));
    }

    #[test]
    fn blank_field_fails() {
        let err =
            parse_consultation_reply(r#"{"condition":" ","cause":"B","treatment":"C"}"#).unwrap_err();
        assert!(err.to_string().contains("field 'condition' is blank"));
    }

    #[test]
    fn non_string_field_fails() {
        let err =
            parse_consultation_reply(r#"{"condition":1,"cause":"B","treatment":"C"}"#).unwrap_err();
        assert!(err.to_string().contains("not a string"));
    }

    #[test]
    fn non_object_and_garbage_fail() {
        assert!(parse_consultation_reply("[1,2]").is_err());
        assert!(parse_consultation_reply("the patient is fine").is_err());
        assert!(parse_consultation_reply("   ").is_err());
    }
}
