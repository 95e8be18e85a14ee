//! Best-effort diagnostic extraction from error response bodies.
//!
//! Remote APIs disagree on how to report failures: some return JSON with
//! per-section `message` fields, some return an XML `ErrorResponse`
//! envelope, some return plain text. [`extract_message`] tries the
//! structured formats in a fixed order and mines a single human-readable
//! line out of whatever it finds. It has no failure mode: error reporting
//! must never raise.

use serde::Deserialize;
use serde_json::Value;

/// Outcome of scanning a body as one structured format.
///
/// `Unparseable` and `Empty` are distinct on purpose: only a body that is
/// not valid JSON at all falls through to the XML scan. Valid JSON that
/// merely carries no usable `message` fields ends the pipeline with no
/// diagnostic.
#[derive(Debug, PartialEq)]
enum Scan {
    /// The body is not a document of this format.
    Unparseable,
    /// The body parsed, but carried no usable message.
    Empty,
    /// A diagnostic was found.
    Found(String),
}

/// XML error envelope used by a number of cloud APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Error")]
    error: Option<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

/// Attempts to mine a human-readable diagnostic out of a response body.
///
/// The body is tried as JSON first: for a top-level object, the `message`
/// field of each object-shaped section is collected in document order and
/// the results are joined with `" - "`. Only when the body is not JSON at
/// all is it tried as XML, looking for an `ErrorResponse` → `Error`
/// envelope rendered as `"Code: Message"`. Anything else yields `None`.
///
/// Never panics and never returns an error, whatever the input.
///
/// ## Examples
///
/// ```rust
/// use gripe::extract_message;
///
/// let json = r#"{"Errors":{"message":"bad"},"Other":{"message":"worse"}}"#;
/// assert_eq!(extract_message(json), Some("bad - worse".to_string()));
///
/// let xml =
///     "<ErrorResponse><Error><Code>E1</Code><Message>bad thing</Message></Error></ErrorResponse>";
/// assert_eq!(extract_message(xml), Some("E1: bad thing".to_string()));
///
/// assert_eq!(extract_message("internal server error"), None);
/// ```
pub fn extract_message(body: &str) -> Option<String> {
    match scan_json(body) {
        Scan::Found(diagnostic) => Some(diagnostic),
        Scan::Empty => None,
        Scan::Unparseable => match scan_xml(body) {
            Scan::Found(diagnostic) => Some(diagnostic),
            Scan::Empty | Scan::Unparseable => None,
        },
    }
}

/// Collects `message` fields from the values of a top-level JSON object.
fn scan_json(body: &str) -> Scan {
    let Ok(document) = serde_json::from_str::<Value>(body) else {
        return Scan::Unparseable;
    };
    let Some(sections) = document.as_object() else {
        // Valid JSON of the wrong shape is a parsed document without
        // messages, not a parse failure
        return Scan::Empty;
    };

    let messages: Vec<String> = sections
        .values()
        .filter_map(|section| section.get("message"))
        .filter_map(render_message)
        .collect();

    if messages.is_empty() {
        Scan::Empty
    } else {
        Scan::Found(messages.join(" - "))
    }
}

/// Renders a `message` field as text. `null` counts as absent; other
/// non-string values keep their JSON form.
fn render_message(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Reads the `ErrorResponse` → `Error` envelope out of an XML body.
fn scan_xml(body: &str) -> Scan {
    use quick_xml::events::Event;

    // Peek the root element first: the envelope decode below accepts any
    // root name, but only `ErrorResponse` documents qualify
    let mut reader = quick_xml::Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(root) | Event::Empty(root)) => {
                if root.name().as_ref() != b"ErrorResponse" {
                    return Scan::Empty;
                }
                break;
            }
            // Prologue: declaration, comments, doctype, stray whitespace
            Ok(Event::Decl(_)
            | Event::Comment(_)
            | Event::PI(_)
            | Event::DocType(_)
            | Event::Text(_)) => {}
            _ => return Scan::Unparseable,
        }
    }

    let Ok(envelope) = quick_xml::de::from_str::<ErrorEnvelope>(body) else {
        return Scan::Empty;
    };
    // A content-less Error element counts as absent, not as an empty
    // diagnostic
    match envelope.error {
        Some(entry) if entry.code.is_some() || entry.message.is_some() => Scan::Found(format!(
            "{}: {}",
            entry.code.unwrap_or_default(),
            entry.message.unwrap_or_default()
        )),
        _ => Scan::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- JSON scan ----

    #[test]
    fn test_json_messages_joined_in_document_order() {
        let body = r#"{"Errors":{"message":"bad"},"Other":{"message":"worse"}}"#;
        assert_eq!(extract_message(body), Some("bad - worse".to_string()));

        // Document order, not key order
        let body = r#"{"zeta":{"message":"first"},"alpha":{"message":"second"}}"#;
        assert_eq!(extract_message(body), Some("first - second".to_string()));
    }

    #[test]
    fn test_json_single_message() {
        let body = r#"{"error":{"message":"stack not found"}}"#;
        assert_eq!(extract_message(body), Some("stack not found".to_string()));
    }

    #[test]
    fn test_json_without_messages() {
        assert_eq!(extract_message(r#"{"ok": true}"#), None);
        assert_eq!(extract_message("{}"), None);
    }

    #[test]
    fn test_json_non_object_top_level() {
        assert_eq!(extract_message("[1, 2, 3]"), None);
        assert_eq!(extract_message("42"), None);
        assert_eq!(extract_message("\"just a string\""), None);
        assert_eq!(extract_message("null"), None);
    }

    #[test]
    fn test_json_top_level_message_field_not_collected() {
        // Only messages nested one level down are mined
        assert_eq!(extract_message(r#"{"message":"top"}"#), None);
    }

    #[test]
    fn test_json_null_messages_skipped() {
        let body = r#"{"a":{"message":null},"b":{"message":"real"}}"#;
        assert_eq!(extract_message(body), Some("real".to_string()));
    }

    #[test]
    fn test_json_non_object_sections_skipped() {
        let body = r#"{"count":2,"error":{"message":"bad"},"tags":["x"]}"#;
        assert_eq!(extract_message(body), Some("bad".to_string()));
    }

    #[test]
    fn test_json_non_string_message_keeps_json_form() {
        assert_eq!(
            extract_message(r#"{"a":{"message":42}}"#),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_json_empty_message_counts_as_found() {
        assert_eq!(
            extract_message(r#"{"a":{"message":""}}"#),
            Some(String::new())
        );
    }

    #[test]
    fn test_scan_json_distinguishes_unparseable_from_empty() {
        assert_eq!(scan_json("not json at all"), Scan::Unparseable);
        assert_eq!(scan_json(r#"{"ok":true}"#), Scan::Empty);
        assert_eq!(scan_json("[1,2,3]"), Scan::Empty);
    }

    // ---- XML scan ----

    #[test]
    fn test_xml_error_envelope() {
        let body =
            "<ErrorResponse><Error><Code>E1</Code><Message>bad thing</Message></Error></ErrorResponse>";
        assert_eq!(extract_message(body), Some("E1: bad thing".to_string()));
    }

    #[test]
    fn test_xml_with_declaration_prologue() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ErrorResponse><Error><Code>Throttled</Code><Message>slow down</Message></Error></ErrorResponse>";
        assert_eq!(
            extract_message(body),
            Some("Throttled: slow down".to_string())
        );
    }

    #[test]
    fn test_xml_pretty_printed() {
        let body = "<ErrorResponse>\n  <Error>\n    <Code>NoSuchBucket</Code>\n    <Message>bucket does not exist</Message>\n  </Error>\n</ErrorResponse>\n";
        assert_eq!(
            extract_message(body),
            Some("NoSuchBucket: bucket does not exist".to_string())
        );
    }

    #[test]
    fn test_xml_root_with_attributes() {
        let body = "<ErrorResponse xmlns=\"http://cloud.example.com/doc/2010-05-15/\"><Error><Code>E2</Code><Message>denied</Message></Error></ErrorResponse>";
        assert_eq!(extract_message(body), Some("E2: denied".to_string()));
    }

    #[test]
    fn test_xml_missing_sub_fields_render_empty() {
        let body = "<ErrorResponse><Error><Code>E1</Code></Error></ErrorResponse>";
        assert_eq!(extract_message(body), Some("E1: ".to_string()));

        let body = "<ErrorResponse><Error><Message>down</Message></Error></ErrorResponse>";
        assert_eq!(extract_message(body), Some(": down".to_string()));
    }

    #[test]
    fn test_xml_empty_error_element_yields_nothing() {
        assert_eq!(extract_message("<ErrorResponse><Error/></ErrorResponse>"), None);
        assert_eq!(
            extract_message("<ErrorResponse><Error></Error></ErrorResponse>"),
            None
        );
    }

    #[test]
    fn test_xml_without_error_entry() {
        let body = "<ErrorResponse><Status>failed</Status></ErrorResponse>";
        assert_eq!(extract_message(body), None);
    }

    #[test]
    fn test_xml_wrong_root() {
        let body = "<Response><Error><Code>E1</Code><Message>x</Message></Error></Response>";
        assert_eq!(extract_message(body), None);
    }

    #[test]
    fn test_scan_xml_requires_error_response_root() {
        assert_eq!(scan_xml("<Response><Error/></Response>"), Scan::Empty);
        assert_eq!(scan_xml("plain text"), Scan::Unparseable);
        assert_eq!(scan_xml(""), Scan::Unparseable);
    }

    // ---- total behavior ----

    #[test]
    fn test_plain_text_yields_nothing() {
        assert_eq!(extract_message("internal server error"), None);
    }

    #[test]
    fn test_never_panics_on_garbage() {
        let nasty = [
            "",
            "{",
            "}",
            "<",
            "</>",
            "{\"a\":",
            "<a><b>",
            "\u{0}\u{1}garbage",
            "<?xml version=\"1.0\"?>",
            "<!DOCTYPE html><html></html>",
        ];
        for body in nasty {
            assert_eq!(extract_message(body), None, "input: {:?}", body);
        }
    }

    #[test]
    fn test_deep_nesting_is_handled() {
        let deep_json = format!("{}{}", "[".repeat(500), "]".repeat(500));
        assert_eq!(extract_message(&deep_json), None);

        let deep_xml = format!(
            "<ErrorResponse>{}{}</ErrorResponse>",
            "<X>".repeat(200),
            "</X>".repeat(200)
        );
        // Unknown children are skipped; no envelope, no diagnostic
        assert_eq!(extract_message(&deep_xml), None);
    }
}
