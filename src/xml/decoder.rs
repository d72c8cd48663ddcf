//! Event-driven XML decoder built on quick-xml.

use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::xml::{Decode, DecodeError};

/// Decodes Recurly XML documents into nested [`Value`] structures.
///
/// The mapping follows the conventions the resource model relies on:
///
/// - the root element is unwrapped; its content is the result
/// - an element with child elements becomes an object; repeated child
///   names collapse into an array
/// - an element marked `type="array"` becomes an array of its children
/// - an element with text and attributes becomes an object with the text
///   under `"#"` and the attributes as keys, e.g.
///   `<amount type="float">3.50</amount>` -> `{ "#": "3.50", "type": "float" }`
/// - an element with only attributes becomes an object of attributes,
///   which is how href-only link stubs like `<account href="..."/>` arrive
/// - `nil="nil"` (or `nil="true"`) and fully empty elements become `null`
/// - a text-only element becomes a string
///
/// # Example
///
/// ```rust
/// use recurly_api::xml::{Decode, XmlDecoder};
///
/// let decoder = XmlDecoder::new();
/// let value = decoder
///     .decode("<account><account_code>abc</account_code></account>")
///     .unwrap();
/// assert_eq!(value["account_code"], "abc");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlDecoder;

impl XmlDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn error(body: &str, reason: impl std::fmt::Display) -> DecodeError {
        DecodeError {
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }
}

impl Decode for XmlDecoder {
    fn decode(&self, body: &str) -> Result<Value, DecodeError> {
        let mut reader = Reader::from_str(body);

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    let attrs = read_attributes(&start).map_err(|e| Self::error(body, e))?;
                    return read_element(&mut reader, attrs).map_err(|e| Self::error(body, e));
                }
                Ok(Event::Empty(start)) => {
                    let attrs = read_attributes(&start).map_err(|e| Self::error(body, e))?;
                    return Ok(finish_element(attrs, String::new(), Vec::new()));
                }
                Ok(Event::Eof) => {
                    return Err(Self::error(body, "document contains no root element"))
                }
                // Prolog, comments, doctype and stray whitespace before the root
                Ok(_) => {}
                Err(e) => return Err(Self::error(body, e)),
            }
        }
    }
}

/// Collects an element's attributes into name/value pairs.
fn read_attributes(start: &BytesStart<'_>) -> Result<Vec<(String, String)>, String> {
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| e.to_string())?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(attrs)
}

/// Reads the content of an already-opened element up to its end tag.
fn read_element(
    reader: &mut Reader<&[u8]>,
    attrs: Vec<(String, String)>,
) -> Result<Value, String> {
    let mut text = String::new();
    let mut children: Vec<(String, Value)> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                let child_attrs = read_attributes(&start)?;
                let child = read_element(reader, child_attrs)?;
                children.push((name, child));
            }
            Ok(Event::Empty(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                let child_attrs = read_attributes(&start)?;
                children.push((name, finish_element(child_attrs, String::new(), Vec::new())));
            }
            Ok(Event::Text(t)) => {
                text.push_str(&t.xml_content().map_err(|e| e.to_string())?);
            }
            // Entity references arrive as their own events, between the
            // surrounding text fragments
            Ok(Event::GeneralRef(r)) => push_reference(&mut text, &r)?,
            Ok(Event::CData(t)) => {
                text.push_str(&String::from_utf8_lossy(&t));
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err("unexpected end of document".to_string()),
            Ok(_) => {}
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(finish_element(attrs, text, children))
}

/// Resolves a character or predefined entity reference into the text
/// accumulator.
fn push_reference(text: &mut String, reference: &BytesRef<'_>) -> Result<(), String> {
    if let Some(ch) = reference.resolve_char_ref().map_err(|e| e.to_string())? {
        text.push(ch);
        return Ok(());
    }
    let name = reference.decode().map_err(|e| e.to_string())?;
    match name.as_ref() {
        "amp" => text.push('&'),
        "lt" => text.push('<'),
        "gt" => text.push('>'),
        "apos" => text.push('\''),
        "quot" => text.push('"'),
        other => return Err(format!("unresolved entity reference `&{other};`")),
    }
    Ok(())
}

/// Assembles an element's attributes, text and children into a [`Value`].
fn finish_element(
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<(String, Value)>,
) -> Value {
    // Surrounding whitespace is formatting; interior whitespace (including
    // around entity references) is content
    let text = text.trim();

    let is_nil = attrs
        .iter()
        .any(|(k, v)| k == "nil" && (v == "nil" || v == "true"));
    if is_nil {
        return Value::Null;
    }

    let is_array = attrs.iter().any(|(k, v)| k == "type" && v == "array");
    if is_array {
        return Value::Array(children.into_iter().map(|(_, v)| v).collect());
    }

    if !children.is_empty() {
        let mut object = Map::new();
        for (key, value) in attrs {
            object.insert(key, Value::String(value));
        }
        for (name, value) in children {
            // Repeated child names collapse into an array
            match object.get_mut(&name) {
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    object.insert(name, value);
                }
            }
        }
        return Value::Object(object);
    }

    if !text.is_empty() {
        if attrs.is_empty() {
            return Value::String(text.to_string());
        }
        let mut object = Map::new();
        object.insert("#".to_string(), Value::String(text.to_string()));
        for (key, value) in attrs {
            object.insert(key, Value::String(value));
        }
        return Value::Object(object);
    }

    if attrs.is_empty() {
        return Value::Null;
    }

    let mut object = Map::new();
    for (key, value) in attrs {
        object.insert(key, Value::String(value));
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(body: &str) -> Value {
        XmlDecoder::new().decode(body).unwrap()
    }

    #[test]
    fn test_text_only_element_is_string() {
        let value = decode("<account><account_code>abc-123</account_code></account>");
        assert_eq!(value, json!({ "account_code": "abc-123" }));
    }

    #[test]
    fn test_typed_scalar_keeps_text_and_type() {
        let value = decode(
            "<invoice><total_in_cents type=\"integer\">800</total_in_cents></invoice>",
        );
        assert_eq!(
            value["total_in_cents"],
            json!({ "#": "800", "type": "integer" })
        );
    }

    #[test]
    fn test_href_only_element_is_link_stub() {
        let value = decode(
            "<subscription><account href=\"https://api.recurly.com/v2/accounts/42\"/></subscription>",
        );
        assert_eq!(
            value["account"],
            json!({ "href": "https://api.recurly.com/v2/accounts/42" })
        );
    }

    #[test]
    fn test_container_with_href_attribute_is_not_a_stub() {
        let value = decode(
            "<account href=\"https://api.recurly.com/v2/accounts/42\">\
             <account_code>abc</account_code></account>",
        );
        assert_eq!(
            value,
            json!({
                "href": "https://api.recurly.com/v2/accounts/42",
                "account_code": "abc"
            })
        );
    }

    #[test]
    fn test_nil_and_empty_elements_are_null() {
        let value = decode("<account><company_name nil=\"nil\"/><email></email></account>");
        assert_eq!(value["company_name"], Value::Null);
        assert_eq!(value["email"], Value::Null);
    }

    #[test]
    fn test_array_container_becomes_array() {
        let value = decode(
            "<accounts type=\"array\">\
             <account><account_code>a</account_code></account>\
             <account><account_code>b</account_code></account>\
             </accounts>",
        );
        assert_eq!(
            value,
            json!([
                { "account_code": "a" },
                { "account_code": "b" }
            ])
        );
    }

    #[test]
    fn test_empty_array_container() {
        let value = decode("<accounts type=\"array\"></accounts>");
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_repeated_child_names_collapse_into_array() {
        let value = decode(
            "<plan><add_on>a</add_on><add_on>b</add_on><add_on>c</add_on></plan>",
        );
        assert_eq!(value["add_on"], json!(["a", "b", "c"]));
    }

    #[test]
    fn test_nested_structures() {
        let value = decode(
            "<account><address><city>Lawrence</city><zip>66044</zip></address></account>",
        );
        assert_eq!(
            value["address"],
            json!({ "city": "Lawrence", "zip": "66044" })
        );
    }

    #[test]
    fn test_entities_are_unescaped() {
        let value = decode("<account><company_name>Fish &amp; Chips</company_name></account>");
        assert_eq!(value["company_name"], "Fish & Chips");
    }

    #[test]
    fn test_all_predefined_entities_resolve() {
        let value = decode("<note><body>&lt;a&gt; &quot;b&quot; &apos;c&apos;</body></note>");
        assert_eq!(value["body"], "<a> \"b\" 'c'");
    }

    #[test]
    fn test_character_references_resolve() {
        let value = decode("<account><company_name>caf&#233; &#x2014; bar</company_name></account>");
        assert_eq!(value["company_name"], "caf\u{e9} \u{2014} bar");
    }

    #[test]
    fn test_unknown_entity_is_a_decode_error() {
        let result = XmlDecoder::new()
            .decode("<account><company_name>a &nbsp; b</company_name></account>");
        let error = result.unwrap_err();
        assert!(error.reason.contains("nbsp"));
    }

    #[test]
    fn test_whitespace_around_text_is_trimmed_but_interior_kept() {
        let value = decode("<account><company_name>  Fish  &amp;  Chips  </company_name></account>");
        assert_eq!(value["company_name"], "Fish  &  Chips");
    }

    #[test]
    fn test_cdata_text() {
        let value = decode("<note><body><![CDATA[<p>hi</p>]]></body></note>");
        assert_eq!(value["body"], "<p>hi</p>");
    }

    #[test]
    fn test_prolog_and_comments_are_skipped() {
        let value = decode(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <!-- generated -->\
             <account><account_code>abc</account_code></account>",
        );
        assert_eq!(value["account_code"], "abc");
    }

    #[test]
    fn test_malformed_document_is_a_decode_error() {
        let result = XmlDecoder::new().decode("<account><account_code>abc</account>");
        let error = result.unwrap_err();
        assert!(!error.reason.is_empty());
        assert!(error.body.contains("<account>"));
    }

    #[test]
    fn test_empty_document_is_a_decode_error() {
        let result = XmlDecoder::new().decode("");
        assert!(result.is_err());
    }

    #[test]
    fn test_anchor_list_shape() {
        // A single anchor decodes to one stub object; several collapse into
        // an array of stubs.
        let one = decode(
            "<account><a name=\"reopen\" href=\"https://api.recurly.com/v2/accounts/1/reopen\"/></account>",
        );
        assert_eq!(
            one["a"],
            json!({ "name": "reopen", "href": "https://api.recurly.com/v2/accounts/1/reopen" })
        );

        let many = decode(
            "<account>\
             <a name=\"reopen\" href=\"https://x.test/reopen\"/>\
             <a name=\"close\" href=\"https://x.test/close\"/>\
             </account>",
        );
        assert!(many["a"].is_array());
        assert_eq!(many["a"][1]["name"], "close");
    }
}
