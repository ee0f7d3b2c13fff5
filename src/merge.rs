//! Merge-tag sanitization.

use std::collections::BTreeMap;

use xmlrpc::Value;

/// Normalizes a struct of merge-field values before it is sent in a call.
///
/// String values have vertical-tab control characters removed (the API
/// rejects them), nil values become empty strings, and every other value is
/// kept as-is. A non-struct input is treated as an empty tag set.
///
/// Returns a new value; the input is never modified. Applying the function
/// twice yields the same result.
pub fn clean_merge_tags(merge_tags: &Value) -> Value {
    let Value::Struct(tags) = merge_tags else {
        return Value::Struct(BTreeMap::new());
    };
    let cleaned = tags
        .iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(text) => Value::String(text.replace('\u{000B}', "")),
                Value::Nil => Value::String(String::new()),
                other => other.clone(),
            };
            (name.clone(), value)
        })
        .collect();
    Value::Struct(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(entries: &[(&str, Value)]) -> Value {
        Value::Struct(
            entries
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_vertical_tabs_are_stripped_from_strings() {
        let cleaned = clean_merge_tags(&tags(&[("FNAME", Value::from("a\u{000B}b"))]));
        assert_eq!(cleaned, tags(&[("FNAME", Value::from("ab"))]));
    }

    #[test]
    fn test_nil_values_become_empty_strings() {
        let cleaned = clean_merge_tags(&tags(&[("LNAME", Value::Nil)]));
        assert_eq!(cleaned, tags(&[("LNAME", Value::from(""))]));
    }

    #[test]
    fn test_non_string_values_pass_through() {
        let input = tags(&[("AGE", Value::from(41)), ("OPTED", Value::from(true))]);
        assert_eq!(clean_merge_tags(&input), input);
    }

    #[test]
    fn test_non_struct_input_is_an_empty_tag_set() {
        assert_eq!(
            clean_merge_tags(&Value::from("not a struct")),
            Value::Struct(BTreeMap::new())
        );
    }

    #[test]
    fn test_idempotent() {
        let input = tags(&[
            ("FNAME", Value::from("a\u{000B}b")),
            ("LNAME", Value::Nil),
            ("AGE", Value::from(41)),
        ]);
        let once = clean_merge_tags(&input);
        let twice = clean_merge_tags(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = tags(&[("LNAME", Value::Nil)]);
        let _ = clean_merge_tags(&input);
        assert_eq!(input, tags(&[("LNAME", Value::Nil)]));
    }
}
