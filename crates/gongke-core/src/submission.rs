//! Submission extraction and numeric normalization.
//!
//! A [`Submission`] is the normalized form of one practice-log request body.
//! Extraction mirrors the loose destructuring the form contract expects:
//! the body is treated as a JSON object (missing body ⇒ empty object), the
//! title must be truthy, and the two groups of numeric fields follow two
//! deliberately different coercion rules:
//!
//! - *Progress* fields (`chant9`, `repent`, `zenStatic`, `zenMove`) are used
//!   as-is only when the raw value is already a JSON number; anything else —
//!   including numeric strings — defaults to 0. No clamping.
//! - *Scripture* fields (`jg`, `amt`, `pmp`, `px`, `dz`, `xj`) are coerced to
//!   a number first and then clamped into `[0, 4]`, so `"3"` parses to 3
//!   while `"abc"` becomes 0.
//!
//! The asymmetry is part of the contract and is preserved here.

use serde_json::Value;

use crate::error::{Error, Result};

/// Error message returned when the required title field is missing.
pub const MISSING_TITLE: &str = "缺少必填字段：姓名（标题）";

/// One normalized practice-log submission.
///
/// Every field is always present after extraction; optional inputs have
/// already been defaulted (numbers to 0, strings to `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Practitioner name — the destination row's title column.
    pub title: String,
    /// Submission date (ISO-8601); `None` stores an explicitly empty date.
    pub date: Option<String>,
    /// Nine-character chant count (voicings).
    pub chant9: f64,
    /// Repentance-text repetitions.
    pub repent: f64,
    /// Static meditation minutes.
    pub zen_static: f64,
    /// Moving meditation minutes.
    pub zen_move: f64,
    /// Diamond Sutra completion count, 0–4.
    pub jg: f64,
    /// Amitabha Sutra completion count, 0–4.
    pub amt: f64,
    /// Universal Gate chapter completion count, 0–4.
    pub pmp: f64,
    /// Samantabhadra vows chapter completion count, 0–4.
    pub px: f64,
    /// Kshitigarbha Sutra completion count, 0–4.
    pub dz: f64,
    /// Heart Sutra completion count, 0–4.
    pub xj: f64,
    /// Free-text note; `None` stores an empty rich-text property.
    pub note: Option<String>,
}

impl Submission {
    /// Extract a submission from a raw JSON request body.
    ///
    /// A non-object body behaves like an empty object, so the only failure
    /// mode is a missing (falsy) title.
    pub fn from_value(body: &Value) -> Result<Self> {
        let field = |name: &str| body.get(name);

        let title = field("title");
        if is_falsy(title) {
            return Err(Error::validation_field("title", MISSING_TITLE));
        }
        // is_falsy returned false, so the value exists
        let title = coerce_string(field("title").unwrap_or(&Value::Null));

        Ok(Submission {
            title,
            date: truthy_string(field("date")),
            chant9: finite_or_zero(field("chant9")),
            repent: finite_or_zero(field("repent")),
            zen_static: finite_or_zero(field("zenStatic")),
            zen_move: finite_or_zero(field("zenMove")),
            jg: clamp04(field("jg")),
            amt: clamp04(field("amt")),
            pmp: clamp04(field("pmp")),
            px: clamp04(field("px")),
            dz: clamp04(field("dz")),
            xj: clamp04(field("xj")),
            note: truthy_string(field("note")),
        })
    }
}

/// Clamp a scripture field into `[0, 4]` inclusive.
///
/// The value is coerced to a number first; non-finite results (absent
/// fields, unparseable strings) become 0. No rounding is applied.
pub fn clamp04(v: Option<&Value>) -> f64 {
    let n = number_of(v);
    if !n.is_finite() {
        return 0.0;
    }
    n.clamp(0.0, 4.0)
}

/// A progress field: the raw value when it is already a finite JSON number,
/// otherwise 0. Numeric strings deliberately do not pass this check.
fn finite_or_zero(v: Option<&Value>) -> f64 {
    match v {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Loose numeric coercion: absent ⇒ NaN, null ⇒ 0, booleans ⇒ 0/1,
/// strings are trimmed and parsed (empty ⇒ 0), anything else ⇒ NaN.
fn number_of(v: Option<&Value>) -> f64 {
    match v {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(_) => f64::NAN,
    }
}

/// Whether a raw JSON value is falsy: absent, null, `false`, 0, or `""`.
/// Arrays and objects are always truthy.
fn is_falsy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// String coercion for truthy values: strings pass through, everything
/// else renders as its JSON text.
fn coerce_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A truthy value coerced to a string, or `None` when falsy.
fn truthy_string(v: Option<&Value>) -> Option<String> {
    if is_falsy(v) {
        return None;
    }
    v.map(coerce_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_title_rejected() {
        for body in [
            json!({}),
            json!({ "title": null }),
            json!({ "title": "" }),
            json!({ "title": 0 }),
            json!({ "title": false }),
        ] {
            let err = Submission::from_value(&body).unwrap_err();
            assert_eq!(err.to_string(), MISSING_TITLE, "body: {body}");
        }
    }

    #[test]
    fn test_non_object_body_behaves_like_empty() {
        assert!(Submission::from_value(&Value::Null).is_err());
        assert!(Submission::from_value(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_minimal_submission_defaults() {
        let sub = Submission::from_value(&json!({ "title": "Bob" })).unwrap();
        assert_eq!(sub.title, "Bob");
        assert_eq!(sub.date, None);
        assert_eq!(sub.note, None);
        for v in [
            sub.chant9, sub.repent, sub.zen_static, sub.zen_move, sub.jg, sub.amt, sub.pmp,
            sub.px, sub.dz, sub.xj,
        ] {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn test_progress_fields_pass_through_unclamped() {
        let sub = Submission::from_value(&json!({
            "title": "Alice",
            "chant9": 1080,
            "repent": 3,
            "zenStatic": 45.5,
            "zenMove": 60,
        }))
        .unwrap();
        assert_eq!(sub.chant9, 1080.0);
        assert_eq!(sub.repent, 3.0);
        assert_eq!(sub.zen_static, 45.5);
        assert_eq!(sub.zen_move, 60.0);
    }

    #[test]
    fn test_progress_string_input_defaults_to_zero() {
        // Raw-value finiteness check: a numeric string is not a number.
        let sub = Submission::from_value(&json!({ "title": "A", "chant9": "108" })).unwrap();
        assert_eq!(sub.chant9, 0.0);
    }

    #[test]
    fn test_scripture_fields_are_clamped() {
        let sub = Submission::from_value(&json!({
            "title": "A",
            "jg": -5,
            "amt": 10,
            "pmp": 2,
            "px": 2.5,
        }))
        .unwrap();
        assert_eq!(sub.jg, 0.0);
        assert_eq!(sub.amt, 4.0);
        assert_eq!(sub.pmp, 2.0);
        assert_eq!(sub.px, 2.5);
    }

    #[test]
    fn test_scripture_string_input_is_coerced() {
        // Unlike progress fields, scripture fields coerce before clamping.
        let sub = Submission::from_value(&json!({ "title": "A", "dz": "3", "xj": "abc" })).unwrap();
        assert_eq!(sub.dz, 3.0);
        assert_eq!(sub.xj, 0.0);
    }

    #[test]
    fn test_clamp04_bounds() {
        assert_eq!(clamp04(Some(&json!(-5))), 0.0);
        assert_eq!(clamp04(Some(&json!(10))), 4.0);
        assert_eq!(clamp04(Some(&json!(2))), 2.0);
        assert_eq!(clamp04(Some(&json!(null))), 0.0);
        assert_eq!(clamp04(None), 0.0);
    }

    #[test]
    fn test_empty_date_stored_as_none() {
        let sub = Submission::from_value(&json!({ "title": "A", "date": "" })).unwrap();
        assert_eq!(sub.date, None);

        let sub =
            Submission::from_value(&json!({ "title": "A", "date": "2025-03-01" })).unwrap();
        assert_eq!(sub.date.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn test_numeric_title_is_stringified() {
        let sub = Submission::from_value(&json!({ "title": 42 })).unwrap();
        assert_eq!(sub.title, "42");
    }
}
