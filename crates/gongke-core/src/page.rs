//! The fixed-shape Notion page payload built from a submission.
//!
//! The destination database has a fixed property set with Chinese column
//! names; every key is always present in the outgoing payload, even when
//! the value is zero or empty. Property names here are part of the wire
//! contract — do not rename them without migrating the database.

use serde::{Deserialize, Serialize};

use crate::submission::Submission;

/// One rich-text span in the Notion wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    /// Always `"text"` for spans produced by this crate.
    #[serde(rename = "type")]
    pub kind: String,
    /// The span's text payload.
    pub text: TextContent,
}

/// The text payload of a rich-text span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// The literal text content.
    pub content: String,
}

impl RichText {
    /// Build a plain text span.
    pub fn text(content: impl Into<String>) -> Self {
        RichText {
            kind: "text".to_string(),
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

/// A title property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleProperty {
    /// Title spans.
    pub title: Vec<RichText>,
}

/// A date property value; `date: null` stores an explicitly empty date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateProperty {
    /// The date value, or `None` for an empty date column.
    pub date: Option<DateStart>,
}

/// The start component of a date property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateStart {
    /// ISO-8601 date string.
    pub start: String,
}

/// A number property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberProperty {
    /// The numeric value.
    pub number: f64,
}

/// A rich-text property value; an empty span list stores an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextProperty {
    /// Rich-text spans.
    pub rich_text: Vec<RichText>,
}

/// The full property set of one practice-log row.
///
/// Field order matches the destination database's column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperties {
    /// Practitioner name (title column).
    #[serde(rename = "姓名")]
    pub name: TitleProperty,
    /// Submission date.
    #[serde(rename = "提交时间")]
    pub submitted_at: DateProperty,
    /// Nine-character chant count (voicings).
    #[serde(rename = "九字禅（声）")]
    pub chant9: NumberProperty,
    /// Repentance-text repetitions.
    #[serde(rename = "拜忏文（遍）")]
    pub repent: NumberProperty,
    /// Static meditation minutes.
    #[serde(rename = "静禅（分钟）")]
    pub zen_static: NumberProperty,
    /// Moving meditation minutes.
    #[serde(rename = "动禅（分钟）")]
    pub zen_move: NumberProperty,
    /// Diamond Sutra, 0–4.
    #[serde(rename = "金刚经")]
    pub jg: NumberProperty,
    /// Amitabha Sutra, 0–4.
    #[serde(rename = "阿弥陀经")]
    pub amt: NumberProperty,
    /// Universal Gate chapter, 0–4.
    #[serde(rename = "普门品")]
    pub pmp: NumberProperty,
    /// Samantabhadra vows chapter, 0–4.
    #[serde(rename = "普贤行愿品")]
    pub px: NumberProperty,
    /// Kshitigarbha Sutra, 0–4.
    #[serde(rename = "地藏菩萨本愿经")]
    pub dz: NumberProperty,
    /// Heart Sutra, 0–4.
    #[serde(rename = "心经")]
    pub xj: NumberProperty,
    /// Free-text note.
    #[serde(rename = "备注")]
    pub note: RichTextProperty,
}

/// One child content block attached to a created page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Always `"block"`.
    pub object: String,
    /// Block type; only `"paragraph"` is produced here.
    #[serde(rename = "type")]
    pub kind: String,
    /// Paragraph content.
    pub paragraph: Paragraph,
}

/// Paragraph block content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Rich-text spans.
    pub rich_text: Vec<RichText>,
}

impl Block {
    /// Build a paragraph block from plain text.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Block {
            object: "block".to_string(),
            kind: "paragraph".to_string(),
            paragraph: Paragraph {
                rich_text: vec![RichText::text(content)],
            },
        }
    }
}

fn number(value: f64) -> NumberProperty {
    NumberProperty { number: value }
}

impl Submission {
    /// Build the complete property set for this submission.
    ///
    /// Every property key is present regardless of input — the destination
    /// schema expects the full set on every row.
    pub fn properties(&self) -> PageProperties {
        PageProperties {
            name: TitleProperty {
                title: vec![RichText::text(&self.title)],
            },
            submitted_at: DateProperty {
                date: self.date.as_ref().map(|d| DateStart { start: d.clone() }),
            },
            chant9: number(self.chant9),
            repent: number(self.repent),
            zen_static: number(self.zen_static),
            zen_move: number(self.zen_move),
            jg: number(self.jg),
            amt: number(self.amt),
            pmp: number(self.pmp),
            px: number(self.px),
            dz: number(self.dz),
            xj: number(self.xj),
            note: RichTextProperty {
                rich_text: self
                    .note
                    .as_ref()
                    .map(|n| vec![RichText::text(n)])
                    .unwrap_or_default(),
            },
        }
    }

    /// Child blocks for this submission: one paragraph carrying the note
    /// when present, otherwise empty.
    pub fn children(&self) -> Vec<Block> {
        self.note
            .as_ref()
            .map(|n| vec![Block::paragraph(n)])
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(body: serde_json::Value) -> Submission {
        Submission::from_value(&body).unwrap()
    }

    #[test]
    fn test_all_property_keys_always_present() {
        let props = submission(json!({ "title": "Alice", "note": "hello" })).properties();
        let value = serde_json::to_value(&props).unwrap();
        let map = value.as_object().unwrap();

        for key in [
            "姓名",
            "提交时间",
            "九字禅（声）",
            "拜忏文（遍）",
            "静禅（分钟）",
            "动禅（分钟）",
            "金刚经",
            "阿弥陀经",
            "普门品",
            "普贤行愿品",
            "地藏菩萨本愿经",
            "心经",
            "备注",
        ] {
            assert!(map.contains_key(key), "missing property {key}");
        }

        // All ten numeric columns default to 0 when omitted from the body.
        for key in [
            "九字禅（声）",
            "拜忏文（遍）",
            "静禅（分钟）",
            "动禅（分钟）",
            "金刚经",
            "阿弥陀经",
            "普门品",
            "普贤行愿品",
            "地藏菩萨本愿经",
            "心经",
        ] {
            assert_eq!(map[key]["number"], json!(0.0), "property {key}");
        }
    }

    #[test]
    fn test_note_present_sets_property_and_child_block() {
        let sub = submission(json!({ "title": "Alice", "note": "hello" }));
        let props = sub.properties();
        assert_eq!(props.note.rich_text.len(), 1);
        assert_eq!(props.note.rich_text[0].text.content, "hello");

        let children = sub.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind, "paragraph");
        assert_eq!(children[0].paragraph.rich_text[0].text.content, "hello");
    }

    #[test]
    fn test_note_absent_leaves_property_empty_and_no_children() {
        let sub = submission(json!({ "title": "Bob" }));
        assert!(sub.properties().note.rich_text.is_empty());
        assert!(sub.children().is_empty());
    }

    #[test]
    fn test_empty_date_serializes_as_explicit_null() {
        let props = submission(json!({ "title": "A" })).properties();
        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(value["提交时间"], json!({ "date": null }));

        let props = submission(json!({ "title": "A", "date": "2025-03-01" })).properties();
        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(value["提交时间"]["date"]["start"], json!("2025-03-01"));
    }

    #[test]
    fn test_title_spans_carry_the_name() {
        let props = submission(json!({ "title": "王五" })).properties();
        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(value["姓名"]["title"][0]["type"], json!("text"));
        assert_eq!(value["姓名"]["title"][0]["text"]["content"], json!("王五"));
    }
}
