// src/models/body.rs

//! Page-specific record payloads, discriminated by `kind`.

use serde::{Deserialize, Serialize};

/// Polymorphic record payload.
///
/// The catalog treats the body as opaque; renderers match on the variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Body {
    /// Scripture passages backing a topic
    BiblicalReferences { references: Vec<ScriptureReference> },

    /// A doctrine broken into headed points
    DoctrinalBreakdown { points: Vec<DoctrinePoint> },

    /// Seminaries, churches, publishers and similar bodies
    InstitutionList { institutions: Vec<Institution> },

    /// Parallel passages across traditions
    CrossTextConnection { passages: Vec<Passage> },

    /// A sermon transcript
    Sermon {
        preacher: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delivered: Option<String>,
        #[serde(default)]
        transcript: Vec<String>,
    },

    /// Long-form essay sections
    Essay { sections: Vec<Section> },

    #[default]
    Empty,
}

impl Body {
    /// The `kind` discriminator as written in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Body::BiblicalReferences { .. } => "biblical-references",
            Body::DoctrinalBreakdown { .. } => "doctrinal-breakdown",
            Body::InstitutionList { .. } => "institution-list",
            Body::CrossTextConnection { .. } => "cross-text-connection",
            Body::Sermon { .. } => "sermon",
            Body::Essay { .. } => "essay",
            Body::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptureReference {
    pub book: String,
    pub chapter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctrinePoint {
    pub heading: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Institution {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A passage from one tradition's sacred text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passage {
    /// e.g. "Judaism", "Christianity", "Islam"
    pub tradition: String,
    /// e.g. "Torah", "Gospels", "Qur'an"
    pub source: String,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discriminator() {
        let json = r#"{
            "kind": "biblical-references",
            "references": [{"book": "Isaiah", "chapter": 53, "verses": "3-5"}]
        }"#;
        let body: Body = serde_json::from_str(json).unwrap();
        assert_eq!(body.kind(), "biblical-references");
        match body {
            Body::BiblicalReferences { references } => {
                assert_eq!(references[0].book, "Isaiah");
                assert_eq!(references[0].chapter, 53);
                assert!(references[0].text.is_none());
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_sermon_optional_fields() {
        let json = r#"{"kind": "sermon", "preacher": "J. Edwards"}"#;
        let body: Body = serde_json::from_str(json).unwrap();
        assert_eq!(
            body,
            Body::Sermon {
                preacher: "J. Edwards".into(),
                delivered: None,
                transcript: vec![],
            }
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"kind": "hologram"}"#;
        assert!(serde_json::from_str::<Body>(json).is_err());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let value = serde_json::to_value(Body::Empty).unwrap();
        assert_eq!(value["kind"], "empty");
    }
}
