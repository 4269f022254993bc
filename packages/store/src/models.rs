//! # Domain models for the profile document
//!
//! Defines the content document mirrored between the remote store and the
//! local cache. These types are `Serialize + Deserialize` so they can cross
//! the server/client boundary via Dioxus server functions and round-trip
//! through the cached JSON blob.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Document`] | The aggregate: one [`Profile`] plus the ordered list of [`Section`]s. Array order is authoritative; persisted `position` values are remapped to the array index on every save. |
//! | [`Profile`] | The singleton profile row. `id` is assigned by the remote store on first creation and is `None` until then. |
//! | [`Section`] | One typed, positioned, independently visible content block. `id` is stable across reorders and is the upsert key. |
//! | [`SectionData`] | The type-specific payload, a tagged enum matched exhaustively by the renderer and the admin forms. |
//!
//! The tag strings (`book`, `writing`, `creativity`, `reading`, `links`) are
//! the values of the `type` column in the `sections` table; the payload is the
//! `data` JSON column. [`SectionData::kind`] / [`SectionData::to_payload`] /
//! [`SectionData::from_payload`] convert between the two representations.

use serde::{Deserialize, Serialize};

/// One social link on the profile header (platform name plus URL).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
}

/// The singleton profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Server-assigned identifier, `None` until the first insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub title: String,
    pub location: String,
    /// Avatar image: a URL or an inline `data:` base64 payload.
    pub image: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// Payload of a `book` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookData {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

/// Payload of a `writing` section. Articles are fetched live from the feed
/// at render time and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WritingData {
    pub feed_url: String,
}

/// One gallery thumbnail in a `creativity` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub alt: String,
}

/// Payload of a `creativity` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreativityData {
    pub items: Vec<GalleryItem>,
}

/// One entry in a `reading` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingItem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub image: String,
}

/// Payload of a `reading` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingData {
    pub items: Vec<ReadingItem>,
}

/// One entry in a `links` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub url: String,
    pub icon: String,
}

/// Payload of a `links` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinksData {
    pub links: Vec<LinkItem>,
}

/// Type-specific section payload, tagged by section kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionData {
    Book(BookData),
    Writing(WritingData),
    Creativity(CreativityData),
    Reading(ReadingData),
    Links(LinksData),
}

impl SectionData {
    /// The tag string stored in the `type` column.
    pub fn kind(&self) -> &'static str {
        match self {
            SectionData::Book(_) => "book",
            SectionData::Writing(_) => "writing",
            SectionData::Creativity(_) => "creativity",
            SectionData::Reading(_) => "reading",
            SectionData::Links(_) => "links",
        }
    }

    /// Serialize the payload alone (without the tag) for the `data` column.
    pub fn to_payload(&self) -> serde_json::Value {
        let result = match self {
            SectionData::Book(d) => serde_json::to_value(d),
            SectionData::Writing(d) => serde_json::to_value(d),
            SectionData::Creativity(d) => serde_json::to_value(d),
            SectionData::Reading(d) => serde_json::to_value(d),
            SectionData::Links(d) => serde_json::to_value(d),
        };
        result.unwrap_or(serde_json::Value::Null)
    }

    /// Rebuild a payload from its tag and `data` column value. Unknown tags
    /// are an error; callers drop such rows rather than crash.
    pub fn from_payload(kind: &str, payload: serde_json::Value) -> Result<Self, serde_json::Error> {
        match kind {
            "book" => serde_json::from_value(payload).map(SectionData::Book),
            "writing" => serde_json::from_value(payload).map(SectionData::Writing),
            "creativity" => serde_json::from_value(payload).map(SectionData::Creativity),
            "reading" => serde_json::from_value(payload).map(SectionData::Reading),
            "links" => serde_json::from_value(payload).map(SectionData::Links),
            other => Err(serde::de::Error::custom(format!(
                "unknown section type tag: {other}"
            ))),
        }
    }
}

/// One content block on the public profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier, used as the upsert key.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub visible: bool,
    pub data: SectionData,
}

/// The aggregate profile + ordered sections structure mirrored between the
/// remote store and the local cache.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub profile: Profile,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Apply a closure to the payload of the section with the given id.
    /// Unknown ids are ignored.
    pub fn update_section_data<F>(&mut self, id: &str, f: F)
    where
        F: FnOnce(&mut SectionData),
    {
        if let Some(section) = self.section_mut(id) {
            f(&mut section.data);
        }
    }

    /// Replace the section list wholesale with the permutation given by
    /// `order` (a list of section ids). Ids not present in the document are
    /// ignored; sections missing from `order` keep their relative order and
    /// are appended at the tail. Array order becomes position order on the
    /// next save.
    pub fn reorder_sections(&mut self, order: &[String]) {
        let mut remaining = std::mem::take(&mut self.sections);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in order {
            if let Some(index) = remaining.iter().position(|s| &s.id == id) {
                reordered.push(remaining.remove(index));
            }
        }
        reordered.append(&mut remaining);
        self.sections = reordered;
    }

    /// The ids of all sections in current array order.
    pub fn section_order(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_document;

    #[test]
    fn section_data_kind_and_payload_round_trip() {
        let doc = default_document();
        for section in &doc.sections {
            let kind = section.data.kind();
            let payload = section.data.to_payload();
            let rebuilt = SectionData::from_payload(kind, payload).unwrap();
            assert_eq!(rebuilt, section.data);
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = SectionData::from_payload("podcast", serde_json::json!({}));
        assert!(err.is_err());
    }

    #[test]
    fn reorder_replaces_array_order() {
        let mut doc = default_document();
        let mut order = doc.section_order();
        let links = order.pop().unwrap();
        assert_eq!(links, "links");
        order.insert(0, links);

        doc.reorder_sections(&order);
        assert_eq!(
            doc.section_order(),
            vec!["links", "book", "writing", "creativity", "reading"]
        );
    }

    #[test]
    fn reorder_ignores_unknown_ids_and_appends_missing() {
        let mut doc = default_document();
        doc.reorder_sections(&["reading".to_string(), "ghost".to_string()]);
        assert_eq!(
            doc.section_order(),
            vec!["reading", "book", "writing", "creativity", "links"]
        );
    }

    #[test]
    fn update_section_data_targets_by_id() {
        let mut doc = default_document();
        doc.update_section_data("writing", |data| {
            if let SectionData::Writing(w) = data {
                w.feed_url = "https://example.com/feed".to_string();
            }
        });
        match &doc.section("writing").unwrap().data {
            SectionData::Writing(w) => assert_eq!(w.feed_url, "https://example.com/feed"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn document_json_round_trip() {
        let doc = default_document();
        let raw = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, doc);
    }
}
