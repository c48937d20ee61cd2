#![forbid(unsafe_code)]

//! Content-tree types and id-based lookup.
//!
//! The hierarchy is `Persona` > `Section` > `MainTopic` > `DetailNode`.
//! Ids are unique across the entire tree; [`Persona::validate`] enforces
//! this once at load time. All types deserialize from the JSON wire form
//! used by persona data files (`"do"` for the exercise bucket,
//! kebab-case resource kinds, lowercase sides).

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side column a topic's children render in.
///
/// Determines geometry only, never semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Kind of an external learning resource, used for icon/styling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Article,
    Video,
    TwitterThread,
    Exercise,
    Template,
    Docs,
}

impl ResourceKind {
    /// Stable wire/display name (matches the serde form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::TwitterThread => "twitter-thread",
            Self::Exercise => "exercise",
            Self::Template => "template",
            Self::Docs => "docs",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link to external learning material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Display title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Resource kind for icon/styling purposes.
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Estimated time to complete (e.g. "5 min").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Author or creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Resources grouped by how the reader engages with them.
///
/// The wire form uses `"do"` for the hands-on bucket; `do` is a keyword in
/// Rust, so the field is named `exercises` here and renamed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceBuckets {
    /// Articles and reading material.
    #[serde(default)]
    pub read: Vec<Resource>,
    /// Videos and visual content.
    #[serde(default)]
    pub watch: Vec<Resource>,
    /// Hands-on exercises and templates.
    #[serde(default, rename = "do")]
    pub exercises: Vec<Resource>,
}

impl ResourceBuckets {
    /// Total number of resources across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read.len() + self.watch.len() + self.exercises.len()
    }

    /// True when every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read.is_empty() && self.watch.is_empty() && self.exercises.is_empty()
    }
}

/// A leaf node rendered in the left or right column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailNode {
    /// Unique id across the whole tree.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description shown in the detail drawer.
    #[serde(default)]
    pub summary: String,
    /// Categorized learning resources.
    #[serde(default)]
    pub resources: ResourceBuckets,
}

/// A center-column node with children branching to one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainTopic {
    /// Unique id across the whole tree.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Higher-level overview of the topic.
    #[serde(default)]
    pub summary: String,
    /// Side column the children render in.
    #[serde(rename = "childrenSide")]
    pub children_side: Side,
    /// Child detail nodes. May be empty.
    #[serde(default)]
    pub children: Vec<DetailNode>,
    /// Categorized learning resources.
    #[serde(default)]
    pub resources: ResourceBuckets,
}

/// A named grouping of main topics (a milestone in the learning journey).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique id across the whole tree.
    pub id: String,
    /// Display label (e.g. "FOUNDATIONS").
    pub label: String,
    /// Main topics in reading order.
    #[serde(default)]
    pub topics: Vec<MainTopic>,
}

/// A complete learning path: the top-level static data unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique id (also used as the deep-link `persona` key).
    pub id: String,
    /// Display title (e.g. "AI Engineer").
    pub title: String,
    /// Short subtitle describing the persona.
    #[serde(default)]
    pub subtitle: String,
    /// Icon identifier for the persona selector.
    #[serde(default)]
    pub icon: String,
    /// Sections in reading order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Errors from model construction and validation.
#[derive(Debug)]
pub enum ModelError {
    /// The same id appears more than once in the tree.
    DuplicateId(String),
    /// An id is the empty string.
    EmptyId,
    /// Persona JSON failed to parse.
    Json(serde_json::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate node id: {id}"),
            Self::EmptyId => f.write_str("empty node id"),
            Self::Json(err) => write!(f, "persona JSON: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// A borrowed reference to a node found by id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    /// A center-column main topic.
    Topic(&'a MainTopic),
    /// A side-column detail node.
    Detail(&'a DetailNode),
}

impl<'a> NodeRef<'a> {
    /// The node's id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        match self {
            Self::Topic(t) => &t.id,
            Self::Detail(d) => &d.id,
        }
    }

    /// The node's display title.
    #[must_use]
    pub fn title(&self) -> &'a str {
        match self {
            Self::Topic(t) => &t.title,
            Self::Detail(d) => &d.title,
        }
    }
}

impl Persona {
    /// Parse a persona from its JSON wire form and validate ids.
    pub fn from_json(input: &str) -> Result<Self, ModelError> {
        let persona: Self = serde_json::from_str(input)?;
        persona.validate()?;
        Ok(persona)
    }

    /// Check that every id in the tree is non-empty and unique.
    ///
    /// Ids are React-key style lookup keys for selection and deep linking;
    /// the rest of the workspace assumes this invariant holds.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen = BTreeSet::new();
        let mut check = |id: &str| -> Result<(), ModelError> {
            if id.is_empty() {
                return Err(ModelError::EmptyId);
            }
            if !seen.insert(id.to_string()) {
                return Err(ModelError::DuplicateId(id.to_string()));
            }
            Ok(())
        };

        check(&self.id)?;
        for section in &self.sections {
            check(&section.id)?;
            for topic in &section.topics {
                check(&topic.id)?;
                for child in &topic.children {
                    check(&child.id)?;
                }
            }
        }
        Ok(())
    }

    /// Find a topic or detail node by id (linear scan).
    ///
    /// For repeated lookups build a [`NodeIndex`] instead.
    #[must_use]
    pub fn find_node(&self, id: &str) -> Option<NodeRef<'_>> {
        for section in &self.sections {
            for topic in &section.topics {
                if topic.id == id {
                    return Some(NodeRef::Topic(topic));
                }
                for child in &topic.children {
                    if child.id == id {
                        return Some(NodeRef::Detail(child));
                    }
                }
            }
        }
        None
    }

    /// Number of main topics across all sections.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }

    /// Number of detail nodes across all topics.
    #[must_use]
    pub fn detail_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.topics)
            .map(|t| t.children.len())
            .sum()
    }
}

/// Id-to-node lookup table built once per tree.
///
/// Covers main topics and detail nodes (the selectable nodes); persona and
/// section ids are not selectable and are not indexed.
#[derive(Debug)]
pub struct NodeIndex<'a> {
    map: BTreeMap<&'a str, NodeRef<'a>>,
}

impl<'a> NodeIndex<'a> {
    /// Build the lookup table for a persona.
    #[must_use]
    pub fn new(persona: &'a Persona) -> Self {
        let mut map = BTreeMap::new();
        for section in &persona.sections {
            for topic in &section.topics {
                map.insert(topic.id.as_str(), NodeRef::Topic(topic));
                for child in &topic.children {
                    map.insert(child.id.as_str(), NodeRef::Detail(child));
                }
            }
        }
        Self { map }
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<NodeRef<'a>> {
        self.map.get(id).copied()
    }

    /// Number of indexed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the tree has no selectable nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> DetailNode {
        DetailNode {
            id: id.into(),
            title: format!("title {id}"),
            summary: String::new(),
            resources: ResourceBuckets::default(),
        }
    }

    fn topic(id: &str, side: Side, children: Vec<DetailNode>) -> MainTopic {
        MainTopic {
            id: id.into(),
            title: format!("title {id}"),
            summary: String::new(),
            children_side: side,
            children,
            resources: ResourceBuckets::default(),
        }
    }

    fn sample_persona() -> Persona {
        Persona {
            id: "for-myself".into(),
            title: "For Myself".into(),
            subtitle: "Individual learning path".into(),
            icon: "person".into(),
            sections: vec![Section {
                id: "foundations".into(),
                label: "FOUNDATIONS".into(),
                topics: vec![
                    topic("ai-basics", Side::Left, vec![detail("tokens"), detail("context")]),
                    topic("prompting", Side::Right, vec![detail("system-prompts")]),
                ],
            }],
        }
    }

    #[test]
    fn validate_accepts_unique_ids() {
        assert!(sample_persona().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_id() {
        let mut persona = sample_persona();
        persona.sections[0].topics[1].children[0].id = "tokens".into();
        match persona.validate() {
            Err(ModelError::DuplicateId(id)) => assert_eq!(id, "tokens"),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_empty_id() {
        let mut persona = sample_persona();
        persona.sections[0].id = String::new();
        assert!(matches!(persona.validate(), Err(ModelError::EmptyId)));
    }

    #[test]
    fn find_node_hits_topics_and_details() {
        let persona = sample_persona();
        match persona.find_node("prompting") {
            Some(NodeRef::Topic(t)) => assert_eq!(t.id, "prompting"),
            other => panic!("expected topic, got {other:?}"),
        }
        match persona.find_node("context") {
            Some(NodeRef::Detail(d)) => assert_eq!(d.id, "context"),
            other => panic!("expected detail, got {other:?}"),
        }
        assert!(persona.find_node("nope").is_none());
    }

    #[test]
    fn node_index_covers_selectable_nodes() {
        let persona = sample_persona();
        let index = NodeIndex::new(&persona);
        // 2 topics + 3 details
        assert_eq!(index.len(), 5);
        assert_eq!(index.get("system-prompts").map(|n| n.id()), Some("system-prompts"));
        // Persona and section ids are not selectable.
        assert!(index.get("for-myself").is_none());
        assert!(index.get("foundations").is_none());
    }

    #[test]
    fn counts() {
        let persona = sample_persona();
        assert_eq!(persona.topic_count(), 2);
        assert_eq!(persona.detail_count(), 3);
    }

    #[test]
    fn json_round_trip_preserves_wire_names() {
        let input = r##"{
            "id": "for-myself",
            "title": "For Myself",
            "subtitle": "",
            "icon": "person",
            "sections": [{
                "id": "s1",
                "label": "CORE",
                "topics": [{
                    "id": "t1",
                    "title": "Topic",
                    "summary": "",
                    "childrenSide": "left",
                    "children": [{
                        "id": "d1",
                        "title": "Detail",
                        "summary": "",
                        "resources": {
                            "read": [{
                                "title": "Thread",
                                "url": "https://example.com/t",
                                "type": "twitter-thread",
                                "author": "someone"
                            }],
                            "watch": [],
                            "do": [{
                                "title": "Exercise",
                                "url": "https://example.com/e",
                                "type": "exercise",
                                "duration": "30 min"
                            }]
                        }
                    }]
                }]
            }]
        }"##;

        let persona = Persona::from_json(input).unwrap();
        let topic = &persona.sections[0].topics[0];
        assert_eq!(topic.children_side, Side::Left);
        let buckets = &persona.sections[0].topics[0].children[0].resources;
        assert_eq!(buckets.read[0].kind, ResourceKind::TwitterThread);
        assert_eq!(buckets.exercises[0].duration.as_deref(), Some("30 min"));
        assert_eq!(buckets.len(), 2);

        // Re-serialized form keeps the wire names.
        let out = serde_json::to_string(&persona).unwrap();
        assert!(out.contains(r#""childrenSide":"left""#));
        assert!(out.contains(r#""type":"twitter-thread""#));
        assert!(out.contains(r#""do":[{"#));
    }

    #[test]
    fn from_json_rejects_invalid_tree() {
        let input = r##"{
            "id": "p",
            "title": "P",
            "sections": [{
                "id": "p",
                "label": "X",
                "topics": []
            }]
        }"##;
        assert!(matches!(
            Persona::from_json(input),
            Err(ModelError::DuplicateId(_))
        ));
    }

    #[test]
    fn resource_kind_display_matches_wire() {
        assert_eq!(ResourceKind::TwitterThread.to_string(), "twitter-thread");
        assert_eq!(ResourceKind::Docs.to_string(), "docs");
    }
}
