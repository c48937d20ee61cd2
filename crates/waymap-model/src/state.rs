#![forbid(unsafe_code)]

//! Deep-link selection-state codec.
//!
//! The interactive shell persists the current persona and selected topic
//! in the page's URL fragment so views are shareable:
//!
//! - `persona=for-myself`
//! - `persona=for-myself&topic=ai-basics`
//!
//! This module is the pure string codec for that form. It has no notion of
//! browsers or history; callers own where the fragment comes from and goes.

/// Ephemeral selection persisted in `key=value&key=value` fragment form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Currently selected persona id, if any.
    pub persona: Option<String>,
    /// Currently selected topic/node id, if any.
    pub topic: Option<String>,
}

impl SelectionState {
    /// Parse a fragment string.
    ///
    /// A leading `#` is tolerated. Unknown keys, empty values, and malformed
    /// pairs are ignored rather than reported; a fragment that yields nothing
    /// parses to the empty state.
    #[must_use]
    pub fn parse_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut state = Self::default();
        for pair in fragment.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "persona" => state.persona = Some(value.to_string()),
                "topic" => state.topic = Some(value.to_string()),
                _ => {}
            }
        }
        state
    }

    /// Serialize back to fragment form (no leading `#`).
    ///
    /// Unset keys are omitted; `persona` always precedes `topic`. The empty
    /// state serializes to the empty string.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        let mut out = String::new();
        if let Some(persona) = &self.persona {
            out.push_str("persona=");
            out.push_str(persona);
        }
        if let Some(topic) = &self.topic {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str("topic=");
            out.push_str(topic);
        }
        out
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persona.is_none() && self.topic.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_fragment() {
        let state = SelectionState::parse_fragment("persona=for-myself&topic=ai-basics");
        assert_eq!(state.persona.as_deref(), Some("for-myself"));
        assert_eq!(state.topic.as_deref(), Some("ai-basics"));
    }

    #[test]
    fn parse_tolerates_hash_prefix() {
        let state = SelectionState::parse_fragment("#persona=for-my-team");
        assert_eq!(state.persona.as_deref(), Some("for-my-team"));
        assert!(state.topic.is_none());
    }

    #[test]
    fn parse_ignores_unknown_and_malformed() {
        let state = SelectionState::parse_fragment("tab=read&persona=p&junk&topic=");
        assert_eq!(state.persona.as_deref(), Some("p"));
        assert!(state.topic.is_none());
    }

    #[test]
    fn empty_input_is_empty_state() {
        assert!(SelectionState::parse_fragment("").is_empty());
        assert!(SelectionState::parse_fragment("#").is_empty());
        assert_eq!(SelectionState::default().to_fragment(), "");
    }

    #[test]
    fn round_trip() {
        let state = SelectionState {
            persona: Some("for-myself".into()),
            topic: Some("context".into()),
        };
        let fragment = state.to_fragment();
        assert_eq!(fragment, "persona=for-myself&topic=context");
        assert_eq!(SelectionState::parse_fragment(&fragment), state);
    }

    #[test]
    fn topic_only_round_trip() {
        let state = SelectionState {
            persona: None,
            topic: Some("tokens".into()),
        };
        assert_eq!(state.to_fragment(), "topic=tokens");
        assert_eq!(SelectionState::parse_fragment("topic=tokens"), state);
    }
}
