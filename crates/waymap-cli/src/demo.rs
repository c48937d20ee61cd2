#![forbid(unsafe_code)]

//! Built-in demo persona used when no input file is given.

use waymap::{DetailNode, MainTopic, Persona, Resource, ResourceBuckets, ResourceKind, Section, Side};

fn resource(title: &str, url: &str, kind: ResourceKind) -> Resource {
    Resource {
        title: title.into(),
        url: url.into(),
        kind,
        duration: None,
        author: None,
    }
}

fn detail(id: &str, title: &str, summary: &str) -> DetailNode {
    DetailNode {
        id: id.into(),
        title: title.into(),
        summary: summary.into(),
        resources: ResourceBuckets::default(),
    }
}

/// A compact learning path about AI-assisted engineering.
pub fn persona() -> Persona {
    Persona {
        id: "for-myself".into(),
        title: "For Myself".into(),
        subtitle: "Level up your own AI-assisted workflow".into(),
        icon: "person".into(),
        sections: vec![
            Section {
                id: "foundations".into(),
                label: "FOUNDATIONS".into(),
                topics: vec![
                    MainTopic {
                        id: "how-models-work".into(),
                        title: "How Models Work".into(),
                        summary: "Enough mental model to predict behavior.".into(),
                        children_side: Side::Left,
                        children: vec![
                            detail(
                                "tokens-context",
                                "Tokens & Context",
                                "Why context windows shape everything.",
                            ),
                            detail(
                                "sampling",
                                "Sampling & Temperature",
                                "Where nondeterminism comes from.",
                            ),
                        ],
                        resources: ResourceBuckets {
                            read: vec![resource(
                                "What is a token?",
                                "https://example.com/tokens",
                                ResourceKind::Article,
                            )],
                            ..ResourceBuckets::default()
                        },
                    },
                    MainTopic {
                        id: "prompting".into(),
                        title: "Prompting".into(),
                        summary: "Structure requests the model can act on.".into(),
                        children_side: Side::Right,
                        children: vec![
                            detail(
                                "system-prompts",
                                "System Prompts",
                                "Setting stable behavior up front.",
                            ),
                            detail(
                                "few-shot",
                                "Few-shot Examples",
                                "Showing beats telling.",
                            ),
                            detail(
                                "iteration",
                                "Iterative Refinement",
                                "Treat prompts as code under review.",
                            ),
                        ],
                        resources: ResourceBuckets::default(),
                    },
                ],
            },
            Section {
                id: "daily-practice".into(),
                label: "DAILY PRACTICE".into(),
                topics: vec![MainTopic {
                    id: "agentic-workflows".into(),
                    title: "Agentic Workflows".into(),
                    summary: "Delegate whole tasks, review the diffs.".into(),
                    children_side: Side::Left,
                    children: vec![
                        detail(
                            "code-review",
                            "Reviewing AI Code",
                            "Trust but verify, with tests.",
                        ),
                        detail(
                            "guardrails",
                            "Guardrails & Tests",
                            "Make the loop safe to run unattended.",
                        ),
                    ],
                    resources: ResourceBuckets {
                        exercises: vec![resource(
                            "Ship a feature with an agent",
                            "https://example.com/exercise",
                            ResourceKind::Exercise,
                        )],
                        ..ResourceBuckets::default()
                    },
                }],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_persona_is_valid() {
        persona().validate().unwrap();
    }

    #[test]
    fn demo_persona_has_both_sides() {
        let persona = persona();
        let sides: Vec<Side> = persona
            .sections
            .iter()
            .flat_map(|s| &s.topics)
            .map(|t| t.children_side)
            .collect();
        assert!(sides.contains(&Side::Left));
        assert!(sides.contains(&Side::Right));
    }
}
