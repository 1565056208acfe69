use super::command::{CommandDefinition, CommandGroup};
use std::borrow::Cow;

/// Narrows `groups` down to the commands whose label contains `query`,
/// ignoring case. Group and item order are kept and groups left without
/// items are dropped. An empty query returns the input as-is.
#[must_use]
pub fn filter_groups<'a>(groups: &'a [CommandGroup], query: &str) -> Cow<'a, [CommandGroup]> {
    if query.is_empty() {
        return Cow::Borrowed(groups);
    }

    let query_lower = query.to_lowercase();
    let filtered = groups
        .iter()
        .filter_map(|group| {
            let items: Vec<CommandDefinition> = group
                .items
                .iter()
                .filter(|item| label_matches(item, &query_lower))
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(CommandGroup {
                    label: group.label.clone(),
                    items,
                })
            }
        })
        .collect();

    Cow::Owned(filtered)
}

/// Concatenates every group's items, group by group.
#[must_use]
pub fn flatten(groups: &[CommandGroup]) -> Vec<&CommandDefinition> {
    groups.iter().flat_map(|group| group.items.iter()).collect()
}

/// Number of commands left visible for `query`.
#[must_use]
pub fn visible_len(groups: &[CommandGroup], query: &str) -> usize {
    if query.is_empty() {
        return groups.iter().map(|g| g.items.len()).sum();
    }
    let query_lower = query.to_lowercase();
    groups
        .iter()
        .flat_map(|g| g.items.iter())
        .filter(|item| label_matches(item, &query_lower))
        .count()
}

fn label_matches(item: &CommandDefinition, query_lower: &str) -> bool {
    item.label.to_lowercase().contains(query_lower)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::command::{CommandKind, ConfirmableEffect, Icon};
    use crate::domain::page::Section;
    use rand::{Rng, SeedableRng};

    pub(crate) fn sample_registry() -> Vec<CommandGroup> {
        let nav = |id: &str, label: &str, section: Section| {
            CommandDefinition::new(id, label, Icon::Home, CommandKind::Navigate { target: section })
        };
        vec![
            CommandGroup::new(
                "Navigation",
                vec![
                    nav("home", "Home", Section::Home),
                    nav("projects", "Work", Section::Projects),
                    nav("stack", "Stack", Section::Stack),
                    nav("contact", "Contact", Section::Contact),
                ],
            ),
            CommandGroup::new(
                "Actions",
                vec![
                    CommandDefinition::new(
                        "github",
                        "GitHub",
                        Icon::GitHub,
                        CommandKind::ExternalLink {
                            url: "https://github.com/example".to_string(),
                        },
                    ),
                    CommandDefinition::new(
                        "linkedin",
                        "LinkedIn",
                        Icon::LinkedIn,
                        CommandKind::ExternalLink {
                            url: "https://www.linkedin.com/in/example/".to_string(),
                        },
                    ),
                    CommandDefinition::new(
                        "email",
                        "Copy Email",
                        Icon::Copy,
                        CommandKind::ConfirmableAction(ConfirmableEffect::CopyToClipboard {
                            text: "someone@example.com".to_string(),
                        }),
                    ),
                ],
            ),
        ]
    }

    fn ids(groups: &[CommandGroup]) -> Vec<&str> {
        flatten(groups).iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let registry = sample_registry();
        let filtered = filter_groups(&registry, "");
        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(filtered.as_ref(), registry.as_slice());
    }

    #[test]
    fn test_basic_filter_drops_empty_groups() {
        let registry = sample_registry();
        let filtered = filter_groups(&registry, "gi");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "Actions");
        assert_eq!(ids(&filtered), vec!["github"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let registry = sample_registry();
        assert_eq!(ids(&filter_groups(&registry, "GITHUB")), vec!["github"]);
        assert_eq!(ids(&filter_groups(&registry, "cOnTaCt")), vec!["contact"]);
    }

    #[test]
    fn test_filter_keeps_relative_order_across_groups() {
        let registry = sample_registry();
        // "o" hits Home, Work, Contact and Copy Email
        assert_eq!(
            ids(&filter_groups(&registry, "o")),
            vec!["home", "projects", "contact", "email"]
        );
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let registry = sample_registry();
        let filtered = filter_groups(&registry, "zzz");
        assert!(filtered.is_empty());
        assert_eq!(visible_len(&registry, "zzz"), 0);
    }

    #[test]
    fn test_filter_matches_predicate_for_random_queries() {
        let registry = sample_registry();
        let all = flatten(&registry);
        let alphabet: Vec<char> = "aeiouhkmnrstgcGHIOW ".chars().collect();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let len = rng.gen_range(1..4);
            let query: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let needle = query.to_lowercase();

            let filtered = filter_groups(&registry, &query);
            let kept = flatten(&filtered);

            // Soundness: everything kept matches
            assert!(kept.iter().all(|c| c.label.to_lowercase().contains(&needle)));
            // Completeness, in original order
            let expected: Vec<&str> = all
                .iter()
                .filter(|c| c.label.to_lowercase().contains(&needle))
                .map(|c| c.id.as_str())
                .collect();
            let actual: Vec<&str> = kept.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(actual, expected, "query {query:?}");
            assert_eq!(visible_len(&registry, &query), expected.len());
            assert!(filtered.iter().all(|g| !g.items.is_empty()));
        }
    }
}
