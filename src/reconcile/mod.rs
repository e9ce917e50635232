//! List/feed intersection and digest rendering.

use std::fmt::Write;

use crate::domain::{FeedEntry, ListEntry};

/// Intersect the reading list with the release feed by series link.
///
/// Output follows list order; each list entry contributes the first feed
/// entry whose link is exactly equal. Matching is plain string equality,
/// trailing slashes and all, and nothing is deduplicated.
pub fn compute_updates(list: &[ListEntry], feed: &[FeedEntry]) -> Vec<FeedEntry> {
    list.iter()
        .filter_map(|tracked| feed.iter().find(|release| release.link == tracked.link))
        .cloned()
        .collect()
}

/// Render the 1-indexed digest, one newline-terminated line per update.
pub fn render_digest(updates: &[FeedEntry]) -> String {
    let mut message = String::new();
    for (idx, update) in updates.iter().enumerate() {
        let _ = writeln!(
            message,
            "[{}] {} {} {}",
            idx + 1,
            update.date,
            update.title,
            update.chapter
        );
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked(link: &str) -> ListEntry {
        ListEntry {
            title: "tracked".into(),
            link: link.into(),
        }
    }

    fn release(link: &str, chapter: &str) -> FeedEntry {
        FeedEntry {
            title: "title".into(),
            link: link.into(),
            chapter: chapter.into(),
            scan: "G".into(),
            date: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_updates_follow_list_order() {
        let list = vec![tracked("a"), tracked("b")];
        let feed = vec![release("b", "2"), release("a", "1")];

        let updates = compute_updates(&list, &feed);

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].link, "a");
        assert_eq!(updates[1].link, "b");
    }

    #[test]
    fn test_exact_link_match_only() {
        let list = vec![tracked("/series/1")];
        let feed = vec![release("/series/1/", "1")];

        assert!(compute_updates(&list, &feed).is_empty());
    }

    #[test]
    fn test_first_feed_match_wins() {
        let list = vec![tracked("a")];
        let feed = vec![release("a", "1"), release("a", "2")];

        let updates = compute_updates(&list, &feed);

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].chapter, "1");
    }

    #[test]
    fn test_shared_links_are_not_deduplicated() {
        let list = vec![tracked("a"), tracked("a")];
        let feed = vec![release("a", "1")];

        assert_eq!(compute_updates(&list, &feed).len(), 2);
    }

    #[test]
    fn test_unmatched_entries_produce_nothing() {
        let list = vec![tracked("a")];
        let feed = vec![release("b", "1")];

        assert!(compute_updates(&list, &feed).is_empty());
    }

    #[test]
    fn test_digest_line_rendering() {
        let list = vec![ListEntry {
            title: "Foo".into(),
            link: "/s/1".into(),
        }];
        let feed = vec![FeedEntry {
            title: "Foo        ".into(),
            link: "/s/1".into(),
            chapter: "5".into(),
            scan: "G".into(),
            date: "2024-01-01".into(),
        }];

        let updates = compute_updates(&list, &feed);
        let digest = render_digest(&updates);

        assert_eq!(digest, "[1] 2024-01-01 Foo         5\n");
    }

    #[test]
    fn test_digest_enumeration() {
        let updates = vec![release("a", "1"), release("b", "2")];
        let digest = render_digest(&updates);

        let lines: Vec<&str> = digest.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[1] "));
        assert!(lines[1].starts_with("[2] "));
    }

    #[test]
    fn test_empty_updates_render_empty_digest() {
        assert_eq!(render_digest(&[]), "");
    }
}
