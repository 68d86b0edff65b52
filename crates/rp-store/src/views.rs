//! # View Projector
//!
//! Read-only projections over the store. Every method walks the current
//! feed on every call; nothing here is cached or invalidated, so a view
//! can never disagree with the store it was derived from.

use rp_core::models::Publication;

use crate::store::PublicationStore;

impl PublicationStore {
    /// The full feed, most-recent-first.
    pub fn feed(&self) -> Vec<&Publication> {
        self.publications().iter().collect()
    }

    /// Publications the viewer has starred, in feed order.
    pub fn favorites(&self) -> Vec<&Publication> {
        self.publications()
            .iter()
            .filter(|p| p.is_favorite)
            .collect()
    }

    /// Publications authored by `username` (exact match), in feed order.
    pub fn by_author(&self, username: &str) -> Vec<&Publication> {
        self.publications()
            .iter()
            .filter(|p| p.author == username)
            .collect()
    }

    /// Case-insensitive substring search over title, content and author.
    ///
    /// A blank query matches nothing rather than everything; the search
    /// page shows its own prompt until the user types something.
    pub fn search(&self, query: &str) -> Vec<&Publication> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.publications()
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
                    || p.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Total number of comments across the whole feed (profile stats).
    pub fn total_comments(&self) -> usize {
        self.publications().iter().map(|p| p.comments.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.publications().len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_two_authors() -> PublicationStore {
        let mut store = PublicationStore::new();
        store
            .create("alice", "Night trains", "Sleeper cars are back", None)
            .expect("create");
        store
            .create("bob", "Signal boxes", "Mechanical interlocking", None)
            .expect("create");
        store
            .create("alice", "High speed", "350 km/h on the new line", None)
            .expect("create");
        store
    }

    #[test]
    fn test_feed_is_most_recent_first() {
        let store = store_with_two_authors();
        let titles: Vec<&str> = store.feed().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["High speed", "Signal boxes", "Night trains"]);
    }

    #[test]
    fn test_favorites_tracks_toggles_exactly() {
        let mut store = store_with_two_authors();
        let first = store.feed()[0].id;
        let last = store.feed()[2].id;

        store.toggle_favorite(first).expect("toggle");
        store.toggle_favorite(last).expect("toggle");
        let ids: Vec<u64> = store.favorites().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first, last], "feed order preserved");

        store.toggle_favorite(first).expect("toggle back");
        let ids: Vec<u64> = store.favorites().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![last]);
    }

    #[test]
    fn test_by_author_exact_match() {
        let store = store_with_two_authors();
        assert_eq!(store.by_author("alice").len(), 2);
        assert_eq!(store.by_author("bob").len(), 1);
        assert!(store.by_author("Alice").is_empty(), "author match is exact");
        assert!(store.by_author("carol").is_empty());
    }

    #[test]
    fn test_search_blank_query_matches_nothing() {
        let store = store_with_two_authors();
        assert!(store.search("").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let store = store_with_two_authors();

        // Title, content and author are all searched.
        assert_eq!(store.search("NIGHT").len(), 1);
        assert_eq!(store.search("interlock").len(), 1);
        assert_eq!(store.search("ALICE").len(), 2);
        assert!(store.search("tram").is_empty());
    }

    #[test]
    fn test_total_comments() {
        let mut store = store_with_two_authors();
        assert_eq!(store.total_comments(), 0);

        let id = store.feed()[1].id;
        store.add_comment(id, "carol", "lovely").expect("comment");
        store.add_comment(id, "alice", "agreed").expect("comment");
        assert_eq!(store.total_comments(), 2);
    }
}
