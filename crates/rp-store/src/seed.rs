//! Sample feed shown before any user activity: three railway articles,
//! the first already carrying one comment. Ids 1 to 3 are fixed so the
//! seeded store's allocator starts at 4.

use chrono::{TimeZone, Utc};
use rp_core::models::{Comment, Publication};

pub fn seed_publications() -> Vec<Publication> {
    vec![
        Publication {
            id: 1,
            author: "Ivan Petrov".to_string(),
            title: "A history of Russian railways".to_string(),
            content: "Russian railways have a rich history, starting with the \
                      first line between Saint Petersburg and Tsarskoye Selo..."
                .to_string(),
            image: Some(
                "https://cdn.poehali.dev/projects/1afbb65f-672b-49af-846a-c06aee32b713/files/922207af-68c8-4b77-bcc7-79117cbe322b.jpg"
                    .to_string(),
            ),
            timestamp: Utc.with_ymd_and_hms(2024, 11, 20, 0, 0, 0).unwrap(),
            comments: vec![Comment {
                id: 1,
                author: "Maria Sidorova".to_string(),
                content: "A really interesting article, thank you!".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 11, 21, 0, 0, 0).unwrap(),
            }],
            is_favorite: false,
        },
        Publication {
            id: 2,
            author: "Alexey Smirnov".to_string(),
            title: "Modern technology on the railway".to_string(),
            content: "Innovation in the rail industry, from high-speed trains \
                      to automated traffic control systems..."
                .to_string(),
            image: Some(
                "https://cdn.poehali.dev/projects/1afbb65f-672b-49af-846a-c06aee32b713/files/60bc35ab-844b-4c31-b64c-aa07e5ea8b2c.jpg"
                    .to_string(),
            ),
            timestamp: Utc.with_ymd_and_hms(2024, 11, 22, 0, 0, 0).unwrap(),
            comments: vec![],
            is_favorite: false,
        },
        Publication {
            id: 3,
            author: "Olga Kuznetsova".to_string(),
            title: "Safety in rail transport".to_string(),
            content: "An overview of present-day safety systems and the \
                      precautions taken when operating rail transport..."
                .to_string(),
            image: Some(
                "https://cdn.poehali.dev/projects/1afbb65f-672b-49af-846a-c06aee32b713/files/85a90499-fc1d-43ea-a8c6-f9e545d1ced9.jpg"
                    .to_string(),
            ),
            timestamp: Utc.with_ymd_and_hms(2024, 11, 23, 0, 0, 0).unwrap(),
            comments: vec![],
            is_favorite: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use crate::store::PublicationStore;

    #[test]
    fn test_seeded_store_shape() {
        let store = PublicationStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.feed()[0].comments.len(), 1);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_seeded_allocator_starts_past_seed_ids() {
        let mut store = PublicationStore::seeded();
        let publication = store
            .create("alice", "Fresh", "Right after login", None)
            .expect("create");
        assert_eq!(publication.id, 4);
    }
}
