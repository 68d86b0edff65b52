//! railpost/crates/rp-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Railpost.

pub mod models;
pub mod traits;
pub mod error;

// Re-exporting for easier access in other crates
pub use models::*;
pub use traits::*;
pub use error::*;


#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn test_publication_json_shape() {
        let publication = Publication {
            id: 1,
            author: "alice".to_string(),
            title: "Hello".to_string(),
            content: "First post".to_string(),
            image: None,
            timestamp: chrono::Utc::now(),
            comments: vec![],
            is_favorite: false,
        };
        let json = serde_json::to_value(&publication).expect("serialize");
        // Stable camelCase contract for the presentation layer
        assert_eq!(json["isFavorite"], serde_json::json!(false));
        assert!(json.get("image").is_none(), "absent image must be omitted");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_comment_id_high_water_mark() {
        let mut publication = Publication {
            id: 7,
            author: "alice".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
            image: None,
            timestamp: chrono::Utc::now(),
            comments: vec![],
            is_favorite: false,
        };
        assert_eq!(publication.next_comment_id(), 1);
        publication.comments.push(Comment {
            id: 4,
            author: "bob".to_string(),
            content: "late import".to_string(),
            timestamp: chrono::Utc::now(),
        });
        assert_eq!(publication.next_comment_id(), 5);
    }
}
