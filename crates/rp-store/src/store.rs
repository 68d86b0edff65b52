//! # Publication Store
//!
//! The single source of truth for the feed. Owns the ordered collection of
//! publications and exposes the five mutators; derived views live in
//! `views.rs` and are recomputed from this state on every read.
//!
//! Identifier policy: `next_id` is a high-water mark that survives
//! deletions, so a publication id is never reused within one store
//! lifetime. (Re-deriving "next" from the current length would hand out
//! duplicates after a delete.)

use chrono::Utc;
use rp_core::error::{AppError, Result};
use rp_core::models::{Comment, Publication};

/// An explicitly owned store; no globals. Construct one per session via
/// [`PublicationStore::new`] or [`PublicationStore::seeded`].
pub struct PublicationStore {
    publications: Vec<Publication>,
    next_id: u64,
}

impl PublicationStore {
    /// An empty feed.
    pub fn new() -> Self {
        Self {
            publications: Vec::new(),
            next_id: 1,
        }
    }

    /// A store pre-loaded with existing publications. The allocator starts
    /// past the highest id present so later creates never collide.
    pub fn with_publications(publications: Vec<Publication>) -> Self {
        let next_id = publications.iter().map(|p| p.id + 1).max().unwrap_or(1);
        Self {
            publications,
            next_id,
        }
    }

    /// A store holding the sample feed shown before any user activity.
    pub fn seeded() -> Self {
        Self::with_publications(crate::seed::seed_publications())
    }

    /// Creates a publication at the head of the feed (most-recent-first).
    ///
    /// Stored `title`/`content` are the trimmed input; a blank `image`
    /// collapses to `None`. A rejected create allocates no id.
    pub fn create(
        &mut self,
        author: &str,
        title: &str,
        content: &str,
        image: Option<&str>,
    ) -> Result<Publication> {
        let title = required_field("title", title)?;
        let content = required_field("content", content)?;
        let image = image
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let publication = Publication {
            id: self.next_id,
            author: author.to_string(),
            title,
            content,
            image,
            timestamp: Utc::now(),
            comments: Vec::new(),
            is_favorite: false,
        };
        self.next_id += 1;

        tracing::info!(id = publication.id, author, "publication created");
        self.publications.insert(0, publication.clone());
        Ok(publication)
    }

    /// Replaces `title`, `content` and `image` in place. Everything else
    /// (id, author, timestamp, comments, favorite flag, feed position) is
    /// preserved. Only the author may edit.
    pub fn edit(
        &mut self,
        id: u64,
        editor: &str,
        title: &str,
        content: &str,
        image: Option<&str>,
    ) -> Result<Publication> {
        // 1. Resolve the target
        let position = self.position_of(id)?;

        // 2. Authorization: author-only, checked here rather than trusting
        //    the presentation layer to hide the button.
        if self.publications[position].author != editor {
            tracing::warn!(id, editor, "edit rejected: not the author");
            return Err(AppError::Unauthorized(format!(
                "only {} may edit publication {}",
                self.publications[position].author, id
            )));
        }

        // 3. Validate before touching anything; a rejected edit must leave
        //    the publication untouched.
        let title = required_field("title", title)?;
        let content = required_field("content", content)?;
        let image = image
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let publication = &mut self.publications[position];
        publication.title = title;
        publication.content = content;
        publication.image = image;

        tracing::info!(id, editor, "publication edited");
        Ok(publication.clone())
    }

    /// Removes the publication. Surviving ids are never renumbered and the
    /// removed id is never reissued. Only the author may delete.
    pub fn delete(&mut self, id: u64, caller: &str) -> Result<()> {
        let position = self.position_of(id)?;
        if self.publications[position].author != caller {
            tracing::warn!(id, caller, "delete rejected: not the author");
            return Err(AppError::Unauthorized(format!(
                "only {} may delete publication {}",
                self.publications[position].author, id
            )));
        }

        self.publications.remove(position);
        tracing::info!(id, caller, "publication deleted");
        Ok(())
    }

    /// Appends a comment to the target publication's thread. Comment ids
    /// are scoped to the publication.
    pub fn add_comment(
        &mut self,
        publication_id: u64,
        author: &str,
        content: &str,
    ) -> Result<Comment> {
        let content = required_field("comment", content)?;
        let publication = self.get_mut(publication_id)?;

        let comment = Comment {
            id: publication.next_comment_id(),
            author: author.to_string(),
            content,
            timestamp: Utc::now(),
        };
        publication.comments.push(comment.clone());

        tracing::debug!(
            publication_id,
            comment_id = comment.id,
            author,
            "comment added"
        );
        Ok(comment)
    }

    /// Flips the favorite flag and returns the new state. Two toggles
    /// restore the original value.
    pub fn toggle_favorite(&mut self, publication_id: u64) -> Result<bool> {
        let publication = self.get_mut(publication_id)?;
        publication.is_favorite = !publication.is_favorite;
        let state = publication.is_favorite;
        tracing::debug!(publication_id, favorite = state, "favorite toggled");
        Ok(state)
    }

    /// Read-only lookup by id.
    pub fn get(&self, id: u64) -> Option<&Publication> {
        self.publications.iter().find(|p| p.id == id)
    }

    pub(crate) fn publications(&self) -> &[Publication] {
        &self.publications
    }

    fn position_of(&self, id: u64) -> Result<usize> {
        self.publications
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::publication_not_found(id))
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Publication> {
        self.publications
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::publication_not_found(id))
    }
}

impl Default for PublicationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Trims a required text field, rejecting blank or whitespace-only input.
fn required_field(name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(trimmed.to_string())
}
