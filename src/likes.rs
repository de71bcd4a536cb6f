use log::{debug, warn};

use crate::error::Result;
use crate::model::Like;
use crate::storage::KeyValueStore;

/// Key the likes sequence is persisted under.
pub const LIKES_KEY: &str = "likes";

/// Ordered set of liked recipes, mirrored to a [`KeyValueStore`].
///
/// Every mutation rewrites the whole sequence before returning, so the
/// persisted order is always the in-memory order.
#[derive(Debug)]
pub struct LikesStore<S> {
    store: S,
    likes: Vec<Like>,
}

impl<S: KeyValueStore> LikesStore<S> {
    /// Wrap `store` with an empty in-memory sequence. Call
    /// [`read_storage`](Self::read_storage) to load what was persisted.
    pub fn new(store: S) -> Self {
        Self {
            store,
            likes: Vec::new(),
        }
    }

    /// Replace the in-memory sequence with the persisted one.
    ///
    /// An absent, unreadable or corrupt record yields an empty sequence.
    pub fn read_storage(&mut self) {
        self.likes = match self.store.get(LIKES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Like>>(&raw) {
                Ok(likes) => likes,
                Err(e) => {
                    warn!("Discarding corrupt likes record: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read likes record: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} likes from storage", self.likes.len());
    }

    /// Append a like and persist. The caller checks [`is_liked`](Self::is_liked) first.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Result<Like> {
        let like = Like {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            img: img.into(),
        };
        let mut next = self.likes.clone();
        next.push(like.clone());
        self.commit(next)?;
        Ok(like)
    }

    /// Remove the like with `id` if present and persist.
    pub fn delete_like(&mut self, id: &str) -> Result<Option<Like>> {
        let mut next = self.likes.clone();
        let removed = next
            .iter()
            .position(|like| like.id == id)
            .map(|index| next.remove(index));
        self.commit(next)?;
        Ok(removed)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write `next` to the store, and only then make it the in-memory
    /// sequence. A failed write leaves both sides as they were.
    fn commit(&mut self, next: Vec<Like>) -> Result<()> {
        let raw = serde_json::to_string(&next)?;
        self.store.set(LIKES_KEY, &raw)?;
        self.likes = next;
        Ok(())
    }
}
