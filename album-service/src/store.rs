//! In-memory album store
//!
//! Owns the album collection. Every operation scans and mutates under a
//! single lock guard, so an id lookup cannot go stale before the write
//! that depends on it.

use album_common::{seed_albums, Album, Error, Result};
use tokio::sync::RwLock;

/// Ordered album collection shared by all handlers
#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: RwLock<Vec<Album>>,
}

/// Position of the first album whose id matches exactly
fn find_index(albums: &[Album], id: &str) -> Option<usize> {
    albums.iter().position(|album| album.id == id)
}

impl AlbumStore {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Store holding the startup seed albums
    pub fn seeded() -> Self {
        Self::new(seed_albums())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot of the collection in current order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Album> {
        let albums = self.albums.read().await;
        find_index(&albums, id).map(|index| albums[index].clone())
    }

    pub async fn contains(&self, id: &str) -> bool {
        find_index(&self.albums.read().await, id).is_some()
    }

    /// Append an album; duplicate and empty ids are accepted
    pub async fn insert(&self, album: Album) -> Album {
        self.albums.write().await.push(album.clone());
        album
    }

    /// Replace the first album matching `id` with `album`
    ///
    /// The stored record takes every field from `album`, including its id.
    pub async fn replace(&self, id: &str, album: Album) -> Result<()> {
        let mut albums = self.albums.write().await;
        let index = find_index(&albums, id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        albums[index] = album;
        Ok(())
    }

    /// Remove the first album matching `id`, keeping the order of the rest
    pub async fn remove(&self, id: &str) -> Result<Album> {
        let mut albums = self.albums.write().await;
        let index = find_index(&albums, id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(albums.remove(index))
    }

    /// Remove every album, returning how many were dropped
    pub async fn clear(&self) -> usize {
        let mut albums = self.albums.write().await;
        let removed = albums.len();
        albums.clear();
        removed
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(albums: &[Album]) -> Vec<&str> {
        albums.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_find_index_first_match_wins() {
        let albums = vec![
            Album::new("1", "A", "X", 1.0),
            Album::new("2", "B", "Y", 2.0),
            Album::new("2", "C", "Z", 3.0),
        ];
        assert_eq!(find_index(&albums, "2"), Some(1));
        assert_eq!(find_index(&albums, "9"), None);
        assert_eq!(find_index(&[], "1"), None);
    }

    #[test]
    fn test_find_index_exact_match_only() {
        let albums = vec![Album::new("10", "A", "X", 1.0)];
        assert_eq!(find_index(&albums, "1"), None);
        assert_eq!(find_index(&albums, "10 "), None);
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = AlbumStore::seeded();
        assert_eq!(store.len().await, 3);
        assert_eq!(ids(&store.list().await), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_insert_appends_duplicates() {
        let store = AlbumStore::seeded();
        store.insert(Album::new("1", "Again", "Someone", 1.0)).await;
        store.insert(Album::default()).await;

        assert_eq!(ids(&store.list().await), vec!["1", "2", "3", "1", ""]);
        // Lookup still returns the earlier record
        assert_eq!(store.get("1").await.unwrap().title, "Blue Train");
    }

    #[tokio::test]
    async fn test_replace_overwrites_whole_record() {
        let store = AlbumStore::seeded();
        store
            .replace("2", Album::new("20", "New", "", 0.0))
            .await
            .unwrap();

        assert!(store.get("2").await.is_none());
        assert_eq!(store.get("20").await.unwrap(), Album::new("20", "New", "", 0.0));
        assert_eq!(ids(&store.list().await), vec!["1", "20", "3"]);
    }

    #[tokio::test]
    async fn test_replace_missing_id() {
        let store = AlbumStore::seeded();
        let result = store.replace("99", Album::default()).await;

        assert!(matches!(result, Err(Error::NotFound(id)) if id == "99"));
        assert_eq!(store.list().await, seed_albums());
    }

    #[tokio::test]
    async fn test_remove_preserves_order() {
        let store = AlbumStore::seeded();
        let removed = store.remove("2").await.unwrap();

        assert_eq!(removed.title, "Jeru");
        assert_eq!(ids(&store.list().await), vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_remove_missing_id() {
        let store = AlbumStore::empty();
        assert!(matches!(store.remove("1").await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clear() {
        let store = AlbumStore::seeded();
        assert_eq!(store.clear().await, 3);
        assert!(store.is_empty().await);
        assert_eq!(store.clear().await, 0);
    }
}
