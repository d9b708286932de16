/**
 * In-Memory User Store
 *
 * A `HashMap` behind a `tokio::sync::RwLock`. `put` checks and inserts under
 * a single write lock, so concurrent registrations of the same username
 * cannot both succeed.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Credential, StoreError, UserStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, Credential>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored credentials
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn put(&self, credential: Credential) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&credential.username) {
            return Err(StoreError::Duplicate);
        }
        users.insert(credential.username.clone(), credential);
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Credential, StoreError> {
        self.users
            .read()
            .await
            .get(username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryUserStore::new();
        assert!(!store.exists("alice").await.unwrap());

        store.put(Credential::new("alice", "hash-1")).await.unwrap();

        assert!(store.exists("alice").await.unwrap());
        assert_eq!(
            store.get("alice").await.unwrap(),
            Credential::new("alice", "hash-1")
        );
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemoryUserStore::new();
        assert_matches!(store.get("nobody").await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_put_never_overwrites() {
        let store = InMemoryUserStore::new();
        store.put(Credential::new("alice", "hash-1")).await.unwrap();

        let result = store.put(Credential::new("alice", "hash-2")).await;
        assert_matches!(result, Err(StoreError::Duplicate));
        assert_eq!(store.get("alice").await.unwrap().password_hash, "hash-1");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_puts_admit_one() {
        let store = InMemoryUserStore::new();
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.put(Credential::new("alice", format!("hash-{i}"))).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
