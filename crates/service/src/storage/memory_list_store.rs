use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Generic in-memory ordered list store.
///
/// Keeps a `Vec<T>` in insertion order behind an async `RwLock`. Readers share
/// the lock; every mutation holds the write lock for its whole duration, so a
/// lookup-then-mutate sequence inside `update_list` never interleaves with
/// another operation.
#[derive(Clone)]
pub struct MemoryListStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryListStore<T> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T> MemoryListStore<T>
where
    T: Clone + Send + Sync,
{
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `items`, kept in the given order.
    pub fn with_items(items: Vec<T>) -> Self {
        Self { inner: Arc::new(RwLock::new(items)) }
    }

    /// Snapshot of all items in order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// First item (in insertion order) matching the predicate.
    pub async fn find<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let items = self.inner.read().await;
        items.iter().find(|&it| pred(it)).cloned()
    }

    /// Append one item at the end.
    pub async fn push(&self, item: T) {
        self.inner.write().await.push(item);
    }

    /// Append every item unchanged; returns how many were added.
    pub async fn extend<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = self.inner.write().await;
        let before = list.len();
        list.extend(items);
        list.len() - before
    }

    /// Apply a mutation under the write lock.
    ///
    /// The closure should check its preconditions before touching the list so
    /// that an `Err` leaves the contents unchanged.
    pub async fn update_list<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ServiceError>,
    {
        let mut list = self.inner.write().await;
        f(&mut list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_list_store_keeps_insertion_order() -> Result<(), anyhow::Error> {
        let store = MemoryListStore::<u32>::new();

        // initially empty
        assert!(store.is_empty().await);

        store.push(3).await;
        assert_eq!(store.extend(vec![1, 2]).await, 2);
        assert_eq!(store.list().await, vec![3, 1, 2]);

        // find returns the first match
        store.push(1).await;
        assert_eq!(store.find(|v| *v == 1).await, Some(1));
        assert_eq!(store.find(|v| *v == 9).await, None);

        // update_list
        store
            .update_list(|items| {
                items.retain(|v| *v != 1);
                Ok(())
            })
            .await?;
        assert_eq!(store.list().await, vec![3, 2]);
        Ok(())
    }

    #[tokio::test]
    async fn failed_update_leaves_list_untouched() {
        let store = MemoryListStore::with_items(vec!["a".to_string(), "b".to_string()]);
        let res: Result<(), _> = store
            .update_list(|items| {
                if !items.iter().any(|s| s == "z") {
                    return Err(ServiceError::NotFound("z".into()));
                }
                items.clear();
                Ok(())
            })
            .await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_list() {
        let store = MemoryListStore::<u8>::new();
        let handle = store.clone();
        handle.push(7).await;
        assert_eq!(store.list().await, vec![7]);
    }
}
