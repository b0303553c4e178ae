use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Implementations: [`InMemoryProductRepository`] and
/// [`PgProductRepository`](crate::postgres::PgProductRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ascending by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert when `product.id` is `None`, otherwise overwrite the row with that id.
    /// Returns the stored product with its id set.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool>;

    /// Removing an id that does not exist is a no-op.
    async fn delete_by_id(&self, id: i64) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = match product.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id += 1;
                store.last_id
            }
        };
        product.id = Some(id);
        store.rows.insert(id, product.clone());

        tracing::info!(product_id = id, "Saved product");
        Ok(product)
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        let mut store = self.store.write().await;
        if store.rows.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            description: format!("{name} description"),
            price: Decimal::new(1050, 2),
            quantity: 3,
            category: "Geral".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(product("a")).await.unwrap();
        let second = repo.save(product("b")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = InMemoryProductRepository::new();
        let mut saved = repo.save(product("a")).await.unwrap();

        saved.name = "renamed".to_string();
        repo.save(saved.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "renamed");
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["c", "a", "b"] {
            repo.save(product(name)).await.unwrap();
        }

        let names: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_find_by_id_and_exists() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(product("a")).await.unwrap();
        let id = saved.id.unwrap();

        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(saved));
        assert!(repo.exists_by_id(id).await.unwrap());
        assert!(repo.find_by_id(999).await.unwrap().is_none());
        assert!(!repo.exists_by_id(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryProductRepository::new();
        let id = repo.save(product("a")).await.unwrap().id.unwrap();

        repo.delete_by_id(id).await.unwrap();
        assert!(!repo.exists_by_id(id).await.unwrap());

        // missing id is a no-op
        repo.delete_by_id(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let first = repo.save(product("a")).await.unwrap().id.unwrap();
        repo.delete_by_id(first).await.unwrap();

        let second = repo.save(product("b")).await.unwrap().id.unwrap();
        assert!(second > first);
    }
}
