//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductView};
use crate::repository::ProductRepository;

/// Product service providing the CRUD operations.
///
/// Input is validated at the HTTP boundary; the service normalizes prices and
/// turns missing rows into [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every stored product, ascending by id
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<ProductView>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductView::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<ProductView> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductView::from)
            .ok_or(ProductError::NotFound(id))
    }

    /// Store a new product. Any `id` in the input is ignored.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductView) -> ProductResult<ProductView> {
        let product = Product::from_view(input)?;
        let saved = self.repository.save(product).await?;
        Ok(saved.into())
    }

    /// Replace every mutable field of an existing product.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: ProductView) -> ProductResult<ProductView> {
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        existing.apply_update(input)?;
        let saved = self.repository.save(existing).await?;
        Ok(saved.into())
    }

    /// Returns `false` when no product has this id.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }

        self.repository.delete_by_id(id).await?;
        Ok(true)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn view(price: &str) -> ProductView {
        ProductView {
            id: None,
            name: "Smartphone".to_string(),
            description: "128GB".to_string(),
            price: Some(dec(price)),
            quantity: Some(4),
            category: "Eletrônicos".to_string(),
        }
    }

    fn stored(id: i64) -> Product {
        Product {
            id: Some(id),
            name: "Antigo".to_string(),
            description: "desc".to_string(),
            price: dec("10.00"),
            quantity: 1,
            category: "Geral".to_string(),
        }
    }

    fn echo_save(mock: &mut MockProductRepository, assigned: i64) {
        mock.expect_save().times(1).returning(move |mut p| {
            p.id.get_or_insert(assigned);
            Ok(p)
        });
    }

    #[tokio::test]
    async fn test_list_products_maps_to_views() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_all()
            .returning(|| Ok(vec![stored(1), stored(2)]));

        let service = ProductService::new(mock);
        let views = service.list_products().await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[1].id, Some(2));
        assert_eq!(views[0].price, Some(dec("10.00")));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock);
        let err = service.get_product(42).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(42)));
        assert_eq!(err.to_string(), "Produto não encontrado com id: 42");
    }

    #[tokio::test]
    async fn test_create_rounds_price_to_cents() {
        let mut mock = MockProductRepository::new();
        echo_save(&mut mock, 1);

        let service = ProductService::new(mock);
        let created = service.create_product(view("329.987")).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.price.unwrap().to_string(), "329.99");
    }

    #[tokio::test]
    async fn test_create_rounds_price_ties_to_even() {
        let mut mock = MockProductRepository::new();
        echo_save(&mut mock, 1);

        let service = ProductService::new(mock);
        let created = service.create_product(view("329.985")).await.unwrap();

        assert_eq!(created.price.unwrap().to_string(), "329.98");
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let mut mock = MockProductRepository::new();
        mock.expect_save()
            .withf(|p| p.id.is_none())
            .times(1)
            .returning(|mut p| {
                p.id = Some(5);
                Ok(p)
            });

        let service = ProductService::new(mock);
        let mut input = view("1.00");
        input.id = Some(999);

        assert_eq!(service.create_product(input).await.unwrap().id, Some(5));
    }

    #[tokio::test]
    async fn test_create_defaults_missing_quantity() {
        let mut mock = MockProductRepository::new();
        mock.expect_save()
            .withf(|p| p.quantity == 0)
            .returning(|mut p| {
                p.id = Some(1);
                Ok(p)
            });

        let service = ProductService::new(mock);
        let mut input = view("1.00");
        input.quantity = None;

        assert_eq!(service.create_product(input).await.unwrap().quantity, Some(0));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(stored(id))));
        mock.expect_save()
            .withf(|p| p.id == Some(3) && p.name == "Smartphone" && p.category == "Eletrônicos")
            .times(1)
            .returning(Ok);

        let service = ProductService::new(mock);
        let mut input = view("329.985");
        input.id = Some(100);
        let updated = service.update_product(3, input).await.unwrap();

        assert_eq!(updated.id, Some(3));
        assert_eq!(updated.price.unwrap().to_string(), "329.98");
        assert_eq!(updated.quantity, Some(4));
    }

    #[tokio::test]
    async fn test_update_missing_product_never_saves() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id().returning(|_| Ok(None));
        mock.expect_save().never();

        let service = ProductService::new(mock);
        let result = service.update_product(8, view("1.00")).await;

        assert!(matches!(result, Err(ProductError::NotFound(8))));
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let mut mock = MockProductRepository::new();
        mock.expect_exists_by_id().with(eq(2)).returning(|_| Ok(true));
        mock.expect_delete_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        let service = ProductService::new(mock);
        assert!(service.delete_product(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_false() {
        let mut mock = MockProductRepository::new();
        mock.expect_exists_by_id().returning(|_| Ok(false));
        mock.expect_delete_by_id().never();

        let service = ProductService::new(mock);
        assert!(!service.delete_product(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_all()
            .returning(|| Err(ProductError::Database("pool timed out".to_string())));

        let service = ProductService::new(mock);
        assert!(matches!(
            service.list_products().await,
            Err(ProductError::Database(_))
        ));
    }
}
