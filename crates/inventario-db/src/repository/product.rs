//! # Product Repository
//!
//! Database operations for products. Every method is one SQL statement.
//!
//! ## Column Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products (SQLite)              Product (Rust)                          │
//! │  ─────────────────              ──────────────                          │
//! │  id           INTEGER    ──►    id: i64                                 │
//! │  nombre       TEXT       ──►    name: String                            │
//! │  descripcion  TEXT NULL  ──►    description: Option<String>             │
//! │  cantidad     INTEGER    ──►    quantity: i64                           │
//! │  precio       REAL       ──►    price: f64                              │
//! │  categoria    TEXT NULL  ──►    category: Option<String>                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries alias the stored column names to the struct field names so
//! `Product` can be decoded with its `FromRow` derive.
//!
//! ## Substring Search
//! `instr(column, ?)` compares bytes (BINARY collation): matching is
//! case-sensitive and `%`/`_` have no special meaning. `instr(x, '')` is 1,
//! so an empty needle matches every row.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventario_core::{NewProduct, Product, ProductFilter};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.insert(&new_product).await?;
/// let product = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns the id storage assigned to it.
    ///
    /// No duplicate detection: several products may share a name.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (nombre, descripcion, cantidad, precio, categoria)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(&product.category)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Lists every product, ordered by ascending id.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                nombre AS name,
                descripcion AS description,
                cantidad AS quantity,
                precio AS price,
                categoria AS category
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                nombre AS name,
                descripcion AS description,
                cantidad AS quantity,
                precio AS price,
                categoria AS category
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Finds products whose name or category contains a substring.
    ///
    /// Results are ordered by ascending id. A missing category is searched
    /// as the empty string.
    pub async fn search(&self, filter: &ProductFilter) -> DbResult<Vec<Product>> {
        debug!(?filter, "Searching products");

        let sql = match filter {
            ProductFilter::NameContains(_) => {
                r#"
                SELECT
                    id,
                    nombre AS name,
                    descripcion AS description,
                    cantidad AS quantity,
                    precio AS price,
                    categoria AS category
                FROM products
                WHERE instr(nombre, ?1) > 0
                ORDER BY id
                "#
            }
            ProductFilter::CategoryContains(_) => {
                r#"
                SELECT
                    id,
                    nombre AS name,
                    descripcion AS description,
                    cantidad AS quantity,
                    precio AS price,
                    categoria AS category
                FROM products
                WHERE instr(COALESCE(categoria, ''), ?1) > 0
                ORDER BY id
                "#
            }
        };

        let products = sqlx::query_as::<_, Product>(sql)
            .bind(filter.needle())
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Overwrites all mutable fields of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - A row was updated
    /// * `Err(DbError::NotFound)` - No product has `product.id`
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                nombre = ?1,
                descripcion = ?2,
                cantidad = ?3,
                precio = ?4,
                categoria = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(&product.category)
        .bind(product.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Producto", product.id));
        }

        Ok(())
    }

    /// Permanently deletes a product.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// ## Returns
    /// `true` when a row was removed.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists products with `quantity <= threshold`, lowest stock first.
    ///
    /// Ties on quantity are ordered by id.
    pub async fn low_stock(&self, threshold: i64) -> DbResult<Vec<Product>> {
        debug!(threshold, "Building low-stock report");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                nombre AS name,
                descripcion AS description,
                cantidad AS quantity,
                precio AS price,
                categoria AS category
            FROM products
            WHERE cantidad <= ?1
            ORDER BY cantidad, id
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use inventario_core::ProductPatch;

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory())
            .await
            .unwrap()
            .products()
    }

    fn new_product(name: &str, quantity: i64, category: Option<&str>) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            quantity,
            price: 1.0,
            category: category.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repo().await;

        let first = repo.insert(&new_product("A", 1, None)).await.unwrap();
        let second = repo.insert(&new_product("B", 1, None)).await.unwrap();
        let third = repo.insert(&new_product("A", 1, None)).await.unwrap();

        assert_eq!(first, 1);
        assert!(second > first);
        assert!(third > second);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;

        let first = repo.insert(&new_product("A", 1, None)).await.unwrap();
        let second = repo.insert(&new_product("B", 1, None)).await.unwrap();
        assert!(repo.delete(second).await.unwrap());

        let third = repo.insert(&new_product("C", 1, None)).await.unwrap();
        assert!(third > second);
        assert!(third > first);
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trip() {
        let repo = repo().await;
        let new = NewProduct {
            name: "Widget".to_string(),
            description: Some("Llave de 10mm".to_string()),
            quantity: 5,
            price: 9.99,
            category: Some("Tools".to_string()),
        };

        let id = repo.insert(&new).await.unwrap();
        let stored = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.name, new.name);
        assert_eq!(stored.description, new.description);
        assert_eq!(stored.quantity, new.quantity);
        assert_eq!(stored.price, new.price);
        assert_eq!(stored.category, new.category);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = repo().await;
        assert!(repo.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_orders_by_id() {
        let repo = repo().await;
        assert!(repo.list_all().await.unwrap().is_empty());

        repo.insert(&new_product("Zeta", 3, None)).await.unwrap();
        repo.insert(&new_product("Alfa", 1, None)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alfa"]);
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn test_update_only_price() {
        let repo = repo().await;
        let id = repo
            .insert(&NewProduct {
                name: "Widget".to_string(),
                description: Some("Azul".to_string()),
                quantity: 5,
                price: 9.99,
                category: Some("Tools".to_string()),
            })
            .await
            .unwrap();

        let current = repo.get_by_id(id).await.unwrap().unwrap();
        let patch = ProductPatch {
            price: Some(12.5),
            ..Default::default()
        };
        repo.update(&patch.apply(&current)).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.description.as_deref(), Some("Azul"));
        assert_eq!(stored.quantity, 5);
        assert_eq!(stored.price, 12.5);
        assert_eq!(stored.category.as_deref(), Some("Tools"));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;
        let ghost = Product {
            id: 42,
            name: "Ghost".to_string(),
            description: None,
            quantity: 1,
            price: 1.0,
            category: None,
        };

        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let id = repo.insert(&new_product("Widget", 1, None)).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.get_by_id(id).await.unwrap().is_none());

        // Second delete finds nothing, which is not an error
        assert!(!repo.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_search_by_name() {
        let repo = repo().await;
        repo.insert(&new_product("Tornillo 3mm", 1, None)).await.unwrap();
        repo.insert(&new_product("Tuerca", 1, None)).await.unwrap();
        repo.insert(&new_product("tornillo largo", 1, None)).await.unwrap();

        let found = repo
            .search(&ProductFilter::NameContains("Tornillo".into()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Tornillo 3mm");

        let found = repo
            .search(&ProductFilter::NameContains("ornillo".into()))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);

        let found = repo
            .search(&ProductFilter::NameContains("Clavo".into()))
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_needle_matches_all() {
        let repo = repo().await;
        repo.insert(&new_product("A", 1, Some("Tools"))).await.unwrap();
        repo.insert(&new_product("B", 1, None)).await.unwrap();

        let by_name = repo
            .search(&ProductFilter::NameContains(String::new()))
            .await
            .unwrap();
        assert_eq!(by_name.len(), 2);

        let by_category = repo
            .search(&ProductFilter::CategoryContains(String::new()))
            .await
            .unwrap();
        assert_eq!(by_category.len(), 2);
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let repo = repo().await;
        repo.insert(&new_product("100% algodón", 1, None)).await.unwrap();
        repo.insert(&new_product("Lana", 1, None)).await.unwrap();

        let found = repo
            .search(&ProductFilter::NameContains("%".into()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "100% algodón");
    }

    #[tokio::test]
    async fn test_search_by_category() {
        let repo = repo().await;
        repo.insert(&new_product("Martillo", 1, Some("Herramientas"))).await.unwrap();
        repo.insert(&new_product("Pala", 1, Some("Jardín"))).await.unwrap();
        repo.insert(&new_product("Sin categoría", 1, None)).await.unwrap();

        let found = repo
            .search(&ProductFilter::CategoryContains("Herra".into()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Martillo");
    }

    #[tokio::test]
    async fn test_low_stock_subset_sorted_by_quantity() {
        let repo = repo().await;
        for (name, quantity) in [("A", 7), ("B", 2), ("C", 10), ("D", 5), ("E", 2)] {
            repo.insert(&new_product(name, quantity, None)).await.unwrap();
        }

        let low = repo.low_stock(5).await.unwrap();
        let names: Vec<_> = low.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "E", "D"]);
        assert!(low.iter().all(|p| p.quantity <= 5));

        assert!(repo.low_stock(1).await.unwrap().is_empty());
        assert_eq!(repo.low_stock(10).await.unwrap().len(), 5);
    }
}
