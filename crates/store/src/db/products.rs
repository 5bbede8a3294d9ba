//! Product repository.
//!
//! Images are read and written as raw `BYTEA`; base64 only happens at the
//! HTTP boundary through the core `ProductImage` type. Every write is followed
//! by a separate read so callers always see what the table holds. The pairs
//! are not wrapped in a transaction: a concurrent writer can win in between.

use rust_decimal::Decimal;
use sqlx::PgPool;

use catalog_core::{Price, Product, ProductDraft, ProductId, ProductImage};

use super::RepositoryError;

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: Decimal,
    description: String,
    category: String,
    image: Option<Vec<u8>>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            price: Price::new(row.price),
            description: row.description,
            category: row.category,
            image: row.image.map(ProductImage::from_bytes),
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every product in primary-key order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, description, category, image
            FROM catalog.products
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, description, category, image
            FROM catalog.products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Whether a product with this ID exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT id FROM catalog.products WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(found.is_some())
    }

    /// Insert a product and read it back.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails, or
    /// `RepositoryError::NotFound` if the row vanished before the read-back.
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let id: ProductId = sqlx::query_scalar(
            r"
            INSERT INTO catalog.products (name, price, description, category, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(&draft.description)
        .bind(&draft.category)
        .bind(draft.image.bytes())
        .fetch_one(self.pool)
        .await?;

        self.get(id).await?.ok_or(RepositoryError::NotFound)
    }

    /// Overwrite a product's scalar fields and read it back.
    ///
    /// Description and category are replaced even when blank. The stored
    /// image is only replaced when the draft carries decoded bytes.
    ///
    /// Returns `None` if no row has this ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Option<Product>, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE catalog.products
            SET name = $1,
                price = $2,
                description = $3,
                category = $4,
                image = COALESCE($5, image)
            WHERE id = $6
            ",
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(&draft.description)
        .bind(&draft.category)
        .bind(draft.image.bytes())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(id).await
    }

    /// Hard-delete a product.
    ///
    /// Returns `false` if no row had this ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM catalog.products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
