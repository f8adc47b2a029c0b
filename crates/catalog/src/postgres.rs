use async_trait::async_trait;
use common::{CustomerId, Money, ProductId};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::error::{CatalogError, Result};
use crate::product::Product;
use crate::store::ProductStore;

/// PostgreSQL-backed product store.
#[derive(Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Creates a new PostgreSQL product store.
    ///
    /// The pool is owned by the service bootstrap and handed in here;
    /// the store never opens connections on its own.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_product(row: PgRow) -> Result<Product> {
        Ok(Product {
            id: ProductId::new(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: Money::from_cents(row.try_get("price_cents")?),
            category: row.try_get("category")?,
            stock: row.try_get::<i32, _>("stock")? as u32,
            image_url: row.try_get("image_url")?,
            brand: row.try_get("brand")?,
            rating: row.try_get("rating")?,
            review_count: row.try_get::<i32, _>("review_count")? as u32,
            merchant_id: row
                .try_get::<Option<String>, _>("merchant_id")?
                .map(CustomerId::new),
            merchant_name: row.try_get("merchant_name")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price_cents, category, stock, image_url,
                   brand, rating, review_count, merchant_id, merchant_name,
                   created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_product).transpose()
    }

    async fn update_stock(&self, id: &ProductId, new_stock: u32) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(new_stock as i32)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(id.clone()));
        }

        Ok(())
    }

    async fn insert(&self, product: Product) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price_cents, category, stock,
                                  image_url, brand, rating, review_count,
                                  merchant_id, merchant_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(product.id.as_str())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.cents())
        .bind(&product.category)
        .bind(product.stock as i32)
        .bind(&product.image_url)
        .bind(&product.brand)
        .bind(product.rating)
        .bind(product.review_count as i32)
        .bind(product.merchant_id.as_ref().map(|m| m.as_str()))
        .bind(&product.merchant_name)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some("products_pkey")
            {
                return CatalogError::AlreadyExists(product.id.clone());
            }
            CatalogError::Database(e)
        })?;

        Ok(())
    }
}
