//! Product repository for catalog reads.
//!
//! The home page needs every product together with its variants, so the
//! repository issues a single `LEFT JOIN` and regroups the flat rows in
//! memory. Variant-less products survive the join as rows with NULL variant
//! columns.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use bewear_core::{Price, ProductId, VariantId};

use super::RepositoryError;
use crate::models::product::{Product, ProductVariant, ProductWithVariants};

/// One row of the product/variant join.
///
/// Variant columns are NULL for products without variants.
#[derive(Debug, sqlx::FromRow)]
struct CatalogRow {
    product_id: Uuid,
    product_name: String,
    product_slug: String,
    product_description: String,
    product_created_at: DateTime<Utc>,
    variant_id: Option<Uuid>,
    variant_name: Option<String>,
    variant_slug: Option<String>,
    variant_color: Option<String>,
    variant_price_in_cents: Option<i64>,
    variant_image_url: Option<String>,
    variant_created_at: Option<DateTime<Utc>>,
}

/// Repository for catalog database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full catalog: every product joined with its variants.
    ///
    /// Products are ordered by insertion time; variants keep a stable order
    /// within each product. No filter or pagination is applied.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a joined row has a partially
    /// NULL variant.
    pub async fn find_all_with_variants(
        &self,
    ) -> Result<Vec<ProductWithVariants>, RepositoryError> {
        let rows: Vec<CatalogRow> = sqlx::query_as(
            r"
            SELECT p.id          AS product_id,
                   p.name        AS product_name,
                   p.slug        AS product_slug,
                   p.description AS product_description,
                   p.created_at  AS product_created_at,
                   v.id             AS variant_id,
                   v.name           AS variant_name,
                   v.slug           AS variant_slug,
                   v.color          AS variant_color,
                   v.price_in_cents AS variant_price_in_cents,
                   v.image_url      AS variant_image_url,
                   v.created_at     AS variant_created_at
            FROM product p
            LEFT JOIN product_variant v ON v.product_id = p.id
            ORDER BY p.created_at, p.id, v.created_at, v.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        group_catalog_rows(rows)
    }
}

/// Regroup the flat join rows into products with variant lists.
///
/// Rows arrive ordered by product, so a product's rows are contiguous.
fn group_catalog_rows(rows: Vec<CatalogRow>) -> Result<Vec<ProductWithVariants>, RepositoryError> {
    let mut catalog: Vec<ProductWithVariants> = Vec::new();

    for row in rows {
        let product_id = ProductId::new(row.product_id);

        if catalog.last().map(|entry| entry.product.id) != Some(product_id) {
            catalog.push(ProductWithVariants {
                product: Product {
                    id: product_id,
                    name: row.product_name,
                    slug: row.product_slug,
                    description: row.product_description,
                    created_at: row.product_created_at,
                },
                variants: Vec::new(),
            });
        }

        let Some(variant_id) = row.variant_id else {
            // Product without variants: the join produced a NULL variant row
            continue;
        };

        let variant = ProductVariant {
            id: VariantId::new(variant_id),
            product_id,
            name: required(row.variant_name, "variant_name")?,
            slug: required(row.variant_slug, "variant_slug")?,
            color: required(row.variant_color, "variant_color")?,
            price_in_cents: Price::from_cents(required(
                row.variant_price_in_cents,
                "variant_price_in_cents",
            )?),
            image_url: required(row.variant_image_url, "variant_image_url")?,
            created_at: required(row.variant_created_at, "variant_created_at")?,
        };

        if let Some(entry) = catalog.last_mut() {
            entry.variants.push(variant);
        }
    }

    Ok(catalog)
}

/// A variant column that must be present once `variant_id` is.
fn required<T>(value: Option<T>, column: &str) -> Result<T, RepositoryError> {
    value.ok_or_else(|| {
        RepositoryError::DataCorruption(format!("NULL {column} on a joined variant row"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product_row(product_id: Uuid, name: &str) -> CatalogRow {
        CatalogRow {
            product_id,
            product_name: name.to_string(),
            product_slug: name.to_lowercase().replace(' ', "-"),
            product_description: format!("{name} description"),
            product_created_at: Utc::now(),
            variant_id: None,
            variant_name: None,
            variant_slug: None,
            variant_color: None,
            variant_price_in_cents: None,
            variant_image_url: None,
            variant_created_at: None,
        }
    }

    fn variant_row(product_id: Uuid, name: &str, variant: &str, cents: i64) -> CatalogRow {
        CatalogRow {
            variant_id: Some(Uuid::new_v4()),
            variant_name: Some(variant.to_string()),
            variant_slug: Some(variant.to_lowercase().replace(' ', "-")),
            variant_color: Some(variant.to_string()),
            variant_price_in_cents: Some(cents),
            variant_image_url: Some(format!("https://cdn.example.com/{variant}.png")),
            variant_created_at: Some(Utc::now()),
            ..product_row(product_id, name)
        }
    }

    #[test]
    fn test_group_empty() {
        let catalog = group_catalog_rows(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_group_product_without_variants() {
        let id = Uuid::new_v4();
        let catalog = group_catalog_rows(vec![product_row(id, "Mochila Urbana")]).unwrap();

        assert_eq!(catalog.len(), 1);
        let entry = catalog.first().unwrap();
        assert_eq!(entry.product.name, "Mochila Urbana");
        assert!(entry.variants.is_empty());
        assert!(entry.featured_variant().is_none());
    }

    #[test]
    fn test_group_preserves_row_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let rows = vec![
            variant_row(first, "Tênis Urban Flow", "Preto", 19_990),
            variant_row(first, "Tênis Urban Flow", "Branco", 19_990),
            variant_row(second, "Jaqueta Windbreak", "Verde", 34_990),
        ];

        let catalog = group_catalog_rows(rows).unwrap();

        assert_eq!(catalog.len(), 2);
        let first_entry = catalog.first().unwrap();
        assert_eq!(first_entry.product.name, "Tênis Urban Flow");
        assert_eq!(first_entry.variants.len(), 2);
        assert_eq!(first_entry.variants.first().unwrap().color, "Preto");
        assert_eq!(
            first_entry.featured_variant().unwrap().price_in_cents,
            Price::from_cents(19_990)
        );

        let second_entry = catalog.get(1).unwrap();
        assert_eq!(second_entry.product.name, "Jaqueta Windbreak");
        assert_eq!(second_entry.variants.len(), 1);
    }

    #[test]
    fn test_group_mixed_with_and_without_variants() {
        let bare = Uuid::new_v4();
        let rich = Uuid::new_v4();
        let rows = vec![
            product_row(bare, "Meia Lisa"),
            variant_row(rich, "Bermuda Flex", "Azul", 12_990),
        ];

        let catalog = group_catalog_rows(rows).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.first().unwrap().variants.is_empty());
        assert_eq!(catalog.get(1).unwrap().variants.len(), 1);
    }

    #[test]
    fn test_group_rejects_partial_variant_row() {
        let id = Uuid::new_v4();
        let mut row = variant_row(id, "Tênis Urban Flow", "Preto", 19_990);
        row.variant_price_in_cents = None;

        let err = group_catalog_rows(vec![row]).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
