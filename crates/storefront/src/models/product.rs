//! Product domain types.
//!
//! These mirror the catalog tables (`product`, `product_variant`). The
//! storefront treats them as read-only: they are fetched per render and never
//! mutated here.

use chrono::{DateTime, Utc};

use bewear_core::{Price, ProductId, VariantId};

/// A catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name (e.g., "Tênis Urban Flow").
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Long-form description.
    pub description: String,
    /// When the product was added to the catalog.
    pub created_at: DateTime<Utc>,
}

/// A product variant (size/color option).
#[derive(Debug, Clone)]
pub struct ProductVariant {
    /// Unique variant ID.
    pub id: VariantId,
    /// Product this variant belongs to.
    pub product_id: ProductId,
    /// Variant display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Color label (e.g., "Preto").
    pub color: String,
    /// Price in centavos.
    pub price_in_cents: Price,
    /// Variant image URL.
    pub image_url: String,
    /// When the variant was added.
    pub created_at: DateTime<Utc>,
}

/// A product joined with its variants.
///
/// The variant list may be empty but is never absent.
#[derive(Debug, Clone)]
pub struct ProductWithVariants {
    /// The product record.
    pub product: Product,
    /// Variants in catalog order.
    pub variants: Vec<ProductVariant>,
}

impl ProductWithVariants {
    /// The variant shown on product cards (first in catalog order).
    #[must_use]
    pub fn featured_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }
}
