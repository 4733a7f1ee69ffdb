//! Catalog products and the blank sentinel.

use serde::{Deserialize, Serialize};

/// Slug reserved for the synthetic "empty starter" catalog entry.
pub const BLANK_SLUG: &str = "blank";

/// A single entry of the remote product catalog.
///
/// Immutable once fetched; one catalog fetch is one lifetime. The wire
/// format uses camelCase keys (`productId`, `productTitle`, `productSlug`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// `None` marks a free product (no purchase attached).
    #[serde(rename = "productId")]
    pub id: Option<u64>,
    /// Human-readable display title.
    #[serde(rename = "productTitle")]
    pub title: String,
    /// URL-safe unique name; also the key for archive downloads.
    #[serde(rename = "productSlug")]
    pub slug: String,
    /// Whether the authenticated user is entitled to this product.
    pub available: bool,
}

/// How a product is acquired. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// The blank sentinel: a local directory plus a fresh manifest.
    Blank,
    /// Free starter: cloned from its starter repository.
    Free,
    /// Paid product: authenticated archive download.
    Paid,
}

impl Product {
    /// The synthetic "no specific product" selection.
    pub fn blank() -> Self {
        Self {
            id: None,
            title: "Empty starter".into(),
            slug: BLANK_SLUG.into(),
            available: true,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.slug == BLANK_SLUG
    }

    pub fn kind(&self) -> ProductKind {
        if self.is_blank() {
            ProductKind::Blank
        } else if self.id.is_none() {
            ProductKind::Free
        } else {
            ProductKind::Paid
        }
    }
}

/// Order a catalog for presentation: available products first, then by
/// display title, case-insensitively.
pub fn sort_catalog(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| {
        b.available
            .cmp(&a.available)
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
    products
}

// ── tests ─────────────────────────────────────────────────────────────────────
