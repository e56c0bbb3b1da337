//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::products::ProductRepository;
use crate::error::Result;
use crate::filters;
use crate::models::product::ProductWithVariants;
use crate::state::AppState;

// =============================================================================
// Banner Configuration (Static content)
// =============================================================================

/// A static promotional banner.
#[derive(Clone)]
pub struct BannerView {
    pub image_path: String,
    pub alt: String,
}

/// The two banners framing the best-sellers section.
///
/// Pure static content; they carry no business logic.
fn banners() -> (BannerView, BannerView) {
    (
        BannerView {
            image_path: "/static/images/banner-01.png".to_string(),
            alt: "Leve uma vida com estilo".to_string(),
        },
        BannerView {
            image_path: "/static/images/banner-02.png".to_string(),
            alt: "Leve uma vida com estilo".to_string(),
        },
    )
}

// =============================================================================
// Product Views
// =============================================================================

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub name: String,
    /// Image of the featured (first) variant, if the product has variants.
    pub image_url: Option<String>,
    /// Formatted price of the featured variant (e.g., "R$ 199,90").
    pub price: Option<String>,
    /// Variant option labels, in catalog order.
    pub variant_names: Vec<String>,
}

impl From<&ProductWithVariants> for ProductCardView {
    fn from(entry: &ProductWithVariants) -> Self {
        let featured = entry.featured_variant();

        Self {
            name: entry.product.name.clone(),
            image_url: featured.map(|v| v.image_url.clone()),
            price: featured.map(|v| v.price_in_cents.to_string()),
            variant_names: entry.variants.iter().map(|v| v.name.clone()).collect(),
        }
    }
}

// =============================================================================
// Template and Handler
// =============================================================================

/// Section title for the product list.
const BEST_SELLERS_TITLE: &str = "Mais vendidos";

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Banner above the product section.
    pub top_banner: BannerView,
    /// Banner below the product section.
    pub bottom_banner: BannerView,
    /// Product list section title.
    pub title: &'static str,
    /// Full catalog, in store order.
    pub products: Vec<ProductCardView>,
}

impl HomeTemplate {
    /// Build the page from the catalog query result.
    fn from_catalog(catalog: &[ProductWithVariants]) -> Self {
        let (top_banner, bottom_banner) = banners();

        Self {
            top_banner,
            bottom_banner,
            title: BEST_SELLERS_TITLE,
            products: catalog.iter().map(ProductCardView::from).collect(),
        }
    }
}

/// Display the home page.
///
/// Issues one catalog query per render. A query failure is not handled here;
/// it propagates as `AppError` to the application error boundary.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let catalog = ProductRepository::new(state.pool())
        .find_all_with_variants()
        .await?;

    Ok(HomeTemplate::from_catalog(&catalog))
}
