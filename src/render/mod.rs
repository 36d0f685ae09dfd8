//! Catalog page rendering.
//!
//! The page is a single HTML document: inline styles, a claim script, and one
//! card per product. All product text goes through the template engine's
//! HTML escaping, so markup-significant characters in the catalog file cannot
//! corrupt or inject into the page.

use askama::Template;

use crate::models::Product;

/// One product card, with the field fallbacks already applied.
struct ProductCard {
    name: String,
    image: String,
    model: String,
    sku: String,
    /// Serial submitted by the claim button (the `Model Number` column).
    serial: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            image: product.image().to_string(),
            model: product.model().to_string(),
            sku: product.sku().to_string(),
            serial: product.model_number().to_string(),
        }
    }
}

/// The full catalog page.
#[derive(Template)]
#[template(path = "catalog.html")]
struct CatalogPage {
    products: Vec<ProductCard>,
}

/// Render the catalog page for a sequence of products.
pub fn catalog_page(products: &[Product]) -> Result<String, askama::Error> {
    let page = CatalogPage {
        products: products.iter().map(ProductCard::from).collect(),
    };
    page.render()
}
