//! The merch catalog.
//!
//! Products are static data, same as the tour schedule: the store page
//! shows them all, lets the visitor filter by category, and hands their
//! slug to the cart when an add-to-cart request comes in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product category used by the store filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apparel,
    Accessories,
    Media,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Apparel => write!(f, "apparel"),
            Category::Accessories => write!(f, "accessories"),
            Category::Media => write!(f, "media"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apparel" => Ok(Category::Apparel),
            "accessories" => Ok(Category::Accessories),
            "media" => Ok(Category::Media),
            other => Err(format!(
                "Unknown category '{}'. Expected apparel, accessories or media",
                other
            )),
        }
    }
}

/// Active store filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

/// One product card in the merch store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable reference used by add-to-cart requests.
    pub slug: String,
    pub name: String,
    /// Display price, e.g. "$25.00".
    pub price: String,
    pub image: String,
    pub category: Category,
}

/// The full catalog, in store display order.
pub fn products() -> Vec<Product> {
    [
        ("tour-tee", "Tour Tee", "$25.00", "tee.png", Category::Apparel),
        ("hoodie", "World Tour Hoodie", "$55.00", "hoodie.png", Category::Apparel),
        ("snapback", "Logo Snapback", "$30.00", "snapback.png", Category::Accessories),
        ("poster", "2025 Tour Poster", "$15.00", "poster.png", Category::Accessories),
        ("sticker-pack", "Sticker Pack", "$8.00", "stickers.png", Category::Accessories),
        ("vinyl", "Live Album Vinyl", "$35.00", "vinyl.png", Category::Media),
    ]
    .into_iter()
    .map(|(slug, name, price, image, category)| Product {
        slug: slug.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        image: image.to_string(),
        category,
    })
    .collect()
}

/// Look up a product by its slug.
pub fn find<'a>(products: &'a [Product], slug: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.slug == slug)
}

/// Products matching the active filter, preserving catalog order.
pub fn by_category(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => p.category == category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_slug() {
        let catalog = products();
        assert_eq!(find(&catalog, "tour-tee").unwrap().price, "$25.00");
        assert!(find(&catalog, "drumsticks").is_none());
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let catalog = products();
        let accessories = by_category(&catalog, CategoryFilter::Only(Category::Accessories));

        let slugs: Vec<&str> = accessories.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["snapback", "poster", "sticker-pack"]);

        assert_eq!(by_category(&catalog, CategoryFilter::All).len(), catalog.len());
    }

    #[test]
    fn category_parsing() {
        assert_eq!("Apparel".parse::<Category>(), Ok(Category::Apparel));
        assert_eq!("media".parse::<Category>(), Ok(Category::Media));
        assert!("vip-passes".parse::<Category>().is_err());
    }
}
