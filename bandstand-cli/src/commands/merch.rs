//! The merch catalog listing with category filtering.

use anyhow::Result;
use bandstand_core::catalog::{self, Category, CategoryFilter};

use crate::render::Render;

pub fn run(category: Option<&str>, json: bool) -> Result<()> {
    let filter = match category {
        Some(name) => {
            let category: Category = name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            CategoryFilter::Only(category)
        }
        None => CategoryFilter::All,
    };

    let products = catalog::products();
    let shown = catalog::by_category(&products, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    for product in shown {
        println!("{}", product.render());
    }
    Ok(())
}
