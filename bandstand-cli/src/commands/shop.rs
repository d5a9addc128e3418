//! One in-memory shopping session.
//!
//! Adds the requested products in order, plays the toast notification for
//! each, optionally drops a line, then prints the final cart. Nothing is
//! persisted; the cart dies with the process.

use anyhow::Result;
use bandstand_core::cart::{self, CartItem};
use bandstand_core::site::{Site, SiteView};
use owo_colors::OwoColorize;

use super::create_toast;
use crate::render::Render;

/// Prints cart changes as they happen. The toast timing runs in the
/// command loop so the view itself stays synchronous.
struct TerminalView;

impl SiteView for TerminalView {
    fn cart_changed(&mut self, _lines: &[CartItem], count: usize) {
        let noun = if count == 1 { "item" } else { "items" };
        println!("{}", format!("  cart: {} {}", count, noun).dimmed());
    }
}

pub async fn run(refs: Vec<String>, drop: Option<usize>, fast: bool) -> Result<()> {
    let mut site = Site::new();
    let mut view = TerminalView;

    for product_ref in &refs {
        let item = site.add_item(product_ref, &mut view)?;
        show_toast(&item, fast).await;
    }

    if let Some(line_number) = drop {
        let Some(line) = line_number
            .checked_sub(1)
            .and_then(|i| site.cart().lines().get(i))
        else {
            anyhow::bail!(
                "No line {} in the cart ({} lines)",
                line_number,
                site.cart().item_count()
            );
        };
        let id = line.id;
        println!("Removing {}", line.name);
        site.remove_item(id, &mut view);
    }

    println!();
    if site.cart().is_empty() {
        println!("{}", "Cart is empty".dimmed());
    } else {
        for line in site.cart().lines() {
            println!("{}", line.render());
        }
    }

    Ok(())
}

/// The "added to cart" toast: slides in, sits for three seconds, slides
/// back out. `fast` collapses it to a plain line for scripting.
async fn show_toast(item: &CartItem, fast: bool) {
    let message = format!("Added {} to cart", item.name).green().to_string();

    if fast {
        println!("{}", message);
        return;
    }

    tokio::time::sleep(cart::NOTIFICATION_TRANSITION).await;
    let toast = create_toast(message);
    tokio::time::sleep(cart::NOTIFICATION_VISIBLE).await;
    toast.finish_and_clear();
    tokio::time::sleep(cart::NOTIFICATION_TRANSITION).await;
}
