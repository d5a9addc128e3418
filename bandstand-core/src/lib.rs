//! Core state for the bandstand tour site.
//!
//! This crate holds everything on the page that actually carries state:
//! - `calendar` for month navigation and the tour-date grid
//! - `cart` for the in-memory merch cart
//! - `site` for the controller that owns both and notifies the view
//! - `booking` and `player` for the simulated flows
//!
//! Rendering is someone else's job: the controller pushes fresh state
//! through the `SiteView` trait and never touches a display surface.

pub mod booking;
pub mod calendar;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod player;
pub mod site;
pub mod tour;

pub use error::{BandstandError, BandstandResult};
pub use site::{Site, SiteView};
