pub mod book;
pub mod calendar;
pub mod merch;
pub mod play;
pub mod shop;
pub mod tour;

pub use crate::utils::tui::{create_spinner, create_toast};
