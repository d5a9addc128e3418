//! The page controller: owns all state and notifies the presentation layer.
//!
//! `Site` applies state transitions and pushes fresh state through
//! `SiteView`; whatever sits on the other side of the trait does the
//! drawing. No global object, no display handles in here.

use crate::calendar::{CalendarState, DayCell, MonthStep};
use crate::cart::{CartItem, CartState, ItemId};
use crate::catalog::{self, Product};
use crate::error::{BandstandError, BandstandResult};
use crate::tour::{self, TourDate};

/// Callbacks the presentation layer receives when state changes.
///
/// Notifications are synchronous and fire in the order the triggering
/// requests arrive. Every callback defaults to doing nothing, so a view
/// with no surface for some piece of state simply leaves it unimplemented.
pub trait SiteView {
    /// The displayed month changed; `grid` is the fresh 42-cell view.
    fn calendar_changed(&mut self, grid: &[DayCell]) {
        let _ = grid;
    }

    /// The cart changed; `count` is the number of lines.
    fn cart_changed(&mut self, lines: &[CartItem], count: usize) {
        let _ = (lines, count);
    }

    /// A line was just added; drives the toast notification.
    fn item_added(&mut self, item: &CartItem) {
        let _ = item;
    }
}

/// All page state in one place, handed to the presentation layer instead
/// of hanging off a global.
pub struct Site {
    calendar: CalendarState,
    cart: CartState,
    products: Vec<Product>,
    tour_dates: Vec<TourDate>,
}

impl Site {
    /// A fresh session: calendar at the current month, empty cart.
    pub fn new() -> Site {
        Site::with_calendar(CalendarState::now())
    }

    /// A fresh session with the calendar at an explicit position.
    pub fn with_calendar(calendar: CalendarState) -> Site {
        Site {
            calendar,
            cart: CartState::new(),
            products: catalog::products(),
            tour_dates: tour::dates(),
        }
    }

    pub fn calendar(&self) -> CalendarState {
        self.calendar
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn tour_dates(&self) -> &[TourDate] {
        &self.tour_dates
    }

    /// Current grid for the displayed month.
    pub fn grid(&self) -> Vec<DayCell> {
        self.calendar.grid(&self.tour_dates)
    }

    /// Navigate one month and re-render the calendar.
    pub fn advance_month(&mut self, step: MonthStep, view: &mut dyn SiteView) {
        self.calendar = self.calendar.advance_month(step);
        view.calendar_changed(&self.grid());
    }

    /// Add the referenced product to the cart.
    ///
    /// The cart re-render fires before the added-item notification, in the
    /// order the effects play on the page.
    pub fn add_item(
        &mut self,
        product_ref: &str,
        view: &mut dyn SiteView,
    ) -> BandstandResult<CartItem> {
        let product = catalog::find(&self.products, product_ref)
            .ok_or_else(|| BandstandError::UnknownProduct(product_ref.to_string()))?
            .clone();

        let item = self
            .cart
            .add_item(&product.name, &product.price, &product.image);
        view.cart_changed(self.cart.lines(), self.cart.item_count());
        view.item_added(&item);
        Ok(item)
    }

    /// Remove a cart line by id.
    ///
    /// An unknown id leaves the cart untouched but still re-renders it,
    /// exactly as the page does.
    pub fn remove_item(&mut self, id: ItemId, view: &mut dyn SiteView) {
        self.cart.remove_item(id);
        view.cart_changed(self.cart.lines(), self.cart.item_count());
    }
}

impl Default for Site {
    fn default() -> Site {
        Site::new()
    }
}
