//! Read side of the store: what the page should render.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::catalog::{CatalogItem, CoinPackage, Rank};
use crate::config::StoreConfig;
use crate::model::{DiscountState, Order, OrderStatus, Page, Session};
use crate::price::Price;

use super::Store;

/// Most orders shown in the recent-orders sidebar.
pub const RECENT_ORDER_LIMIT: usize = 8;

/// Orders older than this stop counting as recent.
pub const RECENT_WINDOW_DAYS: i64 = 14;

/// Shelf price of a catalog item, with the promo price when one is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTag {
    pub listed: Price,
    pub discounted: Option<Price>,
}

/// Read API
impl Store {
    /// Page that should render. Requests for the admin panel without an
    /// admin session silently fall back to home; the request itself is kept,
    /// so the panel appears as soon as an admin signs in.
    pub fn active_page(&self) -> Page {
        match self.page {
            Page::AdminTickets if !self.session_is_admin() => Page::Home,
            page => page,
        }
    }

    /// Requested page, before the admin fallback.
    pub fn requested_page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Full order book, newest first.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    pub fn discount(&self) -> &DiscountState {
        &self.discount
    }

    pub fn selected_skin(&self) -> &str {
        &self.selected_skin
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.config.ranks
    }

    pub fn coin_packages(&self) -> &[CoinPackage] {
        &self.config.coin_packages
    }

    /// Configuration the store was built from. Registrations grow the live
    /// directory, never this seed list.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Completed orders from the trailing two weeks, newest first, capped
    /// for the sidebar. Recency is evaluated against `now` on every call,
    /// never cached.
    pub fn recent_orders(&self, now: DateTime<Utc>) -> Vec<&Order> {
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
        self.orders
            .iter()
            .filter(|order| order.status == OrderStatus::Completed && order.created_at >= cutoff)
            .take(RECENT_ORDER_LIMIT)
            .collect()
    }

    /// Price to show on a shop card.
    pub fn price_tag(&self, item: &CatalogItem) -> PriceTag {
        let listed = item.price();
        let discounted = self.discount.is_armed().then(|| listed.half_off());
        PriceTag { listed, discounted }
    }

    fn session_is_admin(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_admin)
    }
}
