//! [`Quote`]-related definitions.

use common::Money;
use derive_more::{From, Into};
use juniper::graphql_object;
use service::domain;

use crate::Context;

/// Itemized price breakdown of a stay in a `House`.
#[derive(Clone, Copy, Debug, From, Into)]
pub struct Quote(domain::Quote);

/// Itemized price breakdown of a stay in a `House`.
#[graphql_object(context = Context)]
impl Quote {
    /// Total number of nights of the stay.
    #[must_use]
    pub fn total_nights(&self) -> i32 {
        self.0.total_nights
    }

    /// Number of nights priced at the regular `House` price.
    #[must_use]
    pub fn regular_nights(&self) -> i32 {
        self.0.regular_nights
    }

    /// Number of nights priced at the discounted price.
    #[must_use]
    pub fn discounted_nights(&self) -> i32 {
        self.0.discounted_nights
    }

    /// Price of the stay as if no night was discounted.
    #[must_use]
    pub fn base_price(&self) -> Money {
        self.0.base_price
    }

    /// Price of the stay as if no night was discounted, formatted for display.
    #[must_use]
    pub fn formatted_base_price(&self) -> String {
        self.0.base_price.localized()
    }

    /// Difference between the base price and the total price.
    ///
    /// Negative when the discounted price exceeds the regular one.
    #[must_use]
    pub fn discount_amount(&self) -> Money {
        self.0.discount_amount
    }

    /// Difference between the base price and the total price, formatted for
    /// display.
    #[must_use]
    pub fn formatted_discount_amount(&self) -> String {
        self.0.discount_amount.localized()
    }

    /// Total price of the stay.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.0.total_price
    }

    /// Total price of the stay, formatted for display.
    #[must_use]
    pub fn formatted_total_price(&self) -> String {
        self.0.total_price.localized()
    }
}
