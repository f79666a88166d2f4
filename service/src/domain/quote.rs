//! [`Quote`] definitions.

use common::{DateTime, Money};
use rust_decimal::Decimal;

#[cfg(doc)]
use super::house::Discount;
use super::House;

/// Itemized price breakdown of a stay in a [`House`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Total number of nights of the stay.
    pub total_nights: i32,

    /// Number of nights priced at the regular [`House`] price.
    pub regular_nights: i32,

    /// Number of nights priced at the [`Discount`] price.
    pub discounted_nights: i32,

    /// Price of the stay as if no night was discounted.
    pub base_price: Money,

    /// Difference between [`Quote::base_price`] and [`Quote::total_price`].
    ///
    /// Negative when the [`Discount`] price exceeds the regular one.
    pub discount_amount: Money,

    /// Total price of the stay.
    pub total_price: Money,
}

impl Quote {
    /// Calculates a [`Quote`] for a stay in the provided [`House`].
    ///
    /// Every night is priced separately: the [`Discount`] rule presence and
    /// its switch are checked once for the whole stay, while its date window
    /// and weekdays are re-checked against each night's calendar day.
    ///
    /// A stay whose check-out is not later than its check-in prices as an
    /// all-zero [`Quote`].
    #[must_use]
    pub fn calculate(
        check_in: DateTime,
        check_out: DateTime,
        house: &House,
    ) -> Self {
        let currency = house.price.currency;

        let nights = check_in.nights_until(check_out);
        if nights <= 0 {
            return Self::zero(currency);
        }
        let total_nights = i32::try_from(nights).unwrap_or(i32::MAX);

        let discount = house
            .discount
            .as_ref()
            .filter(|d| d.price.is_positive() && d.is_active);

        let mut discounted_nights = 0;
        let mut total = Decimal::ZERO;
        for i in 0..i64::from(total_nights) {
            let night = check_in.checked_add_days(i);
            let discounted =
                discount.zip(night).is_some_and(|(d, n)| d.applies_on(n));
            if discounted {
                discounted_nights += 1;
                total += discount.map_or(Decimal::ZERO, |d| d.price.amount);
            } else {
                total += house.price.amount;
            }
        }

        let base = house.price.amount * Decimal::from(total_nights);
        Self {
            total_nights,
            regular_nights: total_nights - discounted_nights,
            discounted_nights,
            base_price: Money {
                amount: base,
                currency,
            },
            discount_amount: Money {
                amount: base - total,
                currency,
            },
            total_price: Money {
                amount: total,
                currency,
            },
        }
    }

    /// Returns an all-zero [`Quote`] in the provided [`Currency`].
    ///
    /// [`Currency`]: common::money::Currency
    fn zero(currency: common::money::Currency) -> Self {
        let zero = Money {
            amount: Decimal::ZERO,
            currency,
        };
        Self {
            total_nights: 0,
            regular_nights: 0,
            discounted_nights: 0,
            base_price: zero,
            discount_amount: zero,
            total_price: zero,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, DateTime, Money};
    use rust_decimal::Decimal;

    use crate::domain::{
        house::{self, discount::ValidDays, discount::Weekday, Discount},
        House,
    };

    use super::Quote;

    fn mnt(amount: i64) -> Money {
        Money {
            amount: Decimal::from(amount),
            currency: Currency::Mnt,
        }
    }

    fn at(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    fn house(price: Money, discount: Option<Discount>) -> House {
        House {
            id: house::Id::new(),
            name: house::Name::new("Juniper cabin").unwrap(),
            price,
            discount,
            created_at: DateTime::now().coerce(),
        }
    }

    fn all_days_discount(price: Money) -> Discount {
        Discount {
            price,
            is_active: true,
            starts_at: Some(at("2024-06-01T00:00:00Z").coerce()),
            ends_at: Some(at("2024-06-30T23:59:59Z").coerce()),
            valid_days: ValidDays::default(),
            label: None,
        }
    }

    #[test]
    fn discounts_every_covered_night() {
        let house = house(mnt(100_000), Some(all_days_discount(mnt(70_000))));

        let quote = Quote::calculate(
            at("2024-06-10T14:00:00Z"),
            at("2024-06-13T14:00:00Z"),
            &house,
        );

        assert_eq!(quote.total_nights, 3);
        assert_eq!(quote.discounted_nights, 3);
        assert_eq!(quote.regular_nights, 0);
        assert_eq!(quote.base_price, mnt(300_000));
        assert_eq!(quote.total_price, mnt(210_000));
        assert_eq!(quote.discount_amount, mnt(90_000));
    }

    #[test]
    fn prices_regularly_without_discount() {
        let house = house(mnt(50_000), None);

        let quote = Quote::calculate(
            at("2024-06-10T14:00:00Z"),
            at("2024-06-12T14:00:00Z"),
            &house,
        );

        assert_eq!(quote.total_nights, 2);
        assert_eq!(quote.discounted_nights, 0);
        assert_eq!(quote.regular_nights, 2);
        assert_eq!(quote.base_price, mnt(100_000));
        assert_eq!(quote.total_price, mnt(100_000));
        assert_eq!(quote.discount_amount, mnt(0));
    }

    #[test]
    fn discounts_listed_weekdays_only() {
        let discount = Discount {
            valid_days: ValidDays::new([Weekday::Saturday]),
            ..all_days_discount(mnt(70_000))
        };
        let house = house(mnt(100_000), Some(discount));

        // 2024-06-03 is a Monday, so the whole week holds one Saturday.
        let quote = Quote::calculate(
            at("2024-06-03T14:00:00Z"),
            at("2024-06-10T14:00:00Z"),
            &house,
        );

        assert_eq!(quote.total_nights, 7);
        assert_eq!(quote.discounted_nights, 1);
        assert_eq!(quote.regular_nights, 6);
        assert_eq!(quote.total_price, mnt(670_000));
        assert_eq!(quote.discount_amount, mnt(30_000));
    }

    #[test]
    fn ignores_discount_outside_its_window() {
        let house = house(mnt(100_000), Some(all_days_discount(mnt(70_000))));

        let quote = Quote::calculate(
            at("2024-07-10T14:00:00Z"),
            at("2024-07-13T14:00:00Z"),
            &house,
        );

        assert_eq!(quote.discounted_nights, 0);
        assert_eq!(quote.total_price, mnt(300_000));
        assert_eq!(quote.discount_amount, mnt(0));
    }

    #[test]
    fn ignores_switched_off_and_inert_discounts() {
        let off = Discount {
            is_active: false,
            ..all_days_discount(mnt(70_000))
        };
        let quote = Quote::calculate(
            at("2024-06-10T14:00:00Z"),
            at("2024-06-13T14:00:00Z"),
            &house(mnt(100_000), Some(off)),
        );
        assert_eq!(quote.discounted_nights, 0);
        assert_eq!(quote.total_price, mnt(300_000));

        let free = all_days_discount(mnt(0));
        let quote = Quote::calculate(
            at("2024-06-10T14:00:00Z"),
            at("2024-06-13T14:00:00Z"),
            &house(mnt(100_000), Some(free)),
        );
        assert_eq!(quote.discounted_nights, 0);
        assert_eq!(quote.total_price, mnt(300_000));
    }

    #[test]
    fn empty_and_reversed_stays_price_as_zero() {
        let house = house(mnt(100_000), Some(all_days_discount(mnt(70_000))));
        let zero = Quote::calculate(
            at("2024-06-10T14:00:00Z"),
            at("2024-06-10T14:00:00Z"),
            &house,
        );

        assert_eq!(zero.total_nights, 0);
        assert_eq!(zero.base_price, mnt(0));
        assert_eq!(zero.total_price, mnt(0));
        assert_eq!(zero.discount_amount, mnt(0));

        let reversed = Quote::calculate(
            at("2024-06-13T14:00:00Z"),
            at("2024-06-10T14:00:00Z"),
            &house,
        );
        assert_eq!(reversed, zero);
    }

    #[test]
    fn partial_night_rounds_up() {
        let house = house(mnt(100_000), None);

        let quote = Quote::calculate(
            at("2024-06-10T14:00:00Z"),
            at("2024-06-13T20:00:00Z"),
            &house,
        );

        assert_eq!(quote.total_nights, 4);
        assert_eq!(quote.total_price, mnt(400_000));
    }

    #[test]
    fn discount_amount_goes_negative_when_discount_price_is_higher() {
        let house = house(mnt(100_000), Some(all_days_discount(mnt(150_000))));

        let quote = Quote::calculate(
            at("2024-06-10T14:00:00Z"),
            at("2024-06-12T14:00:00Z"),
            &house,
        );

        assert_eq!(quote.total_price, mnt(300_000));
        assert_eq!(quote.discount_amount, mnt(-100_000));
    }

    #[test]
    fn night_partition_always_sums_up() {
        let discount = Discount {
            valid_days: ValidDays::new([Weekday::Friday, Weekday::Saturday]),
            ..all_days_discount(mnt(70_000))
        };
        let house = house(mnt(100_000), Some(discount));

        let quote = Quote::calculate(
            at("2024-06-05T14:00:00Z"),
            at("2024-06-19T14:00:00Z"),
            &house,
        );

        assert_eq!(
            quote.total_nights,
            quote.regular_nights + quote.discounted_nights,
        );
        assert_eq!(
            quote.total_price.amount,
            quote.base_price.amount - quote.discount_amount.amount,
        );
    }
}
