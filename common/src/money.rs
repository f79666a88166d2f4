//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Indicates whether this [`Money`] represents a positive amount.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Renders this [`Money`] for display: grouped thousands followed by the
    /// [`Currency`] symbol (e.g. `210,000₮`).
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn localized(&self) -> String {
        let Self { amount, currency } = self;

        let sign = if amount.is_sign_negative() { "-" } else { "" };
        let whole = amount
            .trunc()
            .abs()
            .to_i128()
            .expect("integer")
            .to_string();
        let fraction = if amount.is_integer() {
            String::new()
        } else {
            amount
                .abs()
                .to_string()
                .split_once('.')
                .map(|(_, f)| format!(".{f}"))
                .unwrap_or_default()
        };

        format!(
            "{sign}{}{fraction}{}",
            group_thousands(&whole),
            currency.symbol(),
        )
    }
}

/// Groups the provided decimal digits by thousands with a `,` separator.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Mongolian Tögrög."]
        Mnt = 1,
    }
}

impl Currency {
    /// Returns the display symbol of this [`Currency`].
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mnt => "\u{20ae}",
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is an integer;
    /// - `minor` is an optional integer;
    /// - `currency` is a three-letter currency code.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn mnt(s: &str) -> Money {
        Money {
            amount: decimal(s),
            currency: Currency::Mnt,
        }
    }

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("123.45MNT").unwrap(), mnt("123.45"));
        assert_eq!(Money::from_str("70000MNT").unwrap(), mnt("70000"));

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Mn").is_err());
        assert!(Money::from_str("123.45Tugrik").is_err());

        assert!(Money::from_str("123.00MNT").is_ok());
        assert!(Money::from_str("123.0MNT").is_ok());
        assert!(Money::from_str("123MNT").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(mnt("123.45").to_string(), "123.45MNT");
        assert_eq!(mnt("123.00").to_string(), "123MNT");
        assert_eq!(mnt("123.0").to_string(), "123MNT");
        assert_eq!(mnt("123").to_string(), "123MNT");
    }

    #[test]
    fn localized_groups_thousands() {
        assert_eq!(mnt("0").localized(), "0\u{20ae}");
        assert_eq!(mnt("100").localized(), "100\u{20ae}");
        assert_eq!(mnt("1000").localized(), "1,000\u{20ae}");
        assert_eq!(mnt("100000").localized(), "100,000\u{20ae}");
        assert_eq!(mnt("1234567").localized(), "1,234,567\u{20ae}");
        assert_eq!(mnt("-70000").localized(), "-70,000\u{20ae}");
        assert_eq!(mnt("1234.5").localized(), "1,234.5\u{20ae}");
    }

    #[test]
    fn is_positive() {
        assert!(mnt("1").is_positive());
        assert!(!mnt("0").is_positive());
        assert!(!mnt("-1").is_positive());
    }
}
