//! [`Booking`] definitions.

use std::sync::LazyLock;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::house;
#[cfg(doc)]
use super::House;

/// Booked stay of a guest in a [`House`].
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the [`House`] this [`Booking`] is made for.
    pub house_id: house::Id,

    /// [`GuestName`] of the guest this [`Booking`] is made by.
    pub guest_name: GuestName,

    /// [`GuestPhone`] of the guest this [`Booking`] is made by.
    pub guest_phone: GuestPhone,

    /// [`DateTime`] when the stay begins.
    pub check_in: CheckInDateTime,

    /// [`DateTime`] when the stay ends.
    pub check_out: CheckOutDateTime,

    /// Total price of the whole stay.
    pub total_price: Money,

    /// [`DateTime`] when this [`Booking`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Booking`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Name of a guest who made a [`Booking`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct GuestName(String);

impl GuestName {
    /// Creates a new [`GuestName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`GuestName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`GuestName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for GuestName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `GuestName`")
    }
}

/// Phone number of a guest who made a [`Booking`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct GuestPhone(String);

impl GuestPhone {
    /// Creates a new [`GuestPhone`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `number` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Creates a new [`GuestPhone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`GuestPhone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`GuestPhone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^\+?\d{4,15}$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for GuestPhone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `GuestPhone`")
    }
}

/// [`DateTime`] when a stay of a [`Booking`] begins.
pub type CheckInDateTime = DateTimeOf<(Booking, unit::CheckIn)>;

/// [`DateTime`] when a stay of a [`Booking`] ends.
pub type CheckOutDateTime = DateTimeOf<(Booking, unit::CheckOut)>;

/// [`DateTime`] when a [`Booking`] was created.
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::GuestPhone;

    #[test]
    fn guest_phone_accepts_digits_with_optional_plus() {
        assert!(GuestPhone::new("99112233").is_some());
        assert!(GuestPhone::new("+97699112233").is_some());

        assert!(GuestPhone::new("").is_none());
        assert!(GuestPhone::new("123").is_none());
        assert!(GuestPhone::new("9911 2233").is_none());
        assert!(GuestPhone::new("phone").is_none());
    }
}
