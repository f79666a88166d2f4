//! [`House`] definitions.

pub mod discount;

use common::{unit, DateTime, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::discount::Discount;

/// Rentable house of the resort.
#[derive(Clone, Debug)]
pub struct House {
    /// ID of this [`House`].
    pub id: Id,

    /// [`Name`] of this [`House`].
    pub name: Name,

    /// Regular price per night of this [`House`].
    pub price: Money,

    /// [`Discount`] rule of this [`House`], if any.
    pub discount: Option<Discount>,

    /// [`DateTime`] when this [`House`] was created.
    pub created_at: CreationDateTime,
}

impl House {
    /// Returns the [`discount::Status`] of this [`House`] at the provided
    /// moment.
    ///
    /// Absence of a [`Discount`] rule is reported as
    /// [`discount::Status::None`].
    #[must_use]
    pub fn discount_status(&self, now: DateTime) -> discount::Status {
        self.discount
            .as_ref()
            .map_or(discount::Status::None, |d| d.status(now))
    }
}

/// ID of a [`House`].
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

/// Name of a [`House`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// [`DateTime`] when a [`House`] was created.
pub type CreationDateTime = DateTimeOf<(House, unit::Creation)>;
