//! [`Discount`] definitions.

use std::fmt;

use common::{define_kind, unit, DateTime, DateTimeOf, Money};
use derive_more::{AsRef, Display, FromStr};

#[cfg(doc)]
use super::House;

/// Discounted nightly price rule of a [`House`].
#[derive(Clone, Debug)]
pub struct Discount {
    /// Price per night while this [`Discount`] applies.
    pub price: Money,

    /// Indicator whether this [`Discount`] is switched on.
    pub is_active: bool,

    /// [`DateTime`] since which this [`Discount`] applies, if limited.
    pub starts_at: Option<StartDateTime>,

    /// [`DateTime`] until which this [`Discount`] applies, if limited.
    pub ends_at: Option<EndDateTime>,

    /// [`Weekday`]s this [`Discount`] is limited to.
    pub valid_days: ValidDays,

    /// Human-readable [`Label`] of this [`Discount`], if any.
    pub label: Option<Label>,
}

impl Discount {
    /// Indicates whether this [`Discount`] can never price a night.
    ///
    /// A non-positive [`Discount::price`] is treated as if no [`Discount`]
    /// rule was set at all.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        !self.price.is_positive()
    }

    /// Indicates whether this [`Discount`] applies on the provided day.
    ///
    /// The date window is inclusive on both of its ends, and an empty
    /// [`Discount::valid_days`] set allows any [`Weekday`].
    #[must_use]
    pub fn applies_on(&self, day: DateTime) -> bool {
        if self.is_inert() || !self.is_active {
            return false;
        }
        if self.starts_at.is_some_and(|at| day < at.coerce()) {
            return false;
        }
        if self.ends_at.is_some_and(|at| day > at.coerce()) {
            return false;
        }
        self.valid_days.allows(Weekday::of(day))
    }

    /// Returns the [`Status`] of this [`Discount`] at the provided moment.
    #[must_use]
    pub fn status(&self, now: DateTime) -> Status {
        if self.is_inert() {
            Status::None
        } else if !self.is_active {
            Status::Disabled
        } else if self.starts_at.is_some_and(|at| now < at.coerce()) {
            Status::Scheduled
        } else if self.ends_at.is_some_and(|at| now > at.coerce()) {
            Status::Expired
        } else {
            Status::Active
        }
    }
}

define_kind! {
    #[doc = "Status of a [`Discount`] at some moment in time."]
    enum Status {
        #[doc = "No [`Discount`] rule is in effect."]
        None = 0,

        #[doc = "[`Discount`] rule is switched off."]
        Disabled = 1,

        #[doc = "[`Discount`] window hasn't begun yet."]
        Scheduled = 2,

        #[doc = "[`Discount`] window is already over."]
        Expired = 3,

        #[doc = "[`Discount`] applies at the moment."]
        Active = 4,
    }
}

define_kind! {
    #[doc = "Day of a week, indexed from Sunday."]
    enum Weekday {
        #[doc = "Sunday."]
        Sunday = 0,

        #[doc = "Monday."]
        Monday = 1,

        #[doc = "Tuesday."]
        Tuesday = 2,

        #[doc = "Wednesday."]
        Wednesday = 3,

        #[doc = "Thursday."]
        Thursday = 4,

        #[doc = "Friday."]
        Friday = 5,

        #[doc = "Saturday."]
        Saturday = 6,
    }
}

impl Weekday {
    /// Returns the [`Weekday`] the provided [`DateTime`] falls on.
    #[must_use]
    pub fn of(day: DateTime) -> Self {
        match day.weekday_index() {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the Mongolian abbreviation of this [`Weekday`].
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Sunday => "Ня",
            Self::Monday => "Да",
            Self::Tuesday => "Мя",
            Self::Wednesday => "Лх",
            Self::Thursday => "Пү",
            Self::Friday => "Ба",
            Self::Saturday => "Бя",
        }
    }
}

/// Set of [`Weekday`]s a [`Discount`] is limited to.
///
/// An empty set means no limitation.
#[derive(AsRef, Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidDays(Vec<Weekday>);

impl ValidDays {
    /// Creates a new [`ValidDays`] set of the provided [`Weekday`]s.
    ///
    /// Duplicates are dropped, and the order is normalized to ascending.
    #[must_use]
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days = days.into_iter().collect::<Vec<_>>();
        days.sort_unstable_by_key(|d| d.u8());
        days.dedup();
        Self(days)
    }

    /// Indicates whether this [`ValidDays`] set allows the provided
    /// [`Weekday`].
    #[must_use]
    pub fn allows(&self, day: Weekday) -> bool {
        self.0.is_empty() || self.0.contains(&day)
    }

    /// Indicates whether this [`ValidDays`] set limits nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(day.abbreviation())?;
        }
        Ok(())
    }
}

/// Label of a [`Discount`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Label(String);

impl Label {
    /// Creates a new [`Label`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `label` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Creates a new [`Label`] if the given `label` is valid.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        Self::check(&label).then_some(Self(label))
    }

    /// Checks whether the given `label` is a valid [`Label`].
    fn check(label: impl AsRef<str>) -> bool {
        let label = label.as_ref();
        label.trim() == label && !label.is_empty() && label.len() <= 512
    }
}

impl FromStr for Label {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Label`")
    }
}

/// [`DateTime`] since which a [`Discount`] applies.
pub type StartDateTime = DateTimeOf<(Discount, unit::Start)>;

/// [`DateTime`] until which a [`Discount`] applies.
pub type EndDateTime = DateTimeOf<(Discount, unit::End)>;

#[cfg(test)]
mod spec {
    use common::{money::Currency, DateTime, Money};
    use rust_decimal::Decimal;

    use super::{Discount, Status, ValidDays, Weekday};

    fn mnt(amount: i64) -> Money {
        Money {
            amount: Decimal::from(amount),
            currency: Currency::Mnt,
        }
    }

    fn at(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    fn discount() -> Discount {
        Discount {
            price: mnt(70_000),
            is_active: true,
            starts_at: Some(at("2024-06-01T00:00:00Z").coerce()),
            ends_at: Some(at("2024-06-30T23:59:59Z").coerce()),
            valid_days: ValidDays::default(),
            label: None,
        }
    }

    #[test]
    fn applies_within_inclusive_window() {
        let d = discount();

        assert!(d.applies_on(at("2024-06-01T00:00:00Z")));
        assert!(d.applies_on(at("2024-06-15T12:00:00Z")));
        assert!(d.applies_on(at("2024-06-30T23:59:59Z")));

        assert!(!d.applies_on(at("2024-05-31T23:59:59Z")));
        assert!(!d.applies_on(at("2024-07-01T00:00:00Z")));
    }

    #[test]
    fn applies_any_day_when_unbounded() {
        let d = Discount {
            starts_at: None,
            ends_at: None,
            ..discount()
        };

        assert!(d.applies_on(at("1999-01-01T00:00:00Z")));
        assert!(d.applies_on(at("2077-12-31T00:00:00Z")));
    }

    #[test]
    fn applies_on_listed_weekdays_only() {
        let d = Discount {
            valid_days: ValidDays::new([Weekday::Saturday, Weekday::Sunday]),
            ..discount()
        };

        // 2024-06-08 is a Saturday, 2024-06-09 is a Sunday.
        assert!(d.applies_on(at("2024-06-08T12:00:00Z")));
        assert!(d.applies_on(at("2024-06-09T12:00:00Z")));
        // 2024-06-10 is a Monday.
        assert!(!d.applies_on(at("2024-06-10T12:00:00Z")));
    }

    #[test]
    fn never_applies_when_switched_off_or_inert() {
        let day = at("2024-06-15T12:00:00Z");

        let off = Discount {
            is_active: false,
            ..discount()
        };
        assert!(!off.applies_on(day));

        let free = Discount {
            price: mnt(0),
            ..discount()
        };
        assert!(!free.applies_on(day));

        let negative = Discount {
            price: mnt(-1),
            ..discount()
        };
        assert!(!negative.applies_on(day));
    }

    #[test]
    fn status_follows_fixed_precedence() {
        let now = at("2024-06-15T12:00:00Z");

        assert_eq!(discount().status(now), Status::Active);

        let inert = Discount {
            price: mnt(0),
            is_active: false,
            ..discount()
        };
        assert_eq!(inert.status(now), Status::None);

        let off = Discount {
            is_active: false,
            ..discount()
        };
        assert_eq!(off.status(now), Status::Disabled);

        let scheduled = Discount {
            starts_at: Some(at("2024-07-01T00:00:00Z").coerce()),
            ..discount()
        };
        assert_eq!(scheduled.status(now), Status::Scheduled);

        let expired = Discount {
            ends_at: Some(at("2024-06-01T00:00:00Z").coerce()),
            ..discount()
        };
        assert_eq!(expired.status(now), Status::Expired);

        // Switched off wins over an expired window.
        let off_expired = Discount {
            is_active: false,
            ends_at: Some(at("2024-06-01T00:00:00Z").coerce()),
            ..discount()
        };
        assert_eq!(off_expired.status(now), Status::Disabled);
    }

    #[test]
    fn status_active_on_window_bounds() {
        let d = discount();

        assert_eq!(d.status(at("2024-06-01T00:00:00Z")), Status::Active);
        assert_eq!(d.status(at("2024-06-30T23:59:59Z")), Status::Active);
    }

    #[test]
    fn valid_days_normalize_and_display() {
        let days = ValidDays::new([
            Weekday::Saturday,
            Weekday::Monday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]);

        assert_eq!(days.to_string(), "Ня, Да, Бя");
        assert!(days.allows(Weekday::Monday));
        assert!(!days.allows(Weekday::Friday));

        assert_eq!(ValidDays::default().to_string(), "");
        assert!(ValidDays::default().allows(Weekday::Friday));
    }
}
