//! [`House`]-related definitions.

use std::future;

use common::{DateTime, Handler as _, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{
    graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLScalar,
};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A rentable house.
#[derive(Clone, Debug, From)]
pub struct House {
    /// ID of this [`House`].
    id: Id,

    /// Underlying [`domain::House`].
    house: OnceCell<domain::House>,
}

impl From<domain::House> for House {
    fn from(house: domain::House) -> Self {
        Self {
            id: house.id.into(),
            house: OnceCell::new_with(Some(house)),
        }
    }
}

impl House {
    /// Creates a new [`House`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`House`] with the provided ID exists,
    /// otherwise accessing this [`House`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            house: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::House`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::House`] doesn't exist.
    async fn house(&self, ctx: &Context) -> Result<&domain::House, Error> {
        let id = self.id.into();
        self.house
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::house::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|h| {
                        future::ready(h.ok_or_else(|| {
                            api::query::HouseError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A rentable house.
#[graphql_object(context = Context)]
impl House {
    /// Unique identifier of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Name of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn name(&self, ctx: &Context) -> Result<Name, Error> {
        Ok(self.house(ctx).await?.name.clone().into())
    }

    /// Regular price per night of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.price",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn price(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.house(ctx).await?.price)
    }

    /// Regular price per night of this `House`, formatted for display.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.formattedPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn formatted_price(&self, ctx: &Context) -> Result<String, Error> {
        Ok(self.house(ctx).await?.price.localized())
    }

    /// `Discount` rule of this `House`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.discount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn discount(
        &self,
        ctx: &Context,
    ) -> Result<Option<Discount>, Error> {
        Ok(self.house(ctx).await?.discount.clone().map(Into::into))
    }

    /// Status of the `Discount` rule of this `House` at the current moment.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.discountStatus",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn discount_status(
        &self,
        ctx: &Context,
    ) -> Result<DiscountStatus, Error> {
        Ok(self.house(ctx).await?.discount_status(DateTime::now()).into())
    }

    /// `DateTime` when this `House` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.house(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `House`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::house::Id)]
#[into(domain::house::Id)]
#[graphql(name = "HouseId", transparent)]
pub struct Id(Uuid);

/// Name of a `House`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "HouseName",
    with = scalar::Via::<domain::house::Name>,
)]
pub struct Name(domain::house::Name);

/// Discounted nightly price rule of a [`House`].
#[derive(Clone, Debug, From, Into)]
pub struct Discount(domain::house::Discount);

/// Discounted nightly price rule of a `House`.
#[graphql_object(name = "HouseDiscount", context = Context)]
impl Discount {
    /// Price per night while this `HouseDiscount` applies.
    #[must_use]
    pub fn price(&self) -> Money {
        self.0.price
    }

    /// Price per night while this `HouseDiscount` applies, formatted for
    /// display.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        self.0.price.localized()
    }

    /// Indicator whether this `HouseDiscount` is switched on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.is_active
    }

    /// `DateTime` since which this `HouseDiscount` applies, if limited.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime> {
        self.0.starts_at.map(|at| at.coerce())
    }

    /// `DateTime` until which this `HouseDiscount` applies, if limited.
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime> {
        self.0.ends_at.map(|at| at.coerce())
    }

    /// `Weekday`s this `HouseDiscount` is limited to.
    ///
    /// An empty list means no limitation.
    #[must_use]
    pub fn valid_days(&self) -> Vec<Weekday> {
        self.0
            .valid_days
            .as_ref()
            .iter()
            .copied()
            .map(Into::into)
            .collect()
    }

    /// `Weekday`s this `HouseDiscount` is limited to, formatted for display.
    #[must_use]
    pub fn formatted_valid_days(&self) -> String {
        self.0.valid_days.to_string()
    }

    /// Human-readable label of this `HouseDiscount`, if any.
    #[must_use]
    pub fn label(&self) -> Option<Label> {
        self.0.label.clone().map(Into::into)
    }

    /// Status of this `HouseDiscount` at the current moment.
    #[must_use]
    pub fn status(&self) -> DiscountStatus {
        self.0.status(DateTime::now()).into()
    }
}

/// Discounted nightly price rule of a `House` to be set.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "HouseDiscountInput")]
pub struct DiscountInput {
    /// Price per night while the discount applies.
    pub price: Money,

    /// Indicator whether the discount is switched on.
    ///
    /// Defaults to `true`.
    pub is_active: Option<bool>,

    /// `DateTime` since which the discount applies, if limited.
    pub starts_at: Option<DateTime>,

    /// `DateTime` until which the discount applies, if limited.
    pub ends_at: Option<DateTime>,

    /// `Weekday`s the discount is limited to.
    ///
    /// An omitted or empty list means no limitation.
    pub valid_days: Option<Vec<Weekday>>,

    /// Human-readable label of the discount.
    pub label: Option<Label>,
}

impl From<DiscountInput> for domain::house::Discount {
    fn from(input: DiscountInput) -> Self {
        let DiscountInput {
            price,
            is_active,
            starts_at,
            ends_at,
            valid_days,
            label,
        } = input;
        Self {
            price,
            is_active: is_active.unwrap_or(true),
            starts_at: starts_at.map(DateTime::coerce),
            ends_at: ends_at.map(DateTime::coerce),
            valid_days: domain::house::discount::ValidDays::new(
                valid_days
                    .into_iter()
                    .flatten()
                    .map(Into::into),
            ),
            label: label.map(Into::into),
        }
    }
}

/// Label of a `HouseDiscount`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "HouseDiscountLabel",
    with = scalar::Via::<domain::house::discount::Label>,
)]
pub struct Label(domain::house::discount::Label);

/// Status of a `HouseDiscount` at some moment in time.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "HouseDiscountStatus")]
pub enum DiscountStatus {
    /// No discount rule is in effect.
    None,

    /// Discount rule is switched off.
    Disabled,

    /// Discount window hasn't begun yet.
    Scheduled,

    /// Discount window is already over.
    Expired,

    /// Discount applies at the moment.
    Active,
}

impl From<domain::house::discount::Status> for DiscountStatus {
    fn from(status: domain::house::discount::Status) -> Self {
        use domain::house::discount::Status as S;
        match status {
            S::None => Self::None,
            S::Disabled => Self::Disabled,
            S::Scheduled => Self::Scheduled,
            S::Expired => Self::Expired,
            S::Active => Self::Active,
        }
    }
}

/// Day of a week, indexed from Sunday.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum Weekday {
    /// Sunday.
    Sunday,

    /// Monday.
    Monday,

    /// Tuesday.
    Tuesday,

    /// Wednesday.
    Wednesday,

    /// Thursday.
    Thursday,

    /// Friday.
    Friday,

    /// Saturday.
    Saturday,
}

impl From<domain::house::discount::Weekday> for Weekday {
    fn from(day: domain::house::discount::Weekday) -> Self {
        use domain::house::discount::Weekday as W;
        match day {
            W::Sunday => Self::Sunday,
            W::Monday => Self::Monday,
            W::Tuesday => Self::Tuesday,
            W::Wednesday => Self::Wednesday,
            W::Thursday => Self::Thursday,
            W::Friday => Self::Friday,
            W::Saturday => Self::Saturday,
        }
    }
}

impl From<Weekday> for domain::house::discount::Weekday {
    fn from(day: Weekday) -> Self {
        use domain::house::discount::Weekday as W;
        match day {
            Weekday::Sunday => W::Sunday,
            Weekday::Monday => W::Monday,
            Weekday::Tuesday => W::Tuesday,
            Weekday::Wednesday => W::Wednesday,
            Weekday::Thursday => W::Thursday,
            Weekday::Friday => W::Friday,
            Weekday::Saturday => W::Saturday,
        }
    }
}

pub mod list {
    //! Definitions related to the [`House`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::{query, read, Query as _};

    use super::{House, Id};
    use crate::{api::scalar, AsError, Context, Error};

    /// Cursor for the `House` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::house::list::Cursor)]
    #[graphql(
        name = "HouseListCursor",
        with = scalar::Via::<read::house::list::Cursor>,
    )]
    pub struct Cursor(pub read::house::list::Cursor);

    /// Edge in the [`House`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::house::list::Edge);

    /// Edge in the `House` list.
    #[graphql_object(name = "HouseListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `HouseListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `HouseListEdge`.
        #[must_use]
        pub fn node(&self) -> House {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees `House` \
                          existence"
            )]
            unsafe {
                House::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`House`] list.
    #[derive(Clone, Debug, From, Into)]
    pub struct Connection(read::house::list::Connection);

    /// Connection of the `House` list.
    #[graphql_object(name = "HouseListConnection", context = Context)]
    impl Connection {
        /// Edges of this `HouseListConnection`.
        #[must_use]
        pub fn edges(&self) -> Vec<Edge> {
            self.0.edges.iter().copied().map(Into::into).collect()
        }

        /// Information about the page.
        #[must_use]
        pub fn page_info(&self) -> PageInfo {
            PageInfo {
                info: self.0.page_info(),
                start_cursor: self.0.edges.first().map(|e| e.cursor.into()),
                end_cursor: self.0.edges.last().map(|e| e.cursor.into()),
            }
        }
    }

    /// Information about a [`Connection`] page.
    #[derive(Clone, Copy, Debug)]
    pub struct PageInfo {
        /// Underlying [`read::house::list::PageInfo`].
        info: read::house::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,
    }

    /// Information about a `HouseListConnection` page.
    #[graphql_object(name = "HouseListPageInfo", context = Context)]
    impl PageInfo {
        /// Indicator whether there is a next page.
        #[must_use]
        pub fn has_next_page(&self) -> bool {
            self.info.has_next_page
        }

        /// Indicator whether there is a previous page.
        #[must_use]
        pub fn has_previous_page(&self) -> bool {
            self.info.has_previous_page
        }

        /// Start cursor of the page.
        #[must_use]
        pub fn start_cursor(&self) -> &Option<Cursor> {
            &self.start_cursor
        }

        /// End cursor of the page.
        #[must_use]
        pub fn end_cursor(&self) -> &Option<Cursor> {
            &self.end_cursor
        }

        /// Total `House` count.
        pub async fn total_count(&self, ctx: &Context) -> Result<i32, Error> {
            ctx.service()
                .execute(query::houses::TotalCount::by(()))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(Into::into)
        }
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use service::domain;

    use super::Discount;

    #[test]
    fn discount_exposes_window_bounds() {
        let starts = DateTime::from_rfc3339("2024-06-01T00:00:00Z").unwrap();
        let ends = DateTime::from_rfc3339("2024-06-30T23:59:59Z").unwrap();

        let d = Discount::from(domain::house::Discount {
            price: "70000MNT".parse().unwrap(),
            is_active: true,
            starts_at: Some(starts.coerce()),
            ends_at: Some(ends.coerce()),
            valid_days: domain::house::discount::ValidDays::default(),
            label: None,
        });

        assert_eq!(d.starts_at(), Some(starts));
        assert_eq!(d.ends_at(), Some(ends));
    }
}
