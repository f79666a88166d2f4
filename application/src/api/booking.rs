//! [`Booking`]-related definitions.

use std::future;

use common::{DateTime, Handler as _, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLScalar};
use service::{command, domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A booked stay of a guest in a `House`.
#[derive(Clone, Debug, From)]
pub struct Booking {
    /// ID of this [`Booking`].
    id: Id,

    /// Underlying [`domain::Booking`].
    booking: OnceCell<domain::Booking>,
}

impl From<domain::Booking> for Booking {
    fn from(booking: domain::Booking) -> Self {
        Self {
            id: booking.id.into(),
            booking: OnceCell::new_with(Some(booking)),
        }
    }
}

impl Booking {
    /// Creates a new [`Booking`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Booking`] with the provided ID exists,
    /// otherwise accessing this [`Booking`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            booking: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Booking`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Booking`] doesn't exist.
    async fn booking(&self, ctx: &Context) -> Result<&domain::Booking, Error> {
        let id = self.id.into();
        self.booking
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::booking::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|b| {
                        future::ready(b.ok_or_else(|| {
                            api::query::BookingError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A booked stay of a guest in a `House`.
#[graphql_object(context = Context)]
impl Booking {
    /// Unique identifier of this `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// `House` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.house",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn house(&self, ctx: &Context) -> Result<api::House, Error> {
        let house_id = self.booking(ctx).await?.house_id;
        #[expect(
            unsafe_code,
            reason = "`Booking` loaded from repository guarantees `House` \
                      existence"
        )]
        let house = unsafe { api::House::new_unchecked(house_id) };
        Ok(house)
    }

    /// Name of the guest this `Booking` is made by.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.guestName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn guest_name(&self, ctx: &Context) -> Result<GuestName, Error> {
        Ok(self.booking(ctx).await?.guest_name.clone().into())
    }

    /// Phone number of the guest this `Booking` is made by.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.guestPhone",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn guest_phone(
        &self,
        ctx: &Context,
    ) -> Result<GuestPhone, Error> {
        Ok(self.booking(ctx).await?.guest_phone.clone().into())
    }

    /// `DateTime` when the stay begins.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.checkIn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn check_in(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.booking(ctx).await?.check_in.coerce())
    }

    /// `DateTime` when the stay ends.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.checkOut",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn check_out(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.booking(ctx).await?.check_out.coerce())
    }

    /// Total price of the whole stay.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.totalPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn total_price(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.booking(ctx).await?.total_price)
    }

    /// Total price of the whole stay, formatted for display.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.formattedTotalPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn formatted_total_price(
        &self,
        ctx: &Context,
    ) -> Result<String, Error> {
        Ok(self.booking(ctx).await?.total_price.localized())
    }

    /// `DateTime` when this `Booking` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.booking(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Booking`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::booking::Id)]
#[into(domain::booking::Id)]
#[graphql(name = "BookingId", transparent)]
pub struct Id(Uuid);

/// Name of a guest who made a `Booking`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "BookingGuestName",
    with = scalar::Via::<domain::booking::GuestName>,
)]
pub struct GuestName(domain::booking::GuestName);

/// Phone number of a guest who made a `Booking`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "BookingGuestPhone",
    with = scalar::Via::<domain::booking::GuestPhone>,
)]
pub struct GuestPhone(domain::booking::GuestPhone);

/// Result of creating a new [`Booking`].
#[derive(Clone, Debug)]
pub struct CreateResult {
    /// Created [`Booking`].
    booking: Booking,

    /// [`Quote`] the [`Booking`] total was derived from.
    ///
    /// [`Quote`]: api::Quote
    quote: api::Quote,
}

impl From<command::create_booking::Output> for CreateResult {
    fn from(output: command::create_booking::Output) -> Self {
        Self {
            booking: output.booking.into(),
            quote: output.quote.into(),
        }
    }
}

/// Result of creating a new `Booking`.
#[graphql_object(name = "BookingCreateResult", context = Context)]
impl CreateResult {
    /// Created `Booking`.
    #[must_use]
    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    /// `Quote` the `Booking` total was derived from.
    #[must_use]
    pub fn quote(&self) -> &api::Quote {
        &self.quote
    }
}

pub mod list {
    //! Definitions related to the [`Booking`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::{query, read, Query as _};

    use super::{Booking, Id};
    use crate::{api::scalar, AsError, Context, Error};

    /// Cursor for the `Booking` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::booking::list::Cursor)]
    #[graphql(
        name = "BookingListCursor",
        with = scalar::Via::<read::booking::list::Cursor>,
    )]
    pub struct Cursor(pub read::booking::list::Cursor);

    /// Edge in the [`Booking`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::booking::list::Edge);

    /// Edge in the `Booking` list.
    #[graphql_object(name = "BookingListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `BookingListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `BookingListEdge`.
        #[must_use]
        pub fn node(&self) -> Booking {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees `Booking` \
                          existence"
            )]
            unsafe {
                Booking::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`Booking`] list.
    #[derive(Clone, Debug, From, Into)]
    pub struct Connection(read::booking::list::Connection);

    /// Connection of the `Booking` list.
    #[graphql_object(name = "BookingListConnection", context = Context)]
    impl Connection {
        /// Edges of this `BookingListConnection`.
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
        /// Underlying [`read::booking::list::PageInfo`].
        info: read::booking::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,
    }

    /// Information about a `BookingListConnection` page.
    #[graphql_object(name = "BookingListPageInfo", context = Context)]
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

        /// Total `Booking` count.
        pub async fn total_count(&self, ctx: &Context) -> Result<i32, Error> {
            ctx.service()
                .execute(query::bookings::TotalCount::by(()))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(Into::into)
        }
    }
}
