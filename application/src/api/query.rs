//! GraphQL [`Query`]s definitions.

use common::DateTime;
use itertools::Itertools as _;
use juniper::graphql_object;
use service::{query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `House` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "house",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn house(
        id: api::house::Id,
        ctx: &Context,
    ) -> Result<api::house::list::Edge, Error> {
        Self::houses(None, Some(id.into()), None, Some(id.into()), None, ctx)
            .await?
            .edges()
            .into_iter()
            .exactly_one()
            .map_err(|_| HouseError::NotExists.into())
            .map_err(ctx.error())
    }

    /// Fetches the page of `House`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///                                      ambiguous.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            before = ?before,
            first = ?first,
            gql.name = "houses",
            last = ?last,
            name = ?name.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn houses(
        first: Option<i32>,
        after: Option<api::house::list::Cursor>,
        last: Option<i32>,
        before: Option<api::house::list::Cursor>,
        name: Option<api::house::Name>,
        ctx: &Context,
    ) -> Result<api::house::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 10;

        ctx.service()
            .execute(query::houses::List::by(read::house::list::Selector {
                arguments: read::house::list::Arguments::new(
                    first,
                    after.map(Into::into),
                    last,
                    before.map(Into::into),
                    DEFAULT_PAGE_SIZE,
                )
                .ok_or_else(|| api::PaginationError::Ambiguous.into())
                .map_err(ctx.error())?,
                filter: read::house::list::Filter {
                    name: name.map(Into::into),
                },
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Booking` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "booking",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<api::booking::list::Edge, Error> {
        Self::bookings(None, Some(id.into()), None, Some(id.into()), None, ctx)
            .await?
            .edges()
            .into_iter()
            .exactly_one()
            .map_err(|_| BookingError::NotExists.into())
            .map_err(ctx.error())
    }

    /// Fetches the page of `Booking`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///                                      ambiguous.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            before = ?before,
            first = ?first,
            gql.name = "bookings",
            house_id = ?house_id.as_ref().map(ToString::to_string),
            last = ?last,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn bookings(
        first: Option<i32>,
        after: Option<api::booking::list::Cursor>,
        last: Option<i32>,
        before: Option<api::booking::list::Cursor>,
        house_id: Option<api::house::Id>,
        ctx: &Context,
    ) -> Result<api::booking::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 10;

        ctx.service()
            .execute(query::bookings::List::by(
                read::booking::list::Selector {
                    arguments: read::booking::list::Arguments::new(
                        first,
                        after.map(Into::into),
                        last,
                        before.map(Into::into),
                        DEFAULT_PAGE_SIZE,
                    )
                    .ok_or_else(|| api::PaginationError::Ambiguous.into())
                    .map_err(ctx.error())?,
                    filter: read::booking::list::Filter {
                        house_id: house_id.map(Into::into),
                    },
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Prices a stay in the `House` with the specified ID without booking it.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            check_in = %check_in.to_rfc3339(),
            check_out = %check_out.to_rfc3339(),
            gql.name = "quote",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn quote(
        house_id: api::house::Id,
        check_in: DateTime,
        check_out: DateTime,
        ctx: &Context,
    ) -> Result<api::Quote, Error> {
        ctx.service()
            .execute(query::quote::Quote {
                house_id: house_id.into(),
                check_in: check_in.coerce(),
                check_out: check_out.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| HouseError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum BookingError {
        #[code = "BOOKING_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Booking` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum HouseError {
        #[code = "HOUSE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`House` with the specified ID does not exist"]
        NotExists,
    }
}
