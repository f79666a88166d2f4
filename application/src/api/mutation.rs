//! GraphQL [`Mutation`]s definitions.

use common::{DateTime, Money};
use juniper::graphql_object;
use service::{command, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new `House` with the provided details.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_PRICE` - the provided price cannot buy a night.
    #[tracing::instrument(
        skip_all,
        fields(
            discount = ?discount,
            gql.name = "createHouse",
            name = %name,
            otel.name = Self::SPAN_NAME,
            price = price.to_string(),
        ),
    )]
    pub async fn create_house(
        name: api::house::Name,
        price: Money,
        discount: Option<api::house::DiscountInput>,
        ctx: &Context,
    ) -> Result<api::House, Error> {
        ctx.service()
            .execute(command::CreateHouse {
                name: name.into(),
                price,
                discount: discount.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Replaces the discount rule of the `House` with the provided ID.
    ///
    /// The previous rule is replaced entirely, so an omitted `discount`
    /// removes it.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the provided ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            discount = ?discount,
            gql.name = "setHouseDiscount",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn set_house_discount(
        house_id: api::house::Id,
        discount: Option<api::house::DiscountInput>,
        ctx: &Context,
    ) -> Result<api::House, Error> {
        ctx.service()
            .execute(command::SetHouseDiscount {
                house_id: house_id.into(),
                discount: discount.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Books a stay in the `House` with the provided ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the provided ID does not exist;
    /// - `INVALID_STAY` - the check-out is not later than the check-in.
    #[tracing::instrument(
        skip_all,
        fields(
            check_in = %check_in.to_rfc3339(),
            check_out = %check_out.to_rfc3339(),
            gql.name = "createBooking",
            guest_name = %guest_name,
            guest_phone = %guest_phone,
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_booking(
        house_id: api::house::Id,
        guest_name: api::booking::GuestName,
        guest_phone: api::booking::GuestPhone,
        check_in: DateTime,
        check_out: DateTime,
        ctx: &Context,
    ) -> Result<api::booking::CreateResult, Error> {
        ctx.service()
            .execute(command::CreateBooking {
                house_id: house_id.into(),
                guest_name: guest_name.into(),
                guest_phone: guest_phone.into(),
                check_in: check_in.coerce(),
                check_out: check_out.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Cancels the `Booking` with the provided ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the provided ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelBooking",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cancel_booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        ctx.service()
            .execute(command::CancelBooking { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

impl AsError for command::create_house::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_PRICE"]
                #[status = BAD_REQUEST]
                #[message = "Provided price cannot buy a night"]
                InvalidPrice,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::InvalidPrice(_) => Some(Error::InvalidPrice.into()),
        }
    }
}

impl AsError for command::set_house_discount::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "HOUSE_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`House` with the provided ID does not exist"]
                HouseNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => Some(Error::HouseNotExists.into()),
        }
    }
}

impl AsError for command::create_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "HOUSE_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`House` with the provided ID does not exist"]
                HouseNotExists,

                #[code = "INVALID_STAY"]
                #[status = BAD_REQUEST]
                #[message = "Check-out of the stay must be later than its \
                             check-in"]
                InvalidStay,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => Some(Error::HouseNotExists.into()),
            Self::InvalidStay { .. } => Some(Error::InvalidStay.into()),
        }
    }
}

impl AsError for command::cancel_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "BOOKING_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Booking` with the provided ID does not exist"]
                BookingNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::BookingNotExists(_) => Some(Error::BookingNotExists.into()),
        }
    }
}
