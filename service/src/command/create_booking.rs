//! [`Command`] for booking a stay in a [`House`].

use common::{
    operations::{By, Insert, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking, house, Booking, House, Quote},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for booking a stay in a [`House`].
#[derive(Clone, Debug)]
pub struct CreateBooking {
    /// ID of the [`House`] to book a stay in.
    pub house_id: house::Id,

    /// [`GuestName`] of the guest booking the stay.
    ///
    /// [`GuestName`]: booking::GuestName
    pub guest_name: booking::GuestName,

    /// [`GuestPhone`] of the guest booking the stay.
    ///
    /// [`GuestPhone`]: booking::GuestPhone
    pub guest_phone: booking::GuestPhone,

    /// [`DateTime`] when the stay begins.
    pub check_in: booking::CheckInDateTime,

    /// [`DateTime`] when the stay ends.
    pub check_out: booking::CheckOutDateTime,
}

/// Output of the [`CreateBooking`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Created [`Booking`].
    pub booking: Booking,

    /// [`Quote`] the [`Booking`] total was derived from.
    pub quote: Quote,
}

impl<Db> Command<CreateBooking> for Service<Db>
where
    Db: Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<Insert<Booking>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking {
            house_id,
            guest_name,
            guest_phone,
            check_in,
            check_out,
        } = cmd;

        if check_in.nights_until(check_out) <= 0 {
            return Err(tracerr::new!(E::InvalidStay {
                check_in,
                check_out,
            }));
        }

        let house = self
            .database()
            .execute(Select(By::<Option<House>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;

        let quote =
            Quote::calculate(check_in.coerce(), check_out.coerce(), &house);

        let booking = Booking {
            id: booking::Id::new(),
            house_id: house.id,
            guest_name,
            guest_phone,
            check_in,
            check_out,
            total_price: quote.total_price,
            created_at: DateTime::now().coerce(),
        };

        self.database()
            .execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(Output { booking, quote })
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    HouseNotExists(#[error(not(source))] house::Id),

    /// Check-out of the stay is not later than its check-in.
    #[display(
        "stay from `{}` to `{}` is empty",
        check_in.to_rfc3339(),
        check_out.to_rfc3339(),
    )]
    InvalidStay {
        /// [`DateTime`] when the stay begins.
        check_in: booking::CheckInDateTime,

        /// [`DateTime`] when the stay ends.
        check_out: booking::CheckOutDateTime,
    },
}
