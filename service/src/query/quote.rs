//! [`Quote`] [`Query`] definition.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Booking;
use crate::{
    domain::{self, booking, house, House},
    infra::{database, Database},
    Query, Service,
};

/// [`Query`] pricing a stay in a [`House`] without booking it.
///
/// Resolves into [`None`] if the [`House`] does not exist.
#[derive(Clone, Copy, Debug)]
pub struct Quote {
    /// ID of the [`House`] to price the stay in.
    pub house_id: house::Id,

    /// [`DateTime`] when the stay begins.
    ///
    /// [`DateTime`]: common::DateTime
    pub check_in: booking::CheckInDateTime,

    /// [`DateTime`] when the stay ends.
    ///
    /// [`DateTime`]: common::DateTime
    pub check_out: booking::CheckOutDateTime,
}

impl<Db> Query<Quote> for Service<Db>
where
    Db: Database<
        Select<By<Option<House>, house::Id>>,
        Ok = Option<House>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<domain::Quote>;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: Quote) -> Result<Self::Ok, Self::Err> {
        let Quote {
            house_id,
            check_in,
            check_out,
        } = query;

        Ok(self
            .database()
            .execute(Select(By::<Option<House>, _>::new(house_id)))
            .await
            .map_err(tracerr::wrap!())?
            .map(|house| {
                domain::Quote::calculate(
                    check_in.coerce(),
                    check_out.coerce(),
                    &house,
                )
            }))
    }
}
