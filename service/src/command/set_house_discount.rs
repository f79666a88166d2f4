//! [`Command`] for replacing the [`Discount`] rule of a [`House`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, House},
    infra::{database, Database},
    Service,
};

#[cfg(doc)]
use crate::domain::house::Discount;

use super::Command;

/// [`Command`] for replacing the [`Discount`] rule of a [`House`].
///
/// The previous rule is replaced entirely, so an omitted [`Discount`] removes
/// it.
#[derive(Clone, Debug)]
pub struct SetHouseDiscount {
    /// ID of the [`House`] to set the [`Discount`] rule of.
    pub house_id: house::Id,

    /// New [`Discount`] rule of the [`House`].
    pub discount: Option<house::Discount>,
}

impl<Db> Command<SetHouseDiscount> for Service<Db>
where
    Db: Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<Update<House>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = House;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetHouseDiscount,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetHouseDiscount { house_id, discount } = cmd;

        let mut house = self
            .database()
            .execute(Select(By::<Option<House>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;

        house.discount = discount;

        self.database()
            .execute(Update(house.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(house)
    }
}

/// Error of [`SetHouseDiscount`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    HouseNotExists(#[error(not(source))] house::Id),
}
