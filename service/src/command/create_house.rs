//! [`Command`] for creating a new [`House`].

use common::{operations::Insert, DateTime, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, House},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`House`].
#[derive(Clone, Debug)]
pub struct CreateHouse {
    /// [`Name`] of a new [`House`].
    ///
    /// [`Name`]: house::Name
    pub name: house::Name,

    /// Regular price per night of a new [`House`].
    pub price: Money,

    /// [`Discount`] rule of a new [`House`].
    ///
    /// [`Discount`]: house::Discount
    pub discount: Option<house::Discount>,
}

impl<Db> Command<CreateHouse> for Service<Db>
where
    Db: Database<Insert<House>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = House;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateHouse) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateHouse {
            name,
            price,
            discount,
        } = cmd;

        if !price.is_positive() {
            return Err(tracerr::new!(E::InvalidPrice(price)));
        }

        let house = House {
            id: house::Id::new(),
            name,
            price,
            discount,
            created_at: DateTime::now().coerce(),
        };

        self.database()
            .execute(Insert(house.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(house)
    }
}

/// Error of [`CreateHouse`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided price cannot buy a night.
    #[display("`{_0}` is not a valid nightly price")]
    InvalidPrice(#[error(not(source))] Money),
}
