//! In-process [`Database`] implementation.

mod impls;

use std::{collections::BTreeMap, sync::Arc};

use derive_more::{Display, Error as StdError};
use tokio::sync::RwLock;

use crate::domain::{booking, house, Booking, House};

#[cfg(doc)]
use super::Database;

/// In-process [`Database`] keeping all the documents in ordered maps.
///
/// Every operation touches a single document kind at once, so no
/// cross-document transactions are provided.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// State shared between clones of this [`Memory`] store.
    state: Arc<RwLock<State>>,
}

/// Documents stored in a [`Memory`] store.
#[derive(Debug, Default)]
struct State {
    /// [`House`] documents, ordered by their IDs.
    houses: BTreeMap<house::Id, House>,

    /// [`Booking`] documents, ordered by their IDs.
    bookings: BTreeMap<booking::Id, Booking>,
}

/// [`Memory`] store error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    HouseNotExists(#[error(not(source))] house::Id),
}
