//! [`Booking`]-related read definitions.

#[cfg(doc)]
use crate::domain::Booking;

pub mod list {
    //! [`Booking`] list definitions.

    use common::define_pagination;
    use derive_more::{From, Into};

    use crate::domain::{booking, house};
    #[cfg(doc)]
    use crate::domain::{Booking, House};

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = booking::Id;

    /// Cursor pointing to a specific [`Booking`] in a list.
    pub type Cursor = booking::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// ID of the [`House`] to list [`Booking`]s of.
        pub house_id: Option<house::Id>,
    }

    /// Total count of [`Booking`] list items.
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(i32);
}
