//! [`House`]-related read definitions.

#[cfg(doc)]
use crate::domain::House;

pub mod list {
    //! [`House`] list definitions.

    use common::define_pagination;
    use derive_more::{From, Into};

    use crate::domain::house;
    #[cfg(doc)]
    use crate::domain::House;

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = house::Id;

    /// Cursor pointing to a specific [`House`] in a list.
    pub type Cursor = house::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`house::Name`] (or its part) to fuzzy search for.
        pub name: Option<house::Name>,
    }

    /// Total count of [`House`] list items.
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(i32);
}
