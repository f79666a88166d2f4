//! [`Query`] collection related to the multiple [`House`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::House, Query};

use super::DatabaseQuery;

/// Queries a list of [`House`]s.
pub type List =
    DatabaseQuery<By<read::house::list::Page, read::house::list::Selector>>;

/// Queries total count of [`House`] list items.
pub type TotalCount = DatabaseQuery<By<read::house::list::TotalCount, ()>>;
