//! [`Query`] collection related to the multiple [`Booking`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Booking, Query};

use super::DatabaseQuery;

/// Queries a list of [`Booking`]s.
pub type List =
    DatabaseQuery<By<read::booking::list::Page, read::booking::list::Selector>>;

/// Queries total count of [`Booking`] list items.
pub type TotalCount = DatabaseQuery<By<read::booking::list::TotalCount, ()>>;
