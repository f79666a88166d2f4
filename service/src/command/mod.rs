//! [`Command`] definition.

pub mod cancel_booking;
pub mod create_booking;
pub mod create_house;
pub mod set_house_discount;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    cancel_booking::CancelBooking, create_booking::CreateBooking,
    create_house::CreateHouse, set_house_discount::SetHouseDiscount,
};
