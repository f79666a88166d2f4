//! Domain definitions.

pub mod booking;
pub mod house;
pub mod quote;

pub use self::{booking::Booking, house::House, quote::Quote};
