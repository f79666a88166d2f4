//! GraphQL API definitions.

pub mod booking;
pub mod house;
mod mutation;
mod query;
pub mod quote;
pub mod scalar;

use crate::{define_error, Context};

pub use self::{
    booking::Booking, house::House, mutation::Mutation, query::Query,
    quote::Quote,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    Mutation,
    juniper::EmptySubscription<Context>,
>;

define_error! {
    enum PaginationError {
        #[code = "AMBIGUOUS_PAGINATION_ARGUMENTS"]
        #[status = BAD_REQUEST]
        #[message = "Ambiguous pagination arguments"]
        Ambiguous,
    }
}
