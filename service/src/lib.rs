//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod task;

use common::operations::{By, Start};
use derive_more::{Debug, Display, Error};

#[cfg(doc)]
use infra::Database;

pub use self::{command::Command, query::Query, task::Task};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// [`task::CleanExpiredDiscounts`] configuration.
    pub clean_expired_discounts: task::clean_expired_discounts::Config,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, database: Db) -> (Self, task::Background)
    where
        Self: Task<
                Start<
                    By<
                        task::CleanExpiredDiscounts<Self>,
                        task::clean_expired_discounts::Config,
                    >,
                >,
                Ok = (),
                Err: Error,
            > + Clone
            + 'static,
    {
        let this = Service { config, database };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn(async move {
            svc.execute(Start(By::new(svc.config().clean_expired_discounts)))
                .await
        });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }
}

/// Shortcut for the error of starting a [`Task`].
type TaskStartError<Svc, T, Args> = <Svc as Task<Start<By<T, Args>>>>::Err;

/// Error of starting a [`Service`].
#[derive(Debug, Display, Error)]
pub enum StartupError<Svc>
where
    Svc: Task<
        Start<
            By<
                task::CleanExpiredDiscounts<Svc>,
                task::clean_expired_discounts::Config,
            >,
        >,
    >,
{
    /// [`task::CleanExpiredDiscounts`] failed to start.
    CleanExpiredDiscountsTask(
        TaskStartError<
            Svc,
            task::CleanExpiredDiscounts<Svc>,
            task::clean_expired_discounts::Config,
        >,
    ),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::{task, Config, Service};
    use crate::infra::Memory;

    #[tokio::test]
    async fn news_up_with_background_tasks() {
        let config = Config {
            clean_expired_discounts: task::clean_expired_discounts::Config {
                interval: Duration::from_secs(3600),
                grace: Duration::from_secs(86_400),
            },
        };

        let (service, bg) = Service::new(config, Memory::default());
        assert_eq!(
            service.config().clean_expired_discounts.grace,
            Duration::from_secs(86_400),
        );
        drop(bg);
    }
}
