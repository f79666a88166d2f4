//! [`CleanExpiredDiscounts`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::operations::{By, Delete, Perform, Start};
use tokio::time::interval;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::house::{discount, Discount},
    infra::{database, Database},
    Service,
};

use super::Task;

/// Configuration for [`CleanExpiredDiscounts`] [`Task`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between expired [`Discount`] rules cleaning.
    pub interval: time::Duration,

    /// Period an expired [`Discount`] rule is still kept for after its end.
    pub grace: time::Duration,
}

/// [`Task`] for removing [`Discount`] rules whose window is over.
#[derive(Clone, Copy, Debug)]
pub struct CleanExpiredDiscounts<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<Db> Task<Start<By<CleanExpiredDiscounts<Self>, Config>>> for Service<Db>
where
    CleanExpiredDiscounts<Service<Db>>:
        Task<Perform<()>, Ok = (), Err: Error> + Send + Sync + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<CleanExpiredDiscounts<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = CleanExpiredDiscounts {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        loop {
            let _ = interval.tick().await;
            _ = task.execute(Perform(())).await.map_err(|e| {
                log::error!("`task::CleanExpiredDiscounts` failed: {e}");
            });
        }
    }
}

impl<Db> Task<Perform<()>> for CleanExpiredDiscounts<Service<Db>>
where
    Db: Database<
        Delete<By<Discount, discount::EndDateTime>>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let deadline = discount::EndDateTime::now() - self.config.grace;
        self.service
            .database()
            .execute(Delete(By::new(deadline)))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

/// Error of [`CleanExpiredDiscounts`] execution.
pub type ExecutionError = Traced<database::Error>;
