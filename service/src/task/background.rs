//! Background environment for running [`Task`]s.

use std::{
    error::Error,
    future::{Future, IntoFuture},
};

use futures::{
    future::{self, LocalBoxFuture},
    FutureExt as _, TryFutureExt as _,
};
use tokio::task;

#[cfg(doc)]
use crate::Task;

/// Background environment for running [`Task`]s.
#[derive(Debug, Default)]
pub struct Background {
    /// Local set of tasks.
    set: task::LocalSet,

    /// Handles of spawned tasks.
    handles: Vec<task::JoinHandle<Result<(), Box<dyn Error + 'static>>>>,
}

impl Background {
    /// Spawns a new [`Task`] inside the [`Background`] environment.
    pub fn spawn<F, E>(&mut self, future: F)
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Error + 'static,
    {
        self.handles.push(self.set.spawn_local(
            future.map_err(|e| Box::<dyn Error + 'static>::from(Box::new(e))),
        ));
    }
}

impl IntoFuture for Background {
    type Output = Result<(), Box<dyn Error>>;
    type IntoFuture = LocalBoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        let Self { set, handles } = self;
        async move {
            let spawned = future::try_join_all(handles.into_iter().map(|h| {
                h.map(|joined| match joined {
                    Ok(res) => res,
                    Err(e) => {
                        Err(Box::<dyn Error + 'static>::from(Box::new(e)))
                    }
                })
            }));
            let ((), results) = future::try_join(set.map(Ok), spawned).await?;
            drop(results);
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod spec {
    use std::io;

    use super::Background;

    #[tokio::test]
    async fn completes_once_all_tasks_finish() {
        let mut bg = Background::default();
        bg.spawn(async { Ok::<_, io::Error>(()) });
        bg.spawn(async { Ok::<_, io::Error>(()) });

        bg.await.unwrap();
    }

    #[tokio::test]
    async fn surfaces_task_errors() {
        let mut bg = Background::default();
        bg.spawn(async { Ok::<_, io::Error>(()) });
        bg.spawn(async { Err::<(), _>(io::Error::other("interval died")) });

        assert!(bg.await.is_err());
    }
}
