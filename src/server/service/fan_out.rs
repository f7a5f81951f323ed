//! Bounded, order-preserving fan-out with fail-fast cancellation.
//!
//! `FanOut::run` maps every input item through an async task and returns the results
//! in input order. At most `width` tasks run at once. Results are written into a
//! pre-sized arena at the item's input position; completion order never influences
//! output order. The first failing task ends the run: the shared cancellation token is
//! cancelled, every in-flight task is aborted and the error is returned. No partial
//! result ever escapes.

use std::future::Future;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::server::error::{internal::InternalError, AppError};

pub struct FanOut {
    width: usize,
    cancel: CancellationToken,
}

impl FanOut {
    /// Creates a fan-out running at most `width` tasks concurrently.
    ///
    /// A width of zero is treated as one.
    ///
    /// # Arguments
    /// - `width` - Maximum number of in-flight tasks
    /// - `cancel` - Token handed to every task and cancelled on the first failure
    pub fn new(width: usize, cancel: CancellationToken) -> Self {
        Self {
            width: width.max(1),
            cancel,
        }
    }

    /// Runs `task` over every item and collects the results in input order.
    ///
    /// `task` is invoked on the calling task to build each future; the future itself
    /// runs on the Tokio runtime and receives a clone of the cancellation token.
    ///
    /// # Returns
    /// - `Ok(Vec<R>)` - One result per item, in input order
    /// - `Err(AppError)` - The first error observed from any task
    pub async fn run<T, R, F, Fut>(self, items: Vec<T>, task: F) -> Result<Vec<R>, AppError>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T, CancellationToken) -> Fut,
        Fut: Future<Output = Result<R, AppError>> + Send + 'static,
    {
        let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None)
            .take(items.len())
            .collect();
        let mut pending = items.into_iter().enumerate();
        let mut tasks = JoinSet::new();

        loop {
            while tasks.len() < self.width {
                let Some((index, item)) = pending.next() else {
                    break;
                };
                let work = task(item, self.cancel.clone());
                tasks.spawn(async move { (index, work.await) });
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };

            match joined {
                Ok((index, Ok(value))) => slots[index] = Some(value),
                Ok((_, Err(err))) => return Err(self.abort(tasks, err)),
                Err(join_err) => {
                    return Err(self.abort(tasks, InternalError::TaskJoin(join_err).into()))
                }
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or_else(|| InternalError::MissingResult { index }.into()))
            .collect()
    }

    fn abort<R: 'static>(&self, mut tasks: JoinSet<R>, err: AppError) -> AppError {
        self.cancel.cancel();
        tasks.abort_all();
        tracing::debug!(
            "Aborted {} in-flight comment task(s) after failure: {}",
            tasks.len(),
            err
        );
        err
    }
}

/// Fails with `InternalError::Cancelled` once a sibling task has failed.
///
/// Called before every collaborator call so cancelled work stops at the next
/// suspension point.
pub fn ensure_active(cancel: &CancellationToken) -> Result<(), AppError> {
    if cancel.is_cancelled() {
        return Err(InternalError::Cancelled.into());
    }

    Ok(())
}
