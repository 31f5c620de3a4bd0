//! Periodic token renewal with a single in-flight slot
//!
//! [`schedule`] turns a stream of ticks into renewal attempts. At most one
//! renewal is outstanding at any time: a tick that arrives while the previous
//! attempt is still running is skipped, not queued. The task runs until the
//! tick stream ends or its [`RenewalHandle`] is cancelled.

use crate::identity::IdentityClient;
use crate::storage::SessionStore;
use futures::future::{AbortHandle, Abortable, FusedFuture, Fuse, LocalBoxFuture};
use futures::{FutureExt, Stream, StreamExt, pin_mut, select};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// Result of a single renewal attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalOutcome {
    /// The token was rotated and the stored access token updated
    Refreshed,
    /// The token was still valid beyond the look-ahead window
    NotRefreshed,
    /// Renewal was rejected or the new token could not be stored
    Failed,
}

/// Counters kept by a running renewal task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenewalStats {
    pub ticks: u64,
    pub started: u64,
    pub skipped: u64,
    pub refreshed: u64,
    pub not_refreshed: u64,
    pub failed: u64,
}

impl RenewalStats {
    fn record(&mut self, outcome: RenewalOutcome) {
        match outcome {
            RenewalOutcome::Refreshed => self.refreshed += 1,
            RenewalOutcome::NotRefreshed => self.not_refreshed += 1,
            RenewalOutcome::Failed => self.failed += 1,
        }
    }

    /// Attempts that have finished, whatever their outcome
    pub fn completed(&self) -> u64 {
        self.refreshed + self.not_refreshed + self.failed
    }
}

/// Performs one renewal against the identity client
#[derive(Clone)]
pub struct TokenRenewer {
    identity: Rc<dyn IdentityClient>,
    store: SessionStore,
    min_validity_secs: u32,
}

impl TokenRenewer {
    pub fn new(
        identity: Rc<dyn IdentityClient>,
        store: SessionStore,
        min_validity_secs: u32,
    ) -> Self {
        Self {
            identity,
            store,
            min_validity_secs,
        }
    }

    /// Ask the identity client to renew the token and persist a rotated one.
    ///
    /// Failures are logged only; the caller keeps its schedule.
    pub async fn renew_once(&self) -> RenewalOutcome {
        match self.identity.update_token(self.min_validity_secs).await {
            Ok(true) => {
                let Some(token) = self.identity.access_token() else {
                    error!("token refreshed but the identity client holds no access token");
                    return RenewalOutcome::Failed;
                };
                match self.store.update_access_token(&token) {
                    Ok(()) => {
                        debug!("token refreshed");
                        RenewalOutcome::Refreshed
                    }
                    Err(error) => {
                        error!(%error, "failed to store refreshed token");
                        RenewalOutcome::Failed
                    }
                }
            }
            Ok(false) => {
                warn!("token not refreshed");
                RenewalOutcome::NotRefreshed
            }
            Err(error) => {
                error!(%error, "failed to refresh token");
                RenewalOutcome::Failed
            }
        }
    }
}

/// Handle to a scheduled renewal task
#[derive(Clone)]
pub struct RenewalHandle {
    abort: AbortHandle,
    stats: Rc<RefCell<RenewalStats>>,
}

impl RenewalHandle {
    /// Stop the task; an in-flight renewal is dropped
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    /// Snapshot of the task's counters
    pub fn stats(&self) -> RenewalStats {
        *self.stats.borrow()
    }
}

impl PartialEq for RenewalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stats, &other.stats)
    }
}

/// The renewal task; spawn it on the local executor
pub type RenewalTask = LocalBoxFuture<'static, ()>;

/// Schedule renewals, one attempt per tick
pub fn schedule<T>(renewer: TokenRenewer, ticks: T) -> (RenewalHandle, RenewalTask)
where
    T: Stream<Item = ()> + 'static,
{
    let stats = Rc::new(RefCell::new(RenewalStats::default()));
    let (abort, registration) = AbortHandle::new_pair();

    let run = run_renewals(renewer, ticks, Rc::clone(&stats));
    let task = Abortable::new(run, registration)
        .map(|result| {
            if result.is_err() {
                debug!("token renewal cancelled");
            }
        })
        .boxed_local();

    (RenewalHandle { abort, stats }, task)
}

async fn run_renewals<T>(renewer: TokenRenewer, ticks: T, stats: Rc<RefCell<RenewalStats>>)
where
    T: Stream<Item = ()>,
{
    let ticks = ticks.fuse();
    pin_mut!(ticks);
    let mut in_flight: Fuse<LocalBoxFuture<'static, RenewalOutcome>> = Fuse::terminated();

    loop {
        select! {
            tick = ticks.next() => {
                if tick.is_none() {
                    break;
                }
                let mut stats = stats.borrow_mut();
                stats.ticks += 1;
                if in_flight.is_terminated() {
                    stats.started += 1;
                    let renewer = renewer.clone();
                    in_flight = async move { renewer.renew_once().await }.boxed_local().fuse();
                } else {
                    stats.skipped += 1;
                    debug!("previous renewal still in flight, skipping tick");
                }
            }
            outcome = in_flight => stats.borrow_mut().record(outcome),
        }
    }

    // Let the last attempt finish so its outcome is recorded.
    if !in_flight.is_terminated() {
        let outcome = in_flight.await;
        stats.borrow_mut().record(outcome);
    }
    debug!("tick stream ended, token renewal stopped");
}
