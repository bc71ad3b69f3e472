//! Optimistic field edits with rollback
//!
//! [`MutationChannel::submit`] writes the new value into the record before it
//! returns, then reconciles with the server in the background. Each call owns
//! a [`PendingMutation`] holding the value to restore, so edits to different
//! fields of one record never interfere.
//!
//! Two edits of the same field are not serialized: both requests run and the
//! one that settles last decides what the record shows.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{FutureExt, LocalBoxFuture};

use super::binding::{BindValue, Binding, ControlKind, FieldValue};
use super::field::{Field, RecordCell};
use super::scheduler::Scheduler;
use crate::shared::api::ApiError;

/// Where failures become visible to the user
pub trait ErrorSink: 'static {
    fn surface(&self, error: &ApiError);
}

/// A control whose raw content can be reset after a rollback
pub trait RawDisplay: 'static {
    fn show(&self, value: &FieldValue);
}

/// No control attached; resets are dropped
impl RawDisplay for () {
    fn show(&self, _value: &FieldValue) {}
}

/// Server acknowledgement of a field write
#[derive(Debug, Clone, PartialEq)]
pub enum Ack<V> {
    /// Accepted as sent
    Echo,
    /// Accepted; the server stored a derived value instead
    Canonical(V),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<V> {
    Committed(V),
    RolledBack { restored: V, error: ApiError },
}

/// One in-flight write of one field
pub struct PendingMutation<R, V> {
    seq: u64,
    field: Field<R, V>,
    previous: V,
    proposed: V,
}

impl<R: 'static, V: BindValue> PendingMutation<R, V> {
    /// Capture the current value and apply `proposed` locally
    pub fn begin<C: RecordCell<R>>(seq: u64, cell: &C, field: Field<R, V>, proposed: V) -> Self {
        let previous = field.read(cell);
        field.write(cell, proposed.clone());
        Self {
            seq,
            field,
            previous,
            proposed,
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn previous(&self) -> &V {
        &self.previous
    }

    pub fn commit<C: RecordCell<R>>(self, cell: &C, ack: Ack<V>) -> V {
        match ack {
            Ack::Echo => self.proposed,
            Ack::Canonical(value) => {
                self.field.write(cell, value.clone());
                value
            }
        }
    }

    pub fn rollback<C: RecordCell<R>, D: RawDisplay>(self, cell: &C, display: &D) -> V {
        self.field.write(cell, self.previous.clone());
        display.show(&self.previous.to_field());
        self.previous
    }
}

pub struct MutationChannel<N, S> {
    sink: N,
    scheduler: S,
    seq: Arc<AtomicU64>,
}

impl<N: Clone, S: Clone> Clone for MutationChannel<N, S> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            scheduler: self.scheduler.clone(),
            seq: self.seq.clone(),
        }
    }
}

impl<N: ErrorSink + Clone, S: Scheduler> MutationChannel<N, S> {
    pub fn new(sink: N, scheduler: S) -> Self {
        Self {
            sink,
            scheduler,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Apply `proposed` to `field` now and send it with `remote`
    pub fn submit<R, V, C, D, F, Fut>(
        &self,
        cell: &C,
        field: Field<R, V>,
        proposed: V,
        display: D,
        remote: F,
    ) -> LocalBoxFuture<'static, MutationOutcome<V>>
    where
        R: 'static,
        V: BindValue,
        C: RecordCell<R>,
        D: RawDisplay,
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<Ack<V>, ApiError>> + 'static,
    {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let pending = PendingMutation::begin(seq, cell, field, proposed.clone());
        let request = remote(proposed);
        let cell = cell.clone();
        let sink = self.sink.clone();

        async move {
            match request.await {
                Ok(ack) => {
                    log::debug!("mutation #{} of `{}` committed", pending.seq(), field.name);
                    MutationOutcome::Committed(pending.commit(&cell, ack))
                }
                Err(error) => {
                    log::warn!(
                        "mutation #{} of `{}` rolled back: {}",
                        pending.seq(),
                        field.name,
                        error
                    );
                    let restored = pending.rollback(&cell, &display);
                    sink.surface(&error);
                    MutationOutcome::RolledBack { restored, error }
                }
            }
        }
        .boxed_local()
    }

    /// [`submit`](Self::submit) and let the outcome settle in the background
    pub fn dispatch<R, V, C, D, F, Fut>(
        &self,
        cell: &C,
        field: Field<R, V>,
        proposed: V,
        display: D,
        remote: F,
    ) where
        R: 'static,
        V: BindValue,
        C: RecordCell<R>,
        D: RawDisplay,
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<Ack<V>, ApiError>> + 'static,
    {
        let outcome = self.submit(cell, field, proposed, display, remote);
        self.scheduler.spawn(
            async move {
                let _ = outcome.await;
            }
            .boxed_local(),
        );
    }
}

impl<N, S> MutationChannel<N, S>
where
    N: ErrorSink + Clone + Send + Sync,
    S: Scheduler + Send + Sync,
{
    /// Binding whose reads follow `cell` and whose writes go through this channel
    pub fn bind<R, V, C, D, F, Fut>(
        &self,
        kind: ControlKind,
        cell: C,
        field: Field<R, V>,
        display: D,
        remote: F,
    ) -> Binding
    where
        R: 'static,
        V: BindValue,
        C: RecordCell<R> + Send + Sync,
        D: RawDisplay + Clone + Send + Sync,
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Ack<V>, ApiError>> + 'static,
    {
        let channel = self.clone();
        let reader = cell.clone();
        Binding::new(
            kind,
            move || reader.observe(|r| field.get(r)),
            move |value: V| channel.dispatch(&cell, field, value, display.clone(), &remote),
        )
    }
}
