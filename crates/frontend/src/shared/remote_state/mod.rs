//! Optimistic remote-state synchronization
//!
//! Controls bind to state through [`binding`]; record edits go through a
//! [`mutation::MutationChannel`]; list screens own a [`query::QueryEngine`].

pub mod binding;
pub mod coalesce;
pub mod field;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod scheduler;

pub use binding::{BindValue, Binding, ControlKind, FieldValue, RawControl};
pub use field::{Field, RecordCell};
pub use mutation::{Ack, ErrorSink, MutationChannel, RawDisplay};
pub use query::{ListRow, QueryEngine};
pub use scheduler::BrowserScheduler;
