//! Types exchanged with the control surface: incoming parameter events and
//! outgoing series snapshots.

pub mod event;
pub mod snapshot;

pub use event::ParameterEvent;
pub use snapshot::SeriesSnapshot;
