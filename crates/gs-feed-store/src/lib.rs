//! Read-only stores over the GatiSutra feed, plus the derived views every
//! screen reads.
//!
//! A [`Catalog`] is parsed and validated once (built-in Pune data or a JSON
//! file), then frozen into a [`FeedSnapshot`]. Views in [`views`] recompute
//! from the snapshot on every call; nothing here mutates after load.

pub mod alerts;
pub mod catalog;
pub mod fleet;
pub mod junctions;
mod pune;
pub mod snapshot;
pub mod views;

pub use alerts::AlertStore;
pub use catalog::Catalog;
pub use fleet::EmergencyFleetStore;
pub use junctions::JunctionStatusStore;
pub use snapshot::FeedSnapshot;
pub use views::Selection;
