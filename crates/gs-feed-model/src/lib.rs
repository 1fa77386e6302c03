//! Shared schema for the GatiSutra traffic feed.
//!
//! Every screen of the dashboard reads these types: monitored junctions,
//! alerts, the emergency fleet, air quality, and the analytics records.
//! Closed enumerations are plain enums so call sites stay exhaustive.

pub mod alert;
pub mod analytics;
pub mod aqi;
pub mod emergency;
pub mod error;
pub mod event;
pub mod geo;
pub mod junction;
pub mod time;

pub use alert::*;
pub use analytics::*;
pub use aqi::*;
pub use emergency::*;
pub use error::{FeedError, FeedResult};
pub use event::*;
pub use geo::*;
pub use junction::*;
pub use time::format_time_ago;
