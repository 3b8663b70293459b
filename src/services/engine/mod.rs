mod models;
mod service;
mod ticker;

pub use models::{
    Anchor, CountdownConfig, EngineState, Snapshot, DEFAULT_INITIAL_DAYS, DEFAULT_INITIAL_HOURS,
    DEFAULT_INITIAL_MINUTES, DEFAULT_INITIAL_SECONDS,
};
pub use service::CountdownEngine;
pub use ticker::CountdownTicker;
