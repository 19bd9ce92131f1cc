pub mod journal;
pub mod series;
pub mod stats;
pub mod store;
pub mod tags;
pub mod window;
