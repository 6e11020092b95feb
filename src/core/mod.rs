pub mod app;
pub mod fetcher;
pub mod renderer;

pub use crate::domain::model::{Occupancy, Person};
pub use crate::domain::ports::{ConfigProvider, OccupancySource};
pub use crate::utils::error::Result;
