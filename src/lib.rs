pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, DEFAULT_API_ENDPOINT};
pub use core::{app::InSpaceApp, fetcher::HttpFetcher, renderer::Renderer};
pub use domain::model::{Occupancy, Person};
pub use utils::error::{InSpaceError, Result};
