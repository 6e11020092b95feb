use crate::core::renderer::Renderer;
use crate::core::{Occupancy, OccupancySource};
use crate::utils::error::Result;
use std::io::Write;

/// Drives one fetch followed by one render.
pub struct InSpaceApp<S: OccupancySource> {
    source: S,
    renderer: Renderer,
}

impl<S: OccupancySource> InSpaceApp<S> {
    pub fn new(source: S, renderer: Renderer) -> Self {
        Self { source, renderer }
    }

    /// Nothing is written to `out` unless the fetch succeeds.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Occupancy> {
        tracing::info!("Fetching current occupancy");
        let occupancy = self.source.fetch_occupancy().await?;

        tracing::info!("Rendering {} people", occupancy.people.len());
        self.renderer.render(&occupancy, out)?;

        Ok(occupancy)
    }
}
