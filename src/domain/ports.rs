use crate::domain::model::Occupancy;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn clear_screen(&self) -> bool;
}

#[async_trait]
pub trait OccupancySource: Send + Sync {
    async fn fetch_occupancy(&self) -> Result<Occupancy>;
}
