use crate::domain::model::{Grid, PlotResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Highest order term of the expansion.
    fn order(&self) -> u32;
    fn grid(&self) -> Grid;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// Overlay every order from 0 up to `order()` instead of only `order()`.
    fn compare(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<f64>>;
    async fn transform(&self, samples: Vec<f64>) -> Result<PlotResult>;
    async fn load(&self, result: PlotResult) -> Result<Vec<String>>;
}
