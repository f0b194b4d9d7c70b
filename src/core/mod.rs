pub mod engine;
pub mod pipeline;
pub mod svg;

pub use crate::domain::model::{Grid, PlotResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
