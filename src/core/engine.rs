use crate::core::Pipeline;
use crate::domain::model::OrderSummary;
use crate::utils::error::Result;
use std::time::Instant;

pub struct PlotEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlotEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        let started = Instant::now();
        tracing::info!("Starting Taylor expansion plot...");

        // Extract
        let samples = self.pipeline.extract().await?;
        tracing::info!("Sampled {} grid points", samples.len());

        // Transform
        let result = self.pipeline.transform(samples).await?;
        tracing::info!(
            "Computed {} approximation(s), {} curve(s) on the axes",
            result.summaries.len(),
            result.axes.curves.len()
        );
        for summary in &result.summaries {
            tracing::info!(
                "n={:<3} max |error| = {:.3e}",
                summary.order,
                summary.max_abs_error
            );
        }

        // Load
        let outputs = self.pipeline.load(result).await?;
        for path in &outputs {
            tracing::info!("Output saved to: {}", path);
        }
        tracing::debug!("Plot finished in {:?}", started.elapsed());

        Ok(outputs)
    }

    /// Runs extract and transform only; nothing is written.
    pub async fn dry_run(&self) -> Result<Vec<OrderSummary>> {
        let samples = self.pipeline.extract().await?;
        let result = self.pipeline.transform(samples).await?;
        tracing::info!(
            "🔍 Dry run computed {} curve(s) over {} samples",
            result.axes.curves.len(),
            result.samples.len()
        );
        Ok(result.summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlotResult;
    use crate::domain::model::Axes;
    use crate::utils::error::BootcampError;
    use async_trait::async_trait;

    struct StubPipeline {
        fail_load: bool,
    }

    #[async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<Vec<f64>> {
            Ok(vec![0.0, 1.0])
        }

        async fn transform(&self, samples: Vec<f64>) -> Result<PlotResult> {
            Ok(PlotResult {
                axes: Axes::new(),
                samples,
                summaries: vec![OrderSummary {
                    order: 0,
                    max_abs_error: 0.63,
                    error_at_one: 0.63,
                }],
            })
        }

        async fn load(&self, _result: PlotResult) -> Result<Vec<String>> {
            if self.fail_load {
                return Err(BootcampError::PlotError {
                    message: "boom".to_string(),
                });
            }
            Ok(vec!["out/plot.svg".to_string()])
        }
    }

    #[test]
    fn test_run_returns_loaded_paths() {
        let engine = PlotEngine::new(StubPipeline { fail_load: false });
        let outputs = tokio_test::block_on(engine.run()).unwrap();
        assert_eq!(outputs, vec!["out/plot.svg".to_string()]);
    }

    #[test]
    fn test_run_propagates_stage_errors() {
        let engine = PlotEngine::new(StubPipeline { fail_load: true });
        let err = tokio_test::block_on(engine.run()).unwrap_err();
        assert!(matches!(err, BootcampError::PlotError { .. }));
    }

    #[test]
    fn test_dry_run_skips_load() {
        let engine = PlotEngine::new(StubPipeline { fail_load: true });
        let summaries = tokio_test::block_on(engine.dry_run()).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].order, 0);
    }
}
