use crate::core::svg::render_svg;
use crate::core::{ConfigProvider, Pipeline, PlotResult, Storage};
use crate::domain::model::{Axes, CurveStyle, LineDash, OrderSummary};
use crate::domain::taylor::{self, plot_taylor_expand_exponential};
use crate::utils::error::{BootcampError, Result};

pub struct TaylorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TaylorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn orders(&self) -> Vec<u32> {
        let n = self.config.order();
        if self.config.compare() {
            (0..=n).collect()
        } else {
            vec![n]
        }
    }

    fn file_stem(&self) -> String {
        if self.config.compare() {
            format!("taylor_n0-{}", self.config.order())
        } else {
            format!("taylor_n{}", self.config.order())
        }
    }

    fn summarize(order: u32, samples: &[f64]) -> OrderSummary {
        OrderSummary {
            order,
            max_abs_error: taylor::max_abs_error(order, samples),
            error_at_one: (taylor::taylor_exp_neg_at(order, 1.0) - taylor::exp_neg(1.0)).abs(),
        }
    }

    /// Columns `x,truth,n=<k>...`, one approximation column per summarized order.
    fn to_csv(result: &PlotResult) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let header: Vec<String> = ["x".to_string(), "truth".to_string()]
            .into_iter()
            .chain(result.summaries.iter().map(|s| format!("n={}", s.order)))
            .collect();
        writer.write_record(&header)?;

        for &x in &result.samples {
            let row: Vec<String> = [x.to_string(), taylor::exp_neg(x).to_string()]
                .into_iter()
                .chain(
                    result
                        .summaries
                        .iter()
                        .map(|s| taylor::taylor_exp_neg_at(s.order, x).to_string()),
                )
                .collect();
            writer.write_record(&row)?;
        }

        writer
            .into_inner()
            .map_err(|e| BootcampError::IoError(e.into_error()))
    }

    fn to_json(&self, result: &PlotResult, files: &[String]) -> Result<Vec<u8>> {
        let grid = self.config.grid();
        let summary = serde_json::json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "order": self.config.order(),
            "compare": self.config.compare(),
            "grid": grid,
            "orders": result.summaries,
            "files": files,
        });
        Ok(serde_json::to_vec_pretty(&summary)?)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TaylorPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<f64>> {
        let grid = self.config.grid();
        tracing::debug!(
            "Sampling {} points over [{}, {}]",
            grid.points,
            grid.start,
            grid.stop
        );

        let samples = grid.samples();
        if samples.is_empty() {
            return Err(BootcampError::InvalidConfigValueError {
                field: "grid.points".to_string(),
                value: grid.points.to_string(),
                reason: "Grid has no sample points".to_string(),
            });
        }

        Ok(samples)
    }

    async fn transform(&self, samples: Vec<f64>) -> Result<PlotResult> {
        let mut axes = Axes::new();
        let mut summaries = Vec::new();
        let compare = self.config.compare();

        for (i, order) in self.orders().into_iter().enumerate() {
            // 比較模式下，最高階用實線，其餘用虛線
            let style = if compare && order != self.config.order() {
                CurveStyle {
                    dash: LineDash::Dashed,
                    ..Default::default()
                }
            } else {
                CurveStyle::default()
            };
            plot_taylor_expand_exponential(&mut axes, order, &samples, i == 0, style);

            let summary = Self::summarize(order, &samples);
            tracing::debug!(
                "Order {}: max |error| = {:.3e}, error at x=1 = {:.3e}",
                summary.order,
                summary.max_abs_error,
                summary.error_at_one
            );
            summaries.push(summary);
        }

        Ok(PlotResult {
            axes,
            samples,
            summaries,
        })
    }

    async fn load(&self, result: PlotResult) -> Result<Vec<String>> {
        let stem = self.file_stem();
        let formats = self.config.output_formats();
        let mut written = Vec::new();

        if formats.iter().any(|f| f == "svg") {
            let name = format!("{}.svg", stem);
            let svg = render_svg(&result.axes)?;
            self.storage.write_file(&name, svg.as_bytes()).await?;
            written.push(name);
        }

        if formats.iter().any(|f| f == "csv") {
            let name = format!("{}.csv", stem);
            let data = Self::to_csv(&result)?;
            self.storage.write_file(&name, &data).await?;
            written.push(name);
        }

        // JSON 摘要最後寫入，才能列出其他檔案
        if formats.iter().any(|f| f == "json") {
            let name = format!("{}.json", stem);
            let data = self.to_json(&result, &written)?;
            self.storage.write_file(&name, &data).await?;
            written.push(name);
        }

        let paths: Vec<String> = written
            .iter()
            .map(|name| format!("{}/{}", self.config.output_path(), name))
            .collect();

        tracing::debug!("Wrote {} output files", paths.len());
        Ok(paths)
    }
}
