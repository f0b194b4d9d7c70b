use serde::{Deserialize, Serialize};

/// Linearly spaced sample grid, endpoint inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: 10.0,
            points: 100,
        }
    }
}

impl Grid {
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
        }
    }

    pub fn samples(&self) -> Vec<f64> {
        crate::domain::taylor::linspace(self.start, self.stop, self.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Per-curve drawing options. `color: None` picks the next palette colour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub color: Option<String>,
    pub dash: LineDash,
    pub width: Option<f64>,
}

impl CurveStyle {
    pub fn colored(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesCurve {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: CurveStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YScale {
    #[default]
    Linear,
    Log,
}

/// A drawing surface that collects curves until it is rendered.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    pub curves: Vec<SeriesCurve>,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: YScale,
    pub legend: bool,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plot(&mut self, x: &[f64], y: &[f64], label: impl Into<String>, style: CurveStyle) {
        self.curves.push(SeriesCurve {
            label: label.into(),
            x: x.to_vec(),
            y: y.to_vec(),
            style,
        });
    }

    pub fn set_yscale(&mut self, scale: YScale) {
        self.y_scale = scale;
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    pub fn legend(&mut self) {
        self.legend = true;
    }
}

/// Approximation summary for a single order, written to the JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order: u32,
    pub max_abs_error: f64,
    pub error_at_one: f64,
}

#[derive(Debug, Clone)]
pub struct PlotResult {
    pub axes: Axes,
    pub samples: Vec<f64>,
    pub summaries: Vec<OrderSummary>,
}
