use crate::domain::model::{Axes, LineDash, SeriesCurve, YScale};
use crate::utils::error::{BootcampError, Result};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 55.0;

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Single-letter colour codes understood in [`CurveStyle::color`](crate::domain::model::CurveStyle).
fn resolve_color(code: &str) -> &str {
    match code {
        "k" => "#000000",
        "b" => "#0000ff",
        "g" => "#008000",
        "r" => "#ff0000",
        "c" => "#00bfbf",
        "m" => "#bf00bf",
        "y" => "#bfbf00",
        "w" => "#ffffff",
        other => other,
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Maps data coordinates onto the plot area.
struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    scale: YScale,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        let span = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + (x - self.x_min) / (self.x_max - self.x_min) * span
    }

    fn py(&self, y: f64) -> f64 {
        let span = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let v = match self.scale {
            YScale::Linear => y,
            YScale::Log => y.log10(),
        };
        HEIGHT - MARGIN_BOTTOM - (v - self.y_min) / (self.y_max - self.y_min) * span
    }

    /// Points that cannot be drawn on this axis (NaN, inf, or <= 0 on log).
    fn is_masked(&self, y: f64) -> bool {
        !y.is_finite() || (self.scale == YScale::Log && y <= 0.0)
    }
}

/// Step of 1, 2 or 5 times a power of ten giving roughly `target` ticks.
fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

fn linear_ticks(min: f64, max: f64) -> Vec<f64> {
    let step = nice_step(max - min, 5);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn format_tick(value: f64) -> String {
    if value == value.round() {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn build_frame(axes: &Axes) -> Result<Frame> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for curve in &axes.curves {
        for (&x, &y) in curve.x.iter().zip(&curve.y) {
            if !x.is_finite() {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);

            let drawable = y.is_finite() && (axes.y_scale == YScale::Linear || y > 0.0);
            if drawable {
                let v = match axes.y_scale {
                    YScale::Linear => y,
                    YScale::Log => y.log10(),
                };
                y_min = y_min.min(v);
                y_max = y_max.max(v);
            }
        }
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        return Err(BootcampError::PlotError {
            message: "No drawable points on the axes".to_string(),
        });
    }

    if x_min == x_max {
        x_min -= 0.5;
        x_max += 0.5;
    }

    match axes.y_scale {
        YScale::Log => {
            // 對齊到整數十進位
            y_min = y_min.floor();
            y_max = y_max.ceil();
            if y_min == y_max {
                y_max += 1.0;
            }
        }
        YScale::Linear => {
            if y_min == y_max {
                y_min -= 0.5;
                y_max += 0.5;
            }
            let pad = (y_max - y_min) * 0.05;
            y_min -= pad;
            y_max += pad;
        }
    }

    Ok(Frame {
        x_min,
        x_max,
        y_min,
        y_max,
        scale: axes.y_scale,
    })
}

/// Splits a curve into polyline segments, breaking at masked points.
fn curve_segments(frame: &Frame, curve: &SeriesCurve) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (&x, &y) in curve.x.iter().zip(&curve.y) {
        if !x.is_finite() || frame.is_masked(y) {
            if current.len() > 1 {
                segments.push(current.join(" "));
            }
            current.clear();
            continue;
        }
        let command = if current.is_empty() { "M" } else { "L" };
        current.push(format!("{}{:.2},{:.2}", command, frame.px(x), frame.py(y)));
    }
    if current.len() > 1 {
        segments.push(current.join(" "));
    }

    segments
}

fn dash_attr(dash: LineDash) -> &'static str {
    match dash {
        LineDash::Solid => "",
        LineDash::Dashed => " stroke-dasharray=\"8,4\"",
        LineDash::Dotted => " stroke-dasharray=\"2,3\"",
    }
}

/// Renders the axes to a standalone SVG document.
pub fn render_svg(axes: &Axes) -> Result<String> {
    let frame = build_frame(axes)?;
    let plot_right = WIDTH - MARGIN_RIGHT;
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        WIDTH, HEIGHT
    ));
    svg.push_str("  <style>\n");
    svg.push_str("    .tick { font-family: sans-serif; font-size: 11px; }\n");
    svg.push_str("    .label { font-family: sans-serif; font-size: 14px; }\n");
    svg.push_str("  </style>\n");
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#333\"/>\n",
        MARGIN_LEFT,
        MARGIN_TOP,
        plot_right - MARGIN_LEFT,
        plot_bottom - MARGIN_TOP
    ));

    // x ticks
    for tick in linear_ticks(frame.x_min, frame.x_max) {
        let px = frame.px(tick);
        svg.push_str(&format!(
            "  <line x1=\"{px:.2}\" y1=\"{plot_bottom}\" x2=\"{px:.2}\" y2=\"{}\" stroke=\"#333\"/>\n",
            plot_bottom + 5.0
        ));
        svg.push_str(&format!(
            "  <text class=\"tick\" x=\"{px:.2}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
            plot_bottom + 18.0,
            format_tick(tick)
        ));
    }

    // y ticks
    let y_ticks: Vec<(f64, String)> = match frame.scale {
        YScale::Log => {
            let first = frame.y_min as i64;
            let last = frame.y_max as i64;
            (first..=last)
                .map(|k| (10f64.powi(k as i32), format!("1e{}", k)))
                .collect()
        }
        YScale::Linear => linear_ticks(frame.y_min, frame.y_max)
            .into_iter()
            .map(|t| (t, format_tick(t)))
            .collect(),
    };
    for (value, text) in y_ticks {
        let py = frame.py(value);
        svg.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{py:.2}\" x2=\"{MARGIN_LEFT}\" y2=\"{py:.2}\" stroke=\"#333\"/>\n",
            MARGIN_LEFT - 5.0
        ));
        svg.push_str(&format!(
            "  <text class=\"tick\" x=\"{}\" y=\"{:.2}\" text-anchor=\"end\">{}</text>\n",
            MARGIN_LEFT - 8.0,
            py + 4.0,
            escape(&text)
        ));
    }

    // curves
    let mut palette_index = 0;
    let mut legend_entries = Vec::new();
    for curve in &axes.curves {
        let color = match &curve.style.color {
            Some(code) => resolve_color(code).to_string(),
            None => {
                let c = PALETTE[palette_index % PALETTE.len()];
                palette_index += 1;
                c.to_string()
            }
        };
        let width = curve.style.width.unwrap_or(1.5);
        let dash = dash_attr(curve.style.dash);

        for segment in curve_segments(&frame, curve) {
            svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
                segment, color, width, dash
            ));
        }
        legend_entries.push((curve.label.clone(), color, width, dash));
    }

    // axis labels
    if !axes.x_label.is_empty() {
        svg.push_str(&format!(
            "  <text class=\"label\" x=\"{:.2}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
            (MARGIN_LEFT + plot_right) / 2.0,
            HEIGHT - 12.0,
            escape(&axes.x_label)
        ));
    }
    if !axes.y_label.is_empty() {
        let cy = (MARGIN_TOP + plot_bottom) / 2.0;
        svg.push_str(&format!(
            "  <text class=\"label\" x=\"20\" y=\"{cy:.2}\" text-anchor=\"middle\" transform=\"rotate(-90 20 {cy:.2})\">{}</text>\n",
            escape(&axes.y_label)
        ));
    }

    if axes.legend && !legend_entries.is_empty() {
        let row = 18.0;
        let box_width = 230.0;
        let box_height = row * legend_entries.len() as f64 + 10.0;
        let left = plot_right - box_width - 10.0;
        let top = MARGIN_TOP + 10.0;
        svg.push_str(&format!(
            "  <rect x=\"{left:.2}\" y=\"{top:.2}\" width=\"{box_width}\" height=\"{box_height:.2}\" fill=\"#ffffff\" fill-opacity=\"0.8\" stroke=\"#ccc\"/>\n"
        ));
        for (i, (label, color, width, dash)) in legend_entries.iter().enumerate() {
            let y = top + 14.0 + row * i as f64;
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\" stroke=\"{color}\" stroke-width=\"{width}\"{dash}/>\n",
                left + 8.0,
                left + 36.0
            ));
            svg.push_str(&format!(
                "  <text class=\"tick\" x=\"{:.2}\" y=\"{:.2}\">{}</text>\n",
                left + 44.0,
                y + 4.0,
                escape(label)
            ));
        }
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}
