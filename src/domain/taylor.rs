//! Taylor expansion of `y = exp(-x)` around zero:
//!
//! `y_approx = 1 - x + x^2/2! - x^3/3! + ...`

use crate::domain::model::{Axes, CurveStyle, YScale};

/// Colour of the true curve.
pub const TRUTH_COLOR: &str = "k";
pub const TRUTH_LABEL: &str = "Truth (y = e^{-x})";

/// `num` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    if i == num - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// `n!` as `f64`. Overflows to infinity past 170.
pub fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

pub fn exp_neg(x: f64) -> f64 {
    (-x).exp()
}

/// Sum of `(-1)^i * x^i / i!` for `i` in `0..=n`, evaluated at every sample.
///
/// Each term is derived from the previous one (`t_i = t_{i-1} * (-x) / i`)
/// so large orders never form `x^i` or `i!` on their own.
pub fn taylor_exp_neg(n: u32, x: &[f64]) -> Vec<f64> {
    x.iter().map(|&xk| taylor_exp_neg_at(n, xk)).collect()
}

pub fn taylor_exp_neg_at(n: u32, x: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    for i in 1..=n {
        term *= -x / i as f64;
        sum += term;
    }
    sum
}

/// Largest `|approx - truth|` over the samples.
pub fn max_abs_error(n: u32, x: &[f64]) -> f64 {
    x.iter()
        .map(|&xk| (taylor_exp_neg_at(n, xk) - exp_neg(xk)).abs())
        .fold(0.0, f64::max)
}

pub fn approximation_label(n: u32) -> String {
    format!("n={} Taylor expansion", n)
}

/// Plots the order-`n` approximation on `ax`, plus the true curve in solid
/// black when `plot_truth` is set. The y axis is switched to log scale.
pub fn plot_taylor_expand_exponential(
    ax: &mut Axes,
    n: u32,
    x: &[f64],
    plot_truth: bool,
    style: CurveStyle,
) {
    let y_approx = taylor_exp_neg(n, x);

    if plot_truth {
        let y: Vec<f64> = x.iter().map(|&xk| exp_neg(xk)).collect();
        ax.plot(x, &y, TRUTH_LABEL, CurveStyle::colored(TRUTH_COLOR));
    }
    ax.plot(x, &y_approx, approximation_label(n), style);

    tracing::debug!(
        "Plotted order {} over {} samples (max error {:.3e})",
        n,
        x.len(),
        max_abs_error(n, x)
    );

    ax.set_yscale(YScale::Log);
    ax.legend();
    ax.set_xlabel("x");
    ax.set_ylabel("y");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_zero_is_constant_one() {
        let x = linspace(0.0, 10.0, 100);
        assert!(taylor_exp_neg(0, &x).iter().all(|&y| y == 1.0));
    }

    #[test]
    fn test_order_one_is_tangent_line() {
        let y = taylor_exp_neg(1, &[0.0, 0.5, 2.0]);
        assert_eq!(y, vec![1.0, 0.5, -1.0]);
    }

    #[test]
    fn test_matches_explicit_power_series() {
        for &x in &[0.0f64, 0.3, 1.0, 2.5, 7.0] {
            for n in 0..=12u32 {
                let explicit: f64 = (0..=n)
                    .map(|i| (-1.0f64).powi(i as i32) * x.powi(i as i32) / factorial(i))
                    .sum();
                let iterative = taylor_exp_neg_at(n, x);
                assert!(
                    (explicit - iterative).abs() <= 1e-9 * explicit.abs().max(1.0),
                    "n={} x={} explicit={} iterative={}",
                    n,
                    x,
                    explicit,
                    iterative
                );
            }
        }
    }

    #[test]
    fn test_error_shrinks_monotonically_at_one() {
        let truth = exp_neg(1.0);
        let errors: Vec<f64> = (0..=10)
            .map(|n| (taylor_exp_neg_at(n, 1.0) - truth).abs())
            .collect();
        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0], "errors not decreasing: {:?}", errors);
        }
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert!(factorial(170).is_finite());
        assert!(factorial(171).is_infinite());
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_plot_adds_truth_only_when_asked() {
        let x = linspace(0.0, 10.0, 100);
        let mut ax = Axes::new();
        plot_taylor_expand_exponential(&mut ax, 3, &x, true, CurveStyle::default());
        plot_taylor_expand_exponential(&mut ax, 5, &x, false, CurveStyle::default());

        let labels: Vec<&str> = ax.curves.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![TRUTH_LABEL, "n=3 Taylor expansion", "n=5 Taylor expansion"]
        );
        assert_eq!(ax.y_scale, YScale::Log);
        assert_eq!(ax.x_label, "x");
        assert_eq!(ax.y_label, "y");
    }
}
