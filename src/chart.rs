//! Grouped bar chart description for an [`RgbHistogram`], plus the layout math the
//! painter in `ui::histogram` uses. Nothing in here touches a live egui context.

use crate::histogram::{Channel, RgbHistogram, NUM_BINS};
use egui::{Color32, Pos2, Rect};

pub const X_AXIS_TITLE: &str = "Pixel Value";
pub const Y_AXIS_TITLE: &str = "Count";
pub const X_TICKS: [u8; 5] = [0, 64, 128, 192, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub color: Color32,
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub x_title: &'static str,
    pub y_title: &'static str,
}

impl ChartSpec {
    /// One ordinal label per intensity and one dataset per color channel.
    pub fn grouped_bars(histogram: &RgbHistogram) -> Self {
        let datasets = Channel::ALL
            .iter()
            .map(|&channel| Dataset {
                label: channel.name(),
                color: channel_color(channel),
                data: histogram.channel(channel).bins().to_vec(),
            })
            .collect();

        Self {
            kind: ChartKind::Bar,
            labels: (0..NUM_BINS).map(|i| i.to_string()).collect(),
            datasets,
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
        }
    }

    pub fn max_value(&self) -> u32 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

pub fn channel_color(channel: Channel) -> Color32 {
    match channel {
        Channel::Red => Color32::from_rgb(230, 60, 60),
        Channel::Green => Color32::from_rgb(60, 190, 80),
        Channel::Blue => Color32::from_rgb(70, 110, 240),
    }
}

/// A drawn chart. Owned by whoever asked for it; replacing it goes through
/// [`plot_histogram`] so the old one is torn down first.
#[derive(Debug)]
pub struct HistogramChart {
    generation: u64,
    spec: ChartSpec,
    y_max: u32,
}

impl HistogramChart {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Top of the y axis, already rounded to a readable value
    pub fn y_max(&self) -> u32 {
        self.y_max
    }

    fn destroy(self) {
        log::debug!("Destroying histogram chart #{}", self.generation);
    }
}

pub fn plot_histogram(previous: Option<HistogramChart>, histogram: &RgbHistogram) -> HistogramChart {
    let generation = match previous {
        Some(old) => {
            let next = old.generation + 1;
            old.destroy();
            next
        }
        None => 1,
    };

    let spec = ChartSpec::grouped_bars(histogram);
    let y_max = nice_max(spec.max_value());
    log::debug!("Created histogram chart #{} (y max {})", generation, y_max);

    HistogramChart {
        generation,
        spec,
        y_max,
    }
}

/// Rounds up to 1, 2 or 5 times a power of ten. Zero maps to 1 so the axis never
/// collapses.
pub fn nice_max(value: u32) -> u32 {
    if value <= 1 {
        return 1;
    }
    let mut magnitude: u64 = 1;
    loop {
        for step in [1u64, 2, 5] {
            let candidate = step * magnitude;
            if candidate >= value as u64 {
                return candidate.min(u32::MAX as u64) as u32;
            }
        }
        magnitude *= 10;
    }
}

pub fn y_ticks(y_max: u32) -> Vec<u32> {
    let step = (y_max / 5).max(1) as usize;
    (0..=y_max).step_by(step).collect()
}

/// Rectangles for the red, green and blue bars of one bin. `gap` is the fraction of
/// the bin width left empty between neighbouring groups.
pub fn bar_rects(plot: Rect, bin: usize, values: [u32; 3], y_max: u32, gap: f32) -> [Rect; 3] {
    let group_width = plot.width() / NUM_BINS as f32;
    let gap = gap.clamp(0.0, 0.9);
    let bar_width = group_width * (1.0 - gap) / 3.0;
    let group_left = plot.left() + bin as f32 * group_width + group_width * gap / 2.0;
    let y_max = y_max.max(1) as f32;

    let mut rects = [Rect::NOTHING; 3];
    for (k, value) in values.iter().enumerate() {
        let left = group_left + k as f32 * bar_width;
        let height = (*value as f32 / y_max).min(1.0) * plot.height();
        rects[k] = Rect::from_min_max(
            Pos2::new(left, plot.bottom() - height),
            Pos2::new(left + bar_width, plot.bottom()),
        );
    }
    rects
}

/// The bin under a horizontal screen position, if it is inside the plot.
pub fn bin_at(plot: Rect, x: f32) -> Option<u8> {
    if plot.width() <= 0.0 || x < plot.left() || x > plot.right() {
        return None;
    }
    let bin = ((x - plot.left()) / plot.width() * NUM_BINS as f32) as usize;
    Some(bin.min(NUM_BINS - 1) as u8)
}

pub fn bin_x(plot: Rect, bin: u8) -> f32 {
    plot.left() + (bin as f32 + 0.5) * plot.width() / NUM_BINS as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_histogram() -> RgbHistogram {
        RgbHistogram::from_rgba(&[10, 200, 0, 255, 10, 0, 0, 255]).unwrap()
    }

    #[test]
    fn test_grouped_bars_spec() {
        let spec = ChartSpec::grouped_bars(&sample_histogram());

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels.len(), 256);
        assert_eq!(spec.labels[0], "0");
        assert_eq!(spec.labels[255], "255");
        assert_eq!(spec.x_title, "Pixel Value");
        assert_eq!(spec.y_title, "Count");

        let labels: Vec<_> = spec.datasets.iter().map(|d| d.label).collect();
        assert_eq!(labels, ["Red", "Green", "Blue"]);
        assert!(spec.datasets.iter().all(|d| d.data.len() == 256));
        assert_eq!(spec.datasets[0].data[10], 2);
        assert_eq!(spec.datasets[1].data[200], 1);
        assert_eq!(spec.datasets[2].data[0], 2);
        assert_eq!(spec.max_value(), 2);
    }

    #[test]
    fn test_plot_replaces_previous_chart() {
        let first = plot_histogram(None, &sample_histogram());
        assert_eq!(first.generation(), 1);

        let white = RgbHistogram::from_rgba(&[255; 16]).unwrap();
        let second = plot_histogram(Some(first), &white);
        assert_eq!(second.generation(), 2);
        assert_eq!(second.spec().datasets[0].data[10], 0);
        assert_eq!(second.spec().datasets[0].data[255], 4);
        assert_eq!(second.y_max(), 5);
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0), 1);
        assert_eq!(nice_max(1), 1);
        assert_eq!(nice_max(3), 5);
        assert_eq!(nice_max(10), 10);
        assert_eq!(nice_max(11), 20);
        assert_eq!(nice_max(4_321), 5_000);
        assert_eq!(nice_max(60_000), 100_000);
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(5_000), vec![0, 1_000, 2_000, 3_000, 4_000, 5_000]);
        assert_eq!(y_ticks(2), vec![0, 1, 2]);
    }

    #[test]
    fn test_bar_rects_stay_inside_their_bin() {
        let plot = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(512.0, 100.0));
        let rects = bar_rects(plot, 1, [50, 100, 0], 100, 0.0);

        assert_eq!(rects[0].left(), 2.0);
        assert!((rects[2].right() - 4.0).abs() < 1e-4);
        assert_eq!(rects[0].height(), 50.0);
        assert_eq!(rects[1].top(), 0.0);
        assert_eq!(rects[2].height(), 0.0);
        assert!(rects.iter().all(|r| r.bottom() == 100.0));
    }

    #[test]
    fn test_bin_at() {
        let plot = Rect::from_min_max(Pos2::new(10.0, 0.0), Pos2::new(266.0, 50.0));
        assert_eq!(bin_at(plot, 10.0), Some(0));
        assert_eq!(bin_at(plot, 138.5), Some(128));
        assert_eq!(bin_at(plot, 266.0), Some(255));
        assert_eq!(bin_at(plot, 9.0), None);
        assert_eq!(bin_at(plot, 300.0), None);
    }
}
