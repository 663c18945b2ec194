use serde::Serialize;

use crate::core::{Aggregates, Color, format_billions, type_color};

const REGION_PALETTE: [u32; 6] = [0x1FB8CD, 0xFFC185, 0xB4413C, 0xECEBD5, 0x5D878F, 0xDB4545];
const STATUS_PALETTE: [u32; 5] = [0x1FB8CD, 0xFFC185, 0xB4413C, 0xECEBD5, 0x5D878F];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Legend {
    Hidden,
    Right,
}

/// How numeric axis ticks are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    /// `$<value>B`
    Billions,
    /// `<value>%`
    Percent,
    Plain,
}

impl TickFormat {
    pub fn label(self, value: f64) -> String {
        match self {
            TickFormat::Billions => format!("${value}B"),
            TickFormat::Percent => format!("{value}%"),
            TickFormat::Plain => format!("{value}"),
        }
    }
}

/// Everything a chart widget needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: &'static str,
    pub kind: ChartKind,
    pub dataset_label: Option<&'static str>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<Color>,
    pub legend: Legend,
    pub ticks: TickFormat,
}

impl ChartSpec {
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Text drawn next to a single data point.
    pub fn value_label(&self, value: f64) -> String {
        match self.ticks {
            TickFormat::Billions => format_billions(value),
            _ => format!("{value}"),
        }
    }

    /// Evenly spaced axis ticks from zero up to (at least) the largest value.
    pub fn axis_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let step = nice_step(self.max_value(), count.max(1));
        (0..=count)
            .map(|i| {
                let value = step * i as f64;
                (value, self.ticks.label(round_tick(value)))
            })
            .collect()
    }
}

fn nice_step(max: f64, count: usize) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let raw = max / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn round_tick(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn cycle(palette: &[u32], len: usize) -> Vec<Color> {
    palette
        .iter()
        .cycle()
        .take(len)
        .map(|value| Color::from_u32(*value))
        .collect()
}

/// The three dashboard charts, built once from the whole-dataset aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charts {
    pub investment: ChartSpec,
    pub projects: ChartSpec,
    pub status: ChartSpec,
}

impl Charts {
    pub fn from_aggregates(aggregates: &Aggregates) -> Self {
        let regions = aggregates.by_region.labels();
        let types = aggregates.by_type.labels();
        let statuses = aggregates.by_status.labels();

        Self {
            investment: ChartSpec {
                title: "Investment by Region",
                kind: ChartKind::Bar,
                dataset_label: Some("Investment (Billions USD)"),
                colors: cycle(&REGION_PALETTE, regions.len()),
                values: aggregates.by_region.values(),
                labels: regions,
                legend: Legend::Hidden,
                ticks: TickFormat::Billions,
            },
            projects: ChartSpec {
                title: "Projects by Type",
                kind: ChartKind::Pie,
                dataset_label: None,
                colors: types.iter().map(|t| type_color(t)).collect(),
                values: aggregates.by_type.values().into_iter().map(|v| v as f64).collect(),
                labels: types,
                legend: Legend::Right,
                ticks: TickFormat::Plain,
            },
            status: ChartSpec {
                title: "Project Status",
                kind: ChartKind::HorizontalBar,
                dataset_label: Some("Projects"),
                colors: cycle(&STATUS_PALETTE, statuses.len()),
                values: aggregates.by_status.values().into_iter().map(|v| v as f64).collect(),
                labels: statuses,
                legend: Legend::Hidden,
                ticks: TickFormat::Percent,
            },
        }
    }
}
