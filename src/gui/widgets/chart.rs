use std::f32::consts::{FRAC_PI_2, TAU};

use iced::{
    Pixels, Point, Radians, Rectangle, Renderer, Size, Theme, Vector, mouse,
    widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, path::Arc},
};

use super::to_iced;
use crate::view::{ChartKind, ChartSpec, Legend};

const AXIS_TICKS: usize = 4;
const LABEL_SIZE: f32 = 11.0;
const LABEL: iced::Color = iced::Color::from_rgb(0.25, 0.25, 0.25);
const GRID: iced::Color = iced::Color::from_rgb(0.88, 0.88, 0.88);

/// Draws one [`ChartSpec`]. The geometry is cached for the lifetime of the
/// screen since chart data never changes after load.
pub struct ChartCanvas<'a> {
    spec: &'a ChartSpec,
    cache: &'a Cache,
}

impl<'a> ChartCanvas<'a> {
    pub fn new(spec: &'a ChartSpec, cache: &'a Cache) -> Self {
        Self { spec, cache }
    }
}

impl<Message> canvas::Program<Message> for ChartCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            if self.spec.labels.is_empty() {
                return;
            }
            match self.spec.kind {
                ChartKind::Bar => draw_bars(frame, self.spec),
                ChartKind::HorizontalBar => draw_horizontal_bars(frame, self.spec),
                ChartKind::Pie => draw_pie(frame, self.spec),
            }
        });
        vec![geometry]
    }
}

fn label(frame: &mut Frame, content: impl Into<String>, position: Point) {
    frame.fill_text(canvas::Text {
        content: content.into(),
        position,
        color: LABEL,
        size: Pixels(LABEL_SIZE),
        ..canvas::Text::default()
    });
}

fn draw_bars(frame: &mut Frame, spec: &ChartSpec) {
    let size = frame.size();
    let left = 48.0;
    let bottom = size.height - 24.0;
    let plot_height = (bottom - 12.0).max(1.0);
    let plot_width = (size.width - left - 8.0).max(1.0);

    let ticks = spec.axis_ticks(AXIS_TICKS);
    let top_value = ticks.last().map(|(value, _)| *value).unwrap_or(1.0).max(f64::EPSILON);
    let to_y = |value: f64| bottom - (value / top_value) as f32 * plot_height;

    for (value, text) in &ticks {
        let y = to_y(*value);
        frame.stroke(
            &Path::line(Point::new(left, y), Point::new(left + plot_width, y)),
            Stroke::default().with_color(GRID).with_width(1.0),
        );
        label(frame, text.clone(), Point::new(2.0, y - LABEL_SIZE / 2.0));
    }

    let slot = plot_width / spec.values.len() as f32;
    for (i, (value, name)) in spec.values.iter().zip(&spec.labels).enumerate() {
        let x = left + slot * i as f32 + slot * 0.15;
        let y = to_y(*value);
        frame.fill_rectangle(
            Point::new(x, y),
            Size::new(slot * 0.7, bottom - y),
            to_iced(spec.colors[i % spec.colors.len()]),
        );
        label(frame, spec.value_label(*value), Point::new(x, y - LABEL_SIZE - 2.0));
        label(frame, name.clone(), Point::new(x, bottom + 4.0));
    }
}

fn draw_horizontal_bars(frame: &mut Frame, spec: &ChartSpec) {
    let size = frame.size();
    let left = 110.0;
    let bottom = size.height - 20.0;
    let plot_width = (size.width - left - 16.0).max(1.0);
    let plot_height = (bottom - 4.0).max(1.0);

    let ticks = spec.axis_ticks(AXIS_TICKS);
    let top_value = ticks.last().map(|(value, _)| *value).unwrap_or(1.0).max(f64::EPSILON);
    let to_x = |value: f64| left + (value / top_value) as f32 * plot_width;

    for (value, text) in &ticks {
        let x = to_x(*value);
        frame.stroke(
            &Path::line(Point::new(x, 4.0), Point::new(x, bottom)),
            Stroke::default().with_color(GRID).with_width(1.0),
        );
        label(frame, text.clone(), Point::new(x - 6.0, bottom + 4.0));
    }

    let slot = plot_height / spec.values.len() as f32;
    for (i, (value, name)) in spec.values.iter().zip(&spec.labels).enumerate() {
        let y = 4.0 + slot * i as f32 + slot * 0.15;
        frame.fill_rectangle(
            Point::new(left, y),
            Size::new(to_x(*value) - left, slot * 0.7),
            to_iced(spec.colors[i % spec.colors.len()]),
        );
        label(frame, name.clone(), Point::new(4.0, y + slot * 0.35 - LABEL_SIZE / 2.0));
    }
}

fn draw_pie(frame: &mut Frame, spec: &ChartSpec) {
    let size = frame.size();
    let total = spec.total();
    if total <= 0.0 {
        return;
    }
    let legend_width = match spec.legend {
        Legend::Right => size.width * 0.45,
        Legend::Hidden => 0.0,
    };
    let pie_width = size.width - legend_width;
    let center = Point::new(pie_width / 2.0, size.height / 2.0);
    let radius = (pie_width.min(size.height) / 2.0 - 8.0).max(1.0);

    let mut start = -FRAC_PI_2;
    for (i, value) in spec.values.iter().enumerate() {
        let sweep = (*value / total) as f32 * TAU;
        let slice = Path::new(|builder| {
            builder.move_to(center);
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + sweep),
            });
            builder.close();
        });
        frame.fill(&slice, to_iced(spec.colors[i % spec.colors.len()]));
        frame.stroke(
            &slice,
            Stroke::default().with_color(iced::Color::WHITE).with_width(1.0),
        );
        start += sweep;
    }

    if spec.legend == Legend::Right {
        let origin = Point::new(pie_width + 8.0, 8.0);
        for (i, name) in spec.labels.iter().enumerate() {
            let row = origin + Vector::new(0.0, i as f32 * (LABEL_SIZE + 6.0));
            frame.fill_rectangle(
                row,
                Size::new(LABEL_SIZE, LABEL_SIZE),
                to_iced(spec.colors[i % spec.colors.len()]),
            );
            label(frame, name.clone(), row + Vector::new(LABEL_SIZE + 6.0, 0.0));
        }
    }
}
