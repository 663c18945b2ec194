use std::f64::consts::PI;

use iced::{
    Pixels, Point, Rectangle, Renderer, Size, Theme, mouse,
    widget::canvas::{self, Event, Frame, Geometry, Path, Stroke},
};

use super::{to_iced, to_iced_alpha};
use crate::view::{MapMarker, MapView};

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128;
const OCEAN: iced::Color = iced::Color::from_rgb(0.85, 0.92, 0.96);
const GRID: iced::Color = iced::Color::from_rgb(0.70, 0.80, 0.86);

/// Web-Mercator projection of the marker set around the view center.
///
/// Tile imagery is left to the tile provider; the canvas draws a graticule in
/// its place and the attribution in the corner.
pub struct MapCanvas<'a, F> {
    view: &'a MapView,
    markers: &'a [MapMarker],
    selected: Option<usize>,
    on_select: F,
}

impl<'a, F> MapCanvas<'a, F> {
    pub fn new(
        view: &'a MapView,
        markers: &'a [MapMarker],
        selected: Option<usize>,
        on_select: F,
    ) -> Self {
        Self {
            view,
            markers,
            selected,
            on_select,
        }
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powi(self.view.zoom as i32)
    }

    fn world_point(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let size = self.world_size();
        let lat = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (longitude + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
        (x, y)
    }

    /// Screen position of a coordinate inside a canvas of `size`.
    fn project(&self, size: Size, latitude: f64, longitude: f64) -> Point {
        let (cx, cy) = self.world_point(self.view.center.0, self.view.center.1);
        let (x, y) = self.world_point(latitude, longitude);
        Point::new(
            (x - cx + size.width as f64 / 2.0) as f32,
            (y - cy + size.height as f64 / 2.0) as f32,
        )
    }

    fn hit(&self, size: Size, position: Point) -> Option<usize> {
        self.markers
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                let center = self.project(size, marker.latitude, marker.longitude);
                (i, center.distance(position), marker.style.radius)
            })
            .filter(|(_, distance, radius)| *distance <= radius + 2.0)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _, _)| i)
    }

    fn draw_graticule(&self, frame: &mut Frame) {
        let size = frame.size();
        let stroke = || Stroke::default().with_color(GRID).with_width(1.0);
        for lon in (-180..=180).step_by(30) {
            let top = self.project(size, MAX_LATITUDE, lon as f64);
            let bottom = self.project(size, -MAX_LATITUDE, lon as f64);
            frame.stroke(&Path::line(top, bottom), stroke());
        }
        for lat in (-60..=60).step_by(30) {
            let left = self.project(size, lat as f64, -180.0);
            let right = self.project(size, lat as f64, 180.0);
            frame.stroke(&Path::line(left, right), stroke());
        }
    }
}

impl<'a, F, Message> canvas::Program<Message> for MapCanvas<'a, F>
where
    F: Fn(Option<usize>) -> Message,
{
    type State = ();

    fn update(
        &self,
        _state: &mut (),
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let hit = self.hit(bounds.size(), position);
                Some(canvas::Action::publish((self.on_select)(hit)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, frame.size(), OCEAN);
        self.draw_graticule(&mut frame);

        let size = frame.size();
        for (i, marker) in self.markers.iter().enumerate() {
            let center = self.project(size, marker.latitude, marker.longitude);
            let style = &marker.style;
            let circle = Path::circle(center, style.radius);
            frame.fill(&circle, to_iced_alpha(style.fill_color, style.fill_opacity));
            let stroke_width = if self.selected == Some(i) {
                style.stroke_width * 2.0
            } else {
                style.stroke_width
            };
            frame.stroke(
                &circle,
                Stroke::default()
                    .with_color(to_iced_alpha(style.stroke_color, style.opacity))
                    .with_width(stroke_width),
            );
        }

        frame.fill_text(canvas::Text {
            content: self.view.attribution.clone(),
            position: Point::new(8.0, size.height - 18.0),
            color: to_iced(crate::core::Color::from_u32(0x333333)),
            size: Pixels(11.0),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &(),
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.hit(bounds.size(), position).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}
