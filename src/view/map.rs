use serde::Serialize;

use crate::{
    core::{
        Color, VisibilityToggles, date_or_na, format_cost, group_thousands, type_color,
    },
    models::Project,
};

/// Initial map viewport and tile source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// `(latitude, longitude)`.
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url_template: String,
    pub attribution: String,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: (20.0, 0.0),
            zoom: 2,
            tile_url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: f32,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub opacity: f32,
    pub fill_opacity: f32,
}

impl MarkerStyle {
    pub fn for_type(project_type: &str) -> Self {
        Self {
            radius: 8.0,
            fill_color: type_color(project_type),
            stroke_color: Color::WHITE,
            stroke_width: 2.0,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}

/// Text shown when a marker is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub country: String,
    pub project_type: String,
    pub status: String,
    pub cost: String,
    pub beneficiaries: String,
    pub start_date: String,
    pub end_date: String,
    pub progress_percent: u8,
    /// Width of the progress bar fill, 0.0..=1.0.
    pub progress_fraction: f32,
}

impl Popup {
    pub fn for_project(project: &Project) -> Self {
        Self {
            title: project.name.clone(),
            country: project.country.clone(),
            project_type: project.project_type.clone(),
            status: project.status.clone(),
            cost: format_cost(project.cost_million),
            beneficiaries: group_thousands(project.beneficiaries),
            start_date: date_or_na(project.start_date.as_deref()).to_string(),
            end_date: date_or_na(project.end_date.as_deref()).to_string(),
            progress_percent: project.progress_percent(),
            progress_fraction: project.progress_fraction(),
        }
    }

    /// `(label, value)` lines in display order.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Country", self.country.clone()),
            ("Type", self.project_type.clone()),
            ("Status", self.status.clone()),
            ("Cost", self.cost.clone()),
            ("Beneficiaries", self.beneficiaries.clone()),
            ("Start Date", self.start_date.clone()),
            ("End Date", self.end_date.clone()),
            ("Progress", format!("{}%", self.progress_percent)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub style: MarkerStyle,
    pub popup: Popup,
}

impl MapMarker {
    pub fn for_project(project: &Project) -> Self {
        let (latitude, longitude) = project.position();
        Self {
            latitude,
            longitude,
            style: MarkerStyle::for_type(&project.project_type),
            popup: Popup::for_project(project),
        }
    }
}

/// Build the full marker set for the filtered projects that pass the toggles.
pub fn markers(filtered: &[Project], toggles: &VisibilityToggles) -> Vec<MapMarker> {
    filtered
        .iter()
        .filter(|project| toggles.is_visible(project))
        .map(MapMarker::for_project)
        .collect()
}
