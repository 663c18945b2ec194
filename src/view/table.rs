use serde::Serialize;

use crate::{
    core::{date_or_na, format_cost, status_class},
    models::Project,
};

pub const COLUMNS: [&str; 9] = [
    "Project",
    "Country",
    "Region",
    "Type",
    "Status",
    "Cost",
    "Start Date",
    "End Date",
    "Progress",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub country: String,
    pub region: String,
    pub project_type: String,
    pub status: String,
    pub status_class: String,
    pub cost: String,
    pub start_date: String,
    pub end_date: String,
    pub progress_percent: u8,
}

impl TableRow {
    pub fn for_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            country: project.country.clone(),
            region: project.region.clone(),
            project_type: project.project_type.clone(),
            status: project.status.clone(),
            status_class: status_class(&project.status),
            cost: format_cost(project.cost_million),
            start_date: date_or_na(project.start_date.as_deref()).to_string(),
            end_date: date_or_na(project.end_date.as_deref()).to_string(),
            progress_percent: project.progress_percent(),
        }
    }

    pub fn progress_fraction(&self) -> f32 {
        self.progress_percent as f32 / 100.0
    }
}

pub fn rows(filtered: &[Project]) -> Vec<TableRow> {
    filtered.iter().map(TableRow::for_project).collect()
}
