use std::collections::HashSet;

use crate::models::Project;

use super::filter::{FilterPredicates, apply_filters};

/// The loaded dataset and its current filtered view.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    all_projects: Vec<Project>,
    filtered_projects: Vec<Project>,
}

impl DatasetStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            filtered_projects: projects.clone(),
            all_projects: projects,
        }
    }

    pub fn all_projects(&self) -> &[Project] {
        &self.all_projects
    }

    pub fn filtered_projects(&self) -> &[Project] {
        &self.filtered_projects
    }

    /// Recompute the filtered view from the full dataset.
    pub fn refilter(&mut self, predicates: &FilterPredicates) -> &[Project] {
        self.filtered_projects = apply_filters(&self.all_projects, predicates);
        &self.filtered_projects
    }

    pub fn regions(&self) -> Vec<String> {
        distinct_in_order(&self.all_projects, |p| &p.region)
    }

    pub fn types(&self) -> Vec<String> {
        distinct_in_order(&self.all_projects, |p| &p.project_type)
    }

    pub fn statuses(&self) -> Vec<String> {
        distinct_in_order(&self.all_projects, |p| &p.status)
    }
}

/// Distinct values of a field, in order of first occurrence.
pub(crate) fn distinct_in_order<F>(projects: &[Project], field: F) -> Vec<String>
where
    F: Fn(&Project) -> &String,
{
    let mut seen = HashSet::new();
    projects
        .iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}
