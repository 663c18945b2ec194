use std::collections::HashSet;

use crate::models::Project;

use super::store::distinct_in_order;

/// Which toggle group a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Type,
    Status,
}

#[derive(Debug, Clone, Default)]
struct ToggleGroup {
    /// Values in first-occurrence order, for control rendering only.
    order: Vec<String>,
    active: HashSet<String>,
}

impl ToggleGroup {
    fn all_active(order: Vec<String>) -> Self {
        let active = order.iter().cloned().collect();
        Self { order, active }
    }

    fn toggle(&mut self, value: &str) -> bool {
        if self.active.remove(value) {
            false
        } else {
            self.active.insert(value.to_string());
            true
        }
    }
}

/// Per-type and per-status inclusion sets that decide which filtered projects
/// reach the map.
#[derive(Debug, Clone, Default)]
pub struct VisibilityToggles {
    types: ToggleGroup,
    statuses: ToggleGroup,
}

impl VisibilityToggles {
    /// Every type and status observed in `projects` starts active.
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            types: ToggleGroup::all_active(distinct_in_order(projects, |p| &p.project_type)),
            statuses: ToggleGroup::all_active(distinct_in_order(projects, |p| &p.status)),
        }
    }

    fn group(&self, category: Category) -> &ToggleGroup {
        match category {
            Category::Type => &self.types,
            Category::Status => &self.statuses,
        }
    }

    /// Flip membership of `value`, returning whether it is now active.
    pub fn toggle(&mut self, category: Category, value: &str) -> bool {
        match category {
            Category::Type => self.types.toggle(value),
            Category::Status => self.statuses.toggle(value),
        }
    }

    pub fn is_active(&self, category: Category, value: &str) -> bool {
        self.group(category).active.contains(value)
    }

    pub fn is_visible(&self, project: &Project) -> bool {
        self.is_active(Category::Type, &project.project_type)
            && self.is_active(Category::Status, &project.status)
    }

    pub fn active_values(&self, category: Category) -> &HashSet<String> {
        &self.group(category).active
    }

    /// Toggle buttons to render for `category`, as `(value, active)` pairs.
    pub fn controls(&self, category: Category) -> Vec<(&str, bool)> {
        let group = self.group(category);
        group
            .order
            .iter()
            .map(|value| (value.as_str(), group.active.contains(value)))
            .collect()
    }
}
