mod common;

use common::*;
use waterdash::view::{ChartKind, Charts, Legend};

#[test]
fn test_region_totals_are_in_billions() {
    let projects = vec![
        make_project("A", "Asia", "Desalination", "Ongoing", 500.0),
        make_project("B", "Asia", "Desalination", "Ongoing", 1500.0),
    ];
    let aggregates = aggregate(&projects);
    assert_eq!(aggregates.by_region.get("Asia"), Some(2.0));
    assert_eq!(aggregates.by_region.len(), 1);
}

#[test]
fn test_counts_keep_first_occurrence_order() {
    let aggregates = aggregate(&sample_projects());

    assert_eq!(
        aggregates.by_status.labels(),
        vec!["Completed", "Planning", "Ongoing"]
    );
    assert_eq!(aggregates.by_status.values(), vec![2, 2, 3]);
    assert_eq!(aggregates.by_type.get("Water Storage"), Some(2));
    assert_eq!(aggregates.by_type.get("Smart Water Networks"), None);
}

#[test]
fn test_empty_dataset_yields_empty_aggregates() {
    let aggregates = aggregate(&[]);
    assert!(aggregates.by_region.is_empty());
    assert!(aggregates.by_type.is_empty());
    assert!(aggregates.by_status.is_empty());
}

#[test]
fn test_missing_cost_adds_nothing() {
    let mut project = make_project("No Cost", "Africa", "Water Storage", "Planning", 0.0);
    project.cost_million = None;
    let aggregates = aggregate(&[project]);
    assert_eq!(aggregates.by_region.get("Africa"), Some(0.0));
    assert_eq!(aggregates.by_type.get("Water Storage"), Some(1));
}

#[test]
fn test_charts_follow_aggregates() {
    let charts = Charts::from_aggregates(&aggregate(&three_projects()));

    assert_eq!(charts.investment.kind, ChartKind::Bar);
    assert_eq!(charts.investment.labels, vec!["Asia", "Europe"]);
    assert_eq!(charts.investment.values, vec![2.0, 0.12]);
    assert_eq!(charts.investment.value_label(2.0), "$2.0B");
    assert_eq!(charts.investment.colors[0].to_hex_string(), "#1FB8CD");
    assert_eq!(charts.investment.legend, Legend::Hidden);

    assert_eq!(charts.projects.kind, ChartKind::Pie);
    assert_eq!(charts.projects.colors[0].to_hex_string(), "#FF6B35");
    assert_eq!(charts.projects.legend, Legend::Right);

    assert_eq!(charts.status.kind, ChartKind::HorizontalBar);
    assert_eq!(charts.status.labels, vec!["Ongoing", "Completed"]);
    assert_eq!(charts.status.values, vec![2.0, 1.0]);
    assert!(charts.status.axis_ticks(4).iter().all(|(_, label)| label.ends_with('%')));
}

#[test]
fn test_unknown_type_uses_fallback_color() {
    let projects = vec![make_project("X", "Asia", "Cloud Seeding", "Ongoing", 1.0)];
    let charts = Charts::from_aggregates(&aggregate(&projects));
    assert_eq!(charts.projects.colors[0].to_hex_string(), "#1E90FF");
}

#[test]
fn test_region_palette_cycles() {
    let regions = ["A", "B", "C", "D", "E", "F", "G"];
    let projects: Vec<Project> = regions
        .iter()
        .map(|r| make_project(r, r, "Water Storage", "Ongoing", 10.0))
        .collect();
    let charts = Charts::from_aggregates(&aggregate(&projects));
    assert_eq!(charts.investment.colors.len(), 7);
    assert_eq!(charts.investment.colors[6], charts.investment.colors[0]);
}
