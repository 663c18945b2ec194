use std::io::Write;

use tempfile::NamedTempFile;
use waterdash::Project;

/// Builds a project with the fields the dashboard filters and groups on.
/// Everything else gets plausible defaults.
pub fn make_project(
    name: &str,
    region: &str,
    project_type: &str,
    status: &str,
    cost_million: f64,
) -> Project {
    Project {
        name: name.to_string(),
        country: "Testland".to_string(),
        region: region.to_string(),
        project_type: project_type.to_string(),
        status: status.to_string(),
        cost_million: Some(cost_million),
        beneficiaries: 125_000,
        progress: 40,
        latitude: 10.0,
        longitude: 20.0,
        start_date: Some("2022-01-01".to_string()),
        end_date: None,
    }
}

/// Three projects across two regions and two statuses.
pub fn three_projects() -> Vec<Project> {
    vec![
        make_project("Coastal Desal Plant", "Asia", "Desalination", "Ongoing", 500.0),
        make_project("Delta Flood Barrier", "Europe", "Flood Management", "Completed", 120.0),
        make_project("Valley Irrigation", "Asia", "Irrigation Systems", "Ongoing", 1500.0),
    ]
}

/// A mixed dataset covering every investment bracket.
pub fn sample_projects() -> Vec<Project> {
    vec![
        make_project("Small Wells", "Africa", "Rural Water Access", "Completed", 12.0),
        make_project("Boundary Fifty", "Africa", "Rural Water Access", "Planning", 50.0),
        make_project("City Mains", "Europe", "Water Distribution", "Ongoing", 180.0),
        make_project("Boundary Two Hundred", "Asia", "Water Storage", "Ongoing", 200.0),
        make_project("Just Over", "Asia", "Water Storage", "Planning", 200.01),
        make_project("Reuse Hub", "Americas", "Water Recycling", "Completed", 450.0),
        make_project("Mega Desal", "Middle East", "Desalination", "Ongoing", 2100.0),
    ]
}

pub const SAMPLE_JSON: &str = r#"[
  {
    "name": "Coastal Desal Plant",
    "country": "Oman",
    "region": "Middle East",
    "type": "Desalination",
    "status": "Ongoing",
    "cost_million": 750.5,
    "beneficiaries": 1200000,
    "progress": 65,
    "latitude": 23.6,
    "longitude": 58.5,
    "start_date": "2021-03-01",
    "end_date": "2025-12-31"
  },
  {
    "name": "Village Wells",
    "country": "Kenya",
    "region": "Africa",
    "type": "Rural Water Access",
    "status": "Completed",
    "cost_million": 4.2,
    "beneficiaries": 35000,
    "progress": 100,
    "latitude": -1.3,
    "longitude": 36.8
  }
]"#;

/// Writes `contents` to a temporary `.json` file, kept alive by the handle.
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp dataset file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write dataset");
    file
}
