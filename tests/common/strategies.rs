use proptest::prelude::*;
use waterdash::Project;
use waterdash::core::{FilterPredicates, InvestmentBracket};

pub const REGIONS: [&str; 4] = ["Asia", "Europe", "Africa", ""];
pub const TYPES: [&str; 4] = ["Desalination", "Flood Management", "Water Storage", "Canals"];
pub const STATUSES: [&str; 3] = ["Ongoing", "Completed", "Planned"];

fn label(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(values).prop_map(str::to_string)
}

/// Costs cluster on the bracket boundaries often enough to matter.
pub fn cost_million() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(50.0),
        Just(200.0),
        Just(500.0),
        Just(0.0),
        -100.0f64..5_000.0,
    ]
}

pub fn project() -> impl Strategy<Value = Project> {
    (
        label(&REGIONS),
        label(&TYPES),
        label(&STATUSES),
        prop::option::of(cost_million()),
        0u32..=100,
        -85.0f64..85.0,
        -180.0f64..180.0,
    )
        .prop_map(
            |(region, project_type, status, cost_million, progress, latitude, longitude)| Project {
                name: String::new(),
                country: "Testland".to_string(),
                region,
                project_type,
                status,
                cost_million,
                beneficiaries: 1_000,
                progress,
                latitude,
                longitude,
                start_date: None,
                end_date: None,
            },
        )
}

/// Projects named by position so results can be compared by name.
pub fn projects() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(project(), 0..24).prop_map(|mut projects| {
        for (i, project) in projects.iter_mut().enumerate() {
            project.name = format!("Project {i}");
        }
        projects
    })
}

pub fn predicates() -> impl Strategy<Value = FilterPredicates> {
    (
        prop::option::of(label(&REGIONS)),
        prop::option::of(label(&TYPES)),
        prop::option::of(label(&STATUSES)),
        prop::option::of(prop::sample::select(InvestmentBracket::ALL.to_vec())),
    )
        .prop_map(|(region, project_type, status, investment)| FilterPredicates {
            region,
            project_type,
            status,
            investment,
        })
}
