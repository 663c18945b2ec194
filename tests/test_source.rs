//! Integration tests for loading the dataset.
//!
//! Tests cover:
//! - Resolving source strings to files and URLs
//! - Loading from a local file
//! - Loading over HTTP, including error statuses
//! - Malformed documents failing the bootstrap

mod common;

use std::path::PathBuf;

use common::*;
use waterdash::source::parse_projects;
use waterdash::view::{MapMarker, TableRow};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[test]
fn test_source_resolution() -> anyhow::Result<()> {
    assert_eq!(
        "projects.json".parse::<DatasetSource>()?,
        DatasetSource::File(PathBuf::from("projects.json"))
    );
    assert!(matches!(
        "https://example.org/data/projects.json".parse::<DatasetSource>()?,
        DatasetSource::Http(_)
    ));
    assert!(matches!(
        "".parse::<DatasetSource>(),
        Err(SourceError::InvalidLocation(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_bootstrap_from_file() -> anyhow::Result<()> {
    let file = write_dataset(SAMPLE_JSON);
    let source = DatasetSource::File(file.path().to_path_buf());

    let dashboard = Dashboard::bootstrap(&source).await?;
    assert_eq!(dashboard.rows().len(), 2);
    assert_eq!(dashboard.rows()[0].cost, "$750,500,000");
    assert_eq!(dashboard.rows()[1].end_date, "N/A");
    assert_eq!(dashboard.markers()[0].popup.beneficiaries, "1,200,000");
    Ok(())
}

#[tokio::test]
async fn test_file_url_is_read_from_disk() -> anyhow::Result<()> {
    let file = write_dataset(SAMPLE_JSON);
    let url = url::Url::from_file_path(file.path()).expect("absolute temp path");
    let source: DatasetSource = url.as_str().parse()?;

    let projects = source.fetch().await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].project_type, "Rural Water Access");
    Ok(())
}

#[tokio::test]
async fn test_missing_file_fails() {
    let source = DatasetSource::File(PathBuf::from("/definitely/not/here/projects.json"));
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(Dashboard::bootstrap(&source).await.is_err());
}

#[tokio::test]
async fn test_malformed_document_fails() {
    let file = write_dataset(r#"{"not": "a list"}"#);
    let source = DatasetSource::File(file.path().to_path_buf());
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Parse { .. }));
}

#[tokio::test]
async fn test_record_without_coordinates_fails() {
    let file = write_dataset(r#"[{"name": "Nowhere", "region": "Asia"}]"#);
    let source = DatasetSource::File(file.path().to_path_buf());
    assert!(matches!(
        source.fetch().await,
        Err(SourceError::Parse { .. })
    ));
}

#[tokio::test]
async fn test_optional_fields_default() -> anyhow::Result<()> {
    let file = write_dataset(r#"[{"name": "Bare", "latitude": 1.5, "longitude": 2.5}]"#);
    let source = DatasetSource::File(file.path().to_path_buf());

    let projects = source.fetch().await?;
    let project = &projects[0];
    assert_eq!(project.region, "");
    assert_eq!(project.cost_million, None);
    assert_eq!(project.start_date, None);

    let dashboard = Dashboard::new(projects);
    assert_eq!(dashboard.rows()[0].cost, "N/A");
    assert_eq!(dashboard.markers()[0].style.fill_color.to_hex_string(), "#1E90FF");
    Ok(())
}

#[tokio::test]
async fn test_null_fields_load_as_defaults() -> anyhow::Result<()> {
    let file = write_dataset(
        r#"[{"name": "Patchy", "region": null, "type": null, "status": "Ongoing",
            "cost_million": null, "beneficiaries": null, "progress": null,
            "latitude": 3.0, "longitude": 4.0, "end_date": null}]"#,
    );
    let source = DatasetSource::File(file.path().to_path_buf());

    let dashboard = Dashboard::bootstrap(&source).await?;
    let project = &dashboard.store().all_projects()[0];
    assert_eq!(project.region, "");
    assert_eq!(project.project_type, "");
    assert_eq!(project.beneficiaries, 0);
    assert_eq!(project.progress, 0);
    assert_eq!(dashboard.rows()[0].end_date, "N/A");
    assert_eq!(dashboard.markers().len(), 1);
    Ok(())
}

#[test]
fn test_fractional_counts_are_rounded() -> anyhow::Result<()> {
    let projects = parse_projects(
        br#"[{"name": "Half", "beneficiaries": 1500.4, "progress": 62.5,
              "latitude": 0.0, "longitude": 0.0},
             {"name": "Over", "progress": 140, "latitude": 0.0, "longitude": 0.0}]"#,
        "inline",
    )?;
    assert_eq!(projects[0].beneficiaries, 1500);
    assert_eq!(projects[0].progress, 63);
    assert_eq!(projects[1].progress, 100);

    let (latitude, longitude) = projects[0].position();
    let marker = MapMarker::for_project(&projects[0]);
    assert_eq!((marker.latitude, marker.longitude), (latitude, longitude));
    assert!((TableRow::for_project(&projects[0]).progress_fraction() - 0.63).abs() < 1e-6);
    Ok(())
}

#[tokio::test]
async fn test_bootstrap_over_http() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let source: DatasetSource = format!("{}/projects.json", server.uri()).parse()?;
    let dashboard = Dashboard::bootstrap(&source).await?;
    assert_eq!(dashboard.rows().len(), 2);
    assert_eq!(dashboard.aggregates().by_region.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_http_error_status_is_not_retried() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let source: DatasetSource = format!("{}/projects.json", server.uri()).parse()?;
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 500, .. }));
    Ok(())
}
