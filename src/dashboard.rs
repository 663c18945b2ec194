use anyhow::Context;

use crate::{
    core::{
        Aggregates, Category, DatasetStore, FilterField, FilterPredicates, VisibilityToggles,
        aggregate,
    },
    models::Project,
    source::DatasetSource,
    view::{self, Charts, MapMarker, MapView, TableRow},
};

/// Application state: the dataset, the user's selections and the rendered
/// view models derived from them.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: DatasetStore,
    predicates: FilterPredicates,
    toggles: VisibilityToggles,
    aggregates: Aggregates,
    charts: Charts,
    map_view: MapView,
    markers: Vec<MapMarker>,
    rows: Vec<TableRow>,
}

impl Dashboard {
    pub fn new(projects: Vec<Project>) -> Self {
        let store = DatasetStore::new(projects);
        let toggles = VisibilityToggles::from_projects(store.all_projects());
        let aggregates = aggregate(store.all_projects());
        let charts = Charts::from_aggregates(&aggregates);
        let mut dashboard = Self {
            store,
            predicates: FilterPredicates::default(),
            toggles,
            aggregates,
            charts,
            map_view: MapView::default(),
            markers: Vec::new(),
            rows: Vec::new(),
        };
        dashboard.render_table();
        dashboard.render_markers();
        tracing::info!(
            projects = dashboard.store.all_projects().len(),
            regions = dashboard.aggregates.by_region.len(),
            "dashboard initialized"
        );
        dashboard
    }

    /// Fetch the dataset once and build the dashboard from it.
    pub async fn bootstrap(source: &DatasetSource) -> anyhow::Result<Self> {
        tracing::info!(%source, "loading project data");
        let projects = source
            .fetch()
            .await
            .with_context(|| format!("Failed to fetch project data from {source}"))?;
        Ok(Self::new(projects))
    }

    /// Change one dropdown. Rebuilds the table and the markers.
    pub fn set_filter(&mut self, field: FilterField, selection: Option<&str>) -> anyhow::Result<()> {
        self.predicates.set(field, selection)?;
        self.store.refilter(&self.predicates);
        tracing::debug!(
            ?field,
            ?selection,
            matched = self.store.filtered_projects().len(),
            "filters applied"
        );
        self.render_table();
        self.render_markers();
        Ok(())
    }

    /// Flip a type or status toggle. Only the markers are rebuilt.
    pub fn toggle(&mut self, category: Category, value: &str) -> bool {
        let active = self.toggles.toggle(category, value);
        tracing::debug!(?category, value, active, "visibility toggled");
        self.render_markers();
        active
    }

    fn render_table(&mut self) {
        self.rows = view::rows(self.store.filtered_projects());
    }

    fn render_markers(&mut self) {
        self.markers = view::markers(self.store.filtered_projects(), &self.toggles);
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn predicates(&self) -> &FilterPredicates {
        &self.predicates
    }

    pub fn toggles(&self) -> &VisibilityToggles {
        &self.toggles
    }

    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    pub fn charts(&self) -> &Charts {
        &self.charts
    }

    pub fn map_view(&self) -> &MapView {
        &self.map_view
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Dropdown choices for a filter, not including the "All" entry.
    pub fn filter_options(&self, field: FilterField) -> Vec<String> {
        match field {
            FilterField::Region => self.store.regions(),
            FilterField::Type => self.store.types(),
            FilterField::Status => self.store.statuses(),
            FilterField::Investment => crate::core::InvestmentBracket::ALL
                .iter()
                .map(|bracket| bracket.to_string())
                .collect(),
        }
    }
}
