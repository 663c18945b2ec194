use std::{convert::Infallible, fmt};

use iced::{
    Element, Length, Task,
    widget::{
        Column, button, canvas, canvas::Cache, column, container, pick_list, progress_bar, row,
        scrollable, text,
    },
};

use crate::{
    Dashboard,
    core::{Category, FilterField},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{ChartCanvas, MapCanvas, card, layout, status_badge},
    },
    view::{COLUMNS, ChartSpec, Popup, TableRow},
};

/// One entry of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    All,
    Value(String),
}

impl Choice {
    fn as_selection(&self) -> Option<&str> {
        match self {
            Choice::All => None,
            Choice::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("All"),
            Choice::Value(value) => f.write_str(value),
        }
    }
}

#[derive(Default)]
struct ChartCaches {
    investment: Cache,
    projects: Cache,
    status: Cache,
}

#[derive(Default)]
pub struct DashboardPageScreen {
    /// Index into the current marker list.
    selected_marker: Option<usize>,
    charts: ChartCaches,
}

impl fmt::Debug for DashboardPageScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardPageScreen")
            .field("selected_marker", &self.selected_marker)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum DashboardPageMessage {
    FilterChanged(FilterField, Choice),
    Toggled(Category, String),
    MarkerSelected(Option<usize>),
}

impl DashboardPageScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn filter_control<'a>(
        &'a self,
        dashboard: &'a Dashboard,
        field: FilterField,
    ) -> Element<'a, ScreenMessage<Self>> {
        let options: Vec<Choice> = std::iter::once(Choice::All)
            .chain(dashboard.filter_options(field).into_iter().map(Choice::Value))
            .collect();
        let selected = dashboard
            .predicates()
            .get(field)
            .map(Choice::Value)
            .unwrap_or(Choice::All);
        column![
            text(field.label()).size(12),
            pick_list(options, Some(selected), move |choice| {
                ScreenMessage::ScreenMessage(DashboardPageMessage::FilterChanged(field, choice))
            })
            .width(Length::Fill),
        ]
        .spacing(4)
        .into()
    }

    fn toggle_group<'a>(
        &'a self,
        dashboard: &'a Dashboard,
        category: Category,
        title: &'a str,
    ) -> Element<'a, ScreenMessage<Self>> {
        let buttons = dashboard
            .toggles()
            .controls(category)
            .into_iter()
            .fold(Column::new().spacing(4), |col, (value, active)| {
                col.push(
                    button(text(value).size(12))
                        .width(Length::Fill)
                        .style(if active {
                            button::primary
                        } else {
                            button::secondary
                        })
                        .on_press(ScreenMessage::ScreenMessage(DashboardPageMessage::Toggled(
                            category,
                            value.to_string(),
                        ))),
                )
            });
        column![text(title).size(14), buttons].spacing(6).into()
    }

    fn sidebar<'a>(&'a self, dashboard: &'a Dashboard) -> Element<'a, ScreenMessage<Self>> {
        let filters = FilterField::ALL
            .into_iter()
            .fold(Column::new().spacing(8), |col, field| {
                col.push(self.filter_control(dashboard, field))
            });
        scrollable(
            column![
                text("Filters").size(18),
                filters,
                self.toggle_group(dashboard, Category::Type, "Project Types"),
                self.toggle_group(dashboard, Category::Status, "Project Status"),
            ]
            .spacing(16),
        )
        .into()
    }

    fn map_panel<'a>(&'a self, dashboard: &'a Dashboard) -> Element<'a, ScreenMessage<Self>> {
        let map = canvas(MapCanvas::new(
            dashboard.map_view(),
            dashboard.markers(),
            self.selected_marker,
            |hit: Option<usize>| {
                ScreenMessage::ScreenMessage(DashboardPageMessage::MarkerSelected(hit))
            },
        ))
        .width(Length::Fill)
        .height(Length::Fixed(360.0));

        let popup = self
            .selected_marker
            .and_then(|i| dashboard.markers().get(i))
            .map(|marker| popup_view(&marker.popup));

        let content = match popup {
            Some(popup) => row![
                container(map).width(Length::FillPortion(3)),
                container(popup).width(Length::FillPortion(1)),
            ]
            .spacing(12)
            .into(),
            None => Element::from(map),
        };
        card("Project Locations", content)
    }

    fn charts_panel<'a>(&'a self, dashboard: &'a Dashboard) -> Element<'a, ScreenMessage<Self>> {
        let charts = dashboard.charts();
        row![
            chart_card(&charts.investment, &self.charts.investment),
            chart_card(&charts.projects, &self.charts.projects),
            chart_card(&charts.status, &self.charts.status),
        ]
        .spacing(12)
        .into()
    }

    fn table_panel<'a>(&'a self, dashboard: &'a Dashboard) -> Element<'a, ScreenMessage<Self>> {
        let header = COLUMNS
            .into_iter()
            .fold(row![].spacing(8), |r, title| {
                r.push(text(title).size(12).width(Length::FillPortion(1)))
            });
        let rows = dashboard
            .rows()
            .iter()
            .fold(Column::new().spacing(6), |col, row| col.push(table_row(row)));
        card(
            "Projects",
            column![
                header,
                scrollable(rows).height(Length::Fixed(280.0)),
                text(format!(
                    "Showing {} of {} projects",
                    dashboard.rows().len(),
                    dashboard.store().all_projects().len()
                ))
                .size(12),
            ]
            .spacing(8),
        )
    }
}

fn chart_card<'a, Message: 'a>(spec: &'a ChartSpec, cache: &'a Cache) -> Element<'a, Message> {
    container(card(
        spec.title,
        canvas(ChartCanvas::new(spec, cache))
            .width(Length::Fill)
            .height(Length::Fixed(220.0)),
    ))
    .width(Length::FillPortion(1))
    .into()
}

fn table_row<'a, Message: 'a>(row: &'a TableRow) -> Element<'a, Message> {
    let cell = |content: &'a str| text(content).size(12).width(Length::FillPortion(1));
    row![
        cell(&row.name),
        cell(&row.country),
        cell(&row.region),
        cell(&row.project_type),
        container(status_badge(&row.status, &row.status_class)).width(Length::FillPortion(1)),
        cell(&row.cost),
        cell(&row.start_date),
        cell(&row.end_date),
        column![
            progress_bar(0.0..=1.0, row.progress_fraction()),
            text(format!("{}%", row.progress_percent)).size(11),
        ]
        .width(Length::FillPortion(1)),
    ]
    .spacing(8)
    .into()
}

fn popup_view<'a, Message: 'a>(popup: &'a Popup) -> Element<'a, Message> {
    let lines = popup
        .lines()
        .into_iter()
        .fold(Column::new().spacing(2), |col, (label, value)| {
            col.push(text(format!("{label}: {value}")).size(12))
        });
    column![
        text(&popup.title).size(15),
        lines,
        progress_bar(0.0..=1.0, popup.progress_fraction),
    ]
    .spacing(6)
    .into()
}

impl Screen for DashboardPageScreen {
    type Message = DashboardPageMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(dashboard) = state.dashboard.as_ref() else {
            return container(column![]).into();
        };
        layout(
            self.sidebar(dashboard),
            scrollable(
                column![
                    text("Water Infrastructure Projects").size(24),
                    self.map_panel(dashboard),
                    self.charts_panel(dashboard),
                    self.table_panel(dashboard),
                ]
                .spacing(16),
            ),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let Some(dashboard) = state.dashboard.as_mut() else {
            return Task::none();
        };
        match message {
            DashboardPageMessage::FilterChanged(field, choice) => {
                if let Err(e) = dashboard.set_filter(field, choice.as_selection()) {
                    tracing::warn!("Ignoring filter change: {e:#}");
                }
                self.selected_marker = None;
            }
            DashboardPageMessage::Toggled(category, value) => {
                dashboard.toggle(category, &value);
                self.selected_marker = None;
            }
            DashboardPageMessage::MarkerSelected(hit) => {
                self.selected_marker = hit;
            }
        }
        Task::none()
    }
}
