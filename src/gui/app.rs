use std::sync::Arc;

use iced::{Element, Task, Theme};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, loading_page::LoadingPageScreen},
};
use crate::{Dashboard, source::DatasetSource};

pub struct WaterdashApp {
    state: AppState,
    screen: ScreenData,
}

impl WaterdashApp {
    /// Start on the loading screen and kick off the single dataset fetch.
    pub fn new(source: DatasetSource) -> (Self, Task<Message>) {
        let fetch_source = source.clone();
        (
            Self {
                state: AppState::new(source),
                screen: ScreenData::LoadingPage(LoadingPageScreen),
            },
            Task::perform(
                async move { Dashboard::bootstrap(&fetch_source).await.map_err(Arc::new) },
                Message::Loaded,
            ),
        )
    }

    pub fn title(&self) -> String {
        "Water Infrastructure Projects Dashboard".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Open the dashboard window.
pub fn run(source: DatasetSource) -> iced::Result {
    iced::application(
        move || WaterdashApp::new(source.clone()),
        WaterdashApp::update,
        WaterdashApp::view,
    )
    .title(WaterdashApp::title)
    .theme(WaterdashApp::theme)
    .run()
}
