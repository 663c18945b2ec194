pub mod dashboard_page;
pub mod loading_page;

use std::fmt;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

impl<S: Screen> Clone for ScreenMessage<S>
where
    S::Message: Clone,
    S::ParentMessage: Clone,
{
    fn clone(&self) -> Self {
        match self {
            ScreenMessage::ScreenMessage(msg) => ScreenMessage::ScreenMessage(msg.clone()),
            ScreenMessage::ParentMessage(msg) => ScreenMessage::ParentMessage(msg.clone()),
        }
    }
}

impl<S: Screen> fmt::Debug for ScreenMessage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenMessage::ScreenMessage(msg) => f.debug_tuple("ScreenMessage").field(msg).finish(),
            ScreenMessage::ParentMessage(msg) => f.debug_tuple("ParentMessage").field(msg).finish(),
        }
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug)]
pub enum ScreenData {
    LoadingPage(loading_page::LoadingPageScreen),
    DashboardPage(dashboard_page::DashboardPageScreen),
    /// Bootstrap failed: nothing is rendered.
    Empty,
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let element: Element<'a, Message> = match self {
            ScreenData::LoadingPage(screen) => screen.view(state).map(Message::LoadingPage),
            ScreenData::DashboardPage(screen) => screen.view(state).map(Message::DashboardPage),
            ScreenData::Empty => iced::widget::container(iced::widget::column![]).into(),
        };
        element.map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Loaded(Ok(dashboard))) => {
                state.dashboard = Some(dashboard);
                *x = ScreenData::DashboardPage(dashboard_page::DashboardPageScreen::new());
                Task::none()
            }
            (x, Message::Loaded(Err(error))) => {
                tracing::error!("Failed to fetch project data: {error:#}");
                state.dashboard = None;
                *x = ScreenData::Empty;
                Task::none()
            }
            (ScreenData::DashboardPage(page), Message::DashboardPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::DashboardPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            _ => Task::none(),
        }
    }
}
