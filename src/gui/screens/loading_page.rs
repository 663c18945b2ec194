use std::convert::Infallible;

use iced::{
    Alignment, Element, Length, Task,
    widget::{column, container, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct LoadingPageScreen;

impl Screen for LoadingPageScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let source = container(text(state.source.to_string()).size(16))
            .padding(10)
            .style(container::bordered_box);
        let content = column![
            text("Water Infrastructure Projects").size(24),
            text("Fetching the project dataset from").size(14),
            source,
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
