mod chart;
mod map;

pub use chart::ChartCanvas;
pub use map::MapCanvas;

use iced::{
    Element, Theme, border,
    widget::{
        column, container,
        container::{Style, bordered_box},
        row, text,
    },
};

use crate::core::Color;

pub fn to_iced(color: Color) -> iced::Color {
    iced::Color::from_rgb8(color.r, color.g, color.b)
}

pub fn to_iced_alpha(color: Color, alpha: f32) -> iced::Color {
    iced::Color::from_rgba8(color.r, color.g, color.b, alpha)
}

/// Badge colors keyed by status class; unknown statuses are grey.
fn status_tone(status_class: &str) -> Color {
    let value = match status_class {
        "status-completed" | "status-complete" | "status-operational" => 0x21808D,
        "status-ongoing" | "status-active" | "status-construction" => 0x45B7D1,
        "status-planning" | "status-planned" | "status-proposed" => 0xE68161,
        "status-delayed" | "status-suspended" => 0xC0152F,
        _ => 0x626C71,
    };
    Color::from_u32(value)
}

pub fn status_badge<'a, Message: 'a>(
    status: &'a str,
    status_class: &'a str,
) -> Element<'a, Message> {
    let tone = status_tone(status_class);
    container(text(status).size(12))
        .padding([2, 8])
        .style(move |_theme: &Theme| Style {
            background: Some(to_iced_alpha(tone, 0.15).into()),
            text_color: Some(to_iced(tone)),
            border: border::rounded(10),
            ..Style::default()
        })
        .into()
}

/// Titled, bordered panel.
pub fn card<'a, Message: 'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(column![text(title).size(16), content.into()].spacing(10))
        .padding(12)
        .style(|theme: &Theme| bordered_box(theme).border(border::rounded(8).width(1)))
        .into()
}

pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        row![
            container(sidebar.into())
                .padding(12)
                .width(iced::Length::FillPortion(1))
                .height(iced::Length::Fill),
            container(main_content.into())
                .padding(12)
                .width(iced::Length::FillPortion(4)),
        ]
        .spacing(8),
    )
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}
