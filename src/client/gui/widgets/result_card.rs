use iced::{Element, Font, Length};
use iced::widget::{Column, Container, Text};

use crate::client::models::app_state::{SlotDisplay, SlotState};
use crate::client::models::messages::Message;

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn card_appearance(theme: &iced::Theme) -> iced::widget::container::Appearance {
    let palette = theme.extended_palette();
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        border: iced::Border {
            width: 0.0,
            color: iced::Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

/// One display target: the endpoint label plus whatever the slot currently
/// shows (cached, placeholder, fresh or error text).
pub fn result_card(slot: &SlotState) -> Element<'_, Message> {
    let mut body = Text::new(slot.display_line()).size(16);
    if matches!(slot.display, SlotDisplay::Error(_)) {
        body = body.style(iced::Color::from_rgb(0.8, 0.2, 0.2));
    }

    let content = Column::new()
        .spacing(12)
        .padding(24)
        .push(Text::new(slot.endpoint.label.as_str()).font(BOLD_FONT).size(20))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
