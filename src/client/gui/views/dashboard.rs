use iced::{Alignment, Element, Font, Length};
use iced::widget::{Button, Column, Container, Row, Space, Text};

use crate::client::gui::widgets::result_card::result_card;
use crate::client::models::app_state::WhimAppState;
use crate::client::models::messages::Message;

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn header_appearance(theme: &iced::Theme) -> iced::widget::container::Appearance {
    let palette = theme.extended_palette();
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        border: iced::Border {
            width: 0.0,
            color: iced::Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: iced::Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &WhimAppState) -> Element<Message> {
    let theme_button = Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(
                Text::new(if state.dark_mode { "☀️" } else { "🌙" })
                    .font(EMOJI_FONT)
                    .size(16),
            )
            .push(
                Text::new(if state.dark_mode { "Light" } else { "Dark" })
                    .font(BOLD_FONT)
                    .size(14),
            ),
    )
    .style(iced::theme::Button::Secondary)
    .on_press(Message::ToggleTheme)
    .padding(12)
    .width(Length::Fixed(100.0));

    let title_section = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(Text::new("Whim").font(BOLD_FONT).size(32))
        .push(Text::new("An activity idea and a cat fact, on demand").size(14));

    let header_row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fixed(100.0), Length::Fixed(0.0))) // Balance space
        .push(Container::new(title_section).width(Length::Fill).center_x())
        .push(theme_button);

    let header = Container::new(header_row)
        .padding([20, 24])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(header_appearance)));

    let mut cards = Column::new().spacing(20).padding([0, 24]);
    for slot in &state.slots {
        cards = cards.push(result_card(slot));
    }

    // The trigger stays disabled while any request is in flight; it comes
    // back whether the requests succeeded or not.
    let fetch_label = if state.controls_enabled() {
        "Get New Ideas"
    } else {
        "Fetching..."
    };
    let mut fetch_button = Button::new(Text::new(fetch_label).font(BOLD_FONT).size(16))
        .style(iced::theme::Button::Primary)
        .padding(14);
    if state.controls_enabled() {
        fetch_button = fetch_button.on_press(Message::FetchAll);
    }

    let content = Column::new()
        .spacing(24)
        .push(header)
        .push(cards)
        .push(Container::new(fetch_button).width(Length::Fill).center_x())
        .push(Space::new(Length::Fill, Length::Fixed(24.0)))
        .width(Length::Fill);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
