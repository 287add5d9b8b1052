use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Element, Font, Length};

use crate::client::gui::views::panel::panel_view;
use crate::client::models::app_state::QueryAppState;
use crate::client::models::messages::Message;

const TITLE: &str = "MoonbergGPT 🚀";
const PLACEHOLDER: &str = "What are the top 5 token exchanges?";

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

pub fn view(state: &QueryAppState) -> Element<'_, Message> {
    let can_submit = state.can_submit();

    let theme_toggle = Button::new(Text::new(state.theme.toggle_label()).font(EMOJI_FONT).size(14))
        .on_press(Message::ToggleTheme)
        .style(iced::theme::Button::Secondary)
        .padding([8, 12]);

    let top_row = Container::new(
        Row::new()
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(theme_toggle),
    )
    .width(Length::Fill)
    .padding([16, 20, 0, 20]);

    let title = Text::new(TITLE)
        .size(40)
        .font(BOLD_FONT)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    // stays editable while a request is running
    let input = TextInput::new(PLACEHOLDER, &state.query)
        .on_input(Message::QueryChanged)
        .on_submit(state.submit_message())
        .width(Length::Fill)
        .padding(12)
        .size(16);

    let mut submit_button = Button::new(Text::new(state.submit_label()).size(16))
        .style(iced::theme::Button::Primary)
        .padding([12, 16]);
    if can_submit {
        submit_button = submit_button.on_press(Message::SubmitQuery);
    }

    let input_row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .width(Length::Fixed(576.0))
        .push(input)
        .push(submit_button);

    let panel = Container::new(panel_view(state.panel(), state.theme)).width(Length::Fixed(672.0));

    let content = Column::new()
        .spacing(24)
        .align_items(Alignment::Center)
        .push(title)
        .push(input_row)
        .push(panel);

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top_row)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24)
                .center_x()
                .center_y(),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
