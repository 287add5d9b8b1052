use iced::widget::{Container, Scrollable, Space, Text};
use iced::{Color, Element, Font, Length};

use crate::client::models::messages::Message;
use crate::client::models::ui_state::{Panel, ThemeMode};

struct PanelPalette {
    card_bg: Color,
    inner_bg: Color,
    border: Color,
    error_text: Color,
    response_text: Color,
}

fn palette(theme: ThemeMode) -> PanelPalette {
    match theme {
        ThemeMode::Light => PanelPalette {
            card_bg: Color::from_rgb(0.95, 0.95, 0.96),
            inner_bg: Color::from_rgb(0.90, 0.90, 0.92),
            border: Color::from_rgb(0.62, 0.62, 0.66),
            error_text: Color::from_rgb(0.86, 0.15, 0.15),
            response_text: Color::from_rgb(0.08, 0.50, 0.20),
        },
        ThemeMode::Dark => PanelPalette {
            card_bg: Color::from_rgb(0.16, 0.17, 0.21),
            inner_bg: Color::from_rgb(0.11, 0.12, 0.15),
            border: Color::from_rgb(0.30, 0.31, 0.38),
            error_text: Color::from_rgb(1.0, 0.42, 0.42),
            response_text: Color::from_rgb(0.35, 0.86, 0.52),
        },
    }
}

/// Error panel, response panel, or nothing.
pub fn panel_view(panel: Panel<'_>, theme: ThemeMode) -> Element<'_, Message> {
    let colors = palette(theme);

    let body: Element<'_, Message> = match panel {
        Panel::Empty => {
            return Space::new(Length::Fill, Length::Fixed(0.0)).into();
        }
        Panel::Error(message) => Text::new(message).size(16).style(colors.error_text).into(),
        Panel::Response(response) => {
            let inner_bg = colors.inner_bg;
            let border = colors.border;
            // verbatim, keeps line breaks of tabular answers
            let pre = Container::new(
                Text::new(response)
                    .font(Font::MONOSPACE)
                    .size(14)
                    .style(colors.response_text),
            )
            .width(Length::Fill)
            .padding(16)
            .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
                iced::widget::container::Appearance {
                    background: Some(iced::Background::Color(inner_bg)),
                    border: iced::Border {
                        width: 1.0,
                        color: border,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }
            })));
            Scrollable::new(pre).height(Length::Shrink).into()
        }
    };

    let card_bg = colors.card_bg;
    Container::new(body)
        .width(Length::Fill)
        .max_height(420.0)
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(card_bg)),
                border: iced::Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
                ..Default::default()
            }
        })))
        .into()
}
