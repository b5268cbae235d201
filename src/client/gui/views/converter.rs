use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::{ConverterState, CopyLabel};
use crate::client::models::messages::Message;

// Color palette for the converter screen
const BG_MAIN: Color = Color::from_rgb(0.07, 0.07, 0.11); // Near-black slate
const CARD_BG: Color = Color::from_rgb(0.13, 0.13, 0.20); // Raised card body
const OUTPUT_BG: Color = Color::from_rgb(0.09, 0.09, 0.15); // Output well
const ACCENT_COLOR: Color = Color::from_rgb(0.55, 0.45, 0.95); // Violet accent
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.72);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn output_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(OUTPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.28, 0.28, 0.38),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &ConverterState) -> Element<Message> {
    let busy = state.busy;

    let title = Text::new("Prompt Converter")
        .size(36)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Turn rough prompts into production-grade system prompts")
        .size(15)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let prompt_field = Column::new()
        .spacing(8)
        .push(Text::new("Your prompt").size(14).style(TEXT_SECONDARY))
        .push(
            Container::new(
                TextInput::new(
                    "Describe the task you want a system prompt for",
                    &state.prompt,
                )
                .on_input(Message::PromptChanged)
                .width(Length::Fill)
                .padding(12)
                .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(output_appearance))),
        );

    // Busy requests keep the control disabled with an in-progress label.
    let convert_button = if busy {
        Button::new(
            Container::new(Text::new("Generating...").size(16).style(TEXT_SECONDARY))
                .width(Length::Fill)
                .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(14)
    } else {
        Button::new(
            Container::new(
                Text::new("Get System Prompt")
                    .font(BOLD_FONT)
                    .size(16)
                    .style(TEXT_PRIMARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitPrompt)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(14)
    };

    let hotkey_hint = Text::new("Ctrl/Cmd + Enter converts")
        .size(12)
        .style(TEXT_SECONDARY);

    let copy_button = {
        let label_style = match state.copy_label {
            CopyLabel::Copy => iced::theme::Button::Secondary,
            CopyLabel::Copied => iced::theme::Button::Positive,
            CopyLabel::Failed => iced::theme::Button::Destructive,
        };
        Button::new(Text::new(state.copy_label.to_string()).size(13))
            .on_press(Message::CopyOutput)
            .style(label_style)
            .padding([6, 14])
    };

    let output_header = Row::new()
        .align_items(Alignment::Center)
        .push(Text::new("System prompt").size(14).style(TEXT_SECONDARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(copy_button);

    let output_area = Container::new(
        Scrollable::new(
            Container::new(Text::new(&state.output).size(14).style(TEXT_PRIMARY))
                .width(Length::Fill)
                .padding(12),
        )
        .height(Length::Fixed(260.0)),
    )
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(output_appearance)));

    let card_content = Column::new()
        .width(Length::Fixed(640.0))
        .spacing(20)
        .padding(32)
        .push(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .width(Length::Fill)
                .push(title)
                .push(subtitle),
        )
        .push(prompt_field)
        .push(
            Column::new()
                .spacing(6)
                .align_items(Alignment::Center)
                .width(Length::Fill)
                .push(convert_button)
                .push(hotkey_hint),
        )
        .push(output_header)
        .push(output_area);

    let accent_rule = Container::new(Space::new(Length::Fixed(48.0), Length::Fixed(3.0))).style(
        iced::theme::Container::Custom(Box::new(|_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(ACCENT_COLOR)),
                border: iced::Border {
                    radius: 2.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })),
    );

    let card = Container::new(
        Column::new()
            .align_items(Alignment::Center)
            .push(accent_rule)
            .push(card_content),
    )
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .padding([16, 0, 0, 0]);

    Container::new(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y(),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}
