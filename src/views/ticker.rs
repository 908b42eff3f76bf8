use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Font, Length};

use crate::app::{App, Message};
use crate::theme;

impl App {
    /// The rolling-digit counter and its randomize button.
    pub(crate) fn view_ticker(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let mut digits = row![].spacing(6).align_y(Alignment::Center);
        for digit in self.ticker.frame_digits() {
            digits = digits.push(
                container(
                    text(digit.to_string())
                        .size(colors.ticker_size)
                        .font(Font::MONOSPACE)
                        .color(colors.text_emphasized),
                )
                .style(colors.card_style())
                .padding(8),
            );
        }

        let randomize = button(
            text("random Value")
                .size(colors.label_text)
                .font(theme::SEMIBOLD),
        )
        .on_press(Message::RandomizeTicker)
        .padding(10)
        .style(colors.raised_button_style());

        container(
            column![digits, randomize]
                .spacing(24)
                .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
