use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::app::{App, Message};
use crate::store::records::Frequency;
use crate::theme;

impl App {
    /// The add-habit form: title, description, frequency, submit.
    pub(crate) fn view_add_habit(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let field_label = |label: &'static str| {
            text(label)
                .size(colors.label_text)
                .font(theme::SEMIBOLD)
                .color(colors.text_secondary)
        };

        let title_field = column![
            field_label("Title"),
            text_input("Enter the habit title...", &self.habit_form.title)
                .on_input(Message::TitleInput)
                .size(colors.body_text)
                .padding(10)
                .style(colors.input_style()),
        ]
        .spacing(6);

        let description_field = column![
            field_label("Description"),
            text_input("Enter Description...", &self.habit_form.description)
                .on_input(Message::DescriptionInput)
                .size(colors.body_text)
                .padding(10)
                .style(colors.input_style()),
        ]
        .spacing(6);

        let mut options = row![].spacing(8).width(Length::Fill);
        for frequency in Frequency::ALL {
            let selected = self.habit_form.frequency == frequency;
            let label = text(frequency.label()).size(colors.label_text).font(
                if selected {
                    theme::BOLD
                } else {
                    theme::SEMIBOLD
                },
            );
            options = options.push(
                button(container(label).center_x(Length::Fill))
                    .on_press(Message::FrequencyPicked(frequency))
                    .padding(10)
                    .width(Length::FillPortion(1))
                    .style(colors.chip_button_style(selected)),
            );
        }
        let frequency_field = column![field_label("Frequency"), options].spacing(6);

        let submit = button(
            container(
                text("Submit")
                    .size(colors.body_text)
                    .font(theme::BOLD),
            )
            .center_x(Length::Fill),
        )
        .on_press(Message::SubmitHabit)
        .padding(12)
        .width(Length::Fill)
        .style(colors.raised_button_style());

        container(
            column![title_field, description_field, frequency_field, submit]
                .spacing(16)
                .width(Length::Fill),
        )
        .padding(16)
        .center_y(Length::Fill)
        .width(Length::Fill)
        .into()
    }
}
