use iced::widget::{button, column, container, mouse_area, text, text_input};
use iced::{mouse, Alignment, Element, Length};

use crate::app::{App, Message};
use crate::theme;

impl App {
    /// The sign-in/sign-up card, shown whenever no user is signed in.
    pub(crate) fn view_auth(&self) -> Element<'_, Message> {
        let colors = &self.colors;
        let signing_up = self.auth_form.signing_up;

        let heading = text(if signing_up { "Sign-up" } else { "Sign-In" })
            .size(colors.heading_size)
            .color(colors.text_primary);

        let email = text_input("put your email here...", &self.auth_form.email)
            .on_input(Message::EmailInput)
            .on_submit(Message::SubmitAuth)
            .size(colors.body_text)
            .padding(10)
            .style(colors.input_style());

        let password = text_input("put your password here...", &self.auth_form.password)
            .on_input(Message::PasswordInput)
            .on_submit(Message::SubmitAuth)
            .secure(true)
            .size(colors.body_text)
            .padding(10)
            .style(colors.input_style());

        let submit = button(
            container(
                text(if signing_up { "Sign-up" } else { "Sign-In" })
                    .size(colors.body_text)
                    .font(theme::BOLD),
            )
            .center_x(Length::Fill),
        )
        .on_press(Message::SubmitAuth)
        .padding(10)
        .width(Length::Fill)
        .style(colors.raised_button_style());

        let toggle_copy = if signing_up {
            "Already have an account? Sign in"
        } else {
            "Don't have an Account? Sign up"
        };
        let toggle = mouse_area(
            text(toggle_copy)
                .size(colors.label_text)
                .color(colors.text_secondary),
        )
        .on_press(Message::ToggleAuthMode)
        .interaction(mouse::Interaction::Pointer);

        let card = container(
            column![heading, email, password, submit, toggle]
                .spacing(16)
                .width(280)
                .align_x(Alignment::Center),
        )
        .style(colors.raised_style())
        .padding(24);

        let version = text(self.info_line())
            .size(colors.info_text)
            .color(colors.text_muted);

        container(
            column![card, version]
                .spacing(12)
                .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
