use iced::widget::text::Shaping;
use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message, Tab};
use crate::theme;
use crate::util::truncate_str;

impl App {
    /// The signed-in layout: header, active screen, tab bar.
    pub(crate) fn view_main(&self) -> Element<'_, Message> {
        let body = match self.tab {
            Tab::Home => self.view_home(),
            Tab::Streaks => self.view_streaks(),
            Tab::Ticker => self.view_ticker(),
            Tab::Add => self.view_add_habit(),
        };

        column![
            self.view_header(),
            container(body).width(Length::Fill).height(Length::Fill),
            self.view_tab_bar(),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_header(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let title = text(self.tab.title())
            .size(colors.heading_size)
            .font(theme::BOLD)
            .color(colors.text_emphasized);

        let email = text(
            self.session
                .user()
                .map(|u| truncate_str(&u.email, 24))
                .unwrap_or_default(),
        )
        .size(colors.info_text)
        .color(colors.text_muted);

        let theme_glyph = if colors.is_dark { "☀" } else { "☾" };
        let theme_toggle = button(
            text(theme_glyph)
                .size(colors.label_text)
                .shaping(Shaping::Advanced),
        )
        .on_press(Message::ThemeToggle)
        .padding(6)
        .style(colors.chip_button_style(false));

        let logout = button(
            text("logOut")
                .size(colors.label_text)
                .font(theme::SEMIBOLD),
        )
        .on_press(Message::SignOut)
        .padding(6)
        .style(colors.raised_button_style());

        container(
            row![title, space::horizontal(), email, theme_toggle, logout]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .style(colors.chrome_style())
        .padding(12)
        .width(Length::Fill)
        .into()
    }

    fn view_tab_bar(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let mut bar = row![].spacing(4).width(Length::Fill);
        for tab in Tab::ALL {
            let active = tab == self.tab;
            let label = text(tab.tab_label()).size(colors.label_text).font(
                if active {
                    theme::BOLD
                } else {
                    theme::SEMIBOLD
                },
            );
            bar = bar.push(
                button(container(label).center_x(Length::Fill))
                    .on_press(Message::TabSelected(tab))
                    .padding(10)
                    .width(Length::FillPortion(1))
                    .style(colors.tab_button_style(active)),
            );
        }

        container(bar)
            .style(colors.chrome_style())
            .padding(8)
            .width(Length::Fill)
            .into()
    }
}
