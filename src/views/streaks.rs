use iced::widget::text::Shaping;
use iced::widget::{column, container, row, space, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message};
use crate::theme;
use crate::util::truncate_str;

const TOP_N: usize = 3;

impl App {
    /// Derived streak stats: total, average, and the top streaks.
    pub(crate) fn view_streaks(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let stats = container(
            column![
                text(format!("Total Streak: {}", self.habits.total_streak()))
                    .size(colors.heading_size)
                    .font(theme::BOLD)
                    .color(colors.text_emphasized),
                text(format!("Average Streak: {:.1}", self.habits.average_streak()))
                    .size(colors.body_text)
                    .color(colors.text_secondary),
            ]
            .spacing(8),
        )
        .style(colors.card_style())
        .padding(16)
        .width(Length::Fill);

        let mut top_col = column![
            container(
                text("Top Streaks")
                    .size(colors.heading_size)
                    .font(theme::BOLD)
                    .color(colors.text_emphasized),
            )
            .center_x(Length::Fill),
        ]
        .spacing(12);

        let top = self.habits.top_streaks(TOP_N);
        if top.is_empty() {
            top_col = top_col.push(
                text("No habits yet.")
                    .size(colors.body_text)
                    .color(colors.text_muted),
            );
        } else {
            for (rank, habit) in top.iter().enumerate() {
                top_col = top_col.push(
                    row![
                        text(format!("{}. {}", rank + 1, truncate_str(&habit.title, 30)))
                            .size(colors.body_text)
                            .color(colors.text_primary),
                        space::horizontal(),
                        text(format!("🔥 {}", habit.streak_count))
                            .size(colors.body_text)
                            .font(theme::BOLD)
                            .color(colors.text_emphasized)
                            .shaping(Shaping::Advanced),
                    ]
                    .align_y(Alignment::Center),
                );
            }
        }

        let top_card = container(top_col)
            .style(colors.card_style())
            .padding(16)
            .width(Length::Fill);

        column![stats, top_card]
            .spacing(16)
            .padding(16)
            .width(Length::Fill)
            .into()
    }
}
