use iced::widget::text::Shaping;
use iced::widget::{button, column, container, mouse_area, row, scrollable, space, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message};
use crate::store::records::Habit;
use crate::theme;
use crate::util::truncate_str;

const TITLE_CHARS: usize = 36;
const DESCRIPTION_CHARS: usize = 140;

impl App {
    /// The habit list: newest first, first card raised, per-card streak
    /// and delete controls revealed on hover.
    pub(crate) fn view_home(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let heading = container(
            text("My Habits")
                .size(colors.title_size)
                .font(theme::BOLD)
                .color(colors.text_emphasized),
        )
        .center_x(Length::Fill);

        let body: Element<'_, Message> = if self.habits.is_empty() {
            container(
                text("No habits yet. Add one to get started!")
                    .size(colors.body_text)
                    .color(colors.text_muted),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
        } else {
            let mut list = column![].spacing(12).width(Length::Fill);
            for (i, habit) in self.habits.habits().iter().enumerate() {
                list = list.push(self.habit_card(i, habit));
            }
            scrollable(container(list).padding(2))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        column![heading, body]
            .spacing(16)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn habit_card<'a>(&'a self, index: usize, habit: &'a Habit) -> Element<'a, Message> {
        let colors = &self.colors;
        let hovered = self.hovered_habit == Some(index);
        // The newest habit renders one layer closer to the user.
        let raised = index == 0;

        let header = row![
            text(truncate_str(&habit.title, TITLE_CHARS))
                .size(colors.heading_size)
                .font(theme::BOLD)
                .color(colors.text_primary),
            space::horizontal(),
            container(
                text(habit.frequency.label())
                    .size(colors.badge_text)
                    .font(theme::BOLD)
                    .color(colors.text_secondary),
            )
            .style(colors.nested_style())
            .padding(6),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let description = text(truncate_str(&habit.description, DESCRIPTION_CHARS))
            .size(colors.body_text)
            .color(colors.text_secondary);

        let streak_strip = container(
            row![
                text("Frequency:")
                    .size(colors.badge_text)
                    .color(colors.text_muted),
                text(habit.frequency.label())
                    .size(colors.badge_text)
                    .font(theme::SEMIBOLD)
                    .color(colors.text_secondary),
                space::horizontal(),
                text("Streak:")
                    .size(colors.badge_text)
                    .color(colors.text_muted),
                text(format!("🔥 {}", habit.streak_count))
                    .size(colors.body_text)
                    .font(theme::BOLD)
                    .color(colors.text_emphasized)
                    .shaping(Shaping::Advanced),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        )
        .style(colors.nested_style())
        .padding(10)
        .width(Length::Fill);

        let mut card_col = column![header, description, streak_strip].spacing(10);

        // Hover reveals the actions the mobile app put behind a swipe.
        if hovered {
            let increment = button(
                text("+1")
                    .size(colors.label_text)
                    .font(theme::BOLD),
            )
            .on_press(Message::IncrementStreak {
                id: habit.id.clone(),
                current: habit.streak_count,
            })
            .padding(6)
            .style(colors.raised_button_style());

            let delete = button(
                text("✕")
                    .size(colors.label_text)
                    .shaping(Shaping::Advanced),
            )
            .on_press(Message::DeleteHabit(habit.id.clone()))
            .padding(6)
            .style(colors.chip_button_style(false));

            card_col = card_col.push(
                row![space::horizontal(), increment, delete].spacing(8),
            );
        }

        let card = if raised {
            container(card_col).style(colors.raised_style())
        } else {
            container(card_col).style(colors.card_style())
        };
        let card = card.padding(16).width(Length::Fill);

        mouse_area(card)
            .on_enter(Message::HoverHabit(index))
            .on_exit(Message::UnhoverHabit(index))
            .into()
    }
}
