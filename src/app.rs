use iced::widget::{container, text};
use iced::{Element, Length, Subscription, Task};
use rand::Rng;

use crate::habits::HabitList;
use crate::session::{Gate, Session};
use crate::store;
use crate::store::auth::AuthUser;
use crate::store::records::{Frequency, Habit, NewHabit};
use crate::subscriptions;
use crate::theme::{self, ThemeColors, ThemeMode};
use crate::ticker::Ticker;

const TICK_MS: u64 = 40;
const TICKER_MAX: u64 = 1_000_000;

/// The four tabs of the signed-in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Home,
    Streaks,
    Ticker,
    Add,
}

impl Tab {
    pub(crate) const ALL: [Tab; 4] = [Tab::Home, Tab::Streaks, Tab::Ticker, Tab::Add];

    /// Header title, as shown above the active screen.
    pub(crate) fn title(self) -> &'static str {
        match self {
            Tab::Home => "My Habits",
            Tab::Streaks => "My Streaks",
            Tab::Ticker => "Ticker",
            Tab::Add => "Add Habit",
        }
    }

    pub(crate) fn tab_label(self) -> &'static str {
        match self {
            Tab::Home => "Habits",
            Tab::Streaks => "Streaks",
            Tab::Ticker => "Ticker",
            Tab::Add => "Add",
        }
    }
}

/// Sign-in/sign-up card state.
#[derive(Default)]
pub(crate) struct AuthForm {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) signing_up: bool,
}

/// Add-habit form state.
pub(crate) struct HabitForm {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) frequency: Frequency,
}

impl HabitForm {
    fn reset() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            frequency: Frequency::Daily,
        }
    }
}

pub(crate) struct App {
    pub(crate) session: Session,
    pub(crate) habits: HabitList,
    pub(crate) tab: Tab,
    pub(crate) auth_form: AuthForm,
    pub(crate) habit_form: HabitForm,
    pub(crate) hovered_habit: Option<usize>,
    pub(crate) ticker: Ticker,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) colors: ThemeColors,
}

#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Auth service notifications and sign-in card
    AuthChanged(Option<AuthUser>),
    EmailInput(String),
    PasswordInput(String),
    ToggleAuthMode,
    SubmitAuth,
    SignOut,
    // Live query deliveries, tagged with the id they were filtered by
    HabitsSnapshot { user_id: String, habits: Vec<Habit> },
    // Habit list interactions
    HoverHabit(usize),
    UnhoverHabit(usize),
    IncrementStreak { id: String, current: u32 },
    DeleteHabit(String),
    // Add-habit form
    TitleInput(String),
    DescriptionInput(String),
    FrequencyPicked(Frequency),
    SubmitHabit,
    // Ticker
    Tick,
    RandomizeTicker,
    // Chrome
    TabSelected(Tab),
    ThemeToggle,
}

pub(crate) fn run() -> iced::Result {
    eprintln!(
        "[habitdesk] v{} ({}) starting, store at {}",
        env!("HABITDESK_VERSION"),
        env!("HABITDESK_COMMIT"),
        store::data_dir().display()
    );

    iced::application(App::new, App::update, App::view)
        .title("habitdesk")
        .subscription(App::subscription)
        .style(App::style)
        .window_size(iced::Size::new(430.0, 780.0))
        .run()
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let theme_mode = ThemeMode::Dark;
        let colors = theme::resolve(theme_mode);
        (
            Self {
                session: Session::new(),
                habits: HabitList::new(),
                tab: Tab::Home,
                auth_form: AuthForm::default(),
                habit_form: HabitForm::reset(),
                hovered_habit: None,
                ticker: Ticker::new(0),
                theme_mode,
                colors,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AuthChanged(user) => {
                let changed = user.as_ref().map(|u| u.uid.as_str()) != self.session.user_id();
                if changed {
                    // The old user's snapshot must never leak into the new
                    // session; the live query restarts keyed on the new id.
                    self.habits = HabitList::new();
                    self.hovered_habit = None;
                    self.tab = Tab::Home;
                    self.habit_form = HabitForm::reset();
                    self.auth_form = AuthForm::default();
                    eprintln!(
                        "[habitdesk] auth -> {}",
                        match &user {
                            Some(u) => u.email.as_str(),
                            None => "signed out",
                        }
                    );
                }
                self.session.apply(user);
                Task::none()
            }
            Message::EmailInput(value) => {
                self.auth_form.email = value;
                Task::none()
            }
            Message::PasswordInput(value) => {
                self.auth_form.password = value;
                Task::none()
            }
            Message::ToggleAuthMode => {
                self.auth_form.signing_up = !self.auth_form.signing_up;
                Task::none()
            }
            Message::SubmitAuth => {
                let email = self.auth_form.email.clone();
                let password = self.auth_form.password.clone();
                let signing_up = self.auth_form.signing_up;
                // Fire and forget: the session updates through the auth
                // stream, never through a return value here.
                std::thread::spawn(move || {
                    let dir = store::data_dir();
                    let result = if signing_up {
                        store::auth::sign_up(&dir, &email, &password)
                    } else {
                        store::auth::sign_in(&dir, &email, &password)
                    };
                    if let Err(e) = result {
                        eprintln!("[habitdesk] auth request failed: {e}");
                    }
                });
                Task::none()
            }
            Message::SignOut => {
                std::thread::spawn(move || {
                    if let Err(e) = store::auth::sign_out(&store::data_dir()) {
                        eprintln!("[habitdesk] sign out failed: {e}");
                    }
                });
                Task::none()
            }
            Message::HabitsSnapshot { user_id, habits } => {
                // A delivery raced against a session change is dropped:
                // no snapshot for the old user id after the change.
                if self.session.user_id() != Some(user_id.as_str()) {
                    return Task::none();
                }
                self.habits.replace(habits);
                if self
                    .hovered_habit
                    .is_some_and(|i| i >= self.habits.len())
                {
                    self.hovered_habit = None;
                }
                Task::none()
            }
            Message::HoverHabit(i) => {
                self.hovered_habit = Some(i);
                Task::none()
            }
            Message::UnhoverHabit(i) => {
                if self.hovered_habit == Some(i) {
                    self.hovered_habit = None;
                }
                Task::none()
            }
            Message::IncrementStreak { id, current } => {
                std::thread::spawn(move || {
                    if let Err(e) = store::records::increment_streak(&store::data_dir(), &id, current)
                    {
                        eprintln!("[habitdesk] streak update failed: {e}");
                    }
                });
                Task::none()
            }
            Message::DeleteHabit(id) => {
                self.hovered_habit = None;
                std::thread::spawn(move || {
                    if let Err(e) = store::records::delete_habit(&store::data_dir(), &id) {
                        eprintln!("[habitdesk] delete failed: {e}");
                    }
                });
                Task::none()
            }
            Message::TitleInput(value) => {
                self.habit_form.title = value;
                Task::none()
            }
            Message::DescriptionInput(value) => {
                self.habit_form.description = value;
                Task::none()
            }
            Message::FrequencyPicked(frequency) => {
                self.habit_form.frequency = frequency;
                Task::none()
            }
            Message::SubmitHabit => {
                // No owner, no write.
                let Some(user_id) = self.session.user_id() else {
                    return Task::none();
                };
                let new = NewHabit {
                    title: self.habit_form.title.clone(),
                    description: self.habit_form.description.clone(),
                    frequency: self.habit_form.frequency,
                    user_id: user_id.to_string(),
                };
                self.habit_form = HabitForm::reset();
                std::thread::spawn(move || {
                    if let Err(e) = store::records::create_habit(&store::data_dir(), new) {
                        eprintln!("[habitdesk] create habit failed: {e}");
                    }
                });
                Task::none()
            }
            Message::Tick => {
                self.ticker.tick();
                Task::none()
            }
            Message::RandomizeTicker => {
                let value = rand::thread_rng().gen_range(0..TICKER_MAX);
                self.ticker.set_value(value);
                Task::none()
            }
            Message::TabSelected(tab) => {
                self.tab = tab;
                self.hovered_habit = None;
                Task::none()
            }
            Message::ThemeToggle => {
                self.theme_mode = self.theme_mode.toggled();
                self.colors = theme::resolve(self.theme_mode);
                eprintln!("[habitdesk] theme -> {:?}", self.theme_mode);
                Task::none()
            }
        }
    }

    /// The view router: a pure function of session state.
    fn view(&self) -> Element<'_, Message> {
        match self.session.gate() {
            Gate::Loading => self.view_loading(),
            Gate::SignedOut => self.view_auth(),
            Gate::SignedIn => self.view_main(),
        }
    }

    fn view_loading(&self) -> Element<'_, Message> {
        container(
            text("loading...")
                .size(self.colors.body_text)
                .color(self.colors.text_muted),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn subscription(state: &Self) -> Subscription<Message> {
        // The auth stream lives for the whole process. The habit stream
        // is keyed on the signed-in user id: signing out (or switching
        // users) drops the old query before the new subtree mounts.
        let mut subs = vec![Subscription::run(subscriptions::auth_stream)];

        if let Some(user_id) = state.session.user_id() {
            subs.push(Subscription::run_with(
                user_id.to_string(),
                subscriptions::habit_stream,
            ));

            if state.tab == Tab::Ticker {
                subs.push(Subscription::run_with(TICK_MS, subscriptions::tick_stream));
            }
        }

        Subscription::batch(subs)
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.colors.base,
            text_color: self.colors.text_primary,
        }
    }

    pub(crate) fn info_line(&self) -> String {
        format!(
            "v{} {}",
            env!("HABITDESK_VERSION"),
            env!("HABITDESK_COMMIT")
        )
    }
}
