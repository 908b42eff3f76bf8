mod app;
mod habits;
mod session;
mod store;
mod subscriptions;
mod theme;
mod ticker;
mod util;
mod views;

fn main() -> iced::Result {
    app::run()
}
