use iced::{Application, Command, Element, Theme};
use log::info;

use crate::client::models::app_state::QueryAppState;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::ThemeMode;
use crate::client::services::copilot_service::CopilotService;

/// Startup values handed to the window by `main`.
pub struct CopilotFlags {
    pub theme: ThemeMode,
    pub service: CopilotService,
}

pub struct CopilotApp {
    pub state: QueryAppState,
    pub service: CopilotService,
}

impl Application for CopilotApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = CopilotFlags;

    fn new(flags: CopilotFlags) -> (Self, Command<Message>) {
        info!("[APP_START] Query endpoint: {}", flags.service.endpoint());
        let app = CopilotApp {
            state: QueryAppState::new(flags.theme),
            service: flags.service,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "MoonbergGPT".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::NoOp => {}
            Message::QueryChanged(query) => self.state.set_query(query),
            Message::SubmitQuery => {
                if let Some(query) = self.state.submit() {
                    info!("[APP] Submitting query to {}", self.service.endpoint());
                    let service = self.service.clone();
                    return Command::perform(
                        async move { service.query(&query).await },
                        Message::QueryCompleted,
                    );
                }
            }
            Message::QueryCompleted(result) => self.state.complete(result),
            Message::ToggleTheme => self.state.toggle_theme(),
        }
        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        crate::client::gui::views::query_page::view(&self.state)
    }

    fn theme(&self) -> Theme {
        self.state.theme.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::error::{QueryError, FAILURE_MESSAGE};
    use crate::client::models::ui_state::Panel;
    use reqwest::StatusCode;

    fn app() -> CopilotApp {
        let endpoint = url::Url::parse("http://127.0.0.1:9/databse_copilot").unwrap();
        let service = CopilotService::with_endpoint(endpoint, None).unwrap();
        let (app, _) = CopilotApp::new(CopilotFlags {
            theme: ThemeMode::Light,
            service,
        });
        app
    }

    #[test]
    fn submit_marks_busy_and_completion_clears_it() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("  top exchanges ".into()));
        let _ = app.update(Message::SubmitQuery);
        assert!(app.state.busy);
        assert!(matches!(app.state.submit_message(), Message::NoOp));

        let _ = app.update(Message::QueryCompleted(Ok("42 exchanges".into())));
        assert!(!app.state.busy);
        assert_eq!(app.state.panel(), Panel::Response("42 exchanges"));
    }

    #[test]
    fn blank_submit_stays_idle() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("   ".into()));
        let _ = app.update(Message::SubmitQuery);
        assert!(!app.state.busy);
        assert_eq!(app.state.panel(), Panel::Empty);
    }

    #[test]
    fn failed_completion_shows_fixed_error() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("q".into()));
        let _ = app.update(Message::SubmitQuery);
        let _ = app.update(Message::QueryCompleted(Err(QueryError::Status(StatusCode::BAD_GATEWAY))));
        assert!(!app.state.busy);
        assert_eq!(app.state.panel(), Panel::Error(FAILURE_MESSAGE));
    }

    #[test]
    fn theme_toggle_switches_iced_theme() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.state.theme, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
        let _ = app.update(Message::NoOp);
        assert_eq!(app.state.theme, ThemeMode::Dark);
    }
}
