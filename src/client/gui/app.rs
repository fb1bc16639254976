use iced::{Application, Command, Element, Theme};

use crate::client::config::ClientConfig;
use crate::client::models::app_state::WhimAppState;
use crate::client::models::messages::Message;

pub struct WhimApp {
    pub state: WhimAppState,
}

impl Application for WhimApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(flags: ClientConfig) -> (Self, Command<Message>) {
        let app = WhimApp {
            state: WhimAppState::load_initial(&flags),
        };
        // Cached results are already on screen at this point; refresh them
        // right away, same as pressing the button.
        let cmd = Command::perform(async { Message::FetchAll }, |msg| msg);
        (app, cmd)
    }

    fn title(&self) -> String {
        "Whim".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message)
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::dashboard::view(&self.state)
    }

    fn theme(&self) -> Theme {
        if self.state.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
