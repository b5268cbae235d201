use iced::{keyboard, Application, Command, Element, Subscription, Theme};
use log::{info, warn};
use std::sync::Arc;

use crate::client::gui::views::converter;
use crate::client::models::app_state::{ConverterState, Effect, COPY_LABEL_REVERT_MS};
use crate::client::models::messages::Message;
use crate::client::services::clipboard;
use crate::client::services::convert_service::ConvertService;

pub struct ConverterApp {
    pub state: ConverterState,
    pub service: Arc<ConvertService>,
}

impl Application for ConverterApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Arc<ConvertService>;

    fn new(service: Arc<ConvertService>) -> (Self, Command<Message>) {
        let app = ConverterApp {
            state: ConverterState::default(),
            service,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Prompt Converter".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effect = self.state.update(message);
        match effect {
            Effect::None => Command::none(),
            Effect::Convert { prompt } => {
                info!("requesting conversion ({} chars)", prompt.len());
                let service = self.service.clone();
                Command::perform(
                    async move {
                        match service.convert(&prompt).await {
                            Ok(system_prompt) => Message::ConvertResult {
                                success: true,
                                output: system_prompt,
                            },
                            Err(e) => {
                                warn!("conversion failed: {}", e);
                                Message::ConvertResult {
                                    success: false,
                                    output: e.user_message(),
                                }
                            }
                        }
                    },
                    |msg| msg,
                )
            }
            Effect::CopyToClipboard { text, epoch } => Command::perform(
                async move {
                    match clipboard::copy_text(text) {
                        Ok(()) => Message::CopyResult {
                            success: true,
                            epoch,
                        },
                        Err(e) => {
                            warn!("clipboard write failed: {}", e);
                            Message::CopyResult {
                                success: false,
                                epoch,
                            }
                        }
                    }
                },
                |msg| msg,
            ),
            Effect::ScheduleCopyReset { epoch } => Command::perform(
                async move {
                    tokio::time::sleep(tokio::time::Duration::from_millis(COPY_LABEL_REVERT_MS))
                        .await;
                    Message::ResetCopyLabel { epoch }
                },
                |msg| msg,
            ),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Enter) if modifiers.command() => {
                Some(Message::SubmitPrompt)
            }
            _ => None,
        })
    }

    fn view(&self) -> Element<Message> {
        converter::view(&self.state)
    }
}
