use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Ticks a status message stays visible; at the default 4 ticks/second
/// this is about three seconds
const STATUS_MESSAGE_TTL_TICKS: u8 = 12;

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    status_message_ticks: u8,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                self.status_message_ticks = 0;
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                self.status_message_ticks = 0;
                vec![]
            }

            SystemMsg::TickStatusMessage => {
                if self.status_message.is_some() {
                    self.status_message_ticks = self.status_message_ticks.saturating_add(1);
                    if self.status_message_ticks >= STATUS_MESSAGE_TTL_TICKS {
                        self.status_message = None;
                        self.status_message_ticks = 0;
                    }
                }
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                self.status_message_ticks = 0;
                vec![]
            }
        }
    }
}
