use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd,
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};
use crate::infrastructure::api::ApiCommand;

/// Drives the Elm loop: queues raw events, translates them, applies the
/// update function and hands the emitted commands to the executor.
///
/// All state transitions happen inside `run_update_cycle`, on whichever
/// task calls it; nothing here is concurrent.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a runtime with no side-effect outputs attached
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Create a runtime whose network commands go to the given API service
    pub fn new_with_api_executor(
        initial_state: AppState,
        api_sender: mpsc::UnboundedSender<ApiCommand>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = CmdExecutor::new_with_api(api_sender);
        runtime
    }

    pub fn executor_mut(&mut self) -> &mut CmdExecutor {
        &mut self.cmd_executor
    }

    /// Current state (read-only; views render from this)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a raw message for the next update cycle
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender for external sources (the API service) to push raw messages
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Queue a domain message directly (tests mostly)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Apply a single message to the state, queueing emitted commands
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        for cmd in &commands {
            self.cmd_queue.push_back(cmd.clone());
        }

        commands
    }

    /// Drain every queued raw and domain message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages queued locally
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Raw messages from external sources
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Domain messages
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Execute everything the update cycle emitted
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        self.cmd_executor
            .execute_commands(&commands)
            .map_err(|e| e.to_string())
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }
}
