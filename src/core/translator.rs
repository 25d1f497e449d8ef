use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::{
    core::{
        msg::{composer::ComposerMsg, list::ListMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::{ApiEvent, RawMsg},
        state::AppState,
    },
    domain::forum::{Collection, Page},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Network results - route to the owning state machine
        RawMsg::Api(event) => translate_api_event(event),

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ticks only matter while a status message is aging out
        RawMsg::Tick => {
            if state.system.status_message.is_some() {
                vec![Msg::System(SystemMsg::TickStatusMessage)]
            } else {
                vec![]
            }
        }

        // Paste is not routed anywhere yet; render carries no domain meaning
        RawMsg::Paste(_) | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.is_composing() {
        translate_composing_mode_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the composer is open
fn translate_composing_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Composer(ComposerMsg::Submit)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Composer(ComposerMsg::Cancel)],

        // The thread-title field is single line; Enter submits it. In a
        // post body Enter inserts a newline like any other key.
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            ..
        } if state
            .composer
            .target()
            .is_some_and(Collection::is_threads) =>
        {
            vec![Msg::Composer(ComposerMsg::Submit)]
        }

        // Everything else is delegated to the TextArea component
        _ => vec![Msg::Composer(ComposerMsg::ProcessInput(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    let on_threads = state.route.is_threads();

    match action {
        Action::ScrollUp => vec![list_msg(on_threads, ListMsg::ScrollUp, ListMsg::ScrollUp)],
        Action::ScrollDown => vec![list_msg(on_threads, ListMsg::ScrollDown, ListMsg::ScrollDown)],
        Action::ScrollToTop => vec![list_msg(
            on_threads,
            ListMsg::ScrollToTop,
            ListMsg::ScrollToTop,
        )],
        Action::ScrollToBottom => vec![list_msg(
            on_threads,
            ListMsg::ScrollToBottom,
            ListMsg::ScrollToBottom,
        )],
        Action::LoadMore => vec![list_msg(on_threads, ListMsg::LoadMore, ListMsg::LoadMore)],

        Action::Open => translate_open_key(state),

        Action::Back => {
            if on_threads {
                vec![Msg::Threads(ListMsg::Unselect)]
            } else {
                vec![Msg::Ui(UiMsg::LeaveThread)]
            }
        }

        Action::NewItem => vec![Msg::Ui(UiMsg::NewItem)],
        Action::Refresh => vec![Msg::Ui(UiMsg::Refresh)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::Submit => {
            // Only meaningful while composing; translate_composing_mode_keys
            // normally handles it first
            if state.is_composing() {
                vec![Msg::Composer(ComposerMsg::Submit)]
            } else {
                vec![]
            }
        }
    }
}

/// Translate the open key with validation
fn translate_open_key(state: &AppState) -> Vec<Msg> {
    if !state.route.is_threads() {
        return vec![];
    }

    if state.selected_thread().is_some() {
        vec![Msg::Ui(UiMsg::OpenThread)]
    } else {
        vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "No thread selected".to_string(),
        ))]
    }
}

fn translate_api_event(event: ApiEvent) -> Vec<Msg> {
    match event {
        ApiEvent::PageLoaded {
            collection,
            generation,
            page,
        } => match (collection, page) {
            (Collection::Threads, Page::Threads(items)) => {
                vec![Msg::Threads(ListMsg::PageLoaded { generation, items })]
            }
            (Collection::Posts { .. }, Page::Posts(items)) => {
                vec![Msg::Posts(ListMsg::PageLoaded { generation, items })]
            }
            // A page of the wrong shape is treated like a body that failed
            // to parse
            (Collection::Threads, _) => vec![Msg::Threads(ListMsg::LoadFailed {
                generation,
                message: "Unexpected response format".to_string(),
            })],
            (Collection::Posts { .. }, _) => vec![Msg::Posts(ListMsg::LoadFailed {
                generation,
                message: "Unexpected response format".to_string(),
            })],
        },

        ApiEvent::PageFailed {
            collection,
            generation,
            message,
        } => match collection {
            Collection::Threads => vec![Msg::Threads(ListMsg::LoadFailed {
                generation,
                message,
            })],
            Collection::Posts { .. } => vec![Msg::Posts(ListMsg::LoadFailed {
                generation,
                message,
            })],
        },

        ApiEvent::ItemCreated { .. } => vec![Msg::Composer(ComposerMsg::SubmitSucceeded)],

        ApiEvent::ItemRejected { message, .. } => {
            vec![Msg::Composer(ComposerMsg::SubmitFailed { message })]
        }
    }
}

fn list_msg(
    on_threads: bool,
    threads: ListMsg<crate::domain::forum::Thread>,
    posts: ListMsg<crate::domain::forum::Post>,
) -> Msg {
    if on_threads {
        Msg::Threads(threads)
    } else {
        Msg::Posts(posts)
    }
}
