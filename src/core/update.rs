use crate::{
    core::cmd::Cmd,
    core::msg::{composer::ComposerMsg, list::ListMsg, system::SystemMsg, ui::UiMsg, Msg},
    core::state::{composer::SubmitOutcome, list::FetchRequest, AppState},
    domain::forum::Collection,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Thread list messages (delegated to PagedList<Thread>)
        Msg::Threads(list_msg) => {
            let fetch = state.threads.update(list_msg);
            let commands = fetch_cmds(Collection::Threads, fetch);
            (state, commands)
        }

        // Post list messages (delegated to PagedList<Post>)
        Msg::Posts(list_msg) => {
            let fetch = state.posts.update(list_msg);
            let commands = fetch_cmds(state.route.collection(), fetch);
            (state, commands)
        }

        // Composer messages
        Msg::Composer(composer_msg) => update_composer(composer_msg, state),

        // Navigation messages
        Msg::Ui(ui_msg) => update_ui(ui_msg, state),

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}

fn update_composer(msg: ComposerMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        ComposerMsg::Open(collection) => {
            state.composer.open(collection);
            (state, vec![])
        }

        ComposerMsg::Cancel => {
            state.composer.cancel();
            (state, vec![])
        }

        ComposerMsg::ProcessInput(key) => {
            if state.composer.is_composing() && !state.composer.is_submitting() {
                state.composer.pending_input_keys.push(key);
                let textarea =
                    crate::presentation::components::composer::ComposerInput::process_pending_keys(
                        &mut state,
                    );
                state.composer.textarea = textarea;
            }
            (state, vec![])
        }

        ComposerMsg::Submit => {
            match state.composer.submit() {
                SubmitOutcome::Request {
                    collection,
                    payload,
                } => {
                    let cmd = Cmd::CreateItem {
                        collection,
                        payload,
                    };
                    (state, vec![cmd])
                }
                SubmitOutcome::Invalid | SubmitOutcome::Ignored => (state, vec![]),
            }
        }

        ComposerMsg::SubmitSucceeded => {
            let Some(collection) = state.composer.submit_succeeded() else {
                return (state, vec![]);
            };
            if let Some(notice) = state.composer.success() {
                state.system.status_message = Some(notice.to_string());
            }

            // The write invalidated the pagination offset; discard the
            // accumulated list and let the fresh page 0 replace it
            let fetch = match &collection {
                Collection::Threads => state.threads.update(ListMsg::ResetAndReload),
                Collection::Posts { .. } => state.posts.update(ListMsg::ResetAndReload),
            };
            let commands = fetch_cmds(collection, fetch);
            (state, commands)
        }

        ComposerMsg::SubmitFailed { message } => {
            state.composer.submit_failed();
            let commands = vec![Cmd::LogError {
                message: format!("create failed: {message}"),
            }];
            (state, commands)
        }
    }
}

fn update_ui(msg: UiMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        UiMsg::OpenThread => {
            let selected = state.selected_thread().map(|t| t.id.to_string());
            let Some(thread_id) = selected else {
                return (state, vec![]);
            };
            state.route = crate::core::state::route::Route::Posts {
                thread_id: thread_id.clone(),
            };
            // The previous thread's posts (and any fetch still in flight for
            // them) are gone for good
            state.posts.discard();
            let fetch = state.posts.update(ListMsg::LoadInitial);
            let commands = fetch_cmds(Collection::Posts { thread_id }, fetch);
            (state, commands)
        }

        UiMsg::LeaveThread => {
            if !state.route.is_threads() {
                state.route = crate::core::state::route::Route::Threads;
                state.posts.discard();
            }
            (state, vec![])
        }

        UiMsg::NewItem => {
            let collection = state.route.collection();
            state.composer.open(collection);
            (state, vec![])
        }

        UiMsg::Refresh => {
            let collection = state.route.collection();
            let fetch = match &collection {
                Collection::Threads => state.threads.update(ListMsg::ResetAndReload),
                Collection::Posts { .. } => state.posts.update(ListMsg::ResetAndReload),
            };
            let commands = fetch_cmds(collection, fetch);
            (state, commands)
        }
    }
}

fn fetch_cmds(collection: Collection, fetch: Option<FetchRequest>) -> Vec<Cmd> {
    fetch
        .map(|request| {
            vec![Cmd::FetchPage {
                collection,
                offset: request.offset,
                generation: request.generation,
            }]
        })
        .unwrap_or_default()
}
