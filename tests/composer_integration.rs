//! Integration tests for the submission flow
//!
//! Exercises the composer through the runtime, including the refresh of the
//! paired list after a successful write.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use bbstui::core::msg::composer::ComposerMsg;
use bbstui::core::msg::list::ListMsg;
use bbstui::core::msg::ui::UiMsg;
use bbstui::core::msg::Msg;
use bbstui::core::raw_msg::{ApiEvent, RawMsg};
use bbstui::domain::forum::{Collection, Page, Post, Thread};
use bbstui::{AppState, Cmd, Runtime};

fn type_text(runtime: &mut Runtime, text: &str) {
    for c in text.chars() {
        runtime.send_msg(Msg::Composer(ComposerMsg::ProcessInput(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        ))));
    }
    runtime.run_update_cycle().expect("cycle");
}

fn seed_threads(runtime: &mut Runtime, count: i64) {
    runtime.send_msg(Msg::Threads(ListMsg::LoadInitial));
    runtime.run_update_cycle().expect("cycle");
    runtime.send_raw_msg(RawMsg::Api(ApiEvent::PageLoaded {
        collection: Collection::Threads,
        generation: runtime.state().threads.generation(),
        page: Page::Threads(
            (0..count)
                .map(|id| Thread {
                    id,
                    title: format!("thread {id}"),
                })
                .collect(),
        ),
    }));
    runtime.run_update_cycle().expect("cycle");
}

#[test]
fn empty_submission_never_reaches_the_network() {
    let mut runtime = Runtime::new(AppState::default());
    runtime.send_msg(Msg::Composer(ComposerMsg::Open(Collection::Threads)));
    runtime.run_update_cycle().expect("cycle");

    for content in ["", "   "] {
        runtime.send_msg(Msg::Composer(ComposerMsg::Cancel));
        runtime.send_msg(Msg::Composer(ComposerMsg::Open(Collection::Threads)));
        runtime.run_update_cycle().expect("cycle");
        type_text(&mut runtime, content);

        runtime.send_msg(Msg::Composer(ComposerMsg::Submit));
        let cmds = runtime.process_all_messages();

        assert!(cmds.is_empty(), "{content:?} must not emit a command");
        assert_eq!(
            runtime.state().composer.error(),
            Some("Please enter some text.")
        );
    }
}

#[test]
fn successful_thread_creation_reloads_page_zero() {
    let mut runtime = Runtime::new(AppState::default());
    seed_threads(&mut runtime, 10);

    runtime.send_msg(Msg::Ui(UiMsg::NewItem));
    runtime.run_update_cycle().expect("cycle");
    type_text(&mut runtime, "hello");

    runtime.send_msg(Msg::Composer(ComposerMsg::Submit));
    let cmds = runtime.process_all_messages();
    assert_eq!(
        cmds,
        vec![Cmd::CreateItem {
            collection: Collection::Threads,
            payload: "hello".to_string(),
        }]
    );

    // Server acknowledges the write
    runtime.send_raw_msg(RawMsg::Api(ApiEvent::ItemCreated {
        collection: Collection::Threads,
    }));
    let cmds = runtime.process_all_messages();

    // The old ten threads are gone and page 0 is being re-fetched
    assert!(runtime.state().threads.is_empty());
    assert_eq!(
        cmds,
        vec![Cmd::FetchPage {
            collection: Collection::Threads,
            offset: 0,
            generation: 1,
        }]
    );

    // Composer is closed, field cleared, success notice set
    let composer = &runtime.state().composer;
    assert!(!composer.is_composing());
    assert_eq!(composer.textarea.content, "");
    assert_eq!(composer.success(), Some("Thread created!"));

    // The refreshed page replaces, it does not append
    runtime.send_raw_msg(RawMsg::Api(ApiEvent::PageLoaded {
        collection: Collection::Threads,
        generation: 1,
        page: Page::Threads(vec![Thread {
            id: 99,
            title: "hello".to_string(),
        }]),
    }));
    runtime.run_update_cycle().expect("cycle");
    assert_eq!(runtime.state().threads.len(), 1);
    assert_eq!(runtime.state().threads.items()[0].id, 99);
}

#[test]
fn rejected_write_keeps_the_field_for_retry() {
    let mut runtime = Runtime::new(AppState::default());

    runtime.send_msg(Msg::Composer(ComposerMsg::Open(Collection::Posts {
        thread_id: "3".to_string(),
    })));
    runtime.run_update_cycle().expect("cycle");
    type_text(&mut runtime, "my post");

    runtime.send_msg(Msg::Composer(ComposerMsg::Submit));
    runtime.run_update_cycle().expect("cycle");
    assert!(runtime.state().composer.is_submitting());

    // Server answers 500
    runtime.send_raw_msg(RawMsg::Api(ApiEvent::ItemRejected {
        collection: Collection::Posts {
            thread_id: "3".to_string(),
        },
        message: "Error: 500".to_string(),
    }));
    runtime.run_update_cycle().expect("cycle");

    let composer = &runtime.state().composer;
    assert!(!composer.is_submitting());
    // Generic message, not the raw transport error
    assert_eq!(
        composer.error(),
        Some("Failed to submit. Please try again.")
    );
    // Field unchanged so the user can retry without retyping
    assert_eq!(composer.textarea.content, "my post");

    // The post list was not touched
    assert!(runtime.state().posts.is_empty());
}

#[test]
fn successful_post_creation_refreshes_only_the_post_list() {
    let mut runtime = Runtime::new(AppState::default());
    seed_threads(&mut runtime, 3);

    // Open thread 1
    runtime.send_msg(Msg::Threads(ListMsg::Select(1)));
    runtime.run_update_cycle().expect("cycle");
    runtime.send_msg(Msg::Ui(UiMsg::OpenThread));
    runtime.run_update_cycle().expect("cycle");
    let posts_generation = runtime.state().posts.generation();
    runtime.send_raw_msg(RawMsg::Api(ApiEvent::PageLoaded {
        collection: Collection::Posts {
            thread_id: "1".to_string(),
        },
        generation: posts_generation,
        page: Page::Posts(vec![Post {
            id: "a".to_string(),
            post: "existing".to_string(),
        }]),
    }));
    runtime.run_update_cycle().expect("cycle");
    assert_eq!(runtime.state().posts.len(), 1);
    let threads_before = runtime.state().threads.len();

    // Compose and submit a post
    runtime.send_msg(Msg::Ui(UiMsg::NewItem));
    runtime.run_update_cycle().expect("cycle");
    type_text(&mut runtime, "reply");
    runtime.send_msg(Msg::Composer(ComposerMsg::Submit));
    runtime.run_update_cycle().expect("cycle");

    runtime.send_raw_msg(RawMsg::Api(ApiEvent::ItemCreated {
        collection: Collection::Posts {
            thread_id: "1".to_string(),
        },
    }));
    let cmds = runtime.process_all_messages();

    assert!(runtime.state().posts.is_empty());
    assert_eq!(
        cmds,
        vec![Cmd::FetchPage {
            collection: Collection::Posts {
                thread_id: "1".to_string()
            },
            offset: 0,
            generation: posts_generation + 1,
        }]
    );
    assert_eq!(runtime.state().composer.success(), Some("Posted!"));

    // The thread list is untouched by a post write
    assert_eq!(runtime.state().threads.len(), threads_before);
}
