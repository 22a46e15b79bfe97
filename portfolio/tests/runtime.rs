use std::sync::{Arc, Mutex};
use std::time::Duration;

use pagedom::Event;
use portfolio::form::SubmissionStatus;
use portfolio::site::portfolio_document;
use portfolio::{Command, Page, PageConfig, PageSnapshot, Runtime};
use tokio::sync::mpsc;

fn runtime(snapshots: Arc<Mutex<Vec<PageSnapshot>>>) -> Runtime<pagedom::Document> {
    let page = Page::new(portfolio_document(), PageConfig::default().without_typing());
    Runtime::new(page).on_snapshot(move |snapshot| snapshots.lock().unwrap().push(snapshot.clone()))
}

// ============================================================================
// Runtime
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submission_completes_in_real_time() {
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let (tx, rx) = mpsc::channel(16);

    let driver = async move {
        for event in [
            Event::input("name", "Jane Doe"),
            Event::input("email", "jane@example.com"),
            Event::input("message", "Hello, this is a test message."),
            Event::submit("contact-form"),
        ] {
            tx.send(Command::Dispatch(event)).await.unwrap();
        }
        tx.send(Command::Snapshot).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2100)).await;
        tx.send(Command::Snapshot).await.unwrap();
    };

    let (page, ()) = tokio::join!(runtime(snapshots.clone()).run(rx), driver);

    let snapshots = snapshots.lock().unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].status, Some(SubmissionStatus::Submitting));
    assert!(snapshots[0].submit_disabled);
    assert_eq!(snapshots[1].status, Some(SubmissionStatus::Idle));
    assert!(snapshots[1].success.is_some());
    assert!(snapshots[1].fields.iter().all(|f| f.value.is_empty()));

    assert!(page.is_mounted());
    assert!(page.now() >= Duration::from_millis(2100));
}

#[tokio::test(start_paused = true)]
async fn test_scroll_command_moves_window() {
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let (tx, rx) = mpsc::channel(4);

    let driver = async move {
        tx.send(Command::ScrollTo(500)).await.unwrap();
        tx.send(Command::Snapshot).await.unwrap();
    };
    let (page, ()) = tokio::join!(runtime(snapshots.clone()).run(rx), driver);

    assert_eq!(snapshots.lock().unwrap()[0].scroll_offset, 500);
    assert_eq!(page.reveal().map(|r| r.pending().len()), Some(8));
}

#[tokio::test(start_paused = true)]
async fn test_closing_channel_drops_pending_tasks() {
    let (tx, rx) = mpsc::channel(4);
    let driver = async move {
        tx.send(Command::Dispatch(Event::input("name", "Jane Doe"))).await.unwrap();
        tx.send(Command::Dispatch(Event::input("email", "jane@example.com"))).await.unwrap();
        tx.send(Command::Dispatch(Event::input("message", "Hello, this is a test message.")))
            .await
            .unwrap();
        tx.send(Command::Dispatch(Event::submit("contact-form"))).await.unwrap();
    };

    let page = Page::new(portfolio_document(), PageConfig::default().without_typing());
    let (page, ()) = tokio::join!(Runtime::new(page).run(rx), driver);

    assert_eq!(
        page.form().map(|f| f.state().status()),
        Some(SubmissionStatus::Submitting)
    );
    assert_eq!(page.pending_tasks(), 1);
}
