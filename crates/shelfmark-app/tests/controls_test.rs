//! Integration tests for the control synchronization protocol.
//!
//! Tests the complete flow from rendered control activation to persistence,
//! using the in-memory storage adapter and a recording control fake.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use shelfmark_app::controls::{
    hydrate_toggle_controls, RemoveControl, ToggleControl, LABEL_FAVORITED, LABEL_NOT_FAVORITED,
};
use shelfmark_core::book::{BookDescriptor, BookDraft};
use shelfmark_core::favorites::store::FavoritesStore;
use shelfmark_core::ports::RenderedControlPort;
use shelfmark_infra::storage::InMemoryRecordStorage;

/// Rendered control double that records every visual mutation.
struct FakeControl {
    book: Option<BookDescriptor>,
    highlighted: Mutex<Option<bool>>,
    label: Mutex<Option<String>>,
    detached: AtomicBool,
}

impl FakeControl {
    fn for_book(key: &str, title: &str) -> Arc<Self> {
        Arc::new(Self {
            book: Some(BookDescriptor {
                key: key.to_string(),
                title: title.to_string(),
                author: "Unknown Author".to_string(),
                cover_url: None,
            }),
            highlighted: Mutex::new(None),
            label: Mutex::new(None),
            detached: AtomicBool::new(false),
        })
    }

    fn without_descriptor() -> Arc<Self> {
        Arc::new(Self {
            book: None,
            highlighted: Mutex::new(None),
            label: Mutex::new(None),
            detached: AtomicBool::new(false),
        })
    }

    fn highlighted(&self) -> Option<bool> {
        *self.highlighted.lock().unwrap()
    }

    fn label(&self) -> Option<String> {
        self.label.lock().unwrap().clone()
    }

    fn is_detached(&self) -> bool {
        self.detached.load(Ordering::SeqCst)
    }
}

impl RenderedControlPort for FakeControl {
    fn descriptor(&self) -> Option<BookDescriptor> {
        self.book.clone()
    }

    fn set_highlighted(&self, on: bool) {
        *self.highlighted.lock().unwrap() = Some(on);
    }

    fn set_label(&self, label: &str) {
        *self.label.lock().unwrap() = Some(label.to_string());
    }

    fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }
}

fn fresh_store() -> FavoritesStore {
    FavoritesStore::new(Arc::new(InMemoryRecordStorage::new()))
}

#[test]
fn toggle_is_consistent_over_repeated_activations() {
    let store = fresh_store();
    let control = FakeControl::for_book("b1", "Book One");
    let toggle = ToggleControl::bind(store.clone(), control.clone()).unwrap();

    // Bound while not favorited.
    assert_eq!(control.highlighted(), Some(false));
    assert_eq!(control.label().as_deref(), Some(LABEL_NOT_FAVORITED));

    assert!(toggle.activate().unwrap());
    assert!(store.is_favorite("b1"));
    assert_eq!(control.highlighted(), Some(true));
    assert_eq!(control.label().as_deref(), Some(LABEL_FAVORITED));

    assert!(!toggle.activate().unwrap());
    assert!(!store.is_favorite("b1"));
    assert_eq!(control.highlighted(), Some(false));
    assert_eq!(control.label().as_deref(), Some(LABEL_NOT_FAVORITED));
}

#[test]
fn bind_initializes_from_the_store() {
    let store = fresh_store();
    store.add_favorite(BookDraft::new("b1")).unwrap();

    let control = FakeControl::for_book("b1", "Book One");
    ToggleControl::bind(store, control.clone()).unwrap();

    assert_eq!(control.highlighted(), Some(true));
    assert_eq!(control.label().as_deref(), Some(LABEL_FAVORITED));
}

#[test]
fn two_controls_for_the_same_book_share_one_source_of_truth() {
    let store = fresh_store();
    let first = FakeControl::for_book("b1", "Book One");
    let second = FakeControl::for_book("b1", "Book One");

    let first_toggle = ToggleControl::bind(store.clone(), first).unwrap();
    assert!(first_toggle.activate().unwrap());

    // A control bound later sees the state the first one wrote.
    let second_toggle = ToggleControl::bind(store.clone(), second.clone()).unwrap();
    assert_eq!(second.highlighted(), Some(true));

    // The second control re-queries on activation, so it removes rather
    // than re-adding.
    assert!(!second_toggle.activate().unwrap());
    assert!(!store.is_favorite("b1"));
}

#[test]
fn activation_requeries_instead_of_trusting_the_painted_state() {
    let store = fresh_store();
    let control = FakeControl::for_book("b1", "Book One");
    let toggle = ToggleControl::bind(store.clone(), control.clone()).unwrap();

    // Someone else favorites the book behind the control's back.
    store.add_favorite(BookDraft::new("b1")).unwrap();

    // The control still shows "not favorited", but activation must act on
    // the stored state and remove.
    assert_eq!(control.highlighted(), Some(false));
    assert!(!toggle.activate().unwrap());
    assert!(!store.is_favorite("b1"));
}

#[test]
fn hydrate_skips_controls_without_a_descriptor() {
    let store = fresh_store();
    let with_book = FakeControl::for_book("b1", "Book One");
    let without = FakeControl::without_descriptor();

    let controls: Vec<Arc<dyn RenderedControlPort>> =
        vec![with_book.clone(), without.clone()];
    let bound = hydrate_toggle_controls(&store, controls);

    assert_eq!(bound.len(), 1);
    assert_eq!(bound[0].book().key, "b1");
    assert_eq!(without.highlighted(), None);
    assert_eq!(without.label(), None);
}

#[test]
fn remove_control_deletes_and_detaches() {
    let store = fresh_store();
    store.add_favorite(BookDraft::new("b1")).unwrap();

    let control = FakeControl::for_book("b1", "Book One");
    let remove = RemoveControl::bind(store.clone(), control.clone()).unwrap();
    remove.activate().unwrap();

    assert!(!store.is_favorite("b1"));
    assert!(control.is_detached());
    // One-way transition: no toggle visuals were painted.
    assert_eq!(control.highlighted(), None);
    assert_eq!(control.label(), None);
}

#[test]
fn remove_control_is_safe_on_an_already_absent_favorite() {
    let store = fresh_store();
    let control = FakeControl::for_book("b1", "Book One");

    let remove = RemoveControl::bind(store.clone(), control.clone()).unwrap();
    remove.activate().unwrap();

    assert!(!store.is_favorite("b1"));
    assert!(control.is_detached());
}
