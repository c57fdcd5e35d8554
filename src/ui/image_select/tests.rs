// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::preview::{PreviewError, PreviewLocator};
use crate::domain::selection::{Notice, PendingCandidate, PendingFile, RemoteRef};
use crate::error::Error;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

/// Provider fake that counts live locators through shared counters, so the
/// counts stay observable after the engine is dropped.
#[derive(Clone, Default)]
struct CountingPreviews {
    live: Rc<Cell<usize>>,
    allocations: Rc<Cell<usize>>,
    releases: Rc<Cell<usize>>,
    fail_allocation: Rc<Cell<bool>>,
    next: usize,
    outstanding: HashSet<PreviewLocator>,
}

impl PreviewProvider for CountingPreviews {
    fn allocate(&mut self, _file: &PendingFile) -> Result<PreviewLocator, PreviewError> {
        if self.fail_allocation.get() {
            return Err(PreviewError::AllocationFailed("quota".into()));
        }
        self.next += 1;
        let locator = PreviewLocator::new(format!("blob:test/{}", self.next));
        self.outstanding.insert(locator.clone());
        self.live.set(self.live.get() + 1);
        self.allocations.set(self.allocations.get() + 1);
        Ok(locator)
    }

    fn release(&mut self, locator: &PreviewLocator) -> Result<(), PreviewError> {
        if self.outstanding.remove(locator) {
            self.live.set(self.live.get() - 1);
            self.releases.set(self.releases.get() + 1);
        }
        Ok(())
    }
}

fn engine(max_files: usize) -> (State<CountingPreviews>, CountingPreviews) {
    let previews = CountingPreviews::default();
    let options = Options {
        max_files: MaxFiles::new(max_files),
        ..Options::default()
    };
    (State::new(options, previews.clone()), previews)
}

fn png(name: &str) -> PendingCandidate {
    PendingCandidate::new(name, "image/png", vec![0; 8])
}

fn names(state: &State<CountingPreviews>) -> Vec<&str> {
    state.items().iter().map(SelectableItem::label).collect()
}

fn pending_count(state: &State<CountingPreviews>) -> usize {
    state.items().iter().filter(|item| item.is_pending()).count()
}

#[test]
fn new_engine_is_empty_and_idle() {
    let (state, previews) = engine(12);
    let output = state.output();

    assert!(output.value.is_empty());
    assert!(!output.value.is_single());
    assert_eq!(output.drag, DragPhase::Idle);
    assert!(output.message.is_none());
    assert!(!output.disabled);
    assert_eq!(previews.live.get(), 0);
}

#[test]
fn overflow_is_truncated_with_notice() {
    let (mut state, _) = engine(2);

    let effect = state.ingest(vec![png("a.png"), png("b.png"), png("c.png")]);

    assert_eq!(names(&state), ["a.png", "b.png"]);
    assert!(matches!(effect, Effect::SelectionChanged(SelectionValue::Many(ref items)) if items.len() == 2));
    assert_eq!(
        state.output().message_text().as_deref(),
        Some("Only 2 more images allowed (max 2).")
    );
}

#[test]
fn single_remaining_slot_uses_singular_wording() {
    let (mut state, _) = engine(3);
    state.ingest(vec![png("a.png"), png("b.png")]);

    state.ingest(vec![png("c.png"), png("d.png")]);

    assert_eq!(names(&state), ["a.png", "b.png", "c.png"]);
    assert_eq!(
        state.output().message_text().as_deref(),
        Some("Only 1 more image allowed (max 3).")
    );
}

#[test]
fn full_selection_rejects_batch() {
    let (mut state, _) = engine(1);
    state.ingest(vec![png("a.png")]);

    let effect = state.ingest(vec![png("b.png")]);

    assert_eq!(effect, Effect::None);
    assert_eq!(names(&state), ["a.png"]);
    assert_eq!(
        state.output().message_text().as_deref(),
        Some("You already have 1 images.")
    );
}

#[test]
fn duplicate_is_skipped_and_selection_unchanged() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png")]);

    let effect = state.ingest(vec![png("a.png")]);

    assert_eq!(effect, Effect::None);
    assert_eq!(names(&state), ["a.png"]);
    assert_eq!(
        state.message().map(ValidationMessage::notices),
        Some(&[Notice::SkippedDuplicates][..])
    );
    assert_eq!(
        state.output().message_text().as_deref(),
        Some("Skipped duplicates.")
    );
}

#[test]
fn non_image_is_rejected_by_name() {
    let (mut state, _) = engine(12);

    state.ingest(vec![PendingCandidate::new("notes.txt", "text/plain", vec![1])]);

    assert!(state.items().is_empty());
    assert_eq!(
        state.output().message_text().as_deref(),
        Some("\"notes.txt\" is not an image.")
    );
}

#[test]
fn oversized_file_reports_limit() {
    let previews = CountingPreviews::default();
    let options = Options {
        max_size_mb: MaxSizeMb::new(0.5),
        ..Options::default()
    };
    let mut state = State::new(options, previews);
    let big = PendingCandidate::with_declared_size("big.png", "image/png", 600 * 1024, vec![0u8].into());

    state.ingest(vec![big, png("small.png")]);

    assert_eq!(names(&state), ["small.png"]);
    assert_eq!(
        state.output().message_text().as_deref(),
        Some("\"big.png\" exceeds 0.5 MB.")
    );
}

#[test]
fn clean_ingest_clears_previous_message() {
    let (mut state, _) = engine(12);
    state.ingest(vec![PendingCandidate::new("x.txt", "text/plain", vec![1])]);
    assert!(state.message().is_some());

    state.ingest(vec![png("a.png")]);

    assert!(state.message().is_none());
}

#[test]
fn rejected_only_batch_still_updates_message() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png")]);

    let effect = state.ingest(vec![PendingCandidate::new("x.txt", "text/plain", vec![1])]);

    assert_eq!(effect, Effect::None);
    assert!(state.message().is_some());
}

#[test]
fn reorder_moves_item_to_target() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png"), png("c.png")]);

    let effect = state.reorder(0, 2).expect("in bounds");

    assert_eq!(names(&state), ["b.png", "c.png", "a.png"]);
    assert_eq!(effect.changed_value(), Some(&state.value()));
}

#[test]
fn boundary_reorders_change_nothing() {
    let (mut state, previews) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png")]);
    let allocations = previews.allocations.get();

    assert_eq!(state.reorder(0, -1), Ok(Effect::None));
    assert_eq!(state.reorder(1, 2), Ok(Effect::None));
    assert_eq!(state.handle(Message::MoveUp(0)), Effect::None);
    assert_eq!(state.handle(Message::MoveDown(1)), Effect::None);

    assert_eq!(names(&state), ["a.png", "b.png"]);
    assert_eq!(previews.allocations.get(), allocations);
    assert_eq!(previews.releases.get(), 0);
}

#[test]
fn move_up_and_down_swap_neighbours() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png"), png("c.png")]);

    state.handle(Message::MoveUp(2));
    assert_eq!(names(&state), ["a.png", "c.png", "b.png"]);

    state.handle(Message::MoveDown(0));
    assert_eq!(names(&state), ["c.png", "a.png", "b.png"]);
}

#[test]
fn remove_emits_single_item_when_one_left() {
    let (mut state, previews) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png")]);

    let effect = state.remove(0).expect("in bounds");

    let Effect::SelectionChanged(SelectionValue::Single(item)) = effect else {
        panic!("expected a single item, got {effect:?}");
    };
    assert_eq!(item.label(), "b.png");
    assert_eq!(previews.live.get(), 1);
    assert_eq!(previews.releases.get(), 1);
}

#[test]
fn removing_last_item_emits_empty_list() {
    let (mut state, previews) = engine(12);
    state.ingest(vec![png("a.png")]);

    let effect = state.remove(0).expect("in bounds");

    assert_eq!(effect, Effect::SelectionChanged(SelectionValue::Many(Vec::new())));
    assert_eq!(previews.live.get(), 0);
}

#[test]
fn out_of_bounds_indices_are_errors() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png")]);

    assert_eq!(
        state.remove(1),
        Err(Error::IndexOutOfBounds { index: 1, len: 1 })
    );
    assert_eq!(
        state.reorder(3, 0),
        Err(Error::IndexOutOfBounds { index: 3, len: 1 })
    );
    assert_eq!(state.handle(Message::Remove(5)), Effect::None);
    assert_eq!(names(&state), ["a.png"]);
}

#[test]
fn remove_and_reorder_clear_message() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png")]);
    state.ingest(vec![png("a.png")]);
    assert!(state.message().is_some());

    state.reorder(0, 1).expect("in bounds");
    assert!(state.message().is_none());

    state.ingest(vec![png("a.png")]);
    state.remove(0).expect("in bounds");
    assert!(state.message().is_none());
}

#[test]
fn dismiss_clears_only_message() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png")]);
    state.ingest(vec![png("a.png")]);

    assert_eq!(state.handle(Message::DismissMessage), Effect::None);

    assert!(state.message().is_none());
    assert_eq!(names(&state), ["a.png"]);
}

#[test]
fn capacity_holds_across_many_ingests() {
    let (mut state, _) = engine(5);
    for batch in 0..10 {
        let candidates = (0..3).map(|i| png(&format!("{batch}-{i}.png"))).collect();
        state.ingest(candidates);
        assert!(state.items().len() <= 5);
    }
    assert_eq!(state.items().len(), 5);
}

#[test]
fn identity_keys_stay_unique() {
    let (mut state, _) = engine(20);
    for _ in 0..3 {
        state.ingest(vec![png("a.png"), png("b.png"), png("a.png")]);
    }

    let keys: HashSet<String> = state
        .items()
        .iter()
        .filter_map(SelectableItem::as_pending)
        .map(|file| file.identity_key().to_string())
        .collect();
    assert_eq!(keys.len(), state.items().len());
    assert_eq!(names(&state), ["a.png", "b.png"]);
}

#[test]
fn same_name_different_size_is_not_a_duplicate() {
    let (mut state, _) = engine(12);
    state.ingest(vec![png("a.png")]);

    state.ingest(vec![PendingCandidate::new("a.png", "image/png", vec![0; 9])]);

    assert_eq!(state.items().len(), 2);
    assert!(state.message().is_none());
}

#[test]
fn representation_is_single_iff_one_item() {
    let (mut state, _) = engine(12);
    for (i, expect_single) in [(0, true), (1, false), (2, false)] {
        state.ingest(vec![png(&format!("{i}.png"))]);
        assert_eq!(state.value().is_single(), expect_single);
        assert_eq!(state.value().len(), i + 1);
    }
}

#[test]
fn live_handles_match_pending_items() {
    let (mut state, previews) = engine(4);
    let assert_balanced = |state: &State<CountingPreviews>| {
        assert_eq!(previews.live.get(), pending_count(state));
        assert_eq!(state.preview_slots(), pending_count(state));
    };

    state.ingest(vec![png("a.png"), png("b.png"), png("c.png")]);
    assert_balanced(&state);
    state.ingest(vec![png("a.png"), png("d.png"), png("e.png")]);
    assert_balanced(&state);
    state.remove(1).expect("in bounds");
    assert_balanced(&state);
    state.reorder(0, 2).expect("in bounds");
    assert_balanced(&state);
    state.sync(SelectionValue::Many(vec![RemoteRef::new("https://x/y.png").into()]));
    assert_balanced(&state);
    assert_eq!(previews.live.get(), 0);
}

#[test]
fn drop_releases_every_handle() {
    let (mut state, previews) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png"), png("c.png")]);
    assert_eq!(previews.live.get(), 3);

    drop(state);

    assert_eq!(previews.live.get(), 0);
    assert_eq!(previews.releases.get(), 3);
}

#[test]
fn failed_allocation_degrades_to_blank_preview() {
    let (mut state, previews) = engine(12);
    previews.fail_allocation.set(true);

    let effect = state.ingest(vec![png("a.png")]);

    assert!(matches!(effect, Effect::SelectionChanged(_)));
    let entries = state.previews();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source, PreviewSource::Blank);
    assert_eq!(entries[0].alt, "image-0");
    assert_eq!(previews.live.get(), 0);

    state.remove(0).expect("in bounds");
    assert_eq!(previews.releases.get(), 0);
}

#[test]
fn previews_keep_order_and_keys() {
    let previews = CountingPreviews::default();
    let initial = SelectionValue::Single(RemoteRef::new("https://cdn/r.png").into());
    let mut state = State::with_value(Options::default(), initial, previews);
    state.ingest(vec![png("a.png")]);

    let entries = state.previews();

    assert_eq!(entries[0].source, PreviewSource::Remote("https://cdn/r.png".into()));
    assert_eq!(entries[0].key, "https://cdn/r.png-0");
    assert_eq!(entries[1].source.src(), "blob:test/1");
    assert_eq!(entries[1].key, "blob:test/1-1");
    assert_eq!(entries[1].alt, "image-1");
}

#[test]
fn remote_items_count_toward_capacity() {
    let initial = SelectionValue::Many(vec![
        RemoteRef::new("https://cdn/1.png").into(),
        RemoteRef::new("https://cdn/2.png").into(),
    ]);
    let options = Options {
        max_files: MaxFiles::new(2),
        ..Options::default()
    };
    let mut state = State::with_value(options, initial, CountingPreviews::default());

    state.ingest(vec![png("a.png")]);

    assert_eq!(state.items().len(), 2);
    assert_eq!(
        state.output().message_text().as_deref(),
        Some("You already have 2 images.")
    );
}

#[test]
fn sync_keeps_existing_handles_and_allocates_new_ones() {
    let (mut state, previews) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png")]);
    let kept = state.items()[1].clone();
    let fresh = SelectableItem::Pending(PendingFile::from_candidate(png("c.png")));

    state.handle(Message::Sync(SelectionValue::Many(vec![kept, fresh])));

    assert_eq!(names(&state), ["b.png", "c.png"]);
    assert_eq!(previews.allocations.get(), 3);
    assert_eq!(previews.releases.get(), 1);
    assert_eq!(previews.live.get(), 2);
}

#[test]
fn drag_cycle_through_drop() {
    let (mut state, _) = engine(12);

    state.handle(Message::DragEntered);
    assert_eq!(state.drag_phase(), DragPhase::Hover);
    state.handle(Message::DragOver);
    assert_eq!(state.drag_phase(), DragPhase::Hover);

    let effect = state.handle(Message::Dropped(vec![png("a.png")]));

    assert!(matches!(effect, Effect::SelectionChanged(SelectionValue::Single(_))));
    assert_eq!(state.drag_phase(), DragPhase::Idle);

    state.handle(Message::DragEntered);
    state.handle(Message::DragLeft);
    assert_eq!(state.drag_phase(), DragPhase::Idle);
}

#[test]
fn files_chosen_goes_through_ingest() {
    let (mut state, _) = engine(12);

    let effect = state.handle(Message::FilesChosen(vec![png("a.png"), png("b.png")]));

    assert_eq!(effect.changed_value().map(SelectionValue::len), Some(2));
}

#[test]
fn disabled_engine_ignores_interaction() {
    let (mut state, previews) = engine(12);
    state.ingest(vec![png("a.png"), png("b.png")]);
    state.set_disabled(true);

    assert_eq!(state.ingest(vec![png("c.png")]), Effect::None);
    assert_eq!(state.remove(0), Ok(Effect::None));
    assert_eq!(state.reorder(0, 1), Ok(Effect::None));
    state.handle(Message::DragOver);
    assert_eq!(state.drag_phase(), DragPhase::Idle);
    assert_eq!(state.handle(Message::Dropped(vec![png("d.png")])), Effect::None);

    assert_eq!(names(&state), ["a.png", "b.png"]);
    assert!(state.output().disabled);
    assert_eq!(previews.allocations.get(), 2);
}

#[test]
fn disabled_engine_still_follows_host_value() {
    let options = Options {
        disabled: true,
        ..Options::default()
    };
    let mut state = State::new(options, CountingPreviews::default());

    state.sync(SelectionValue::Single(RemoteRef::new("https://cdn/a.png").into()));

    assert_eq!(state.items().len(), 1);
}

#[test]
fn options_follow_selection_config() {
    let config = crate::config::SelectionConfig {
        accept: "image/png".into(),
        max_files: 500,
        max_size_mb: 1.0,
        disabled: true,
    };

    let options = Options::from(&config);

    assert_eq!(options.max_files.value(), 500);
    assert_eq!(options.max_size_mb.value(), 1.0);
    assert!(options.disabled);
    assert_eq!(options.accept.to_string(), "image/png");
}

#[test]
fn limits_above_one_hundred_are_honored() {
    let options = Options {
        max_files: MaxFiles::new(200),
        max_size_mb: MaxSizeMb::new(500.0),
        ..Options::default()
    };
    let mut state = State::new(options, CountingPreviews::default());
    let big = PendingCandidate::with_declared_size(
        "big.png",
        "image/png",
        150 * 1024 * 1024,
        vec![0u8].into(),
    );

    state.ingest(vec![big]);
    let batch = (0..150).map(|i| png(&format!("{i}.png"))).collect();
    state.ingest(batch);

    assert_eq!(state.items().len(), 151);
    assert!(state.message().is_none());
}

#[test]
fn repeated_host_entry_gets_its_own_preview() {
    let (mut state, previews) = engine(12);
    state.ingest(vec![png("a.png")]);
    let a = state.items()[0].clone();

    state.sync(SelectionValue::Many(vec![a.clone(), a]));

    assert_eq!(state.preview_slots(), 2);
    assert_eq!(previews.live.get(), 2);

    state.remove(0).expect("in bounds");

    assert_eq!(pending_count(&state), 1);
    assert_eq!(previews.live.get(), 1);
    assert_eq!(state.preview_slots(), 1);
    assert!(matches!(state.previews()[0].source, PreviewSource::Local(_)));
}
