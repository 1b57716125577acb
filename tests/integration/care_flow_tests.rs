//! Walk and feed flows, the filtered listings and the time windows as seen
//! through a running session.

use chrono::Duration;

use super::mock_io::{clock, fixed_now, rex, FlakyStore, RecordingSink, ScriptedConsole};

use dogwalker::adapters::memory::InMemoryStore;
use dogwalker::app::events::{CareKind, SessionEvent};
use dogwalker::app::ports::RecordStore;
use dogwalker::app::service::{Io, Session};
use dogwalker::config::AppConfig;
use dogwalker::fsm::SessionState;
use dogwalker::record::NewRecord;
use dogwalker::render::NO_DOGS;
use dogwalker::seed;

fn session() -> Session {
    Session::new(&AppConfig {
        color: false,
        ..AppConfig::default()
    })
}

fn dog(name: &str) -> NewRecord {
    NewRecord {
        name: name.into(),
        ..rex()
    }
}

fn run_steps<S: RecordStore>(
    store: &mut S,
    console: &mut ScriptedConsole,
    sink: &mut RecordingSink,
    steps: usize,
) -> Session {
    let clock = clock();
    let mut io = Io::new(store, console, &clock, sink);
    let mut session = session();
    session.start(&mut io).unwrap();
    for _ in 0..steps {
        session.step(&mut io).unwrap();
    }
    session
}

// ── Walking ───────────────────────────────────────────────────

#[test]
fn walking_stamps_current_time() {
    let mut store = InMemoryStore::new();
    let id = store.create(rex()).unwrap().id;
    let mut console = ScriptedConsole::new(&["3", "1"]);
    let mut sink = RecordingSink::new();
    let session = run_steps(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Running);
    let all = store.all().unwrap();
    let rex = &all[0];
    assert_eq!(rex.last_walked_at, Some(fixed_now()));
    assert_eq!(rex.last_fed_at, None);

    let out = console.transcript();
    assert!(out.contains("  1. Rex"));
    assert!(out.contains("which dog are you walking? "));
    assert!(out.contains("Rex has been walked."));
    assert!(out.contains("Rex (hungry)"));
    assert!(sink.events.contains(&SessionEvent::CareRecorded {
        id,
        kind: CareKind::Walk,
    }));
}

#[test]
fn feeding_picks_by_position() {
    let mut store = InMemoryStore::new();
    store.create(dog("Lennon")).unwrap();
    store.create(dog("Olivia")).unwrap();
    let mut console = ScriptedConsole::new(&["4", "2"]);
    let mut sink = RecordingSink::new();
    run_steps(&mut store, &mut console, &mut sink, 1);

    let all = store.all().unwrap();
    assert_eq!(all[0].last_fed_at, None);
    assert_eq!(all[1].last_fed_at, Some(fixed_now()));
    assert!(console.transcript().contains("Olivia has been fed."));
    assert!(console.transcript().contains("Olivia (needs a walk)"));
}

#[test]
fn walk_and_feed_leave_dog_fine() {
    let mut store = InMemoryStore::new();
    store.create(rex()).unwrap();
    let mut console = ScriptedConsole::new(&["3", "1", "4", "1", "1"]);
    let mut sink = RecordingSink::new();
    run_steps(&mut store, &mut console, &mut sink, 3);

    let out = console.transcript();
    assert!(out.contains("\nRex\n"), "fine dog has no suffix:\n{out}");
}

#[test]
fn walk_expires_after_window() {
    let mut store = InMemoryStore::new();
    store.create(rex()).unwrap();
    let mut console = ScriptedConsole::new(&["3", "1", "6", "6"]);
    let mut sink = RecordingSink::new();
    let clock = clock();
    let mut io = Io::new(&mut store, &mut console, &clock, &mut sink);
    let mut session = session();
    session.start(&mut io).unwrap();

    session.step(&mut io).unwrap();
    clock.advance(Duration::hours(4));
    session.step(&mut io).unwrap();
    clock.advance(Duration::minutes(1));
    session.step(&mut io).unwrap();

    let listed: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::Listed { shown, .. } => Some(*shown),
            _ => None,
        })
        .collect();
    assert_eq!(listed, vec![0, 1], "exactly four hours is still recent");
}

// ── Picker edge cases ─────────────────────────────────────────

#[test]
fn unknown_number_changes_nothing() {
    let mut store = InMemoryStore::new();
    store.create(rex()).unwrap();
    let mut console = ScriptedConsole::new(&["3", "9", "4", "rex"]);
    let mut sink = RecordingSink::new();
    let session = run_steps(&mut store, &mut console, &mut sink, 2);

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(console.count_lines("There's no dog with that number."), 2);
    let all = store.all().unwrap();
    let rex = &all[0];
    assert_eq!(rex.last_walked_at, None);
    assert_eq!(rex.last_fed_at, None);
}

#[test]
fn menu_at_picker_returns_to_menu() {
    let mut store = InMemoryStore::new();
    store.create(rex()).unwrap();
    let mut console = ScriptedConsole::new(&["3", "menu"]);
    let mut sink = RecordingSink::new();
    run_steps(&mut store, &mut console, &mut sink, 1);

    assert_eq!(console.count_lines("Here are your options:"), 2);
    assert!(sink.events.contains(&SessionEvent::FormAborted {
        form: "walk",
        step: "dog number",
    }));
    assert_eq!(store.all().unwrap()[0].last_walked_at, None);
}

#[test]
fn exit_at_picker_terminates() {
    let mut store = InMemoryStore::new();
    store.create(rex()).unwrap();
    let mut console = ScriptedConsole::new(&["4", "exit", "1"]);
    let mut sink = RecordingSink::new();
    let session = run_steps(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Terminated);
    assert_eq!(console.remaining_input(), 1);
    assert_eq!(store.all().unwrap()[0].last_fed_at, None);
}

#[test]
fn care_on_empty_store_says_so_without_prompting() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["3", "4"]);
    let mut sink = RecordingSink::new();
    run_steps(&mut store, &mut console, &mut sink, 2);

    assert_eq!(console.count_lines(NO_DOGS), 2);
    assert_eq!(console.reads, 2);
}

#[test]
fn care_failure_is_reported() {
    let mut store = FlakyStore::new();
    store.inner.create(rex()).unwrap();
    store.fail_care = true;
    let mut console = ScriptedConsole::new(&["3", "1"]);
    let mut sink = RecordingSink::new();
    let session = run_steps(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Running);
    assert!(console
        .transcript()
        .contains("Something went wrong: store rejected write: read-only"));
    assert!(!sink
        .events
        .iter()
        .any(|e| matches!(e, SessionEvent::CareRecorded { .. })));
}

// ── Filtered listings ─────────────────────────────────────────

#[test]
fn hungry_listing_only_shows_hungry_dogs() {
    let mut store = InMemoryStore::new();
    let fed = store.create(dog("Lennon")).unwrap().id;
    store.create(dog("Olivia")).unwrap();
    store
        .record_feeding(fed, fixed_now() - Duration::hours(1))
        .unwrap();
    let mut console = ScriptedConsole::new(&["5"]);
    let mut sink = RecordingSink::new();
    run_steps(&mut store, &mut console, &mut sink, 1);

    let out = console.transcript();
    assert!(out.contains("Olivia (hungry and in need of a walk!)"));
    assert!(!out.contains("Lennon"));
    assert!(sink
        .events
        .contains(&SessionEvent::Listed { shown: 1, total: 2 }));
}

#[test]
fn filtered_listings_announce_when_empty() {
    let mut store = InMemoryStore::new();
    let id = store.create(rex()).unwrap().id;
    store.record_walk(id, fixed_now()).unwrap();
    store.record_feeding(id, fixed_now()).unwrap();
    let mut console = ScriptedConsole::new(&["5", "6"]);
    let mut sink = RecordingSink::new();
    run_steps(&mut store, &mut console, &mut sink, 2);

    let out = console.transcript();
    assert!(out.contains("Nobody is hungry right now."));
    assert!(out.contains("Every dog has been walked recently."));
}

#[test]
fn seeded_dogs_need_walks_but_are_fed() {
    let mut store = InMemoryStore::new();
    assert_eq!(seed::seed_if_empty(&mut store, &clock()).unwrap(), 2);
    let mut console = ScriptedConsole::new(&["6", "5"]);
    let mut sink = RecordingSink::new();
    run_steps(&mut store, &mut console, &mut sink, 2);

    let out = console.transcript();
    assert!(out.contains("Lennon (needs a walk)"));
    assert!(out.contains("Olivia (needs a walk)"));
    assert!(out.contains("Nobody is hungry right now."));
}
