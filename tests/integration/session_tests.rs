//! Session dispatcher scenarios: listing, the add-dog form, sentinels and
//! store failures.

use super::mock_io::{clock, rex, FlakyStore, RecordingSink, ScriptedConsole};

use dogwalker::adapters::memory::InMemoryStore;
use dogwalker::app::events::SessionEvent;
use dogwalker::app::ports::RecordStore;
use dogwalker::app::service::{Io, Session};
use dogwalker::config::AppConfig;
use dogwalker::fsm::SessionState;
use dogwalker::render::{DOG_ADDED, FAREWELL, REBUKE};

fn plain_config() -> AppConfig {
    AppConfig {
        color: false,
        ..AppConfig::default()
    }
}

/// Start a session and run `steps` top-level steps.
fn drive<S: RecordStore>(
    store: &mut S,
    console: &mut ScriptedConsole,
    sink: &mut RecordingSink,
    steps: usize,
) -> Session {
    let clock = clock();
    let mut io = Io::new(store, console, &clock, sink);
    let mut session = Session::new(&plain_config());
    session.start(&mut io).unwrap();
    for _ in 0..steps {
        session.step(&mut io).unwrap();
    }
    session
}

const MENU_HEADER: &str = "Here are your options:";

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_prints_banner_and_menu() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&[]);
    let mut sink = RecordingSink::new();
    drive(&mut store, &mut console, &mut sink, 0);

    let out = console.transcript();
    assert!(out.starts_with("Hi there! Welcome to the Dog Walker CLI!"));
    assert!(out.contains("1. List all dogs"));
    assert!(out.contains("2. Add a dog"));
    assert_eq!(sink.events, vec![SessionEvent::Started]);
}

// ── Scenario A: list on an empty store ────────────────────────

#[test]
fn listing_empty_store_prints_no_records_and_keeps_running() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["1"]);
    let mut sink = RecordingSink::new();
    let session = drive(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(console.count_lines("Age:"), 0);
    assert!(sink
        .events
        .contains(&SessionEvent::Listed { shown: 0, total: 0 }));
}

#[test]
fn listing_shows_every_dog_with_status() {
    let mut store = InMemoryStore::new();
    store.create(rex()).unwrap();
    let mut console = ScriptedConsole::new(&["1"]);
    let mut sink = RecordingSink::new();
    drive(&mut store, &mut console, &mut sink, 1);

    let out = console.transcript();
    assert!(out.contains("Rex (hungry and in need of a walk!)"));
    assert!(out.contains("  Age: unknown age"));
    assert!(out.contains("  Breed: Lab"));
    assert!(out.contains("  Image Url: http://x"));
}

// ── Scenario B: abort the add form ────────────────────────────

#[test]
fn menu_mid_form_aborts_without_creating() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["2", "Rex", "menu"]);
    let mut sink = RecordingSink::new();
    let session = drive(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(store.count().unwrap(), 0);
    assert_eq!(console.count_lines(MENU_HEADER), 2, "menu reprinted after abort");
    assert!(sink.events.contains(&SessionEvent::FormAborted {
        form: "add dog",
        step: "age",
    }));
}

// ── Scenario C: complete the add form ─────────────────────────

#[test]
fn completed_form_creates_exactly_one_record() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["2", "Rex", "2", "Lab", "http://x"]);
    let mut sink = RecordingSink::new();
    let session = drive(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Running);
    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    let dog = &all[0];
    assert_eq!(dog.name, "Rex");
    assert_eq!(dog.birth_descriptor.as_deref(), Some("2"));
    assert_eq!(dog.breed, "Lab");
    assert_eq!(dog.image_url, "http://x");

    let out = console.transcript();
    assert!(out.contains(DOG_ADDED));
    assert!(out.contains("Rex (hungry and in need of a walk!)"));
    assert!(sink.events.contains(&SessionEvent::DogAdded {
        id: dog.id,
        name: "Rex".into(),
    }));
}

#[test]
fn form_prompts_in_order() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["2", "Rex", "2", "Lab", "http://x"]);
    let mut sink = RecordingSink::new();
    drive(&mut store, &mut console, &mut sink, 1);

    let prompts: Vec<&String> = console
        .output
        .iter()
        .filter(|l| l.starts_with("please enter"))
        .collect();
    assert_eq!(
        prompts,
        vec![
            "please enter your dog's name ",
            "please enter your dog's age ",
            "please enter your dog's breed ",
            "please enter your dog's image url ",
        ]
    );
}

#[test]
fn birth_date_input_renders_bucketed_age() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["2", "Pip", "2024-05-15", "Corgi", "u"]);
    let mut sink = RecordingSink::new();
    drive(&mut store, &mut console, &mut sink, 1);

    assert!(console.transcript().contains("  Age: 1 month"));
}

#[test]
fn thirty_day_old_dog_reads_zero_months() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["2", "Pip", "2024-05-16", "Corgi", "u"]);
    let mut sink = RecordingSink::new();
    drive(&mut store, &mut console, &mut sink, 1);

    assert!(console.transcript().contains("  Age: 0 months"));
}

// ── Scenario E and the exit sentinel ──────────────────────────

#[test]
fn exit_at_top_level_terminates_without_further_reads() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["exit", "1"]);
    let mut sink = RecordingSink::new();
    let mut session = drive(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Terminated);
    assert!(console.transcript().contains(FAREWELL));
    assert!(sink.events.contains(&SessionEvent::StateChanged {
        from: SessionState::Running,
        to: SessionState::Terminated,
    }));

    // A terminated session never touches the console again.
    let clock = clock();
    let mut io = Io::new(&mut store, &mut console, &clock, &mut sink);
    assert_eq!(session.step(&mut io).unwrap(), SessionState::Terminated);
    assert_eq!(console.reads, 1);
    assert_eq!(console.remaining_input(), 1);
}

#[test]
fn exit_inside_form_terminates_whole_session() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["2", "Rex", "exit", "Lab", "http://x"]);
    let mut sink = RecordingSink::new();
    let session = drive(&mut store, &mut console, &mut sink, 1);

    assert_eq!(session.state(), SessionState::Terminated);
    assert_eq!(store.count().unwrap(), 0);
    assert_eq!(console.reads, 3);
    assert_eq!(console.count_lines(FAREWELL), 1);
}

#[test]
fn run_loops_until_exit() {
    let mut store = InMemoryStore::new();
    let mut console =
        ScriptedConsole::new(&["1", "menu", "2", "Rex", "", "Lab", "u", "1", "exit"]);
    let mut sink = RecordingSink::new();
    let clock = clock();
    let mut io = Io::new(&mut store, &mut console, &clock, &mut sink);
    let mut session = Session::new(&plain_config());

    assert_eq!(session.run(&mut io).unwrap(), SessionState::Terminated);
    assert_eq!(session.commands_handled(), 4);
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(console.remaining_input(), 0);
}

#[test]
fn end_of_input_ends_session_like_exit() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["1"]);
    let mut sink = RecordingSink::new();
    let clock = clock();
    let mut io = Io::new(&mut store, &mut console, &clock, &mut sink);
    let mut session = Session::new(&plain_config());

    assert_eq!(session.run(&mut io).unwrap(), SessionState::Terminated);
    assert!(console.transcript().contains(FAREWELL));
}

// ── Unrecognised input ────────────────────────────────────────

#[test]
fn unknown_token_is_rebuked() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["woof", "debug"]);
    let mut sink = RecordingSink::new();
    let session = drive(&mut store, &mut console, &mut sink, 2);

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(console.count_lines(REBUKE), 2);
    assert!(sink
        .events
        .contains(&SessionEvent::Unrecognized("debug".into())));
}

#[test]
fn menu_token_reprints_menu() {
    let mut store = InMemoryStore::new();
    let mut console = ScriptedConsole::new(&["menu"]);
    let mut sink = RecordingSink::new();
    drive(&mut store, &mut console, &mut sink, 1);

    assert_eq!(console.count_lines(MENU_HEADER), 2);
}

// ── Store failures are reported, not fatal ────────────────────

#[test]
fn create_failure_is_reported_and_session_continues() {
    let mut store = FlakyStore::new();
    store.fail_create = true;
    let mut console = ScriptedConsole::new(&["2", "Rex", "2", "Lab", "http://x", "1"]);
    let mut sink = RecordingSink::new();
    let session = drive(&mut store, &mut console, &mut sink, 2);

    assert_eq!(session.state(), SessionState::Running);
    assert!(console.transcript().contains("Something went wrong: store I/O error: disk full"));
    assert!(!console.transcript().contains(DOG_ADDED));
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, SessionEvent::StoreFailed(_))));
    assert_eq!(store.inner.count().unwrap(), 0);
}

#[test]
fn listing_failure_is_reported_and_session_continues() {
    let mut store = FlakyStore::new();
    store.fail_all = true;
    let mut console = ScriptedConsole::new(&["1", "5", "6"]);
    let mut sink = RecordingSink::new();
    let session = drive(&mut store, &mut console, &mut sink, 3);

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(console.count_lines("Something went wrong"), 3);
}
