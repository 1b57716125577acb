//! Session dispatcher — the hexagonal core.
//!
//! [`Session`] owns the session FSM and rendering options.  It exposes a
//! terminal-agnostic API: every read, write, store call and clock query
//! goes through the port traits passed in at the call site, so the whole
//! dispatcher runs against mock adapters in tests.
//!
//! ```text
//!   Console ──▶ ┌────────────────────────┐ ──▶ EventSink
//!               │        Session          │
//!     Clock ──▶ │  FSM · forms · status   │ ◀─▶ RecordStore
//!               └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::fsm::{Fsm, Outcome, SessionState};
use crate::record::Record;
use crate::render::{self, Style};
use crate::status;

use super::commands::MenuCommand;
use super::events::{CareKind, SessionEvent};
use super::form::{self, FormResult};
use super::ports::{Clock, Console, EventSink, RecordStore, StoreError};
use super::prompt::{prompt, Reply};

/// The ports one session step needs, borrowed together.
pub struct Io<'a, S, C, K, E> {
    pub store: &'a mut S,
    pub console: &'a mut C,
    pub clock: &'a K,
    pub sink: &'a mut E,
}

impl<'a, S, C, K, E> Io<'a, S, C, K, E>
where
    S: RecordStore,
    C: Console,
    K: Clock,
    E: EventSink,
{
    pub fn new(store: &'a mut S, console: &'a mut C, clock: &'a K, sink: &'a mut E) -> Self {
        Self {
            store,
            console,
            clock,
            sink,
        }
    }

    fn lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.console.write_line(line)?;
        }
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Session
// ───────────────────────────────────────────────────────────────

pub struct Session {
    fsm: Fsm,
    style: Style,
    commands_handled: u64,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            fsm: Fsm::default(),
            style: Style {
                color: config.color,
                time_format: config.time_format.clone(),
            },
            commands_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Print the banner and menu, then loop until the session terminates.
    pub fn run<S, C, K, E>(&mut self, io: &mut Io<'_, S, C, K, E>) -> Result<SessionState>
    where
        S: RecordStore,
        C: Console,
        K: Clock,
        E: EventSink,
    {
        self.start(io)?;
        while self.fsm.is_running() {
            self.step(io)?;
        }
        Ok(self.state())
    }

    pub fn start<S, C, K, E>(&mut self, io: &mut Io<'_, S, C, K, E>) -> Result<()>
    where
        S: RecordStore,
        C: Console,
        K: Clock,
        E: EventSink,
    {
        let banner = self.style.paint(render::BANNER, render::Tone::Accent);
        io.console.write_line(&banner)?;
        io.lines(&render::menu_lines())?;
        io.sink.emit(&SessionEvent::Started);
        info!("Session started");
        Ok(())
    }

    /// Read one top-level token and dispatch it.
    pub fn step<S, C, K, E>(&mut self, io: &mut Io<'_, S, C, K, E>) -> Result<SessionState>
    where
        S: RecordStore,
        C: Console,
        K: Clock,
        E: EventSink,
    {
        if !self.fsm.is_running() {
            return Ok(self.state());
        }
        let outcome = match prompt(io.console, None)? {
            Reply::Exit => Outcome::Terminate,
            Reply::Text(token) => self.dispatch(MenuCommand::parse(&token), io)?,
        };
        if outcome == Outcome::ShowMenu {
            io.lines(&render::menu_lines())?;
        }

        let prev = self.fsm.current_state();
        let next = self.fsm.apply(outcome);
        if next != prev {
            io.sink.emit(&SessionEvent::StateChanged {
                from: prev,
                to: next,
            });
        }
        Ok(next)
    }

    // ── Dispatch ──────────────────────────────────────────────

    /// Route one parsed command to its handler.
    pub fn dispatch<S, C, K, E>(
        &mut self,
        cmd: MenuCommand,
        io: &mut Io<'_, S, C, K, E>,
    ) -> Result<Outcome>
    where
        S: RecordStore,
        C: Console,
        K: Clock,
        E: EventSink,
    {
        self.commands_handled += 1;
        match cmd {
            MenuCommand::ShowMenu => Ok(Outcome::ShowMenu),
            MenuCommand::ListAll => self.list(io, ListFilter::All),
            MenuCommand::ListHungry => self.list(io, ListFilter::Hungry),
            MenuCommand::ListNeedsWalk => self.list(io, ListFilter::NeedsWalk),
            MenuCommand::AddDog => self.add_dog(io),
            MenuCommand::WalkDog => self.record_care(io, CareKind::Walk),
            MenuCommand::FeedDog => self.record_care(io, CareKind::Feeding),
            MenuCommand::Unrecognized(token) => {
                io.console.write_line(render::REBUKE)?;
                io.sink.emit(&SessionEvent::Unrecognized(token));
                Ok(Outcome::Continue)
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.fsm.current_state()
    }

    /// Commands dispatched since start; `"exit"` is never counted.
    pub fn commands_handled(&self) -> u64 {
        self.commands_handled
    }

    // ── Handlers ──────────────────────────────────────────────

    fn list<S, C, K, E>(&self, io: &mut Io<'_, S, C, K, E>, filter: ListFilter) -> Result<Outcome>
    where
        S: RecordStore,
        C: Console,
        K: Clock,
        E: EventSink,
    {
        let all = match io.store.all() {
            Ok(all) => all,
            Err(e) => return report_store_failure(io, &e),
        };
        let now = io.clock.now();
        let shown = match filter {
            ListFilter::All => all.clone(),
            ListFilter::Hungry => status::filter_hungry(&all, now),
            ListFilter::NeedsWalk => status::filter_needs_walking(&all, now),
        };
        if shown.is_empty() {
            if let Some(notice) = filter.empty_notice() {
                io.console.write_line(notice)?;
            }
        }
        for record in &shown {
            io.lines(&render::record_lines(record, now, &self.style))?;
        }
        io.sink.emit(&SessionEvent::Listed {
            shown: shown.len(),
            total: all.len(),
        });
        Ok(Outcome::Continue)
    }

    fn add_dog<S, C, K, E>(&self, io: &mut Io<'_, S, C, K, E>) -> Result<Outcome>
    where
        S: RecordStore,
        C: Console,
        K: Clock,
        E: EventSink,
    {
        let draft = match form::collect_new_record(io.console)? {
            FormResult::Completed(draft) => draft,
            FormResult::Aborted { step } => {
                io.sink.emit(&SessionEvent::FormAborted {
                    form: "add dog",
                    step,
                });
                return Ok(Outcome::ShowMenu);
            }
            FormResult::Exit => return Ok(Outcome::Terminate),
        };
        let record = match io.store.create(draft) {
            Ok(record) => record,
            Err(e) => return report_store_failure(io, &e),
        };
        info!("Added dog #{} ({})", record.id, record.name);
        io.sink.emit(&SessionEvent::DogAdded {
            id: record.id,
            name: record.name.clone(),
        });
        let now = io.clock.now();
        io.console.write_line(render::DOG_ADDED)?;
        io.lines(&render::record_lines(&record, now, &self.style))?;
        Ok(Outcome::Continue)
    }

    fn record_care<S, C, K, E>(&self, io: &mut Io<'_, S, C, K, E>, kind: CareKind) -> Result<Outcome>
    where
        S: RecordStore,
        C: Console,
        K: Clock,
        E: EventSink,
    {
        let all = match io.store.all() {
            Ok(all) => all,
            Err(e) => return report_store_failure(io, &e),
        };
        if all.is_empty() {
            io.console.write_line(render::NO_DOGS)?;
            return Ok(Outcome::Continue);
        }
        io.lines(&render::picker_lines(&all))?;

        let (question, form_name) = match kind {
            CareKind::Walk => ("which dog are you walking? ", "walk"),
            CareKind::Feeding => ("which dog are you feeding? ", "feed"),
        };
        let id = match form::pick_record(io.console, &all, question)? {
            FormResult::Completed(Some(record)) => record.id,
            FormResult::Completed(None) => {
                io.console.write_line("There's no dog with that number.")?;
                return Ok(Outcome::Continue);
            }
            FormResult::Aborted { step } => {
                io.sink.emit(&SessionEvent::FormAborted {
                    form: form_name,
                    step,
                });
                return Ok(Outcome::ShowMenu);
            }
            FormResult::Exit => return Ok(Outcome::Terminate),
        };

        let now = io.clock.now();
        let updated = match kind {
            CareKind::Walk => io.store.record_walk(id, now),
            CareKind::Feeding => io.store.record_feeding(id, now),
        };
        let record: Record = match updated {
            Ok(record) => record,
            Err(e) => return report_store_failure(io, &e),
        };
        io.sink.emit(&SessionEvent::CareRecorded { id, kind });
        let done = match kind {
            CareKind::Walk => format!("{} has been walked.", record.name),
            CareKind::Feeding => format!("{} has been fed.", record.name),
        };
        io.console.write_line(&done)?;
        io.lines(&render::record_lines(&record, now, &self.style))?;
        Ok(Outcome::Continue)
    }
}

#[derive(Debug, Clone, Copy)]
enum ListFilter {
    All,
    Hungry,
    NeedsWalk,
}

impl ListFilter {
    fn empty_notice(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Hungry => Some("Nobody is hungry right now."),
            Self::NeedsWalk => Some("Every dog has been walked recently."),
        }
    }
}

/// Print and log a store failure; the session keeps running.
fn report_store_failure<S, C, K, E>(io: &mut Io<'_, S, C, K, E>, err: &StoreError) -> Result<Outcome>
where
    S: RecordStore,
    C: Console,
    K: Clock,
    E: EventSink,
{
    warn!("Store operation failed: {}", err);
    io.console
        .write_line(&format!("Something went wrong: {}", err))?;
    io.sink.emit(&SessionEvent::StoreFailed(err.to_string()));
    Ok(Outcome::Continue)
}
