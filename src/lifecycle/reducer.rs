//! Pure reducer: (Session, Event) -> (Session, Vec<Command>)
//!
//! All session changes happen here. The reducer never performs I/O; fetching
//! and logging are returned as commands for the caller to run.
//!
//! Request transitions:
//!
//! ```text
//!  Idle | Success | Failed --Submit-->      Loading   (error and series cleared)
//!  Loading                 --Resolved(ok)--> Success
//!  Loading                 --Resolved(err)-> Failed
//!  Loading                 --Submit-->      Loading   (no-op, no fetch)
//! ```

use super::events::{Command, Event};
use super::state::{RequestState, Session};
use crate::catalog::{self, CountryEntry};
use crate::logging::{Domain, Level};
use crate::suggest::suggest;

/// Catalogs consulted by the reducer.
#[derive(Debug, Clone)]
pub struct ReducerConfig {
    pub names: &'static [&'static str],
    pub sidebar: &'static [CountryEntry],
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            names: catalog::suggestion_names(),
            sidebar: catalog::sidebar(),
        }
    }
}

#[derive(Debug)]
pub struct Transition {
    pub session: Session,
    pub commands: Vec<Command>,
}

pub fn reduce(session: Session, event: Event, cfg: &ReducerConfig) -> Transition {
    let seq = session.seq + 1;
    let mut commands = Vec::new();

    let next = match event {
        Event::QueryChanged(text) => with_query(session, text, cfg),

        Event::SuggestionPicked(index) => {
            let picked = session.suggestions.get(index).cloned();
            match picked {
                Some(name) => with_query(session, name, cfg),
                None => {
                    commands.push(log(Level::Debug, Domain::Input, "pick_out_of_range", format!("suggestion {}", index)));
                    session
                }
            }
        }

        Event::SidebarPicked(index) => match cfg.sidebar.get(index) {
            Some(entry) => with_query(session, entry.name.to_string(), cfg),
            None => {
                commands.push(log(Level::Debug, Domain::Input, "pick_out_of_range", format!("sidebar {}", index)));
                session
            }
        },

        Event::Submit => {
            if session.is_loading() {
                commands.push(log(Level::Debug, Domain::Lifecycle, "submit_ignored", "request already in flight".into()));
                session
            } else {
                commands.push(Command::Fetch { country: session.query.clone() });
                commands.push(log(Level::Info, Domain::Lifecycle, "loading", format!("submitted {:?}", session.query)));
                Session { request: RequestState::Loading, ..session }
            }
        }

        Event::Resolved(result) => {
            if !session.is_loading() {
                commands.push(log(
                    Level::Warn,
                    Domain::Lifecycle,
                    "resolve_ignored",
                    format!("no request in flight (state {})", session.request.name()),
                ));
                session
            } else {
                let request = match result {
                    Ok(series) => {
                        commands.push(log(Level::Info, Domain::Lifecycle, "success", format!("{} points", series.len())));
                        RequestState::Success(series)
                    }
                    Err(err) => {
                        let msg = err.message();
                        commands.push(log(Level::Info, Domain::Lifecycle, "failed", msg.clone()));
                        RequestState::Failed(msg)
                    }
                };
                Session { request, ..session }
            }
        }
    };

    Transition {
        session: Session { seq, ..next },
        commands,
    }
}

fn with_query(session: Session, query: String, cfg: &ReducerConfig) -> Session {
    let suggestions = suggest(&query, cfg.names);
    Session { query, suggestions, ..session }
}

fn log(level: Level, domain: Domain, event: &'static str, msg: String) -> Command {
    Command::Log { level, domain, event, msg }
}
