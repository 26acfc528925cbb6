use std::collections::VecDeque;

use super::events::{Command, Event};
use super::reducer::{reduce, ReducerConfig, Transition};
use super::state::Session;
use crate::client::PredictionClient;
use crate::logging::{log, obj, v_num, v_str, Domain, Level};

/// Owns the session and runs the commands the reducer emits.
///
/// There is a single thread of control: a fetch is awaited where it is
/// emitted and its result is fed straight back as [`Event::Resolved`].
pub struct Controller {
    session: Session,
    client: PredictionClient,
    cfg: ReducerConfig,
}

impl Controller {
    pub fn new(client: PredictionClient) -> Self {
        Self::with_config(client, ReducerConfig::default())
    }

    pub fn with_config(client: PredictionClient, cfg: ReducerConfig) -> Self {
        Self {
            session: Session::new(),
            client,
            cfg,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one event and return its fetch commands without running them.
    /// Log commands are emitted immediately.
    pub fn apply(&mut self, event: Event) -> Vec<Command> {
        let kind = event.kind();
        let Transition { session, commands } = reduce(std::mem::take(&mut self.session), event, &self.cfg);
        self.session = session;
        log(
            Level::Trace,
            Domain::Lifecycle,
            "applied",
            obj(&[
                ("event", v_str(kind)),
                ("state", v_str(self.session.request().name())),
                ("seq", v_num(self.session.seq() as f64)),
            ]),
        );

        commands
            .into_iter()
            .filter(|cmd| match cmd {
                Command::Log { .. } => {
                    emit(cmd);
                    false
                }
                Command::Fetch { .. } => true,
            })
            .collect()
    }

    /// Run one command. A fetch is awaited to completion and its result
    /// returned as the follow-up event; a log command is emitted.
    pub async fn execute(&self, cmd: Command) -> Option<Event> {
        match cmd {
            Command::Fetch { country } => Some(Event::Resolved(self.client.predict(&country).await)),
            Command::Log { .. } => {
                emit(&cmd);
                None
            }
        }
    }

    /// Apply `event` and everything it causes, until no commands remain.
    pub async fn dispatch(&mut self, event: Event) -> &Session {
        let mut queue = VecDeque::from([event]);
        while let Some(next) = queue.pop_front() {
            for cmd in self.apply(next) {
                if let Some(follow_up) = self.execute(cmd).await {
                    queue.push_back(follow_up);
                }
            }
        }
        &self.session
    }
}

fn emit(cmd: &Command) {
    if let Command::Log { level, domain, event, msg } = cmd {
        log(*level, *domain, event, obj(&[("msg", v_str(msg))]));
    }
}
