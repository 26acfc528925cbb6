use crate::client::PredictError;
use crate::logging::{Domain, Level};
use crate::series::HdiSeries;

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The input text changed to this value.
    QueryChanged(String),
    /// A row of the current suggestion list was chosen.
    SuggestionPicked(usize),
    /// A row of the sidebar was chosen.
    SidebarPicked(usize),
    Submit,
    /// The outstanding prediction call finished.
    Resolved(Result<HdiSeries, PredictError>),
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::QueryChanged(_) => "query_changed",
            Event::SuggestionPicked(_) => "suggestion_picked",
            Event::SidebarPicked(_) => "sidebar_picked",
            Event::Submit => "submit",
            Event::Resolved(_) => "resolved",
        }
    }
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch { country: String },
    Log {
        level: Level,
        domain: Domain,
        event: &'static str,
        msg: String,
    },
}
