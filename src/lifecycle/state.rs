use crate::labels;
use crate::series::HdiSeries;

/// Where the one outstanding prediction request stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(HdiSeries),
    Failed(String),
}

impl RequestState {
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failed(_) => "failed",
        }
    }
}

/// Everything the surface shows. Replaced as a whole by each transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub(crate) query: String,
    pub(crate) suggestions: Vec<String>,
    pub(crate) request: RequestState,
    pub(crate) seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Number of events applied so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Error line text; empty unless the last request failed.
    pub fn error_message(&self) -> &str {
        match &self.request {
            RequestState::Failed(msg) => msg,
            _ => "",
        }
    }

    pub fn series(&self) -> Option<&HdiSeries> {
        match &self.request {
            RequestState::Success(series) => Some(series),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            labels::SUBMITTING
        } else {
            labels::SUBMIT
        }
    }
}
