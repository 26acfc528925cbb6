//! Request lifecycle: input edits, submission and resolution of the one
//! outstanding prediction request.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Input events │────►│   Reducer    │────►│   Session    │
//! │ (type/pick)  │     │  (pure fn)   │     │  (replaced)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲                    │
//!        │ Resolved           ▼ Fetch
//!        │             ┌──────────────┐
//!        └─────────────│  Controller  │
//!                      └──────────────┘
//! ```

pub mod controller;
pub mod events;
pub mod reducer;
pub mod state;

pub use controller::Controller;
pub use events::{Command, Event};
pub use reducer::{reduce, ReducerConfig, Transition};
pub use state::{RequestState, Session};
