//! Reflow coordination: state machine, pending-event signal, and config

mod config;
mod coordinator;
mod signal;
mod state;

pub use config::{PaginatorConfig, DEFAULT_MAX_PAGES, DEFAULT_PAGE_GAP};
pub use coordinator::{ReflowCoordinator, MAX_PASSES_PER_FLUSH};
pub use signal::{PendingReflow, ReflowSignal};
pub use state::{PaginationState, ReflowPhase, ReflowReport};
