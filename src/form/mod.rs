//! Form orchestration
//!
//! ```text
//! keystroke → watcher → mode (validate, pick lookup) → dispatcher → view_state → render
//! ```
//!
//! Nothing in here touches the terminal. The TUI feeds messages in and
//! executes the effects that come out.

pub mod dispatcher;
pub mod history;
pub mod mode;
pub mod view_state;
pub mod watcher;

pub use dispatcher::{Completion, Dispatcher, LookupOutcome, LookupTicket};
pub use history::{HistoryRow, HistoryView};
pub use mode::{LookupKind, LookupRequest, Mode, TrackingKind, ValidationRule};
pub use view_state::{Effect, Msg, Notice, NoticeKind, Panel, ViewState};
pub use watcher::InputWatcher;
