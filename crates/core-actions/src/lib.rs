//! Command surface over the editing core.
//!
//! * `dispatcher` - parse one input line into a `ParsedCommand` and apply it
//! * `io_ops`     - file load/save (save is the history commit point)
//! * `repl`       - prompt / read / dispatch / print loop over any reader/writer
//!
//! `Session` bundles the `EditorState` with the settings that only matter at
//! this layer (how writes terminate lines). Sessions are caller-constructed;
//! several can coexist in one process.

pub mod dispatcher;
pub mod io_ops;
pub mod repl;

pub use dispatcher::{
    CommandError, CommandParser, DispatchResult, HELP_TEXT, ParsedCommand, dispatch,
};
pub use io_ops::SaveEnding;

use core_config::{CaptureSetting, Config, LineEndingSetting, LoadCursorSetting};
use core_state::{CapturePolicy, EditorState, LoadCursor, StateOptions};
use core_text::{Buffer, LineEnding};

pub struct Session {
    pub state: EditorState,
    pub save_ending: SaveEnding,
}

impl Session {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            save_ending: SaveEnding::default(),
        }
    }

    /// An empty session configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        let state = EditorState::with_options(Buffer::new(), state_options(config));
        Self {
            state,
            save_ending: save_ending(config),
        }
    }
}

pub fn state_options(config: &Config) -> StateOptions {
    let history = &config.file.history;
    StateOptions {
        capture: match history.capture {
            CaptureSetting::ModifyOnly => CapturePolicy::ModifyOnly,
            CaptureSetting::EveryEdit => CapturePolicy::EveryEdit,
            CaptureSetting::Never => CapturePolicy::Never,
        },
        load_cursor: match config.file.load.cursor {
            LoadCursorSetting::LastLine => LoadCursor::LastLine,
            LoadCursorSetting::Append => LoadCursor::Append,
        },
        history_depth: history.depth_limit(),
    }
}

pub fn save_ending(config: &Config) -> SaveEnding {
    match config.file.storage.line_ending {
        LineEndingSetting::Preserve => SaveEnding::Preserve,
        LineEndingSetting::Lf => SaveEnding::Fixed(LineEnding::Lf),
        LineEndingSetting::Crlf => SaveEnding::Fixed(LineEnding::Crlf),
    }
}
