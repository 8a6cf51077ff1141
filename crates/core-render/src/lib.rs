//! Screen compositor: frame assembly, status bar, colors, frame writer.
//!
//! Every refresh redraws the whole screen. The frame is built into one
//! in-memory buffer (`writer`) and written with a single call, so the
//! terminal never shows a half-drawn frame.
//!
//! Exposed components:
//! - `render_engine`: scroll + compose + write, one frame per refresh.
//! - `status`: status bar segments and layout.
//! - `style`: highlight category to terminal color.
//! - `writer`: crossterm command queue over a byte buffer.

pub mod render_engine;
pub mod status;
pub mod style;
pub mod writer;

pub use render_engine::{RenderEngine, welcome_message};
pub use writer::FrameWriter;
