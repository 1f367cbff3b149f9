//! Drawing seam between images/gradients and a document writer.
//!
//! Responsibilities:
//! - define the [`DrawContext`] a writer implements
//! - record draw commands into a [`DrawList`] for inspection and replay
//! - draw gradients through their render plans

mod cmd;
mod context;
mod gradient;
mod list;

pub use cmd::DrawCmd;
pub use context::{DrawContext, ImageRendering, Raster, Transform};
pub use list::DrawList;
