#![forbid(unsafe_code)]

//! Render commands and the sink that receives them.
//!
//! The runtime never draws. It describes what changed as a sequence of
//! [`RenderCommand`]s and hands them to a [`RenderSink`]: full layouts at
//! bind time, visual-state updates when the selection moves, geometry
//! previews while dragging, and cursor changes.

use boxlay_core::layout::BoxLayout;
use boxlay_style::cursor::CursorStyle;
use boxlay_style::visual::BoxVisual;

/// Static drawing parameters shared by every box of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub border_width: f64,
    pub outline_radius: f64,
    pub handle_radius: f64,
}

/// One instruction for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Create or fully redraw a box.
    Layout {
        box_id: String,
        label: String,
        layout: BoxLayout,
        visual: BoxVisual,
        decoration: Decoration,
    },
    /// Change how a box looks without moving it.
    Visual { box_id: String, visual: BoxVisual },
    /// Move a box's sub-elements.
    Preview { box_id: String, layout: BoxLayout },
    /// Change the surface cursor.
    Cursor(CursorStyle),
}

impl RenderCommand {
    /// Box the command targets, if any.
    #[must_use]
    pub fn box_id(&self) -> Option<&str> {
        match self {
            Self::Layout { box_id, .. } | Self::Visual { box_id, .. } | Self::Preview { box_id, .. } => {
                Some(box_id)
            }
            Self::Cursor(_) => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Layout { .. } => "layout",
            Self::Visual { .. } => "visual",
            Self::Preview { .. } => "preview",
            Self::Cursor(_) => "cursor",
        }
    }
}

/// Receives render commands in emission order.
pub trait RenderSink {
    fn render(&mut self, command: RenderCommand);

    fn render_all(&mut self, commands: Vec<RenderCommand>) {
        for command in commands {
            self.render(command);
        }
    }
}

/// Collects commands for inspection.
impl RenderSink for Vec<RenderCommand> {
    fn render(&mut self, command: RenderCommand) {
        self.push(command);
    }

    fn render_all(&mut self, commands: Vec<RenderCommand>) {
        self.extend(commands);
    }
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn render(&mut self, command: RenderCommand) {
        (**self).render(command);
    }

    fn render_all(&mut self, commands: Vec<RenderCommand>) {
        (**self).render_all(commands);
    }
}

impl<T: RenderSink + ?Sized> RenderSink for Box<T> {
    fn render(&mut self, command: RenderCommand) {
        (**self).render(command);
    }

    fn render_all(&mut self, commands: Vec<RenderCommand>) {
        (**self).render_all(commands);
    }
}
