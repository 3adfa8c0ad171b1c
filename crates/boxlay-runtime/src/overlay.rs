#![forbid(unsafe_code)]

//! Binding an editor to its collaborators.
//!
//! [`Overlay::bind`] looks up the surface, validates the config, loads the
//! boxes, and draws the initial layout. The returned handle owns the session:
//! [`Overlay::dispatch`] routes one pointer event through the [`Editor`],
//! forwards its render commands to the sink, and reports committed drags back
//! to the [`BoxModel`]. Dropping the handle ends the session.

use std::collections::HashMap;
use std::hash::BuildHasher;

use boxlay_core::event::PointerEvent;
use boxlay_core::geometry::{BoxBounds, Surface};
use boxlay_core::model::{BoxSet, LabeledBox, ModelError};
use boxlay_style::palette::ColorPolicy;
use tracing::{info, warn};

use crate::config::OverlayConfig;
use crate::editor::{Commit, Editor};
use crate::error::BindError;
use crate::render::RenderSink;

/// Resolves a surface id to its pixel size `(width, height)`.
pub trait SurfaceHost {
    fn dimensions(&self, surface_id: &str) -> Option<(f64, f64)>;
}

impl<S: BuildHasher> SurfaceHost for HashMap<String, (f64, f64), S> {
    fn dimensions(&self, surface_id: &str) -> Option<(f64, f64)> {
        self.get(surface_id).copied()
    }
}

/// Owner of the authoritative boxes.
pub trait BoxModel {
    /// Boxes to show, in rendering order.
    fn boxes(&self) -> Vec<LabeledBox>;

    /// A drag changed a box's bounds.
    fn commit(&mut self, box_id: &str, bounds: BoxBounds);
}

impl BoxModel for Vec<LabeledBox> {
    fn boxes(&self) -> Vec<LabeledBox> {
        self.clone()
    }

    fn commit(&mut self, box_id: &str, bounds: BoxBounds) {
        if let Some(b) = self.iter_mut().find(|b| b.id == box_id) {
            b.bounding_box = bounds;
        }
    }
}

/// A live overlay on one surface.
#[derive(Debug)]
pub struct Overlay<M, S> {
    surface_id: String,
    editor: Editor,
    model: M,
    sink: S,
}

impl<M: BoxModel, S: RenderSink> Overlay<M, S> {
    /// Bind using the config's palette for label colors.
    pub fn bind(
        surface_id: &str,
        host: &impl SurfaceHost,
        model: M,
        sink: S,
        config: OverlayConfig,
    ) -> Result<Self, BindError> {
        let palette = config.label_palette();
        Self::bind_with_colors(surface_id, host, model, sink, config, &palette)
    }

    /// Bind with a custom color policy.
    pub fn bind_with_colors(
        surface_id: &str,
        host: &impl SurfaceHost,
        model: M,
        mut sink: S,
        config: OverlayConfig,
        colors: &dyn ColorPolicy,
    ) -> Result<Self, BindError> {
        let editor = match prepare(surface_id, host, &model, config, colors) {
            Ok(editor) => editor,
            Err(err) => {
                warn!(surface_id, %err, "overlay bind failed");
                return Err(err);
            }
        };
        info!(
            surface_id,
            boxes = editor.boxes().len(),
            width = editor.surface().width_px,
            height = editor.surface().height_px,
            "overlay bound"
        );
        sink.render_all(editor.init());
        Ok(Self {
            surface_id: surface_id.to_owned(),
            editor,
            model,
            sink,
        })
    }

    /// Handle one pointer event end to end.
    pub fn dispatch(&mut self, event: PointerEvent) -> Option<Commit> {
        let step = self.editor.handle(event);
        self.sink.render_all(step.render);
        if let Some(commit) = &step.commit {
            self.model.commit(&commit.box_id, commit.bounds);
        }
        step.commit
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// End the session, returning the model and sink.
    pub fn into_parts(self) -> (M, S) {
        (self.model, self.sink)
    }
}

fn prepare<M: BoxModel>(
    surface_id: &str,
    host: &impl SurfaceHost,
    model: &M,
    config: OverlayConfig,
    colors: &dyn ColorPolicy,
) -> Result<Editor, BindError> {
    let problems = config.validate();
    if !problems.is_empty() {
        return Err(BindError::InvalidConfig(problems));
    }
    let (width, height) = host
        .dimensions(surface_id)
        .ok_or_else(|| BindError::SurfaceNotFound(surface_id.to_owned()))?;
    let surface = Surface::new(width, height).ok_or_else(|| BindError::InvalidSurface {
        id: surface_id.to_owned(),
        width,
        height,
    })?;
    let boxes = BoxSet::new(model.boxes()).map_err(|err| match err {
        ModelError::DuplicateId(id) => BindError::DuplicateBoxId(id),
    })?;
    Ok(Editor::new(surface, boxes, config, colors))
}
