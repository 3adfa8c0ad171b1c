#![forbid(unsafe_code)]

//! Pointer-driven selection, locking, and dragging for one surface.
//!
//! [`Editor`] owns the box set of a bound surface and reacts to
//! [`PointerEvent`]s. Each event runs to completion and yields a [`Step`]:
//! the render commands it produced and, for a drag that moved, the
//! [`Commit`] written into the box set.
//!
//! # State Machine
//!
//! ```text
//!            Move (resolver hit)            Down
//!   Idle ───────────────────────▶ Selected ──────▶ Dragging
//!    ▲   ◀───────────────────────   │  ▲              │
//!    │     Move (resolver miss)     │  │  Up          │
//!    │                              │  └──────────────┤ (lock kept)
//!    │   Move outside padded rect   ▼                 │
//!    └──────────────────────── Locked ◀───────────────┘
//! ```
//!
//! While locked, moves re-classify against the selected box only, so an
//! overlapping neighbour cannot steal the selection right after a drag.
//!
//! # Invariants
//!
//! 1. `selected_box_id.is_some() == active_zone.is_some()`.
//! 2. `dragging` implies a selection and a drag origin.
//! 3. `selection_locked` implies a selection.
//! 4. The box set is mutated only on `Up` after a drag that moved.
//! 5. A cursor command is emitted only when the cursor changes.
//!
//! # Failure Modes
//!
//! A missing propagation row or an unknown selected id is an
//! [`InteractionError`]. It is logged at error level and the update that
//! needed it is skipped; the editor stays usable.

use boxlay_core::delta::{DeltaTable, ZoneRow};
use boxlay_core::event::PointerEvent;
use boxlay_core::geometry::{BoxBounds, PixelBounds, PixelPoint, Surface};
use boxlay_core::layout::BoxLayout;
use boxlay_core::model::BoxSet;
use boxlay_core::resolve::resolve;
use boxlay_core::zone::{Zone, which_zone};
use boxlay_style::cursor::CursorStyle;
use boxlay_style::palette::{ColorPolicy, LabelIndex};
use boxlay_style::visual::{BoxState, BoxStyle};
use tracing::{debug, debug_span, error, info};

use crate::config::{InvertPolicy, OverlayConfig};
use crate::error::InteractionError;
use crate::render::{Decoration, RenderCommand};

/// Interaction state of one surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub selected_box_id: Option<String>,
    pub selection_locked: bool,
    pub active_zone: Option<Zone>,
    pub drag_origin: Option<PixelPoint>,
    pub dragging: bool,
    /// Cursor most recently emitted.
    pub cursor: CursorStyle,
}

impl InteractionState {
    /// True if the state invariants hold.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let selected = self.selected_box_id.is_some();
        selected == self.active_zone.is_some()
            && (!self.dragging || (selected && self.drag_origin.is_some()))
            && (!self.selection_locked || selected)
    }
}

/// A drag that changed a box.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub box_id: String,
    pub zone: Zone,
    pub previous: BoxBounds,
    pub bounds: BoxBounds,
}

/// Output of handling one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step {
    pub render: Vec<RenderCommand>,
    pub commit: Option<Commit>,
}

impl Step {
    /// True if the event produced no output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.render.is_empty() && self.commit.is_none()
    }
}

/// Interaction engine for one bound surface.
#[derive(Debug, Clone)]
pub struct Editor {
    surface: Surface,
    boxes: BoxSet,
    config: OverlayConfig,
    table: DeltaTable,
    styles: Vec<BoxStyle>,
    visuals: Vec<BoxState>,
    state: InteractionState,
    /// Press position while nothing was selected, for click detection.
    press_origin: Option<PixelPoint>,
}

impl Editor {
    /// Create an editor, coloring boxes through `colors`.
    #[must_use]
    pub fn new(surface: Surface, boxes: BoxSet, config: OverlayConfig, colors: &dyn ColorPolicy) -> Self {
        let labels = LabelIndex::from_labels(boxes.iter().map(|b| b.label.as_str()));
        let styles: Vec<BoxStyle> = boxes
            .iter()
            .map(|b| {
                let index = labels.get(&b.label).unwrap_or(0);
                BoxStyle::standard(colors.color_for(&b.label, index), config.dim_alpha)
            })
            .collect();
        let visuals = vec![BoxState::Normal; boxes.len()];
        Self {
            surface,
            boxes,
            config,
            table: DeltaTable::standard(),
            styles,
            visuals,
            state: InteractionState::default(),
            press_origin: None,
        }
    }

    /// Replace the propagation table.
    #[must_use]
    pub fn with_table(mut self, table: DeltaTable) -> Self {
        self.table = table;
        self
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn boxes(&self) -> &BoxSet {
        &self.boxes
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Visual state last emitted for a box.
    #[must_use]
    pub fn box_state(&self, box_id: &str) -> Option<BoxState> {
        self.boxes.position(box_id).map(|i| self.visuals[i])
    }

    /// Drawing parameters for every box.
    #[must_use]
    pub fn decoration(&self) -> Decoration {
        Decoration {
            border_width: self.config.border_width,
            outline_radius: self.config.outline_radius,
            handle_radius: self.config.handle_radius,
        }
    }

    /// Full layout of every box plus the current cursor.
    #[must_use]
    pub fn init(&self) -> Vec<RenderCommand> {
        let decoration = self.decoration();
        let mut out: Vec<RenderCommand> = self
            .boxes
            .iter()
            .enumerate()
            .map(|(i, b)| RenderCommand::Layout {
                box_id: b.id.clone(),
                label: b.label.clone(),
                layout: self.layout_of(&b.bounding_box),
                visual: self.styles[i].resolve(self.visuals[i]),
                decoration,
            })
            .collect();
        out.push(RenderCommand::Cursor(self.state.cursor));
        out
    }

    /// Handle one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> Step {
        let p = event.position();
        let span = debug_span!("boxlay.dispatch", kind = event.kind(), x = p.x, y = p.y);
        let _guard = span.enter();

        let mut step = Step::default();
        let result = match event {
            PointerEvent::Move(p) => self.on_move(p, &mut step),
            PointerEvent::Down(p) => {
                self.on_down(p);
                Ok(())
            }
            PointerEvent::Up(p) => self.on_up(p, &mut step),
        };
        if let Err(err) = result {
            error!(%err, "invariant violated, skipping update");
        }
        step
    }

    // ---------------------------------------------------------------------
    // Event handlers
    // ---------------------------------------------------------------------

    fn on_move(&mut self, p: PixelPoint, step: &mut Step) -> Result<(), InteractionError> {
        if self.state.dragging {
            return self.preview_drag(p, step);
        }

        if self.state.selection_locked {
            let Some(index) = self.selected_index()? else {
                self.state.selection_locked = false;
                return Ok(());
            };
            let bounds = self.pixel_bounds(index);
            match which_zone(&bounds, p, self.config.hit_margin) {
                Some(zone) => {
                    self.state.active_zone = Some(zone);
                    self.set_cursor(CursorStyle::for_zone(Some(zone)), step);
                    return Ok(());
                }
                None => {
                    debug!("pointer left locked box, unlocking");
                    self.state.selection_locked = false;
                }
            }
        }

        let hit = resolve(&self.boxes, &self.surface, self.config.hit_margin, p);
        self.select(hit.map(|h| h.index), step)?;
        self.state.active_zone = hit.map(|h| h.zone);
        self.set_cursor(CursorStyle::for_zone(self.state.active_zone), step);
        Ok(())
    }

    fn on_down(&mut self, p: PixelPoint) {
        if self.state.selected_box_id.is_some() {
            self.state.dragging = true;
            self.state.drag_origin = Some(p);
            self.state.selection_locked = true;
            self.press_origin = None;
            debug!(zone = ?self.state.active_zone, "drag started");
        } else {
            self.press_origin = Some(p);
        }
    }

    fn on_up(&mut self, p: PixelPoint, step: &mut Step) -> Result<(), InteractionError> {
        if !self.state.dragging {
            if self.press_origin.take() == Some(p) {
                debug!("click on empty surface ignored");
            }
            return Ok(());
        }

        self.state.dragging = false;
        let Some(origin) = self.state.drag_origin.take() else {
            return Ok(());
        };
        if origin == p {
            return Ok(());
        }
        let (Some(index), Some(zone)) = (self.selected_index()?, self.state.active_zone) else {
            return Ok(());
        };
        let row = *self.row(zone)?;

        let delta = self.surface.to_normalized_delta(p.x - origin.x, p.y - origin.y);
        let Some(b) = self.boxes.at(index) else {
            return Err(InteractionError::UnknownBox(self.selected_id()));
        };
        let box_id = b.id.clone();
        let previous = b.bounding_box;
        let mut bounds = row.container().scale_normalized(delta).apply_to_box(previous);
        if self.config.invert_policy == InvertPolicy::Normalize && bounds.is_inverted() {
            debug!(box_id = %box_id, "normalizing inverted bounds");
            bounds = bounds.normalized();
        }
        self.boxes.set_bounds(&box_id, bounds);

        info!(
            box_id = %box_id,
            zone = %zone,
            top = bounds.top,
            left = bounds.left,
            height = bounds.height,
            width = bounds.width,
            "committed drag"
        );
        step.render.push(RenderCommand::Preview {
            box_id: box_id.clone(),
            layout: self.layout_of(&bounds),
        });
        step.commit = Some(Commit {
            box_id,
            zone,
            previous,
            bounds,
        });
        Ok(())
    }

    fn preview_drag(&self, p: PixelPoint, step: &mut Step) -> Result<(), InteractionError> {
        let (Some(origin), Some(zone)) = (self.state.drag_origin, self.state.active_zone) else {
            return Ok(());
        };
        let Some(index) = self.selected_index()? else {
            return Ok(());
        };
        let row = self.row(zone)?;
        let layout = BoxLayout::new(self.pixel_bounds(index), self.config.handle_radius).apply(
            row,
            p.x - origin.x,
            p.y - origin.y,
        );
        step.render.push(RenderCommand::Preview {
            box_id: self.selected_id(),
            layout,
        });
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    /// Move the selection to `next`, emitting every visual that changed.
    fn select(&mut self, next: Option<usize>, step: &mut Step) -> Result<(), InteractionError> {
        let current = self.selected_index()?;
        if current == next {
            return Ok(());
        }
        for i in 0..self.boxes.len() {
            let state = BoxState::classify(Some(i) == next, next.is_some(), self.config.dim_unselected);
            if state == self.visuals[i] {
                continue;
            }
            self.visuals[i] = state;
            if let Some(b) = self.boxes.at(i) {
                step.render.push(RenderCommand::Visual {
                    box_id: b.id.clone(),
                    visual: self.styles[i].resolve(state),
                });
            }
        }
        self.state.selected_box_id = next.and_then(|i| self.boxes.at(i)).map(|b| b.id.clone());
        debug!(
            from = ?current,
            to = ?next,
            box_id = ?self.state.selected_box_id,
            "selection changed"
        );
        Ok(())
    }

    fn set_cursor(&mut self, cursor: CursorStyle, step: &mut Step) {
        if cursor != self.state.cursor {
            self.state.cursor = cursor;
            step.render.push(RenderCommand::Cursor(cursor));
        }
    }

    fn selected_index(&self) -> Result<Option<usize>, InteractionError> {
        match &self.state.selected_box_id {
            None => Ok(None),
            Some(id) => self
                .boxes
                .position(id)
                .map(Some)
                .ok_or_else(|| InteractionError::UnknownBox(id.clone())),
        }
    }

    fn selected_id(&self) -> String {
        self.state.selected_box_id.clone().unwrap_or_default()
    }

    fn row(&self, zone: Zone) -> Result<&ZoneRow, InteractionError> {
        self.table
            .row(zone)
            .ok_or(InteractionError::MissingPropagation(zone))
    }

    fn pixel_bounds(&self, index: usize) -> PixelBounds {
        self.boxes
            .at(index)
            .map(|b| self.surface.to_pixel_bounds(&b.bounding_box))
            .unwrap_or_default()
    }

    fn layout_of(&self, bounds: &BoxBounds) -> BoxLayout {
        BoxLayout::new(self.surface.to_pixel_bounds(bounds), self.config.handle_radius)
    }
}
