use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{BoardConfig, ConfigError};
use crate::consts::PIECE_RADIUS;
use crate::geometry::{self, Point};
use crate::input::{DragState, InputState, PointerEvent, UiState};
use crate::render::{self, Bounds, SelectionStyle, Surface};
use crate::store::{Piece, PieceId, PieceStore};
use crate::surface::SurfaceAdapter;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Emitted once per finished drag gesture. The hand-off point for syncing
/// final positions; this crate does not transmit it anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCompleted {
    pub piece_id: PieceId,
    pub final_position: Point,
}

impl MoveCompleted {
    /// Serialize for a JSON transport.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Selection or a piece position changed; the surface must be redrawn.
    RenderNeeded,
    MoveCompleted(MoveCompleted),
}

/// Errors raised while binding an [`Engine`] to a canvas element.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<StartError<JsValue>> for EngineError {
    fn from(err: StartError<JsValue>) -> Self {
        match err {
            StartError::Config(e) => Self::Config(e),
            StartError::Draw(e) => js_err(e),
        }
    }
}

fn js_err(err: JsValue) -> EngineError {
    EngineError::Js(format!("{err:?}"))
}

/// Errors raised by [`EngineCore::start`]. `E` is the surface's error type.
#[derive(Debug, thiserror::Error)]
pub enum StartError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("initial draw failed: {0:?}")]
    Draw(E),
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Owns the piece store, the selection and the drag gesture exclusively.
#[derive(Debug)]
pub struct EngineCore {
    store: PieceStore,
    ui: UiState,
    input: InputState,
    bounds: Bounds,
    selection_style: SelectionStyle,
}

impl EngineCore {
    /// Build an idle engine with no selection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config is invalid or piece ids are not unique.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = PieceStore::new(config.pieces)?;
        Ok(Self {
            store,
            ui: UiState::default(),
            input: InputState::default(),
            bounds: Bounds::from_size(config.width, config.height),
            selection_style: SelectionStyle {
                width: config.selection_stroke_width,
                color: config.selection_stroke_color,
            },
        })
    }

    /// Build the engine and draw the initial board onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::Config`] for a bad config and [`StartError::Draw`]
    /// if the first draw fails. Either way the board is not interactive.
    pub fn start<S: Surface>(config: BoardConfig, surface: &mut S) -> Result<Self, StartError<S::Error>> {
        let core = Self::new(config)?;
        core.render(surface).map_err(StartError::Draw)?;
        Ok(core)
    }

    // --- Input events ---

    /// Run one event to completion, redrawing `surface` before returning if the
    /// selection or a piece position changed.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the redraw fails. The state change has
    /// already been applied by then.
    pub fn dispatch<S: Surface>(&mut self, event: PointerEvent, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        let actions = self.handle(event);
        if actions.contains(&Action::RenderNeeded) {
            self.render(surface)?;
        }
        Ok(actions)
    }

    /// Dispatch a pointer event to the matching handler without drawing.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        match event {
            PointerEvent::Down(pt) => self.on_pointer_down(pt),
            PointerEvent::Move(pt) => self.on_pointer_move(pt),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }

    /// Select the topmost piece under `pt` and start dragging it, or clear the
    /// selection when nothing is hit.
    ///
    /// A pointer-down that arrives mid-drag first completes the current drag.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = self.finish_drag();

        let hit = geometry::topmost_hit(pt, self.store.sorted_by_z_descending(), PIECE_RADIUS)
            .map(|piece| (piece.id.clone(), piece.position));

        match hit {
            Some((id, position)) => {
                let changed = self.ui.selected_id.as_ref() != Some(&id);
                tracing::debug!(piece_id = %id, "drag started");
                self.ui.selected_id = Some(id.clone());
                self.input = InputState::Dragging { id, pointer_offset: pt - position };
                if changed {
                    actions.push(Action::RenderNeeded);
                }
            }
            None => {
                if let Some(prev) = self.ui.selected_id.take() {
                    tracing::debug!(piece_id = %prev, "selection cleared");
                    actions.push(Action::RenderNeeded);
                }
            }
        }
        actions
    }

    /// Move the dragged piece so it keeps its grab offset under the pointer.
    /// Ignored while idle.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Dragging { id, pointer_offset } = &self.input else {
            return Vec::new();
        };

        let new_position = pt - *pointer_offset;
        match self.store.update_position(id, new_position) {
            Ok(()) => vec![Action::RenderNeeded],
            Err(e) => {
                tracing::warn!(error = %e, "dragged piece vanished; ending drag");
                self.input = InputState::Idle;
                Vec::new()
            }
        }
    }

    /// Release: commit the drag in place. The piece stays selected.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.finish_drag()
    }

    /// Leaving the surface ends a drag exactly like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> Vec<Action> {
        let InputState::Dragging { id, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        let Some(piece) = self.store.get(&id) else {
            tracing::warn!(piece_id = %id, "dragged piece vanished before release");
            return Vec::new();
        };

        let done = MoveCompleted { piece_id: id, final_position: piece.position };
        tracing::info!(
            piece_id = %done.piece_id,
            x = done.final_position.x,
            y = done.final_position.y,
            "piece moved"
        );
        vec![Action::MoveCompleted(done)]
    }

    // --- Render ---

    /// Draw the current state onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the surface.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(
            surface,
            self.bounds,
            self.store.sorted_by_z_ascending(),
            self.selection().map(|p| p.id.as_str()),
            &self.selection_style,
        )
    }

    // --- Queries ---

    /// The currently selected piece, if any. A selection whose piece no longer
    /// exists reads as none.
    #[must_use]
    pub fn selection(&self) -> Option<&Piece> {
        self.ui.selected_id.as_deref().and_then(|id| self.store.get(id))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.input.drag_state()
    }

    /// Look up a piece by id.
    #[must_use]
    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.store.get(id)
    }

    #[must_use]
    pub fn pieces(&self) -> &PieceStore {
        &self.store
    }

    /// Logical canvas bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// The full board engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// All input goes through [`EngineCore::dispatch`], so the canvas is redrawn
/// before any handler returns.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    adapter: SurfaceAdapter,
    core: EngineCore,
}

impl Engine {
    /// Bind to `canvas`, size its backing store and draw the initial board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the config is invalid, the canvas has no 2D
    /// context, or the initial draw fails. The board is not interactive then.
    pub fn new(canvas: HtmlCanvasElement, config: BoardConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(EngineError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::NoContext)?;

        let adapter = measure(&canvas, config.width, config.height);
        resize_backing(&canvas, &ctx, &adapter).map_err(js_err)?;
        let core = EngineCore::start(config, &mut ctx)?;
        Ok(Self { canvas, ctx, adapter, core })
    }

    /// Re-measure the canvas and device pixel ratio, then resize the backing store.
    ///
    /// Call after layout or zoom changes. Resizing clears the canvas, so this
    /// redraws.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Js`] if a canvas call fails.
    pub fn sync_surface(&mut self) -> Result<(), EngineError> {
        let bounds = self.core.bounds();
        self.adapter = measure(&self.canvas, bounds.width, bounds.height);
        resize_backing(&self.canvas, &self.ctx, &self.adapter).map_err(js_err)?;
        self.core.render(&mut self.ctx).map_err(js_err)
    }

    // --- Input events (client-space CSS pixels) ---

    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64) -> Vec<Action> {
        let pt = self.adapter.to_logical(client_x, client_y);
        self.dispatch(PointerEvent::Down(pt))
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) -> Vec<Action> {
        let pt = self.adapter.to_logical(client_x, client_y);
        self.dispatch(PointerEvent::Move(pt))
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.dispatch(PointerEvent::Up)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.dispatch(PointerEvent::Leave)
    }

    /// A failed redraw is logged and the event's actions are dropped; the
    /// state change itself stands.
    fn dispatch(&mut self, event: PointerEvent) -> Vec<Action> {
        match self.core.dispatch(event, &mut self.ctx) {
            Ok(actions) => actions,
            Err(e) => {
                tracing::error!(error = ?e, "render failed");
                Vec::new()
            }
        }
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<&Piece> {
        self.core.selection()
    }

    #[must_use]
    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.core.piece(id)
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.core.drag_state()
    }
}

/// Snapshot the canvas layout box and the window's device pixel ratio.
fn measure(canvas: &HtmlCanvasElement, logical_width: f64, logical_height: f64) -> SurfaceAdapter {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    SurfaceAdapter::new(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        logical_width,
        logical_height,
        dpr,
    )
}

fn resize_backing(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    adapter: &SurfaceAdapter,
) -> Result<(), JsValue> {
    let (w, h) = adapter.backing_size();
    canvas.set_width(w);
    canvas.set_height(h);
    let (sx, sy) = adapter.backing_scale();
    ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0)
}
