//! Host-facing slider
//!
//! Wires the three pointer recognizers (start handle, end handle, arc body)
//! and the layout provider to the drag controller, and pushes every accepted
//! move out through `on_update`.

use std::fmt;

use log::{debug, info, trace, warn};

use crate::Point;
use crate::drag::{DragController, DragError, DragKind};
use crate::layout::{LayoutProvider, LayoutRect};
use crate::model::ArcModel;
use crate::renderer::RenderPlan;
use crate::settings::Settings;

/// Callback receiving each new model, called from inside `on_move`
pub type UpdateCallback = Box<dyn FnMut(ArcModel)>;

/// A circular range slider minus its drawing
pub struct CircularSlider {
    /// Local copy of the host model; the host may overwrite it any time
    model: ArcModel,
    settings: Settings,
    controller: DragController,
    on_update: Option<UpdateCallback>,
}

impl CircularSlider {
    pub fn new(model: ArcModel, settings: Settings) -> Self {
        Self {
            model: ArcModel::new(model.start_angle, model.angle_length),
            settings,
            controller: DragController::new(),
            on_update: None,
        }
    }

    /// Builder form of [`set_on_update`](Self::set_on_update)
    pub fn with_on_update(mut self, on_update: impl FnMut(ArcModel) + 'static) -> Self {
        self.set_on_update(on_update);
        self
    }

    pub fn set_on_update(&mut self, on_update: impl FnMut(ArcModel) + 'static) {
        self.on_update = Some(Box::new(on_update));
    }

    pub fn model(&self) -> ArcModel {
        self.model
    }

    /// Host pushes its current model (e.g. after re-rendering)
    pub fn set_model(&mut self, model: ArcModel) {
        if !model.is_finite() {
            warn!("Ignoring non-finite model from host: {:?}", model);
            return;
        }
        self.model = ArcModel::new(model.start_angle, model.angle_length);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Whether the circle center has been measured
    pub fn is_ready(&self) -> bool {
        self.controller.is_ready()
    }

    /// A layout measurement arrived
    pub fn on_layout(&mut self, rect: LayoutRect) {
        if !rect.is_finite() {
            warn!("Ignoring non-finite layout {:?}", rect);
            return;
        }
        let center = rect.center();
        if !self.controller.is_ready() {
            info!("Slider ready, circle center at ({:.1}, {:.1})", center.x, center.y);
        }
        self.controller.set_center(center);
    }

    /// Pull a measurement from `provider`
    ///
    /// Returns false while the provider has nothing yet; any previous center
    /// stays in use until a new one arrives.
    pub fn refresh_layout(&mut self, provider: &impl LayoutProvider) -> bool {
        match provider.measure() {
            Some(rect) => {
                self.on_layout(rect);
                true
            }
            None => {
                debug!("Layout not measured yet");
                false
            }
        }
    }

    /// Pointer went down on one of the draggable elements
    pub fn on_grant(&mut self, kind: DragKind, point: Point) -> bool {
        match self.controller.grant(kind, point, self.model) {
            Ok(_) => true,
            Err(DragError::NotReady) => {
                trace!("{} grant before layout, ignored", kind.as_str());
                false
            }
            Err(e) => {
                debug!("{} grant rejected: {}", kind.as_str(), e);
                false
            }
        }
    }

    /// Pointer moved during a gesture; emits at most one update
    pub fn on_move(&mut self, point: Point) -> Option<ArcModel> {
        match self.controller.drag_move(point, self.model) {
            Ok(next) => {
                self.model = next;
                if let Some(on_update) = self.on_update.as_mut() {
                    on_update(next);
                }
                Some(next)
            }
            Err(DragError::NotReady) => {
                trace!("Move before layout, ignored");
                None
            }
            Err(e) => {
                debug!("Move ignored: {}", e);
                None
            }
        }
    }

    pub fn on_release(&mut self) {
        self.controller.release();
    }

    pub fn on_terminate(&mut self) {
        self.controller.terminate();
    }

    /// Geometry for drawing the current model
    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::build(&self.model, &self.settings)
    }
}

impl fmt::Debug for CircularSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularSlider")
            .field("model", &self.model)
            .field("settings", &self.settings)
            .field("controller", &self.controller)
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}
