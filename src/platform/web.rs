//! Browser binding
//!
//! Exposes [`CircularSlider`] to JavaScript. The host forwards pointer events
//! in client coordinates and re-measures on resize; updates come back through
//! a JS function called as `onUpdate(startAngle, angleLength)`.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::Point;
use crate::drag::DragKind;
use crate::layout::{LayoutProvider, LayoutRect};
use crate::model::ArcModel;
use crate::settings::Settings;
use crate::slider::CircularSlider;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// DOM element measured with `getBoundingClientRect`
struct ElementLayout<'a>(&'a Element);

impl LayoutProvider for ElementLayout<'_> {
    fn measure(&self) -> Option<LayoutRect> {
        let rect = self.0.get_bounding_client_rect();
        // A detached or display:none element measures as an empty box
        if rect.width() == 0.0 && rect.height() == 0.0 {
            return None;
        }
        Some(LayoutRect::new(rect.x(), rect.y(), rect.width(), rect.height()))
    }
}

#[wasm_bindgen]
pub struct WebSlider {
    slider: CircularSlider,
    element: Element,
}

#[wasm_bindgen]
impl WebSlider {
    /// `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: Element,
        start_angle: f64,
        angle_length: f64,
        settings_json: &str,
        on_update: js_sys::Function,
    ) -> Result<WebSlider, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let slider = CircularSlider::new(ArcModel::new(start_angle, angle_length), settings)
            .with_on_update(move |model| {
                let start = JsValue::from_f64(model.start_angle);
                let length = JsValue::from_f64(model.angle_length);
                if let Err(e) = on_update.call2(&JsValue::NULL, &start, &length) {
                    log::warn!("onUpdate threw: {:?}", e);
                }
            });

        let mut web_slider = WebSlider { slider, element };
        web_slider.measure();
        Ok(web_slider)
    }

    /// Re-measure the element; call after layout changes
    pub fn measure(&mut self) -> bool {
        self.slider.refresh_layout(&ElementLayout(&self.element))
    }

    /// Pointer down on `kind` ("start", "end" or "arc")
    pub fn grant(&mut self, kind: &str, x: f64, y: f64) -> bool {
        match DragKind::from_str(kind) {
            Some(kind) => self.slider.on_grant(kind, Point::new(x, y)),
            None => {
                log::warn!("Unknown drag target: {}", kind);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.slider.on_move(Point::new(x, y)).is_some()
    }

    pub fn release(&mut self) {
        self.slider.on_release();
    }

    pub fn terminate(&mut self) {
        self.slider.on_terminate();
    }

    /// Host pushes the model it rendered
    #[wasm_bindgen(js_name = setModel)]
    pub fn set_model(&mut self, start_angle: f64, angle_length: f64) {
        self.slider.set_model(ArcModel {
            start_angle,
            angle_length,
        });
    }

    #[wasm_bindgen(js_name = containerSize)]
    pub fn container_size(&self) -> f64 {
        self.slider.settings().container_size()
    }

    /// SVG `d` attributes for the active arc slices
    #[wasm_bindgen(js_name = segmentPaths)]
    pub fn segment_paths(&self) -> js_sys::Array {
        self.slider
            .render_plan()
            .segment_paths()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// `transform` attribute for the start icon group
    #[wasm_bindgen(js_name = startHandleTransform)]
    pub fn start_handle_transform(&self) -> String {
        self.slider.render_plan().start_handle_transform()
    }

    /// `transform` attribute for the end icon group
    #[wasm_bindgen(js_name = endHandleTransform)]
    pub fn end_handle_transform(&self) -> String {
        self.slider.render_plan().end_handle_transform()
    }

    /// Render plan as JSON (origin, segments, handle positions)
    #[wasm_bindgen(js_name = renderPlanJson)]
    pub fn render_plan_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.slider.render_plan())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
