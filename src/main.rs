//! Arc Slider demo entry point
//!
//! Replays scripted pointer gestures against a slider and prints every
//! emitted model plus the final SVG paths. Optional first argument: a
//! settings JSON file.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::cell::RefCell;
    use std::rc::Rc;

    use arc_slider::geometry::arc_endpoint;
    use arc_slider::{ArcModel, CircularSlider, DragKind, LayoutRect, Point, Settings};

    /// One scripted gesture: grab `kind` at an angle, then visit each angle
    struct Gesture {
        kind: DragKind,
        grant: f64,
        path: Vec<f64>,
        interrupted: bool,
    }

    fn script() -> Vec<Gesture> {
        let deg = |d: f64| d.to_radians();
        vec![
            Gesture {
                kind: DragKind::EndHandle,
                grant: deg(270.0),
                path: vec![deg(300.0), deg(340.0), deg(10.0)],
                interrupted: false,
            },
            Gesture {
                kind: DragKind::StartHandle,
                grant: deg(90.0),
                path: vec![deg(60.0), deg(20.0)],
                interrupted: false,
            },
            Gesture {
                kind: DragKind::ArcBody,
                grant: deg(350.0),
                path: vec![deg(355.0), deg(5.0), deg(30.0)],
                interrupted: true,
            },
        ]
    }

    fn load_settings() -> Result<Settings, String> {
        match std::env::args().nth(1) {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read {}: {}", path, e))?;
                Settings::from_json(&json).map_err(|e| format!("{}: {}", path, e))
            }
            None => Ok(Settings::default()),
        }
    }

    fn fmt_model(m: &ArcModel) -> String {
        format!(
            "start={:7.2}° length={:7.2}° end={:7.2}°",
            m.start_angle.to_degrees(),
            m.angle_length.to_degrees(),
            m.end_angle().to_degrees()
        )
    }

    pub fn run() -> Result<(), String> {
        let settings = load_settings()?;
        let size = settings.container_size();
        let radius = settings.radius;

        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);
        let initial = ArcModel::new(90f64.to_radians(), 180f64.to_radians());
        let mut slider = CircularSlider::new(initial, settings)
            .with_on_update(move |m| sink.borrow_mut().push(m));

        // Moves before layout are dropped
        slider.on_grant(DragKind::EndHandle, Point::new(size, size));
        slider.on_move(Point::new(0.0, 0.0));
        log::info!("Before layout: {} updates", updates.borrow().len());

        let layout = LayoutRect::new(40.0, 60.0, size, size);
        slider.on_layout(layout);
        let center = layout.center();
        let at = |angle: f64| center + arc_endpoint(angle, radius);

        println!("initial       {}", fmt_model(&slider.model()));
        for gesture in script() {
            if !slider.on_grant(gesture.kind, at(gesture.grant)) {
                log::warn!("{} grant rejected", gesture.kind.as_str());
                continue;
            }
            for angle in gesture.path {
                if let Some(model) = slider.on_move(at(angle)) {
                    println!("{:<13} {}", gesture.kind.as_str(), fmt_model(&model));
                }
            }
            if gesture.interrupted {
                slider.on_terminate();
            } else {
                slider.on_release();
            }
        }

        log::info!("{} updates emitted", updates.borrow().len());
        let plan = slider.render_plan();
        for d in plan.segment_paths() {
            println!("path  {}", d);
        }
        println!("start handle  ({:.2}, {:.2})", plan.start_handle.x, plan.start_handle.y);
        println!("end handle    ({:.2}, {:.2})", plan.end_handle.x, plan.end_handle.y);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arc Slider demo starting...");
    if let Err(e) = demo::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
