pub mod runner;

pub use orrery_engine;
pub use runner::{Orrery, OrreryRunner};

/// Route `log` output to the browser console and panics to `console.error`.
/// Safe to call more than once.
pub fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Wall-clock seconds from the JS `Date` clock.
pub fn now_seconds() -> f64 {
    js_sys::Date::now() / 1000.0
}

/// Generate all `#[wasm_bindgen]` exports for an orrery scene.
///
/// Generates:
/// - `thread_local!` storage for the OrreryRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod scene;
/// use scene::SolarSystem;
///
/// orrery_web::export_orrery!(SolarSystem, "solar-system");
/// ```
///
/// # Arguments
///
/// - `$orrery_type`: a type implementing `orrery_web::Orrery` with a `new()` constructor
/// - `$name`: a string literal used in the initialization log message
#[macro_export]
macro_rules! export_orrery {
    ($orrery_type:ty, $name:literal) => {
        use std::cell::RefCell;
        use $crate::orrery_engine::{InputEvent, NodeInstance};
        use $crate::orrery_engine::glam::Vec2;

        thread_local! {
            static RUNNER: RefCell<$crate::OrreryRunner<$orrery_type>> =
                RefCell::new($crate::OrreryRunner::new(<$orrery_type>::new()));
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::OrreryRunner<$orrery_type>) -> R) -> R {
            RUNNER.with(|cell| f(&mut cell.borrow_mut()))
        }

        /// Optional JSON config. Call before `orrery_init`.
        #[wasm_bindgen]
        pub fn orrery_load_config(json: &str) {
            $crate::install_logging();
            with_runner(|r| r.load_config(json));
        }

        /// Optional texture manifest. Call before `orrery_init`.
        #[wasm_bindgen]
        pub fn orrery_load_manifest(json: &str) {
            $crate::install_logging();
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn orrery_init(width: f32, height: f32) {
            $crate::install_logging();
            let now = $crate::now_seconds();
            with_runner(|r| r.init(width, height, now));
            log::info!("{}: initialized", $name);
        }

        #[wasm_bindgen]
        pub fn orrery_tick() {
            let now = $crate::now_seconds();
            with_runner(|r| r.tick(now));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn orrery_pick(ndc_x: f32, ndc_y: f32) {
            with_runner(|r| r.push_input(InputEvent::Pick { ndc: Vec2::new(ndc_x, ndc_y) }));
        }

        #[wasm_bindgen]
        pub fn orrery_pointer_tap(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerTap { x, y }));
        }

        #[wasm_bindgen]
        pub fn orrery_set_speed(factor: f64) {
            with_runner(|r| r.push_input(InputEvent::SetSpeed { factor }));
        }

        #[wasm_bindgen]
        pub fn orrery_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn orrery_dismiss_details() {
            with_runner(|r| r.push_input(InputEvent::DismissDetails));
        }

        /// Camera pose from the host's orbit controls. Queued like the
        /// other input, so earlier picks see the earlier pose.
        #[wasm_bindgen]
        pub fn orrery_set_camera(ex: f32, ey: f32, ez: f32, tx: f32, ty: f32, tz: f32) {
            with_runner(|r| r.set_camera([ex, ey, ez], [tx, ty, tz]));
        }

        /// Scene events since the last call, as a JSON array.
        #[wasm_bindgen]
        pub fn orrery_take_events() -> String {
            with_runner(|r| r.take_events_json())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_nodes_ptr() -> *const f32 {
            with_runner(|r| r.nodes_ptr())
        }

        #[wasm_bindgen]
        pub fn get_node_count() -> u32 {
            with_runner(|r| r.node_count())
        }

        #[wasm_bindgen]
        pub fn get_node_floats() -> u32 {
            NodeInstance::FLOATS as u32
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_speed() -> f64 {
            with_runner(|r| r.speed())
        }

        #[wasm_bindgen]
        pub fn get_min_speed() -> f64 {
            with_runner(|r| r.min_speed())
        }

        #[wasm_bindgen]
        pub fn get_max_speed() -> f64 {
            with_runner(|r| r.max_speed())
        }

        #[wasm_bindgen]
        pub fn get_textures_loaded() -> u32 {
            with_runner(|r| r.load_progress().loaded)
        }

        #[wasm_bindgen]
        pub fn get_textures_total() -> u32 {
            with_runner(|r| r.load_progress().total)
        }
    };
}
