use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod scene;
use scene::SolarSystem;

orrery_web::export_orrery!(SolarSystem, "solar-system");
