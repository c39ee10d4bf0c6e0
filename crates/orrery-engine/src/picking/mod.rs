pub mod caster;
pub mod ray;
pub mod resolver;

pub use caster::{RayCaster, RayHit};
pub use ray::Ray;
pub use resolver::{pick, resolve_hits};
