//! Renderer contract.
//!
//! The core never draws. Each tick it hands the host a `FrameData` with the
//! node transforms and camera, and the host draws however it likes
//! (three.js on the web, a native backend elsewhere).

use super::camera::{Camera3D, CameraUniform};
use super::instance::NodeInstance;

/// Everything the renderer needs for one frame.
pub struct FrameData<'a> {
    /// Node transforms, one per render handle.
    pub nodes: &'a [NodeInstance],
    pub camera: &'a Camera3D,
    /// Simulation seconds since start.
    pub elapsed: f64,
    pub speed: f64,
}

impl FrameData<'_> {
    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera.uniform()
    }
}

pub trait Renderer {
    /// Draw one frame.
    fn draw(&mut self, frame: &FrameData);

    /// Surface resized, in CSS pixels.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Keeps a copy of the last frame in flat buffers for the host to read.
///
/// Used by the web bridge, where JS reads transforms and the camera straight
/// out of wasm memory after each tick.
#[derive(Default)]
pub struct FrameCapture {
    pub nodes: Vec<NodeInstance>,
    pub camera: Option<CameraUniform>,
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub elapsed: f64,
    pub speed: f64,
    pub frames: u64,
}

impl FrameCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes_ptr(&self) -> *const f32 {
        self.nodes.as_ptr() as *const f32
    }

    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// Eye then target, 6 floats.
    pub fn camera_floats(&self) -> [f32; 6] {
        [
            self.eye[0], self.eye[1], self.eye[2],
            self.target[0], self.target[1], self.target[2],
        ]
    }
}

impl Renderer for FrameCapture {
    fn draw(&mut self, frame: &FrameData) {
        self.nodes.clear();
        self.nodes.extend_from_slice(frame.nodes);
        self.camera = Some(frame.camera_uniform());
        self.eye = frame.camera.eye.to_array();
        self.target = frame.camera.target.to_array();
        self.elapsed = frame.elapsed;
        self.speed = frame.speed;
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn capture_copies_frame() {
        let cam = Camera3D::new(Vec3::new(0.0, 50.0, 100.0), Vec3::ZERO, 1.0);
        let nodes = [NodeInstance { handle: 7.0, ..Default::default() }];
        let mut capture = FrameCapture::new();
        capture.draw(&FrameData { nodes: &nodes, camera: &cam, elapsed: 2.0, speed: 1.5 });
        assert_eq!(capture.node_count(), 1);
        assert_eq!(capture.nodes[0].handle, 7.0);
        assert_eq!(capture.camera_floats(), [0.0, 50.0, 100.0, 0.0, 0.0, 0.0]);
        assert_eq!(capture.frames, 1);
        assert_eq!(capture.speed, 1.5);
        assert!(capture.camera.is_some());
    }
}
