use orrery_engine::{
    FrameCapture, FrameDriver, InputEvent, LoadProgress, NoTextures, OrreryConfig, PreloadedTextures,
    SceneError, SceneEvent, SceneRegistry, TextureLoader, TextureManifest, Viewport,
};
use orrery_engine::glam::Vec3;

/// A scene the runner can host.
///
/// Each demo implements this and hands its type to `export_orrery!`, because
/// wasm-bindgen cannot export generic structs directly.
pub trait Orrery {
    /// Engine configuration. Overridden by a JSON config loaded before init.
    fn config(&self) -> OrreryConfig {
        OrreryConfig::default()
    }

    /// Build the scene, resolving textures through `loader`.
    fn build(&self, config: &OrreryConfig, loader: &mut dyn TextureLoader) -> Result<SceneRegistry, SceneError>;
}

/// Generic runner that wires a scene to the frame driver and keeps the last
/// frame in flat buffers for JS.
pub struct OrreryRunner<O: Orrery> {
    orrery: O,
    config: OrreryConfig,
    manifest: Option<TextureManifest>,
    driver: Option<FrameDriver>,
    capture: FrameCapture,
    camera: [f32; 6],
    progress: LoadProgress,
}

impl<O: Orrery> OrreryRunner<O> {
    pub fn new(orrery: O) -> Self {
        let config = orrery.config();
        Self {
            orrery,
            config,
            manifest: None,
            driver: None,
            capture: FrameCapture::new(),
            camera: [0.0; 6],
            progress: LoadProgress::default(),
        }
    }

    /// Override configuration from JSON. Only takes effect before `init`.
    pub fn load_config(&mut self, json: &str) {
        if self.driver.is_some() {
            log::warn!("Config loaded after init; ignored");
            return;
        }
        match OrreryConfig::from_json(json) {
            Ok(config) => self.config = config,
            Err(e) => log::error!("Bad orrery config: {e}"),
        }
    }

    /// Record which textures the host has. Only takes effect before `init`.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => self.manifest = Some(manifest),
            Err(e) => log::error!("Bad texture manifest: {e}"),
        }
    }

    /// Build the scene and start the clock at `now` seconds.
    /// On a construction error the runner stays uninitialised and ticks do nothing.
    pub fn init(&mut self, width: f32, height: f32, now: f64) {
        if let Err(e) = self.config.validate() {
            log::error!("Orrery config rejected: {e}");
            self.driver = None;
            return;
        }
        let built = match &self.manifest {
            Some(manifest) => {
                let mut loader = PreloadedTextures::from_manifest(manifest);
                self.orrery.build(&self.config, &mut loader)
            }
            None => self.orrery.build(&self.config, &mut NoTextures),
        };
        match built {
            Ok(registry) => {
                self.progress = registry.load_progress();
                let viewport = Viewport::new(width, height);
                self.driver = Some(FrameDriver::new(registry, &self.config, viewport, now));
            }
            Err(e) => {
                log::error!("Scene construction failed: {e}");
                self.driver = None;
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.driver.is_some()
    }

    pub fn push_input(&mut self, event: InputEvent) {
        if let Some(driver) = &mut self.driver {
            driver.push_input(event);
        }
    }

    /// Queue a camera pose. It takes effect in arrival order with picks.
    pub fn set_camera(&mut self, eye: [f32; 3], target: [f32; 3]) {
        self.push_input(InputEvent::SetCamera {
            eye: Vec3::from_array(eye),
            target: Vec3::from_array(target),
        });
    }

    /// Run one frame at wall-clock `now` seconds.
    pub fn tick(&mut self, now: f64) {
        let Some(driver) = &mut self.driver else {
            return;
        };
        driver.tick(now, &mut self.capture);
        self.camera = self.capture.camera_floats();
    }

    /// Events since the last call, as a JSON array.
    pub fn take_events_json(&mut self) -> String {
        let Some(driver) = &mut self.driver else {
            return "[]".to_owned();
        };
        let events: Vec<SceneEvent> = driver.drain_events();
        SceneEvent::to_json(&events).unwrap_or_else(|e| {
            log::error!("Failed to encode scene events: {e}");
            "[]".to_owned()
        })
    }

    // ---- Pointer accessors for reads straight out of wasm memory ----

    pub fn nodes_ptr(&self) -> *const f32 {
        self.capture.nodes_ptr()
    }

    pub fn node_count(&self) -> u32 {
        self.capture.node_count()
    }

    /// Eye xyz then target xyz.
    pub fn camera_ptr(&self) -> *const f32 {
        self.camera.as_ptr()
    }

    pub fn camera(&self) -> [f32; 6] {
        self.camera
    }

    pub fn speed(&self) -> f64 {
        self.driver.as_ref().map_or(self.config.initial_speed, |d| d.speed())
    }

    pub fn min_speed(&self) -> f64 {
        self.config.min_speed
    }

    pub fn max_speed(&self) -> f64 {
        self.config.max_speed
    }

    /// Texture counters from scene construction, for the loading screen.
    pub fn load_progress(&self) -> LoadProgress {
        self.progress
    }
}
