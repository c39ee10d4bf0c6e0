//! Solar system data: scaled sizes, distances and periods for readability.
//!
//! Distances are scene units from the Sun. Periods are given in Earth days
//! and compressed so that one Earth year lasts `EARTH_PERIOD` seconds.

use orrery_engine::RenderHandle;

/// Earth's orbit in simulation seconds. Every other period scales from it.
pub const EARTH_PERIOD: f64 = 10.0;

/// Convert a period in Earth days into simulation seconds.
pub fn period_from_days(days: f64) -> f64 {
    EARTH_PERIOD * days / 365.0
}

// ── Render handles ───────────────────────────────────────────────────
//
// Shared with the JS scene so hits map back to bodies. Handles below
// `FIRST_BODY_HANDLE` belong to decorations the core never selects.

pub const SUN_GLOW: RenderHandle = RenderHandle(2);
pub const STARFIELD: RenderHandle = RenderHandle(3);
/// Orbit path rings use `ORBIT_PATH_BASE + planet index`.
pub const ORBIT_PATH_BASE: u32 = 200;

pub const FIRST_BODY_HANDLE: u32 = 10;
pub const SUN: RenderHandle = RenderHandle(10);
pub const VENUS_ATMOSPHERE: RenderHandle = RenderHandle(31);
pub const EARTH_CLOUDS: RenderHandle = RenderHandle(41);
pub const MOON: RenderHandle = RenderHandle(45);
pub const SATURN_RINGS: RenderHandle = RenderHandle(71);

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 5.0;
pub const SUN_COLOR: u32 = 0xFDB813;
pub const SUN_SPIN: f64 = 0.002;
pub const SUN_INFO: &str = "The star at the center of the Solar System";
pub const SUN_DETAILS: &str = "A huge sphere of hot hydrogen and helium plasma that lights and warms \
every planet. It holds about 99.8% of the mass of the whole Solar System.";

// ── Moon ─────────────────────────────────────────────────────────────

pub const MOON_RADIUS: f32 = 0.27;
pub const MOON_DISTANCE: f64 = 2.0;
/// Moon orbit in simulation seconds.
pub const MOON_PERIOD: f64 = 2.0;
pub const MOON_COLOR: u32 = 0xDDDDDD;
pub const MOON_SPIN: f64 = 0.005;
pub const MOON_INFO: &str = "Earth's only natural satellite";
pub const MOON_DETAILS: &str = "A cratered, airless world whose pull raises Earth's tides. It is \
tidally locked, so the same face always points at Earth, and it drifts away by about 3.8 cm a year.";

// ── Planets ──────────────────────────────────────────────────────────

/// Self-rotation shared by all planets, radians per frame at speed 1.
pub const PLANET_SPIN: f64 = 0.01;
/// Clouds turn faster than the surface beneath them.
pub const CLOUD_SPIN: f64 = 0.015;
pub const ATMOSPHERE_SPIN: f64 = 0.005;

pub const RING_INNER: f32 = 3.5;
pub const RING_OUTER: f32 = 5.5;
pub const RING_COLOR: u32 = 0xCDAA7D;

/// Extra visual layer carried by a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    None,
    Atmosphere,
    Clouds,
    Rings,
}

/// Static description of one planet.
pub struct PlanetData {
    pub name: &'static str,
    pub handle: RenderHandle,
    pub radius: f32,
    pub distance: f64,
    pub period_days: f64,
    pub texture: &'static str,
    pub color: u32,
    pub layer: Layer,
    pub info: &'static str,
    pub details: &'static str,
}

pub const PLANET_COUNT: usize = 8;

pub static PLANETS: [PlanetData; PLANET_COUNT] = [
    PlanetData {
        name: "Mercury",
        handle: RenderHandle(20),
        radius: 0.5,
        distance: 10.0,
        period_days: 88.0,
        texture: "mercury.jpg",
        color: 0xE5E5E5,
        layer: Layer::None,
        info: "Smallest planet, closest to the Sun",
        details: "A small rocky world scarred by craters. With almost no atmosphere it swings \
between scorching days and freezing nights, and one of its days outlasts its year.",
    },
    PlanetData {
        name: "Venus",
        handle: RenderHandle(30),
        radius: 1.0,
        distance: 15.0,
        period_days: 225.0,
        texture: "venus.jpg",
        color: 0xFFC649,
        layer: Layer::Atmosphere,
        info: "Similar in size to Earth, known for extreme temperatures",
        details: "Thick sulfuric clouds trap so much heat that Venus is the hottest planet, hot \
enough to melt lead. It spins so slowly that its day is longer than its year.",
    },
    PlanetData {
        name: "Earth",
        handle: RenderHandle(40),
        radius: 1.0,
        distance: 20.0,
        period_days: 365.0,
        texture: "earth.jpg",
        color: 0x6B93D6,
        layer: Layer::Clouds,
        info: "Our home planet, the only known world with life",
        details: "Oceans cover about 70% of its surface and a nitrogen-oxygen atmosphere wraps it. \
It sits at just the right distance from the Sun for liquid water and life.",
    },
    PlanetData {
        name: "Mars",
        handle: RenderHandle(50),
        radius: 0.7,
        distance: 25.0,
        period_days: 687.0,
        texture: "mars.jpg",
        color: 0xE27B58,
        layer: Layer::None,
        info: "The Red Planet, home to the largest volcano in the solar system",
        details: "Cold, dusty and rusty red from iron in its soil. It has polar ice caps, deep \
canyons and Olympus Mons, a volcano about three times the height of Everest.",
    },
    PlanetData {
        name: "Jupiter",
        handle: RenderHandle(60),
        radius: 3.0,
        distance: 40.0,
        period_days: 4332.0,
        texture: "jupiter.jpg",
        color: 0xC88B3A,
        layer: Layer::None,
        info: "Largest planet, a gas giant with a Great Red Spot",
        details: "A giant ball of hydrogen and helium whose Great Red Spot is a storm wider than \
Earth. At least 95 moons orbit it, more than any other planet.",
    },
    PlanetData {
        name: "Saturn",
        handle: RenderHandle(70),
        radius: 2.5,
        distance: 60.0,
        period_days: 10759.0,
        texture: "saturn.jpg",
        color: 0xEAD6B8,
        layer: Layer::Rings,
        info: "Famous for its spectacular ring system",
        details: "A windy, frigid gas giant circled by rings of ice and dust. Its average density \
is lower than water's, so it would float in a big enough ocean.",
    },
    PlanetData {
        name: "Uranus",
        handle: RenderHandle(80),
        radius: 2.0,
        distance: 80.0,
        period_days: 30687.0,
        texture: "uranus.jpg",
        color: 0xB1E3E4,
        layer: Layer::None,
        info: "Ice giant that rotates on its side",
        details: "Methane in its atmosphere gives it a pale blue-green tint. Tipped on its side, it \
rolls along its orbit, and each of its seasons lasts about 21 years.",
    },
    PlanetData {
        name: "Neptune",
        handle: RenderHandle(90),
        radius: 2.0,
        distance: 100.0,
        period_days: 60190.0,
        texture: "neptune.jpg",
        color: 0x5B5DDF,
        layer: Layer::None,
        info: "Windiest planet with the strongest storms",
        details: "The farthest planet, deep blue and stormy, with winds above 1,200 mph. It was \
predicted by mathematics before anyone saw it through a telescope.",
    },
];

pub fn planet(name: &str) -> Option<&'static PlanetData> {
    PLANETS.iter().find(|p| p.name == name)
}
