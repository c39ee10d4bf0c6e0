use orrery_engine::{
    AttachmentDesc, BodyDesc, OrreryConfig, SceneBuilder, SceneError, SceneRegistry,
    TextureLoader,
};
use orrery_web::Orrery;

use crate::bodies::{self, Layer, PlanetData};

/// The Sun, eight planets and Earth's Moon.
pub struct SolarSystem;

impl SolarSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn planet_desc(p: &PlanetData) -> BodyDesc {
    let desc = BodyDesc::planet(
        p.name,
        p.handle,
        p.radius,
        p.distance,
        bodies::period_from_days(p.period_days),
    )
    .with_color(p.color)
    .with_texture(p.texture)
    .with_spin_rate(bodies::PLANET_SPIN)
    .with_info(p.info, p.details);

    match p.layer {
        Layer::None => desc,
        Layer::Atmosphere => desc.with_attachment(
            AttachmentDesc::atmosphere(bodies::VENUS_ATMOSPHERE)
                .with_texture("venus_atmosphere.jpg")
                .with_color(p.color)
                .with_spin_rate(bodies::ATMOSPHERE_SPIN),
        ),
        Layer::Clouds => desc.with_attachment(
            AttachmentDesc::clouds(bodies::EARTH_CLOUDS)
                .with_texture("earth_clouds.jpg")
                .with_spin_rate(bodies::CLOUD_SPIN),
        ),
        Layer::Rings => desc.with_attachment(
            AttachmentDesc::rings(bodies::SATURN_RINGS, bodies::RING_INNER, bodies::RING_OUTER)
                .with_texture("saturn_rings.jpg")
                .with_color(bodies::RING_COLOR),
        ),
    }
}

impl Orrery for SolarSystem {
    fn config(&self) -> OrreryConfig {
        OrreryConfig {
            reference_period: bodies::EARTH_PERIOD,
            ..OrreryConfig::default()
        }
    }

    fn build(&self, config: &OrreryConfig, loader: &mut dyn TextureLoader) -> Result<SceneRegistry, SceneError> {
        let mut builder = SceneBuilder::new().with_config(config).add(
            BodyDesc::star("Sun", bodies::SUN, bodies::SUN_RADIUS)
                .with_color(bodies::SUN_COLOR)
                .with_texture("sun.jpg")
                .with_spin_rate(bodies::SUN_SPIN)
                .with_info(bodies::SUN_INFO, bodies::SUN_DETAILS),
        );
        for p in &bodies::PLANETS {
            builder = builder.add(planet_desc(p));
            if p.name == "Earth" {
                builder = builder.add(
                    BodyDesc::moon(
                        "Moon",
                        "Earth",
                        bodies::MOON,
                        bodies::MOON_RADIUS,
                        bodies::MOON_DISTANCE,
                        bodies::MOON_PERIOD,
                    )
                    .with_color(bodies::MOON_COLOR)
                    .with_texture("moon.jpg")
                    .with_spin_rate(bodies::MOON_SPIN)
                    .with_info(bodies::MOON_INFO, bodies::MOON_DETAILS),
                );
            }
        }
        builder.build(loader)
    }
}
