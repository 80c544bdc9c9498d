use crate::core::colour_maps::colour_map::FractalColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::colour_maps::maps::flame::FlameColourMap;
use crate::core::colour_maps::maps::rainbow::RainbowColourMap;
use crate::core::colour_maps::maps::root_shading::RootShadingColourMap;
use crate::core::colour_maps::maps::spectrum::SpectrumColourMap;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, max_iterations: u32) -> Box<dyn FractalColourMap> {
    match kind {
        ColourMapKind::Rainbow => Box::new(RainbowColourMap::new(max_iterations)),
        ColourMapKind::Flame => Box::new(FlameColourMap::new(max_iterations)),
        ColourMapKind::Spectrum => Box::new(SpectrumColourMap::new(max_iterations)),
        ColourMapKind::RootShading => Box::new(RootShadingColourMap::new(max_iterations)),
    }
}
