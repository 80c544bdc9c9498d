use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;

/// A named centered view for one fractal kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub center: Complex,
    pub zoom: f64,
}

const fn preset(label: &'static str, real: f64, imag: f64, zoom: f64) -> Preset {
    Preset {
        label,
        center: Complex::new(real, imag),
        zoom,
    }
}

const MANDELBROT_PRESETS: &[Preset] = &[
    preset("Full View", -0.5, 0.0, 1.0),
    preset("Spiral", -0.7269, 0.1889, 100.0),
    preset("Lightning", -0.8, 0.156, 200.0),
    preset("Seahorse Valley", -0.16, 1.0405, 150.0),
    preset("Island", -1.25066, 0.02012, 300.0),
    preset("Tentacles", -0.749, 0.1102, 400.0),
    preset("Right Branch", 0.3, 0.5, 80.0),
];

const JULIA_PRESETS: &[Preset] = &[preset("Full View", 0.0, 0.0, 1.0)];

const BURNING_SHIP_PRESETS: &[Preset] = &[
    preset("Classic View", -0.5, -0.5, 1.0),
    preset("Ship Detail", -1.7269, -0.0311, 100.0),
    preset("Lightning", -1.775, -0.01, 500.0),
    preset("Antenna", -1.7795, -0.0045, 2000.0),
];

const NEWTON_PRESETS: &[Preset] = &[
    preset("Classic View", 0.0, 0.0, 1.0),
    preset("Boundary Detail", 0.0, 0.0, 3.0),
    preset("Root Detail", 0.5, 0.866, 20.0),
    preset("Fractal Edge", -0.2, 0.3, 50.0),
];

/// Presets for `kind`; the first entry is its overview.
#[must_use]
pub fn presets_for(kind: FractalKind) -> &'static [Preset] {
    match kind {
        FractalKind::Mandelbrot => MANDELBROT_PRESETS,
        FractalKind::Julia => JULIA_PRESETS,
        FractalKind::BurningShip => BURNING_SHIP_PRESETS,
        FractalKind::Newton => NEWTON_PRESETS,
    }
}

/// Case-insensitive lookup; spaces, dashes and underscores are interchangeable.
#[must_use]
pub fn find_preset(kind: FractalKind, label: &str) -> Option<Preset> {
    let wanted = normalise(label);

    presets_for(kind)
        .iter()
        .copied()
        .find(|preset| normalise(preset.label) == wanted)
}

fn normalise(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_presets() {
        for &kind in FractalKind::ALL {
            assert!(!presets_for(kind).is_empty(), "{} has no presets", kind);
        }
    }

    #[test]
    fn test_all_zooms_are_positive() {
        for &kind in FractalKind::ALL {
            for preset in presets_for(kind) {
                assert!(preset.zoom > 0.0, "{} / {}", kind, preset.label);
            }
        }
    }

    #[test]
    fn test_labels_are_unique_per_kind() {
        for &kind in FractalKind::ALL {
            let presets = presets_for(kind);
            for (i, a) in presets.iter().enumerate() {
                for b in &presets[i + 1..] {
                    assert_ne!(a.label, b.label);
                }
            }
        }
    }

    #[test]
    fn test_find_preset_normalises_label() {
        let preset = find_preset(FractalKind::BurningShip, "ship-detail").unwrap();

        assert_eq!(preset.center, Complex::new(-1.7269, -0.0311));
        assert_eq!(preset.zoom, 100.0);
        assert_eq!(
            find_preset(FractalKind::Newton, "ROOT_DETAIL").map(|p| p.zoom),
            Some(20.0)
        );
        assert!(find_preset(FractalKind::Julia, "Antenna").is_none());
    }
}
