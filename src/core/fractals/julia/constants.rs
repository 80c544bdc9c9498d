use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConstant {
    pub name: &'static str,
    pub c: Complex,
}

pub const DEFAULT_JULIA_CONSTANT: JuliaConstant = JULIA_CONSTANTS[0];

pub const JULIA_CONSTANTS: [JuliaConstant; 4] = [
    JuliaConstant {
        name: "Classic",
        c: Complex::new(-0.7269, 0.1889),
    },
    JuliaConstant {
        name: "Dragon",
        c: Complex::new(-0.8, 0.156),
    },
    JuliaConstant {
        name: "Spiral",
        c: Complex::new(-0.75, 0.11),
    },
    JuliaConstant {
        name: "Dendrite",
        c: Complex::new(-0.235125, 0.827215),
    },
];

/// Case-insensitive lookup by name.
#[must_use]
pub fn find_julia_constant(name: &str) -> Option<JuliaConstant> {
    JULIA_CONSTANTS
        .iter()
        .copied()
        .find(|constant| constant.name.eq_ignore_ascii_case(name.trim()))
}
