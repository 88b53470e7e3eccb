/// Significant decimal digits an `f64` carries; requested precisions are
/// clamped to this.
pub const MAX_DIGITS: u32 = 17;

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
/// Euler-Mascheroni constant γ
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;
/// Catalan's constant G
pub const CATALAN: f64 = 0.915_965_594_177_219;
/// Glaisher-Kinkelin constant A
pub const GLAISHER: f64 = 1.282_427_129_100_622_6;
/// Khinchin's constant K₀
pub const KHINCHIN: f64 = 2.685_452_001_065_306;

/// `B₂ₖ` for `k = 1..=8`, as used by asymptotic expansions.
pub const BERNOULLI_EVEN: [f64; 8] = [
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
    -3617.0 / 510.0,
];
