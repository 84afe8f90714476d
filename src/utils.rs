// src/utils.rs

/// Numeric constants
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const EPSILON_COARSE: f32 = 1e-4; // For assertions on chained float arithmetic
}

/// Tolerant float comparisons
pub mod comparison {
    use super::constants::EPSILON;

    /// Checks whether two floats are (nearly) equal
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Checks equality under a custom tolerance
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Checks whether a float is (nearly) zero
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }
}
