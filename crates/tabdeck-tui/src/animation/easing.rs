//! Pure easing functions mapping input [0, 1] to output [0, 1]

use std::f32::consts::FRAC_PI_2;

pub use tabdeck_core::EasingType;

/// Signature of an easing curve
pub type EasingFn = fn(f32) -> f32;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// The curve as a plain function pointer, suitable for a tween
    fn function(&self) -> EasingFn;

    /// Apply the easing function to a progress value in [0, 1]
    fn apply(&self, t: f32) -> f32 {
        (self.function())(t.clamp(0.0, 1.0))
    }
}

impl EasingTypeExt for EasingType {
    fn function(&self) -> EasingFn {
        match self {
            EasingType::None => step,
            EasingType::Linear => linear,
            EasingType::OutSine => out_sine,
            EasingType::OutQuad => out_quad,
            EasingType::Cubic => out_cubic,
            EasingType::Quintic => out_quintic,
            EasingType::EaseOut => out_expo,
        }
    }
}

#[inline]
pub fn step(t: f32) -> f32 {
    if t < 1.0 { 0.0 } else { 1.0 }
}

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// Sine ease-out: f(t) = sin(t * pi/2)
#[inline]
pub fn out_sine(t: f32) -> f32 {
    (t * FRAC_PI_2).sin()
}

/// Quadratic ease-out: f(t) = 1 - (1-t)²
#[inline]
pub fn out_quad(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
pub fn out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
pub fn out_quintic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
pub fn out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}
