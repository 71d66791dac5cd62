//! Pluggable noise generation for motion and sensing.
//!
//! The simulator is deterministic by default: both models are parameterized
//! over a [`Noise`] implementation and default to [`NoNoise`], the identity.
//! Gaussian perturbation is available as an opt-in for generating corrupted
//! datasets, driven by an abstracted [`Rng`] so tests stay deterministic.

use crate::core::types::Pose2D;

/// A perturbation applied to a simulated value.
///
/// Implementations may hold RNG state, hence `&mut self`.
pub trait Noise<T> {
    /// Perturb a value, returning the (possibly) modified value.
    fn perturb(&mut self, value: T) -> T;
}

/// Identity noise: returns every value unchanged.
///
/// This is the default for both the motion and sensor models.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl Noise<Pose2D> for NoNoise {
    #[inline]
    fn perturb(&mut self, value: Pose2D) -> Pose2D {
        value
    }
}

impl Noise<f32> for NoNoise {
    #[inline]
    fn perturb(&mut self, value: f32) -> f32 {
        value
    }
}

/// Trait for random number generation (abstracted for testing).
pub trait Rng {
    /// Generate a random f32 in [0, 1).
    fn gen_f32(&mut self) -> f32;

    /// Generate a random f32 from the standard normal distribution.
    fn gen_standard_normal(&mut self) -> f32;
}

/// Deterministic LCG-based RNG.
///
/// Small and seedable, intended for reproducible noisy datasets. Standard
/// normal samples use the Box-Muller transform.
#[derive(Debug, Clone)]
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    /// Create a new generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

impl Rng for LcgRng {
    fn gen_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn gen_standard_normal(&mut self) -> f32 {
        // Box-Muller transform
        let u1 = self.gen_f32().max(1e-10);
        let u2 = self.gen_f32();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f32::consts::PI * u2;
        r * theta.cos()
    }
}

/// Additive zero-mean Gaussian pose noise with per-component sigma.
#[derive(Debug, Clone)]
pub struct GaussianPoseNoise<R: Rng> {
    /// Standard deviation for x (meters)
    pub sigma_x: f32,
    /// Standard deviation for y (meters)
    pub sigma_y: f32,
    /// Standard deviation for theta (radians)
    pub sigma_theta: f32,
    rng: R,
}

impl<R: Rng> GaussianPoseNoise<R> {
    /// Create pose noise with the given per-component standard deviations.
    pub fn new(sigma_x: f32, sigma_y: f32, sigma_theta: f32, rng: R) -> Self {
        Self {
            sigma_x,
            sigma_y,
            sigma_theta,
            rng,
        }
    }
}

impl<R: Rng> Noise<Pose2D> for GaussianPoseNoise<R> {
    fn perturb(&mut self, value: Pose2D) -> Pose2D {
        Pose2D::new(
            value.x + sample_gaussian(&mut self.rng, self.sigma_x),
            value.y + sample_gaussian(&mut self.rng, self.sigma_y),
            value.theta + sample_gaussian(&mut self.rng, self.sigma_theta),
        )
    }
}

/// Additive zero-mean Gaussian range noise.
#[derive(Debug, Clone)]
pub struct GaussianRangeNoise<R: Rng> {
    /// Standard deviation for range (meters)
    pub sigma: f32,
    rng: R,
}

impl<R: Rng> GaussianRangeNoise<R> {
    /// Create range noise with the given standard deviation.
    pub fn new(sigma: f32, rng: R) -> Self {
        Self { sigma, rng }
    }
}

impl<R: Rng> Noise<f32> for GaussianRangeNoise<R> {
    fn perturb(&mut self, value: f32) -> f32 {
        value + sample_gaussian(&mut self.rng, self.sigma)
    }
}

/// Sample from a Gaussian distribution with zero mean.
fn sample_gaussian<R: Rng>(rng: &mut R, sigma: f32) -> f32 {
    if sigma < 1e-10 {
        return 0.0;
    }
    rng.gen_standard_normal() * sigma
}
