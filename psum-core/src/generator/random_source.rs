use rand::Rng;

/// Source of uniform random draws used by the text assemblers.
///
/// # Invariants
/// - `next_int(min, max)` returns a value in the closed interval `[min, max]`
/// - `next_float()` returns a value in `[0.0, 1.0)`
pub trait RandomSource {
	/// Draws an integer uniformly from `[min, max]`.
	///
	/// Returns `min` when `max <= min`.
	fn next_int(&mut self, min: usize, max: usize) -> usize;

	/// Draws a float uniformly from `[0.0, 1.0)`.
	fn next_float(&mut self) -> f64;
}

/// Unseeded process-wide generator (`rand::rng()`).
///
/// This is what production code uses. Output is not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
	fn next_int(&mut self, min: usize, max: usize) -> usize {
		if max <= min {
			return min;
		}
		rand::rng().random_range(min..=max)
	}

	fn next_float(&mut self) -> f64 {
		rand::rng().random::<f64>()
	}
}

/// Adapter turning any `rand::Rng` into a `RandomSource`.
///
/// Mostly useful with a seeded `StdRng` to get repeatable runs.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
	rng: R,
}

impl<R: Rng> RngSource<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	pub fn into_inner(self) -> R {
		self.rng
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn next_int(&mut self, min: usize, max: usize) -> usize {
		if max <= min {
			return min;
		}
		self.rng.random_range(min..=max)
	}

	fn next_float(&mut self) -> f64 {
		self.rng.random::<f64>()
	}
}
