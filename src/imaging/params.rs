//! Parameter types for filter operations.
//!
//! These describe *what* to do. [`Smoothing`] is validated on construction so
//! anything holding one can build its kernel without a further check.

use super::kernel::{FilterError, Kernel, check_kernel_size, check_sigma};

/// Gaussian smoothing parameters: odd kernel size and positive sigma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    kernel_size: usize,
    sigma: f64,
}

impl Smoothing {
    pub fn new(kernel_size: usize, sigma: f64) -> Result<Self, FilterError> {
        check_kernel_size(kernel_size)?;
        check_sigma(sigma)?;
        Ok(Self { kernel_size, sigma })
    }

    pub fn kernel_size(self) -> usize {
        self.kernel_size
    }

    pub fn sigma(self) -> f64 {
        self.sigma
    }

    pub fn kernel(self) -> Kernel {
        Kernel::gaussian_unchecked(self.kernel_size, self.sigma)
    }
}

impl Default for Smoothing {
    /// 5 taps, sigma 20: a near-box blur.
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 20.0,
        }
    }
}
