use std::{
    fmt,
    ops::{Add, Mul},
};

use bytemuck::{Pod, Zeroable};

/// A point on the complex plane.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// The squared magnitude `real² + imaginary²`.
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex {
            real: self.real + other.real,
            imaginary: self.imaginary + other.imaginary,
        }
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex {
            real: self.real * other.real - self.imaginary * other.imaginary,
            imaginary: self.real * other.imaginary + self.imaginary * other.real,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary.is_sign_negative() {
            write!(f, "{}-{}i", self.real, -self.imaginary)
        } else {
            write!(f, "{}+{}i", self.real, self.imaginary)
        }
    }
}
