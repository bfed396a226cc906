use tracing::debug;

/// Integer arithmetic exposed by the calculator API.
///
/// All operations use 32-bit two's complement and wrap on overflow, so every
/// input pair has a result.
pub trait Arithmetic: Send + Sync {
    fn add(&self, a: i32, b: i32) -> i32;
    fn multiply(&self, a: i32, b: i32) -> i32;
    fn square(&self, a: i32) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Arithmetic for Calculator {
    fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "add");
        a.wrapping_add(b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "multiply");
        a.wrapping_mul(b)
    }

    fn square(&self, a: i32) -> i32 {
        self.multiply(a, a)
    }
}
