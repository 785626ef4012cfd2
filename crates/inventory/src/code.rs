//! Display code generation.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::product::ProductCode;

const PREFIX_LEN: usize = 3;
const SUFFIX_MIN: u16 = 1000;
const SUFFIX_MAX: u16 = 9999;

/// Derives a display code for a newly created product.
pub trait CodeGenerator {
    fn generate(&mut self, name: &str) -> ProductCode;
}

/// `{PREFIX}-{NNNN}`: first three characters of the name upper-cased, then a
/// random number in 1000..=9999. Names shorter than three characters give a
/// shorter prefix. Codes are cosmetic and may collide.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator<R = ThreadRng> {
    rng: R,
}

impl RandomCodeGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomCodeGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomCodeGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CodeGenerator for RandomCodeGenerator<R> {
    fn generate(&mut self, name: &str) -> ProductCode {
        let suffix = self.rng.gen_range(SUFFIX_MIN..=SUFFIX_MAX);
        ProductCode::new(format!("{}-{suffix}", code_prefix(name)))
    }
}

/// Deterministic part of a product code.
pub fn code_prefix(name: &str) -> String {
    let head: String = name.chars().take(PREFIX_LEN).collect();
    head.to_uppercase()
}
