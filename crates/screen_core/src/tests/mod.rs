pub use super::*;

mod validate_tests;
