//! CLI library components for the rescale normalizer.

pub mod logging;
