//! Core numeric utilities shared by the sampler and allocator

pub mod rounding;
