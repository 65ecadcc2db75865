//! Campaign planning: plan text parsing, mock data synthesis and record assembly.

pub mod assembler;
pub mod extractor;
pub mod fields;
pub mod generator;
pub mod handlers;
pub mod lookup;
pub mod narrative;
pub mod prompts;
pub mod realistic;
pub mod synthesizer;
