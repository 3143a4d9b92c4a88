/// Core module for text analysis
///
/// This module contains the counting engine: basic element counts, closed-class
/// vocabularies and the analyzer that combines them.

pub mod analyzer;
pub mod counter;
pub mod error;
pub mod sample;
pub mod vocabulary;
