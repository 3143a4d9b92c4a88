/// Utility modules for the text analyzer
///
/// This module contains utility functions for reading input, output formatting,
/// and other helper operations.

pub mod file_utils;
pub mod output_formatter;
