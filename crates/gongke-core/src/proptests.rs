//! Property-based tests for the numeric normalization rules.
