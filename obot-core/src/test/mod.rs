//! Unit tests for core types.
