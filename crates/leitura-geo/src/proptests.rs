//! Property-based tests for the resolver.
