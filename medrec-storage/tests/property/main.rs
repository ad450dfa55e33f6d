//! Property test suite for the storage engine.
