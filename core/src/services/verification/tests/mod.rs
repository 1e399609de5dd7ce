//! Tests for the verification lifecycle service.
