//! Tests for the session authenticator.
