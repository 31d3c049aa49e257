//! Integration tests for the transport and client against a local stub
//! HTTP server.
