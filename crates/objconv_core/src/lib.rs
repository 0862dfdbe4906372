//! Public library API for converting decoded wire JSON into typed API objects.

/// Object catalogue, discriminator registry, recursive conversion, and diagnostics.
pub mod wire;
