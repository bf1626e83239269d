//! Presentation-facing facade.
//!
//! Groups the rendering contract and the incremental transcript view so the
//! binary depends on `ui` instead of individual terminal modules.

pub mod render;
pub mod transcript;
