//! Flutter bridge over `studydeck_core`.

pub mod api;
