// Client-side analytics core: normalizes partially-nullable payloads from
// the market-research backend into validated, chart-ready view-models.

pub mod access;
pub mod api;
pub mod config;
pub mod derive;
pub mod forecast;
pub mod model;
pub mod pages;
pub mod palette;
pub mod series;
pub mod state;
