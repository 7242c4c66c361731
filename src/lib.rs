//! Cambio is a compact publishing service for AI-assisted vehicle comparison
//! articles. Articles are assembled from typed content blocks (markdown, spec
//! grids, galleries, call-to-action banners, TL;DR lists), rendered server-side,
//! and gated through an editorial quality-control pass before publication.
//!
//! The crate is layered: `domain` holds entities and invariants, `application`
//! holds services and repository seams, `infra` holds adapters (storage,
//! telemetry, the generation provider, the HTTP surface), and `presentation`
//! holds the askama view layer.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
