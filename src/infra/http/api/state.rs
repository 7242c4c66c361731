use std::sync::Arc;

use crate::application::generate::GenerationService;
use crate::application::qc::QcService;
use crate::application::repos::{ArticlesRepo, JobsRepo};

/// Environment facts surfaced by the health endpoint.
#[derive(Debug, Clone, Copy)]
pub struct HealthFlags {
    pub has_api_key: bool,
    pub mock: bool,
}

#[derive(Clone)]
pub struct ApiState {
    pub jobs: Arc<dyn JobsRepo>,
    pub articles: Arc<dyn ArticlesRepo>,
    pub qc: Arc<QcService>,
    pub generation: Arc<GenerationService>,
    pub flags: HealthFlags,
}
