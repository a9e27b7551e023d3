use serde::Deserialize;

use crate::data_models::{AppealSearchParams, DecisionSearchParams, PageRequest};

/// Body of `POST /api/appeals/search`: filters plus pagination, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppealSearchRequest {
    #[serde(flatten)]
    pub filters: AppealSearchParams,
    #[serde(flatten)]
    pub page: PageRequest,
}

/// Body of `POST /api/decisions/search`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DecisionSearchRequest {
    #[serde(flatten)]
    pub filters: DecisionSearchParams,
    #[serde(flatten)]
    pub page: PageRequest,
}

/// `?page=` query of the by-year listing routes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    pub page: Option<u32>,
}
