use chrono::Datelike;

use crate::data_models::{AppealSearchParams, DecisionSearchParams, PageRequest};

/// Listing path for appeals of a given year.
pub fn appeals_path(year: i32) -> String {
    format!("/ro/contestatii/{year}")
}

/// Listing path for decisions of a given year.
pub fn decisions_path(year: i32) -> String {
    format!("/ro/content/decizii-{year}")
}

/// Year to search in; the portal has no "all years" view, so an absent year
/// means the current calendar year.
pub fn resolve_year(year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| chrono::Local::now().year())
}

/// Encode appeal filters as the portal's query parameters.
///
/// Parameter names and quoting are a fixed portal contract: the procedure
/// number must be wrapped in literal double quotes to force exact-phrase
/// matching, while authority and challenger go unquoted. Codes are forwarded
/// as-is; the portal is the one validating them.
pub fn encode_appeal_query(
    params: &AppealSearchParams,
    page: &PageRequest,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(authority) = &params.authority {
        query.push(("AutoritateaContractanta", authority.clone()));
    }
    if let Some(challenger) = &params.challenger {
        query.push(("Contestatar", challenger.clone()));
    }
    if let Some(procedure_number) = &params.procedure_number {
        query.push(("NrProcedurii", quoted(procedure_number)));
    }
    if let Some(status) = params.status {
        query.push(("solr_document", status.to_string()));
    }
    push_page(&mut query, page);
    query
}

/// Encode decision filters as the portal's query parameters.
///
/// Here the quoting asymmetry flips: the contracting authority is the
/// quoted exact-phrase filter. Array filters repeat the parameter once per
/// element; appeal grounds alone use the array-suffixed `solr_document_3[]`
/// name.
pub fn encode_decision_query(
    params: &DecisionSearchParams,
    page: &PageRequest,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(challenger) = &params.challenger {
        query.push(("Contestatar", challenger.clone()));
    }
    if let Some(authority) = &params.authority {
        query.push(("AutoritateaContractanta", quoted(authority)));
    }
    if let Some(procurement_object) = &params.procurement_object {
        query.push(("ObiectulAchizitiei", procurement_object.clone()));
    }
    for status in &params.decision_status {
        query.push(("solr_document_1", status.to_string()));
    }
    for content in &params.decision_content {
        query.push(("solr_document_2", content.to_string()));
    }
    for ground in &params.appeal_grounds {
        query.push(("solr_document_3[]", ground.to_string()));
    }
    if let Some(complaint_object) = params.complaint_object {
        query.push(("solr_document_4", complaint_object.to_string()));
    }
    if let Some(appeal_number) = &params.appeal_number {
        query.push(("solr_document_8", appeal_number.clone()));
    }
    push_page(&mut query, page);
    query
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

/// Page 0 is the portal default; only non-zero pages go on the query string.
/// The query-string convention is 0-based, unlike the rendered pager marker.
fn push_page(query: &mut Vec<(&'static str, String)>, page: &PageRequest) {
    let requested = page.requested_page();
    if requested > 0 {
        query.push(("page", requested.to_string()));
    }
}
