use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Number of rows the portal renders per listing page. Fixed server-side;
/// requested page sizes are not honored.
pub const PER_PAGE: u32 = 30;

/// One appeal row from the portal's appeals listing.
/// Every field is populated when the record exists; rows with missing cells
/// never become records (see `parser`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appeal {
    pub registration_number: String,
    pub entry_date: String,
    pub exit_number: String,
    pub challenger: String,
    pub contracting_authority: String,
    pub complaint_object: String,
    /// External procurement-process ID, e.g. `ocds-b3wdp1-MD-1740472744894`.
    pub procedure_number: String,
    pub procedure_type: String,
    pub procurement_object: String,
    pub status: AppealStatus,
}

/// One decision row from the portal's decisions listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub date: String,
    pub challenger: String,
    pub contracting_authority: String,
    pub complaint_object: String,
    /// Link to the decision document, e.g.
    /// `https://elo.ansc.md/DownloadDocs/DownloadFileServlet?id=103491`.
    pub document_url: String,
    /// Free text; the portal does not constrain this to a closed set.
    pub reporting_status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppealStatus {
    Withdrawn,
    CanceledNumber,
    UnderReview,
    DecisionAdopted,
    WithdrawnComplaint,
    PreliminaryExamination,
    AwaitingFile,
    ReturnedForCorrection,
    NotWithinAnscCompetence,
    UnderReviewProcedureSuspended,
    AwaitingExplanationsFromCA,
    WithdrawnComplaintUnspecified,
    WithdrawnComplaintNotJeopardizeCA,
    WithdrawnComplaintNationalSituation,
    AwaitingFileAndExplanations,
    WithdrawnComplaintCAArgumentsAccepted,
    WithdrawnComplaintUnfounded,
    WithdrawnComplaintProcedureCanceled,
    WithdrawnComplaintRemedialMeasures,
}

/// Status labels exactly as the portal renders them, including the mixed
/// dash characters and the missing diacritic in the combined awaiting-file
/// entry. Update this table when the portal rewords a label.
pub static STATUS_LABELS: &[(&str, AppealStatus)] = &[
    ("Retrasă", AppealStatus::Withdrawn),
    ("Număr anulat", AppealStatus::CanceledNumber),
    ("În examinare", AppealStatus::UnderReview),
    ("Decizie adoptată", AppealStatus::DecisionAdopted),
    ("Contestație retrasă", AppealStatus::WithdrawnComplaint),
    ("Examinare preliminară", AppealStatus::PreliminaryExamination),
    ("În așteptarea dosarului", AppealStatus::AwaitingFile),
    ("Restituită spre corectare", AppealStatus::ReturnedForCorrection),
    ("Nu ține de competența ANSC", AppealStatus::NotWithinAnscCompetence),
    (
        "În examinare, Procedură suspendată",
        AppealStatus::UnderReviewProcedureSuspended,
    ),
    (
        "În așteptarea explicațiilor de la AC",
        AppealStatus::AwaitingExplanationsFromCA,
    ),
    (
        "Contestație retrasă – motiv neprecizat",
        AppealStatus::WithdrawnComplaintUnspecified,
    ),
    (
        "Contestație retrasă – pentru a nu pereclita activitatea AC",
        AppealStatus::WithdrawnComplaintNotJeopardizeCA,
    ),
    (
        "Contestație retrasă – motivul situației excepționale în țară",
        AppealStatus::WithdrawnComplaintNationalSituation,
    ),
    (
        "In așteptarea dosarului/ În așteptarea explicațiilor de la AC",
        AppealStatus::AwaitingFileAndExplanations,
    ),
    (
        "Contestație retrasă – argumentele AC acceptate de contestator",
        AppealStatus::WithdrawnComplaintCAArgumentsAccepted,
    ),
    (
        "Contestație retrasă – apreciată de contestator ca neîntemeiată",
        AppealStatus::WithdrawnComplaintUnfounded,
    ),
    (
        "Contestație retrasă - procedură anulată, contestație rămasă fără obiect",
        AppealStatus::WithdrawnComplaintProcedureCanceled,
    ),
    (
        "Contestație retrasă – măsuri de remediere efectuate de către AC, contestație rămasă fără obiect",
        AppealStatus::WithdrawnComplaintRemedialMeasures,
    ),
];

static STATUS_BY_LABEL: Lazy<HashMap<&'static str, AppealStatus>> =
    Lazy::new(|| STATUS_LABELS.iter().copied().collect());

impl AppealStatus {
    /// Map portal label text to a status. Total: unrecognized wording falls
    /// back to `UnderReview`, since the portal's labels drift over time
    /// independent of this enumeration.
    pub fn from_label(label: &str) -> AppealStatus {
        STATUS_BY_LABEL
            .get(label)
            .copied()
            .unwrap_or(AppealStatus::UnderReview)
    }
}

/// Appeal search filters. All optional; `year` falls back to the current
/// calendar year. Numeric codes are forwarded to the portal unvalidated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppealSearchParams {
    pub year: Option<i32>,
    pub authority: Option<String>,
    pub challenger: Option<String>,
    /// MTender OCDS ID (e.g., ocds-b3wdp1-MD-1740472744894)
    pub procedure_number: Option<String>,
    /// Appeal status code (1-19)
    pub status: Option<u32>,
}

/// Decision search filters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionSearchParams {
    pub year: Option<i32>,
    pub authority: Option<String>,
    pub challenger: Option<String>,
    pub procurement_object: Option<String>,
    /// Decision status codes (1-3)
    pub decision_status: Vec<u32>,
    /// Decision content codes (1-9)
    pub decision_content: Vec<u32>,
    /// Appeal grounds codes (1-42)
    pub appeal_grounds: Vec<u32>,
    /// Complaint object code (1 or 6)
    pub complaint_object: Option<u32>,
    /// Appeal registration number (e.g., 02/279/25)
    pub appeal_number: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    /// 0-based page index; `None` means the first page.
    pub page: Option<u32>,
    /// Accepted for interface stability but currently a no-op: the portal
    /// always serves [`PER_PAGE`] rows regardless of what is requested.
    pub per_page: Option<u32>,
}

impl PageRequest {
    /// The page the caller asked for, 0-based.
    pub fn requested_page(&self) -> u32 {
        self.page.unwrap_or(0)
    }
}

/// Pagination state recovered from a listing page's navigational markup.
/// `total_items` is deliberately absent: the portal never reports a count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 0-based page actually served (the portal clamps out-of-range requests).
    pub current_page: u32,
    pub total_pages: u32,
    pub per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One page of search results: records in document order plus the inferred
/// pagination state. Built fresh from a single parse, never mutated after.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_table_is_complete() {
        assert_eq!(STATUS_LABELS.len(), 19);
        let distinct: std::collections::HashSet<_> =
            STATUS_LABELS.iter().map(|(_, s)| s).collect();
        assert_eq!(distinct.len(), 19);
    }

    #[test]
    fn known_labels_map_exactly() {
        assert_eq!(AppealStatus::from_label("Retrasă"), AppealStatus::Withdrawn);
        assert_eq!(
            AppealStatus::from_label("Decizie adoptată"),
            AppealStatus::DecisionAdopted
        );
        assert_eq!(
            AppealStatus::from_label(
                "Contestație retrasă - procedură anulată, contestație rămasă fără obiect"
            ),
            AppealStatus::WithdrawnComplaintProcedureCanceled
        );
    }

    #[test]
    fn unknown_labels_default_to_under_review() {
        assert_eq!(AppealStatus::from_label("xyz"), AppealStatus::UnderReview);
        assert_eq!(AppealStatus::from_label(""), AppealStatus::UnderReview);
        // close but not exact wording must not match
        assert_eq!(
            AppealStatus::from_label("retrasă"),
            AppealStatus::UnderReview
        );
    }
}
