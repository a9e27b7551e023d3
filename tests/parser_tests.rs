use ansc_search::data_models::{AppealStatus, PER_PAGE, Paginated};
use ansc_search::parser::{parse_appeals_page, parse_decisions_page};

mod fixtures {
    /// Portal page skeleton: navigation noise, one results table, optional
    /// pager markup after it.
    pub fn listing_page(rows: &str, pager: &str) -> String {
        format!(
            "<html><head><title>ANSC</title></head><body>\
             <div class=\"navbar\"><a href=\"/ro\">Acasă</a></div>\
             <div class=\"view-content\">\
             <table id=\"myTable\">\
             <thead><tr><th>Nr.</th><th>Data</th></tr></thead>\
             <tbody>{rows}</tbody>\
             </table>\
             </div>\
             {pager}\
             </body></html>"
        )
    }

    /// A full 10-cell appeal row. Pass an empty `procedure_href` to render
    /// the procedure cell without an anchor.
    pub fn appeal_row(registration: &str, status: &str, procedure_href: &str) -> String {
        let procedure_cell = if procedure_href.is_empty() {
            "<td>fara link</td>".to_string()
        } else {
            format!("<td><a href=\"{procedure_href}\">procedura</a></td>")
        };
        format!(
            "<tr>\
             <td> {registration} </td>\
             <td>13/03/2025</td>\
             <td>04/111/25</td>\
             <td>Construct-Vest SRL</td>\
             <td>Primăria Chișinău</td>\
             <td>Rezultatele procedurii</td>\
             {procedure_cell}\
             <td>Licitație deschisă</td>\
             <td>Lucrări de reparație</td>\
             <td>{status}</td>\
             </tr>"
        )
    }

    /// A full 6-cell decision row.
    pub fn decision_row(date: &str, document_href: &str) -> String {
        let document_cell = if document_href.is_empty() {
            "<td>decizie</td>".to_string()
        } else {
            format!("<td><a href=\"{document_href}\">decizie</a></td>")
        };
        format!(
            "<tr>\
             <td>{date}</td>\
             <td>Construct-Vest SRL</td>\
             <td>Primăria Chișinău</td>\
             <td>Rezultatele procedurii</td>\
             {document_cell}\
             <td>decizie in vigoare</td>\
             </tr>"
        )
    }

    /// Drupal-style pager. Labels on numbered items are 1-based; hrefs carry
    /// the portal's 0-based page indexes.
    pub fn pager(
        current_label: &str,
        item_labels: &[u32],
        last_href: Option<&str>,
        next: bool,
        prev: bool,
    ) -> String {
        let mut out = String::from("<ul class=\"pager\">");
        if prev {
            out.push_str("<li class=\"pager-previous\"><a href=\"?page=0\">‹ înapoi</a></li>");
        }
        for label in item_labels {
            out.push_str(&format!(
                "<li class=\"pager-item\"><a href=\"?page={}\">{label}</a></li>",
                label - 1
            ));
        }
        out.push_str(&format!(
            "<li class=\"pager-current\">{current_label}</li>"
        ));
        if next {
            out.push_str("<li class=\"pager-next\"><a href=\"?page=2\">înainte ›</a></li>");
        }
        if let Some(href) = last_href {
            out.push_str(&format!(
                "<li class=\"pager-last\"><a href=\"{href}\">ultima »</a></li>"
            ));
        }
        out.push_str("</ul>");
        out
    }
}

#[test]
fn parses_full_appeal_rows_in_document_order() {
    let rows = format!(
        "{}{}",
        fixtures::appeal_row(
            "02/279/25",
            "Decizie adoptată",
            "https://mtender.gov.md/tenders/ocds-b3wdp1-MD-1740472744894",
        ),
        fixtures::appeal_row("02/280/25", "În examinare", "?page=unrelated"),
    );
    let html = fixtures::listing_page(&rows, "");

    let result = parse_appeals_page(&html, 0);

    assert_eq!(result.items.len(), 2);
    let first = &result.items[0];
    assert_eq!(first.registration_number, "02/279/25");
    assert_eq!(first.entry_date, "13/03/2025");
    assert_eq!(first.exit_number, "04/111/25");
    assert_eq!(first.challenger, "Construct-Vest SRL");
    assert_eq!(first.contracting_authority, "Primăria Chișinău");
    assert_eq!(first.complaint_object, "Rezultatele procedurii");
    assert_eq!(first.procedure_number, "ocds-b3wdp1-MD-1740472744894");
    assert_eq!(first.procedure_type, "Licitație deschisă");
    assert_eq!(first.procurement_object, "Lucrări de reparație");
    assert_eq!(first.status, AppealStatus::DecisionAdopted);

    assert_eq!(result.items[1].registration_number, "02/280/25");
    assert_eq!(result.items[1].status, AppealStatus::UnderReview);
}

#[test]
fn rows_below_arity_are_dropped_whole() {
    let rows = format!(
        "{}<tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td></tr>{}",
        fixtures::appeal_row("02/279/25", "Retrasă", ""),
        fixtures::appeal_row("02/281/25", "Retrasă", ""),
    );
    let html = fixtures::listing_page(&rows, "");

    let result = parse_appeals_page(&html, 0);

    // the 5-cell row contributes zero records; order of the rest is preserved
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].registration_number, "02/279/25");
    assert_eq!(result.items[1].registration_number, "02/281/25");
}

#[test]
fn missing_procedure_anchor_yields_empty_identifier() {
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), "");

    let result = parse_appeals_page(&html, 0);

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].procedure_number, "");
    assert_eq!(result.items[0].status, AppealStatus::Withdrawn);
}

#[test]
fn unknown_status_label_degrades_to_under_review() {
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "xyz", ""), "");

    let result = parse_appeals_page(&html, 0);

    assert_eq!(result.items[0].status, AppealStatus::UnderReview);
}

#[test]
fn parses_decision_rows() {
    let rows = format!(
        "{}{}",
        fixtures::decision_row(
            "14/03/2025",
            "https://elo.ansc.md/DownloadDocs/DownloadFileServlet?id=103491",
        ),
        fixtures::decision_row("15/03/2025", ""),
    );
    let html = fixtures::listing_page(&rows, "");

    let result = parse_decisions_page(&html, 0);

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].date, "14/03/2025");
    assert_eq!(result.items[0].challenger, "Construct-Vest SRL");
    assert_eq!(result.items[0].contracting_authority, "Primăria Chișinău");
    assert_eq!(result.items[0].complaint_object, "Rezultatele procedurii");
    assert_eq!(
        result.items[0].document_url,
        "https://elo.ansc.md/DownloadDocs/DownloadFileServlet?id=103491"
    );
    assert_eq!(result.items[0].reporting_status, "decizie in vigoare");
    // decision without a document link still parses, with an empty URL
    assert_eq!(result.items[1].document_url, "");
}

#[test]
fn empty_table_yields_empty_non_error_response() {
    let html = fixtures::listing_page("", "");

    let result = parse_appeals_page(&html, 0);

    assert!(result.items.is_empty());
    assert_eq!(result.pagination.current_page, 0);
    assert_eq!(result.pagination.total_pages, 1);
    assert!(!result.pagination.has_next_page);
    assert!(!result.pagination.has_prev_page);
}

#[test]
fn total_pages_come_from_the_last_page_link() {
    // last-page href carries a 0-based index: page=4 means 5 pages
    let pager = fixtures::pager("3", &[1, 2], Some("?page=4"), true, true);
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), &pager);

    let result = parse_appeals_page(&html, 2);

    assert_eq!(result.pagination.total_pages, 5);
    assert_eq!(result.pagination.current_page, 2); // rendered "3" is 1-based
    assert!(result.pagination.has_next_page);
    assert!(result.pagination.has_prev_page);
    assert_eq!(result.pagination.per_page, PER_PAGE);
}

#[test]
fn total_pages_fall_back_to_numbered_items() {
    // no last-page link; items labelled 1 and 3 around current label 2
    let pager = fixtures::pager("2", &[1, 3], None, true, true);
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), &pager);

    let result = parse_appeals_page(&html, 1);

    assert_eq!(result.pagination.total_pages, 3);
    assert_eq!(result.pagination.current_page, 1);
}

#[test]
fn current_marker_counts_in_the_fallback_scan() {
    // current label is the maximum; no pager-item outranks it
    let pager = fixtures::pager("4", &[1, 2], None, false, true);
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), &pager);

    let result = parse_appeals_page(&html, 3);

    assert_eq!(result.pagination.total_pages, 4);
}

#[test]
fn absent_pager_defaults_to_a_single_page() {
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), "");

    let result = parse_appeals_page(&html, 0);

    assert_eq!(result.pagination.total_pages, 1);
    assert!(!result.pagination.has_next_page);
    assert!(!result.pagination.has_prev_page);
}

#[test]
fn non_numeric_current_marker_is_treated_as_page_one() {
    let pager = fixtures::pager("pagina curentă", &[1, 2], Some("?page=1"), true, false);
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), &pager);

    let result = parse_appeals_page(&html, 0);

    assert_eq!(result.pagination.current_page, 0);
    assert_eq!(result.pagination.total_pages, 2);
}

#[test]
fn clamped_requests_report_the_page_actually_served() {
    // portal clamps page=9 to its last page and renders marker "2"
    let pager = fixtures::pager("2", &[1], None, false, true);
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), &pager);

    let result = parse_appeals_page(&html, 9);

    assert_eq!(result.pagination.current_page, 1);
}

#[test]
fn next_and_prev_flags_track_marker_presence_independently() {
    // stray next marker on what the numbers say is the last page: both
    // signals are reported as found, not reconciled
    let pager = fixtures::pager("2", &[1], None, true, false);
    let html = fixtures::listing_page(&fixtures::appeal_row("02/279/25", "Retrasă", ""), &pager);

    let result = parse_appeals_page(&html, 1);

    assert_eq!(result.pagination.total_pages, 2);
    assert_eq!(result.pagination.current_page, 1);
    assert!(result.pagination.has_next_page);
    assert!(!result.pagination.has_prev_page);
}

#[test]
fn serialized_response_matches_the_wire_shape() {
    let pager = fixtures::pager("1", &[2], Some("?page=1"), true, false);
    let html = fixtures::listing_page(
        &fixtures::appeal_row("02/279/25", "Decizie adoptată", "/tenders/ocds-b3wdp1-MD-123"),
        &pager,
    );
    let result: Paginated<_> = parse_appeals_page(&html, 0);

    let json = serde_json::to_value(&result).unwrap();

    let pagination = &json["pagination"];
    assert_eq!(pagination["currentPage"], 0);
    assert_eq!(pagination["totalPages"], 2);
    assert_eq!(pagination["perPage"], 30);
    assert_eq!(pagination["hasNextPage"], true);
    assert_eq!(pagination["hasPrevPage"], false);
    // the portal never reports an exact item count
    assert!(pagination.get("totalItems").is_none());

    let item = &json["items"][0];
    assert_eq!(item["registrationNumber"], "02/279/25");
    assert_eq!(item["procedureNumber"], "ocds-b3wdp1-MD-123");
    assert_eq!(item["status"], "DecisionAdopted");
}
