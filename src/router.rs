use crate::data::{top_neighborhoods, top_properties};
use crate::errors::ServerError;
use crate::responses::{html_response, see_other, ResultResp};
use crate::state::{Snapshot, SnapshotState};
use crate::templates::pages::{error_page, report_page, ReportVm};
use crate::templates::Flash;
use astra::Request;
use std::path::Path;
use tracing::info;

const TOP_PROPERTIES: usize = 10;
const TOP_NEIGHBORHOODS: usize = 5;

pub fn handle(req: Request, state: &SnapshotState, data_path: &Path) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => home(&req, state),
        ("GET", "/reload-data") => reload(state, data_path),
        _ => Err(ServerError::NotFound),
    }
}

fn home(req: &Request, state: &SnapshotState) -> ResultResp {
    let query_flash = parse_query(req)
        .get("flash")
        .and_then(|code| Flash::from_code(code));

    let dataset = match state.current() {
        Snapshot::Failed(msg) => return html_response(error_page(&msg)),
        Snapshot::Ready(dataset) => dataset,
    };

    let flash = if dataset.is_empty() {
        query_flash.or_else(|| {
            Some(Flash::warning(
                "Property data is currently unavailable or empty.",
            ))
        })
    } else {
        query_flash
    };

    let skipped = !dataset.diff_numeric;
    let vm = ReportVm {
        flash,
        top_properties: top_properties(&dataset, TOP_PROPERTIES),
        top_neighborhoods: top_neighborhoods(&dataset, TOP_NEIGHBORHOODS),
        properties_warning: skipped,
        neighborhoods_warning: skipped,
    };

    html_response(report_page(&vm))
}

fn reload(state: &SnapshotState, data_path: &Path) -> ResultResp {
    info!("attempting to manually reload data");

    if state.reload(data_path) {
        see_other("/?flash=reloaded")
    } else {
        see_other("/?flash=reload-failed")
    }
}

fn parse_query(req: &astra::Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
