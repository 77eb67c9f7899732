use crate::data::{Dataset, Listing};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::{Read, Write};
use tempfile::NamedTempFile;

pub const FULL_HEADER: &str =
    "ADDRESS,SUBLOCALITY,PRICE,PREDICTED_PRICE,PRICE_DIFFERENCE,PROPERTYSQFT,BEDS,BATH";

/// Write CSV contents to a fresh temp file and hand it back (the file is
/// deleted when the handle drops).
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// A small well-formed fixture: three listings across two sublocalities.
pub fn sample_csv() -> String {
    format!(
        "{FULL_HEADER}\n\
         1 Main St,Queens,500000,520000,20000,900,2,1\n\
         2 Oak Ave,Brooklyn,750000,755000,5000,1100,3,2\n\
         3 Pine Rd,Queens,600000,610000,10000,1000,2,1\n"
    )
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read body");
    String::from_utf8(bytes).expect("utf8 body")
}

/// Build a Listing with just the fields the aggregates look at.
pub fn listing(address: &str, sublocality: &str, diff: Option<f64>) -> Listing {
    Listing {
        address: address.to_string(),
        sublocality: sublocality.to_string(),
        price: None,
        predicted_price: None,
        price_difference: diff,
        property_sqft: None,
        beds: None,
        bath: None,
    }
}

pub fn dataset(rows: Vec<Listing>) -> Dataset {
    Dataset {
        rows,
        diff_numeric: true,
    }
}
