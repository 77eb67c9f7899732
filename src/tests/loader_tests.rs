use crate::data::{load, LoadError};
use crate::tests::utils::{sample_csv, write_csv, FULL_HEADER};
use std::path::Path;

#[test]
fn well_formed_file_loads_every_row() {
    let file = write_csv(&sample_csv());

    let dataset = load(file.path()).expect("load should succeed");

    assert_eq!(dataset.len(), 3);
    assert!(dataset.diff_numeric);
    assert_eq!(dataset.rows[0].address, "1 Main St");
    assert_eq!(dataset.rows[0].price_difference, Some(20000.0));
    assert_eq!(dataset.rows[1].sublocality, "Brooklyn");
}

#[test]
fn missing_file_is_not_found() {
    let result = load(Path::new("/nonexistent/listings.csv"));

    assert!(matches!(result, Err(LoadError::NotFound(_))));
}

#[test]
fn missing_required_column_is_schema_error() {
    // BATH dropped from the header and every row.
    let file = write_csv(
        "ADDRESS,SUBLOCALITY,PRICE,PREDICTED_PRICE,PRICE_DIFFERENCE,PROPERTYSQFT,BEDS\n\
         1 Main St,Queens,500000,520000,20000,900,2\n",
    );

    match load(file.path()) {
        Err(LoadError::Schema(missing)) => assert_eq!(missing, vec!["BATH".to_string()]),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let file = write_csv(&format!("{FULL_HEADER}\n"));

    let dataset = load(file.path()).expect("load should succeed");

    assert!(dataset.is_empty());
}

#[test]
fn completely_empty_file_is_an_empty_dataset() {
    let file = write_csv("");

    let dataset = load(file.path()).expect("load should succeed");

    assert!(dataset.is_empty());
}

#[test]
fn ragged_row_is_a_parse_error() {
    let file = write_csv(&format!("{FULL_HEADER}\n1 Main St,Queens,500000\n"));

    assert!(matches!(load(file.path()), Err(LoadError::Parse(_))));
}

#[test]
fn non_numeric_price_difference_poisons_the_column_not_the_load() {
    let file = write_csv(&format!(
        "{FULL_HEADER}\n\
         1 Main St,Queens,500000,520000,not-a-number,900,2,1\n\
         2 Oak Ave,Brooklyn,750000,755000,5000,1100,3,2\n"
    ));

    let dataset = load(file.path()).expect("load should succeed");

    assert_eq!(dataset.len(), 2);
    assert!(!dataset.diff_numeric);
    assert_eq!(dataset.rows[0].price_difference, None);
}

#[test]
fn blank_numeric_cells_are_missing_values() {
    let file = write_csv(&format!(
        "{FULL_HEADER}\n\
         1 Main St,Queens,,520000,,900,2,1\n"
    ));

    let dataset = load(file.path()).expect("load should succeed");

    assert!(dataset.diff_numeric);
    assert_eq!(dataset.rows[0].price, None);
    assert_eq!(dataset.rows[0].price_difference, None);
}

#[test]
fn columns_may_appear_in_any_order() {
    let file = write_csv(
        "BATH,BEDS,PROPERTYSQFT,PRICE_DIFFERENCE,PREDICTED_PRICE,PRICE,SUBLOCALITY,ADDRESS\n\
         1,2,900,20000,520000,500000,Queens,1 Main St\n",
    );

    let dataset = load(file.path()).expect("load should succeed");

    assert_eq!(dataset.rows[0].address, "1 Main St");
    assert_eq!(dataset.rows[0].bath, Some(1.0));
    assert_eq!(dataset.rows[0].price_difference, Some(20000.0));
}
