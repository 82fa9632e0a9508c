//! Tests for downloader module

use ecmwf_cli::downloader::{listing_url, parse_grib_links, target_dir};
use ecmwf_cli::models::{ProductType, Slot, SLOT_ORDER};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_sweep_attempts_every_listing_in_order() {
    // Two dates x four slots x two product types = 16 listings, date-major,
    // slots in table order, product types in list order.
    let dates = ["20240311", "20240312"];
    let mut urls = Vec::new();
    for date in dates {
        for slot in SLOT_ORDER {
            for file_type in slot.product_types() {
                urls.push(listing_url(date, *slot, *file_type));
            }
        }
    }

    assert_eq!(urls.len(), 16);
    assert_eq!(
        urls[0],
        "https://data.ecmwf.int/forecasts/20240311/00z/ifs/0p25/oper/"
    );
    assert_eq!(
        urls[1],
        "https://data.ecmwf.int/forecasts/20240311/00z/ifs/0p25/wave/"
    );
    assert_eq!(
        urls[2],
        "https://data.ecmwf.int/forecasts/20240311/12z/ifs/0p25/oper/"
    );
    assert_eq!(
        urls[3],
        "https://data.ecmwf.int/forecasts/20240311/12z/ifs/0p25/wave/"
    );
    assert_eq!(
        urls[4],
        "https://data.ecmwf.int/forecasts/20240311/06z/ifs/0p25/scda/"
    );
    assert_eq!(
        urls[5],
        "https://data.ecmwf.int/forecasts/20240311/06z/ifs/0p25/scwv/"
    );
    assert_eq!(
        urls[6],
        "https://data.ecmwf.int/forecasts/20240311/18z/ifs/0p25/scda/"
    );
    assert_eq!(
        urls[7],
        "https://data.ecmwf.int/forecasts/20240311/18z/ifs/0p25/scwv/"
    );
    // Second date starts only after the first is exhausted
    assert_eq!(
        urls[8],
        "https://data.ecmwf.int/forecasts/20240312/00z/ifs/0p25/oper/"
    );
    assert!(urls[8..].iter().all(|u| u.contains("/20240312/")));
}

#[test]
fn test_download_url_is_listing_url_plus_filename() {
    let url = listing_url("20240311", Slot::Z00, ProductType::Oper);
    let file_url = format!("{url}x.grib2");
    assert_eq!(
        file_url,
        "https://data.ecmwf.int/forecasts/20240311/00z/ifs/0p25/oper/x.grib2"
    );
}

#[test]
fn test_target_dir_creation_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let dir = target_dir(tmp.path(), "20240311", Slot::Z00);
    assert_eq!(dir, tmp.path().join("2024_03_11").join("00z"));

    fs::create_dir_all(&dir).unwrap();
    // Creating again must not fail
    fs::create_dir_all(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn test_listing_parse_filters_non_grib_links() {
    let html = r#"
        <html><body>
          <h1>Index of /forecasts/20240311/00z/ifs/0p25/oper/</h1>
          <a href="../">Parent Directory</a>
          <a href="20240311000000-0h-oper-fc.grib2">20240311000000-0h-oper-fc.grib2</a>
          <a href="20240311000000-0h-oper-fc.index">20240311000000-0h-oper-fc.index</a>
          <a href="20240311000000-3h-oper-fc.grib2">20240311000000-3h-oper-fc.grib2</a>
        </body></html>
    "#;

    let files = parse_grib_links(html);
    assert_eq!(
        files,
        vec![
            "20240311000000-0h-oper-fc.grib2",
            "20240311000000-3h-oper-fc.grib2"
        ]
    );
}

#[test]
fn test_colliding_filenames_overwrite() {
    // Destination files are opened with create-or-truncate semantics; the
    // second write of the same name fully replaces the first.
    let tmp = TempDir::new().unwrap();
    let dir = target_dir(tmp.path(), "20240311", Slot::Z12);
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join("x.grib2");
    fs::write(&path, b"first version, longer body").unwrap();
    fs::write(&path, b"second").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"second");
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
}
