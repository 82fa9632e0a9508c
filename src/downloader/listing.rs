use crate::constants::{FORECAST_ROOT_URL, GRIB_LINK_SELECTOR, MODEL_PATH};
use crate::errors::AppResult;
use crate::models::{ProductType, Slot};
use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

/// Cached CSS selector for GRIB2 file links.
/// Compiled once at initialization for performance.
static GRIB_LINK_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();

/// Builds the directory-listing URL for one (date, slot, product type) triple.
///
/// The date token is substituted as-is; the server decides whether it names
/// an existing forecast run.
pub fn listing_url(date: &str, slot: Slot, file_type: ProductType) -> String {
    format!(
        "{FORECAST_ROOT_URL}/{date}/{time}/{MODEL_PATH}/{file_type}/",
        time = slot.as_str(),
        file_type = file_type.as_str()
    )
}

/// Fetches a listing page and returns the GRIB2 filenames it links to.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the request fails, or the
/// server responds with a non-success status.
pub async fn fetch_grib_listing(
    client: &reqwest::Client,
    input_url: &str,
) -> AppResult<Vec<String>> {
    // parse the listing URL up front so template problems surface as UrlError
    let url = Url::parse(input_url)?;

    // fetch the page content
    let response = client
        .get(url.as_str())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(parse_grib_links(&response))
}

/// Parses HTML content and extracts GRIB2 filenames from anchor links.
///
/// This function searches for all `<a>` tags with `href` attributes ending
/// in `.grib2` and reduces each href to its final path segment. Entries are
/// returned in document order and duplicates are kept; a duplicate filename
/// downloaded into the same directory overwrites the earlier copy.
pub fn parse_grib_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = GRIB_LINK_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(GRIB_LINK_SELECTOR).expect("GRIB_LINK_SELECTOR is a valid CSS selector")
    });

    document
        .select(selector)
        .filter_map(|el| el.value().attr("href"))
        .map(file_name_from_href)
        .map(str::to_string)
        .collect()
}

/// Final path segment of a link target.
fn file_name_from_href(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}
