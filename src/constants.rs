// Remote data source
pub const FORECAST_ROOT_URL: &str = "https://data.ecmwf.int/forecasts";
pub const MODEL_PATH: &str = "ifs/0p25";

// Date help text
pub const DATE_HELP_TEXT: &str = "Forecast dates to download (YYYYMMDD, one or more)";

// Selectors and Patterns
pub const GRIB_LINK_SELECTOR: &str = r#"a[href$=".grib2"]"#;
