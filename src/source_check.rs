use std::path::Path;

use reqwest::blocking::Client;

/// Pre-flight reachability probe. Never errors: any transport failure,
/// timeout or non-success probe status maps to `false`. A `true` here does
/// not guarantee the subsequent fetch will succeed; the window between probe
/// and fetch is accepted.
pub fn source_is_reachable(client: &Client, locator: &str) -> bool {
    if is_http_locator(locator) {
        client
            .head(locator)
            .send()
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    } else {
        Path::new(locator).is_file()
    }
}

pub(crate) fn is_http_locator(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}
