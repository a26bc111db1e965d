//! Shared fixtures for integration tests.

use std::io::Write;

use link_routes::Route;
use tempfile::NamedTempFile;

/// The two routes most tests start from.
#[allow(dead_code)]
pub fn home_route() -> Route {
    Route::new("home", "https://example.com/home")
}

#[allow(dead_code)]
pub fn search_route() -> Route {
    Route::templated("search", "https://example.com/search{?q}")
}

/// Write a route table to a temporary TOML file.
#[allow(dead_code)]
pub fn write_routes_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[allow(dead_code)]
pub const ROUTES_TOML: &str = r#"
[[routes]]
name = "home"
path = "https://example.com/home"

[[routes]]
name = "search"
path = "https://example.com/search{?q}"
templated = true
"#;
