use futures::executor::block_on;

use super::*;
use atlas::dataset::DatasetLoader;
use atlas::diagnostics::Diagnostics;

#[test]
fn source_keeps_configured_url() {
    assert_eq!(HttpSource::new("dados/povos.json").url(), "dados/povos.json");
}

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_is_unavailable_outside_browser() {
    let source = HttpSource::new("data.json");
    assert!(matches!(block_on(source.fetch()), Err(DatasetError::Unavailable)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn loader_over_http_source_degrades_to_empty() {
    let loader = DatasetLoader::new(HttpSource::new("data.json"), Diagnostics::noop());
    assert!(block_on(loader.load()).is_empty());
}
