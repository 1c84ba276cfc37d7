#![allow(clippy::float_cmp)]

use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::diagnostics::MemorySink;

const SAMPLE: &str = r#"{
  "povos": [
    {
      "nome": "Yanomami",
      "lat": 2.5, "lon": -63.5,
      "regiao": "Norte", "lingua": "Yanomam",
      "resumo": "Povo da floresta amazônica.",
      "imagens": ["https://img.example/yanomami-1.jpg", "  ", "https://img.example/yanomami-2.jpg"],
      "caption": "Aldeia", "credit": "Acervo"
    },
    {
      "nome": "  Guarani ",
      "lat": -23.0, "lon": -54.0,
      "regiao": "Sul", "lingua": "Guarani",
      "resumo": "Falantes de língua tupi-guarani.",
      "curiosidade": "Maior população indígena do país.",
      "imagens": []
    },
    { "nome": "", "lat": 0, "lon": 0 },
    { "nome": "Sem coordenadas" }
  ]
}"#;

struct StaticSource(Result<String, u16>);

impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        match &self.0 {
            Ok(raw) => Ok(raw.clone()),
            Err(status) => Err(DatasetError::Status(*status)),
        }
    }
}

fn povo(name: &str, lat: f64, lon: f64) -> Povo {
    Povo {
        name: name.to_owned(),
        lat,
        lon,
        region: String::new(),
        language: String::new(),
        summary: format!("{name} summary"),
        trivia: None,
        images: Vec::new(),
        caption: None,
        credit: None,
    }
}

// =============================================================
// Parsing and normalization
// =============================================================

#[test]
fn parse_keeps_valid_entries_in_order() {
    let dataset = Dataset::parse_json(SAMPLE).unwrap();
    let names: Vec<&str> = dataset.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Yanomami", "Guarani"]);
}

#[test]
fn parse_reports_dropped_entries() {
    let (_, report) = Dataset::parse_with_report(SAMPLE).unwrap();
    let indices: Vec<usize> = report.dropped.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![2, 3]);
    assert_eq!(report.dropped[0].1, "empty name");
}

#[test]
fn normalization_trims_names_and_drops_blank_images() {
    let dataset = Dataset::parse_json(SAMPLE).unwrap();
    let yanomami = dataset.get("Yanomami").unwrap();
    assert_eq!(yanomami.images.len(), 2);
    let guarani = dataset.get("Guarani").unwrap();
    assert!(guarani.images.is_empty());
    assert_eq!(guarani.first_image(), None);
}

#[test]
fn trivia_replaces_summary_in_blurb() {
    let dataset = Dataset::parse_json(SAMPLE).unwrap();
    assert_eq!(dataset.get("Guarani").unwrap().blurb(), "Maior população indígena do país.");
    assert_eq!(dataset.get("Yanomami").unwrap().blurb(), "Povo da floresta amazônica.");
}

#[test]
fn english_field_names_are_accepted() {
    let raw = r#"{"povos":[{"name":"Tikuna","lat":-3.5,"lon":-69.0,"summary":"Alto Solimões","images":["t.jpg"]}]}"#;
    let dataset = Dataset::parse_json(raw).unwrap();
    let tikuna = dataset.get("Tikuna").unwrap();
    assert_eq!(tikuna.summary, "Alto Solimões");
    assert_eq!(tikuna.first_image(), Some("t.jpg"));
}

#[test]
fn missing_povos_key_is_empty_dataset() {
    let dataset = Dataset::parse_json("{}").unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn invalid_document_is_parse_error() {
    assert!(matches!(Dataset::parse_json("not json"), Err(DatasetError::Parse(_))));
}

#[test]
fn stats_count_entities_and_images() {
    let dataset = Dataset::parse_json(SAMPLE).unwrap();
    let stats = dataset.stats();
    assert_eq!(stats, DatasetStats { entities: 2, expected_images: 2 });
    assert_eq!(stats.status_text(), "2 povos; 2 imagens esperadas");
}

// =============================================================
// Name lookup
// =============================================================

#[test]
fn duplicate_names_resolve_to_last_entry() {
    let dataset = Dataset::from_povos(vec![povo("Kayapó", 1.0, 1.0), povo("Kayapó", 2.0, 2.0)]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.get("Kayapó").unwrap().lat, 2.0);
    assert_eq!(dataset.names().collect::<Vec<_>>(), vec!["Kayapó", "Kayapó"]);
}

#[test]
fn lookup_returns_the_shared_instance() {
    let dataset = Dataset::from_povos(vec![povo("Pataxó", -16.0, -39.0)]);
    let clone = dataset.clone();
    assert!(dataset.ptr_eq(&clone));
    let a = dataset.get("Pataxó").unwrap();
    let b = clone.iter().next().unwrap();
    assert!(Arc::ptr_eq(a, b));
}

#[test]
fn unknown_name_is_none() {
    let dataset = Dataset::from_povos(vec![povo("Pataxó", -16.0, -39.0)]);
    assert!(dataset.get("Xavante").is_none());
}

// =============================================================
// Loader
// =============================================================

#[test]
fn loader_success_publishes_data_status() {
    let sink = Arc::new(MemorySink::default());
    let loader = DatasetLoader::new(StaticSource(Ok(SAMPLE.to_owned())), Diagnostics::from_arc(sink.clone()));
    let dataset = block_on(loader.load());
    assert_eq!(dataset.len(), 2);
    assert_eq!(sink.readout().get(StatusKey::Data), Some("2 povos; 2 imagens esperadas"));
    assert!(sink.events().contains(&DiagEvent::DatasetLoaded { entities: 2, expected_images: 2 }));
    assert_eq!(
        sink.events().iter().filter(|e| matches!(e, DiagEvent::EntityDropped { .. })).count(),
        2
    );
}

#[test]
fn loader_fetch_failure_yields_empty_dataset() {
    let sink = Arc::new(MemorySink::default());
    let loader = DatasetLoader::new(StaticSource(Err(404)), Diagnostics::from_arc(sink.clone()));
    let dataset = block_on(loader.load());
    assert!(dataset.is_empty());
    assert_eq!(
        sink.events(),
        vec![DiagEvent::DatasetFailed { reason: "unexpected HTTP status 404".to_owned() }]
    );
}

#[test]
fn loader_parse_failure_yields_empty_dataset() {
    let sink = Arc::new(MemorySink::default());
    let loader = DatasetLoader::new(StaticSource(Ok("<html>".to_owned())), Diagnostics::from_arc(sink.clone()));
    let dataset = block_on(loader.load());
    assert!(dataset.is_empty());
    assert!(matches!(sink.events().as_slice(), [DiagEvent::DatasetFailed { .. }]));
}

#[test]
fn loader_reports_duplicate_names() {
    let raw = r#"{"povos":[{"nome":"A","lat":1,"lon":1},{"nome":"A","lat":2,"lon":2}]}"#;
    let sink = Arc::new(MemorySink::default());
    let loader = DatasetLoader::new(StaticSource(Ok(raw.to_owned())), Diagnostics::from_arc(sink.clone()));
    block_on(loader.load());
    assert!(sink.events().contains(&DiagEvent::DuplicateName { name: "A".to_owned() }));
}
