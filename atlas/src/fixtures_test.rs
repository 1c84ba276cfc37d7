//! Shared builders and fakes for unit tests.

use crate::dataset::{Dataset, LatLng, Povo};
use crate::markers::{MapBackend, MapError};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetView(LatLng, u8),
    AddMarker(LatLng),
    OpenPopup(usize),
}

/// Map backend that records every call; markers are their placement index.
#[derive(Debug, Default)]
pub struct FakeMap {
    pub calls: Vec<Call>,
    pub popups: Vec<String>,
    pub reject: Vec<LatLng>,
    pub fail_view: bool,
}

impl FakeMap {
    pub fn last_opened(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::OpenPopup(i) => Some(*i),
            _ => None,
        })
    }
}

impl MapBackend for FakeMap {
    type Marker = usize;

    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<(), MapError> {
        if self.fail_view {
            return Err(MapError::LibraryMissing);
        }
        self.calls.push(Call::SetView(center, zoom));
        Ok(())
    }

    fn add_marker(&mut self, at: LatLng, popup_html: &str) -> Result<usize, MapError> {
        if self.reject.contains(&at) {
            return Err(MapError::Js("bad latlng".to_owned()));
        }
        self.calls.push(Call::AddMarker(at));
        self.popups.push(popup_html.to_owned());
        Ok(self.popups.len() - 1)
    }

    fn open_popup(&mut self, marker: &usize) -> Result<(), MapError> {
        self.calls.push(Call::OpenPopup(*marker));
        Ok(())
    }
}

pub fn povo(name: &str, lat: f64, lon: f64, images: &[&str]) -> Povo {
    Povo {
        name: name.to_owned(),
        lat,
        lon,
        region: "Norte".to_owned(),
        language: "Tupi".to_owned(),
        summary: format!("Sobre {name}"),
        trivia: None,
        images: images.iter().map(|s| (*s).to_owned()).collect(),
        caption: None,
        credit: None,
    }
}

/// Eight entities; the second and fifth have no images.
pub fn eight() -> Dataset {
    Dataset::from_povos(vec![
        povo("Yanomami", 2.5, -63.5, &["https://img.example/y1.jpg", "https://img.example/y2.jpg"]),
        povo("Guarani", -23.0, -54.0, &[]),
        povo("Tikuna", -3.5, -69.0, &["https://img.example/t.jpg"]),
        povo("Kayapó", -7.5, -51.5, &["https://img.example/k.jpg"]),
        povo("Pataxó", -16.4, -39.1, &[]),
        povo("Xavante", -14.0, -52.0, &["https://img.example/x.jpg"]),
        povo("Terena", -20.4, -55.8, &["https://img.example/te.jpg"]),
        povo("Munduruku", -6.0, -57.0, &["https://img.example/m.jpg"]),
    ])
}
