//! Leaflet adapter for [`atlas::markers::MapBackend`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaflet is loaded by a plain `<script>` tag and exposed as the global `L`.
//! There are no Rust bindings for it, so the adapter drives it through
//! `js_sys::Reflect` lookups and `Function` calls. If the global is missing
//! (blocked CDN, offline), [`LeafletMap::connect`] fails with
//! [`MapError::LibraryMissing`] and the page shows its static fallback.
//!
//! ERROR HANDLING
//! ==============
//! Every JS exception becomes [`MapError::Js`] carrying the debug rendering
//! of the thrown value; nothing here panics across the FFI boundary.

#[cfg(test)]
#[path = "leaflet_test.rs"]
mod leaflet_test;

use atlas::dataset::LatLng;
use atlas::markers::{MapBackend, MapError};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

/// Options passed to `L.tileLayer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileOptions {
    pub attribution: &'static str,
    pub max_zoom: u8,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self { attribution: atlas::consts::TILE_ATTRIBUTION, max_zoom: 18 }
    }
}

/// A Leaflet map instance bound to a container element.
#[derive(Clone, Debug)]
pub struct LeafletMap {
    #[cfg(feature = "csr")]
    map: JsValue,
}

/// A Leaflet marker with its popup bound.
#[derive(Clone, Debug)]
pub struct LeafletMarker {
    #[cfg(feature = "csr")]
    marker: JsValue,
}

impl LeafletMap {
    /// Create the map in `container_id` and attach the OpenStreetMap tiles.
    ///
    /// # Errors
    ///
    /// [`MapError::LibraryMissing`] when `L` is not defined (always the case
    /// outside the browser); [`MapError::Js`] when Leaflet throws.
    pub fn connect(container_id: &str) -> Result<Self, MapError> {
        #[cfg(feature = "csr")]
        {
            let leaflet = leaflet_global()?;
            let map = call(&leaflet, "map", &[JsValue::from_str(container_id)])?;
            let tiles = call(
                &leaflet,
                "tileLayer",
                &[JsValue::from_str(atlas::consts::TILE_URL), tile_options_object(TileOptions::default())?],
            )?;
            call(&tiles, "addTo", &[map.clone()])?;
            Ok(Self { map })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = container_id;
            Err(MapError::LibraryMissing)
        }
    }
}

impl MapBackend for LeafletMap {
    type Marker = LeafletMarker;

    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<(), MapError> {
        #[cfg(feature = "csr")]
        {
            call(&self.map, "setView", &[lat_lng(center), JsValue::from(zoom)])?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (center, zoom);
            Err(MapError::LibraryMissing)
        }
    }

    fn add_marker(&mut self, at: LatLng, popup_html: &str) -> Result<LeafletMarker, MapError> {
        #[cfg(feature = "csr")]
        {
            let leaflet = leaflet_global()?;
            let marker = call(&leaflet, "marker", &[lat_lng(at)])?;
            call(&marker, "addTo", &[self.map.clone()])?;
            call(&marker, "bindPopup", &[JsValue::from_str(popup_html)])?;
            Ok(LeafletMarker { marker })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (at, popup_html);
            Err(MapError::LibraryMissing)
        }
    }

    fn open_popup(&mut self, marker: &LeafletMarker) -> Result<(), MapError> {
        #[cfg(feature = "csr")]
        {
            call(&marker.marker, "openPopup", &[])?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = marker;
            Err(MapError::LibraryMissing)
        }
    }
}

// =============================================================================
// JS GLUE
// =============================================================================

#[cfg(feature = "csr")]
fn js_err(err: &JsValue) -> MapError {
    MapError::Js(format!("{err:?}"))
}

#[cfg(feature = "csr")]
fn leaflet_global() -> Result<JsValue, MapError> {
    let leaflet = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("L")).map_err(|e| js_err(&e))?;
    if leaflet.is_undefined() || leaflet.is_null() {
        return Err(MapError::LibraryMissing);
    }
    Ok(leaflet)
}

/// Call `target[method](...args)` with `this` bound to `target`.
#[cfg(feature = "csr")]
fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, MapError> {
    let function = js_sys::Reflect::get(target, &JsValue::from_str(method))
        .map_err(|e| js_err(&e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| MapError::Js(format!("{method} is not a function")))?;
    let array: js_sys::Array = args.iter().collect();
    function.apply(target, &array).map_err(|e| js_err(&e))
}

#[cfg(feature = "csr")]
fn lat_lng(at: LatLng) -> JsValue {
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(at.lat));
    pair.push(&JsValue::from_f64(at.lon));
    pair.into()
}

#[cfg(feature = "csr")]
fn tile_options_object(options: TileOptions) -> Result<JsValue, MapError> {
    let object = js_sys::Object::new();
    js_sys::Reflect::set(&object, &JsValue::from_str("attribution"), &JsValue::from_str(options.attribution))
        .map_err(|e| js_err(&e))?;
    js_sys::Reflect::set(&object, &JsValue::from_str("maxZoom"), &JsValue::from(options.max_zoom))
        .map_err(|e| js_err(&e))?;
    Ok(object.into())
}
