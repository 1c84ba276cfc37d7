//! Shared constants for the atlas crate.

// ── Map ─────────────────────────────────────────────────────────

/// Initial map center latitude (geographic center of Brazil).
pub const DEFAULT_CENTER_LAT: f64 = -14.2350;

/// Initial map center longitude.
pub const DEFAULT_CENTER_LON: f64 = -51.9253;

/// Initial map zoom level.
pub const DEFAULT_ZOOM: u8 = 4;

/// Zoom level applied when a marker is focused from the sidebar.
pub const FOCUS_ZOOM: u8 = 6;

/// Tile layer URL template handed to the map library.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown on the tile layer.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Static message shown in the map region when the map library is missing.
pub const MAP_UNAVAILABLE_MESSAGE: &str =
    "Mapa indisponível — biblioteca Leaflet não foi carregada. Tente recarregar a página.";

// ── Images ──────────────────────────────────────────────────────

/// Fixed placeholder substituted for missing or broken images.
pub const PLACEHOLDER_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6b/Placeholder_no_text.svg/800px-Placeholder_no_text.svg.png";

/// Text shown in marker popups for entities without images.
pub const IMAGE_UNAVAILABLE_TEXT: &str = "Imagem indisponível";

// ── Views ───────────────────────────────────────────────────────

/// Number of entities previewed in the thumbnail gallery.
pub const GALLERY_LIMIT: usize = 6;

/// Maximum number of commit notes kept in memory and in storage.
pub const COMMIT_CAP: usize = 50;

/// Separator between caption and credit in the modal caption line.
pub const CAPTION_SEPARATOR: &str = " — ";

/// Prefix for the credit part of the modal caption.
pub const CREDIT_PREFIX: &str = "Crédito: ";

// ── Storage ─────────────────────────────────────────────────────

/// Storage key for the JSON-encoded commit note list.
pub const COMMITS_KEY: &str = "vt_commits";

/// Storage key for the decimal-encoded best quiz score.
pub const BEST_SCORE_KEY: &str = "vt_quiz_best";

// ── Dataset ─────────────────────────────────────────────────────

/// Dataset URL used when the query string does not override it.
pub const DEFAULT_DATASET_URL: &str = "data.json";

// ── DOM contract ────────────────────────────────────────────────

pub const MAP_CONTAINER_ID: &str = "mapid";
pub const SIDEBAR_LIST_ID: &str = "people-list";
pub const GALLERY_ID: &str = "gallery";
pub const COMMIT_FORM_ID: &str = "commit-form";
pub const COMMIT_INPUT_ID: &str = "commit";
pub const COMMIT_LIST_ID: &str = "commit-list";
pub const QUIZ_ROOT_ID: &str = "quiz-root";
pub const MODAL_ID: &str = "gallery-modal";
pub const MODAL_GALLERY_ID: &str = "modal-gallery";
pub const MODAL_CAPTION_ID: &str = "modal-caption";
pub const MODAL_CLOSE_ID: &str = "modal-close";
pub const LIVE_REGION_ID: &str = "sr-live";
pub const DEBUG_BAR_ID: &str = "debug";

/// Class carried by every control that requests the modal for an entity.
pub const OPEN_GALLERY_CLASS: &str = "open-gallery";

/// Attribute holding the entity name on open-gallery controls.
pub const OPEN_GALLERY_ATTR: &str = "data-nome";
