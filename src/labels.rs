//! Display strings of the user-facing surface.

pub const TITLE: &str = "HDI Tahmini";
pub const INPUT_PLACEHOLDER: &str = "Ülke seçin...";
pub const SUBMIT: &str = "Tahmin Et";
pub const SUBMITTING: &str = "Tahmin ediliyor...";
pub const PREDICTED_MARKER: &str = "Tahmini";
pub const SIDEBAR_HEADING: &str = "Ülkeler";
pub const CHART_HEADING: &str = "HDI Geçmiş + Tahmin Grafiği";

pub const GENERIC_FAILURE: &str = "Bir hata oluştu";
pub const CONNECTIVITY_PREFIX: &str = "API bağlantı hatası: ";
