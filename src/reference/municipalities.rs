use crate::models::{MunicipalityCandidate, StaticReferenceEntry};

const fn entry(id: &'static str, name: &'static str, slug: &'static str) -> StaticReferenceEntry {
    StaticReferenceEntry { id, name, slug }
}

/// Municipalities available without the remote catalog.
pub const STATIC_MUNICIPALITIES: &[StaticReferenceEntry] = &[
    entry("46078", "Burjassot", "burjassot"),
    entry("28079", "Madrid", "madrid"),
    entry("08019", "Barcelona", "barcelona"),
    entry("46250", "Valencia", "valencia"),
    entry("41091", "Sevilla", "sevilla"),
    entry("50297", "Zaragoza", "zaragoza"),
    entry("29067", "Málaga", "malaga"),
    entry("30030", "Murcia", "murcia"),
    entry("07040", "Palma", "palma"),
    entry("35016", "Palmas de Gran Canaria, Las", "las-palmas"),
    entry("48020", "Bilbao", "bilbao"),
    entry("03014", "Alicante/Alacant", "alicante"),
    entry("14021", "Córdoba", "cordoba"),
];

/// Entries whose lowercased name or slug contains `normalized_query`.
///
/// `normalized_query` must already be trimmed and lowercased.
pub fn search_static(normalized_query: &str) -> Vec<MunicipalityCandidate> {
    STATIC_MUNICIPALITIES
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(normalized_query)
                || entry.slug.contains(normalized_query)
        })
        .map(MunicipalityCandidate::from)
        .collect()
}
