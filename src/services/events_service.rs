//! Pipeline de descubrimiento de eventos: filtrado, orden y anotación de
//! distancia. Todas las funciones son puras sobre el catálogo en memoria.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{Category, Event, EventStatus};

#[derive(Debug, Deserialize, Default)]
pub struct EventsQuery {
    pub q: Option<String>,
    pub district: Option<String>, // lista separada por comas
    pub category: Option<String>,
    pub activity: Option<String>, // lista separada por comas
    pub ally_boat: Option<bool>,
    pub ally_sup: Option<bool>,
    pub ally_kits: Option<bool>,
    pub ally_insurance: Option<bool>,
    pub min_points: Option<i64>,
    pub min_hours: Option<i64>,
    pub no_swim: Option<bool>,
    pub date: Option<String>, // un solo día, "YYYY-MM-DD"
    pub sort: Option<String>, // upcoming|points|closest
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Upcoming,
    Points,
    Closest,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Upcoming => "upcoming",
            SortMode::Points => "points",
            SortMode::Closest => "closest",
        }
    }
}

pub fn parse_sort(input: Option<&str>) -> SortMode {
    match input.unwrap_or("upcoming") {
        "points" => SortMode::Points,
        "closest" => SortMode::Closest,
        _ => SortMode::Upcoming,
    }
}

/// Estado de filtros ya normalizado (texto y listas en minúsculas).
/// Con todos los campos en su valor por defecto, el filtro es la identidad.
#[derive(Debug, Clone, Default)]
pub struct EventFilters {
    pub text: String,
    pub districts: Vec<String>,
    pub category: Option<Category>,
    pub activities: Vec<String>,
    pub ally_boat: bool,
    pub ally_sup: bool,
    pub ally_kits: bool,
    pub ally_insurance: bool,
    pub min_points: Option<i64>,
    pub min_hours: Option<i64>,
    pub no_swim: bool,
    pub date: Option<String>,
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|part| part.trim().to_lowercase())
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

impl EventFilters {
    pub fn from_query(query: &EventsQuery) -> Self {
        EventFilters {
            text: query
                .q
                .as_deref()
                .unwrap_or("")
                .trim()
                .to_lowercase(),
            districts: split_list(query.district.as_deref()),
            category: query.category.as_deref().and_then(Category::parse),
            activities: split_list(query.activity.as_deref()),
            ally_boat: query.ally_boat.unwrap_or(false),
            ally_sup: query.ally_sup.unwrap_or(false),
            ally_kits: query.ally_kits.unwrap_or(false),
            ally_insurance: query.ally_insurance.unwrap_or(false),
            min_points: query.min_points,
            min_hours: query.min_hours,
            no_swim: query.no_swim.unwrap_or(false),
            date: query
                .date
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| d.to_string()),
        }
    }
}

/// Subconjunto del catálogo que satisface todos los predicados activos.
/// No muta la entrada; con filtros vacíos devuelve la lista completa.
pub fn apply_filters<'a>(events: &'a [Event], filters: &EventFilters) -> Vec<&'a Event> {
    events.iter().filter(|e| matches(e, filters)).collect()
}

fn matches(event: &Event, f: &EventFilters) -> bool {
    if !f.text.is_empty() && !matches_text(event, &f.text) {
        return false;
    }
    if !f.districts.is_empty() && !f.districts.contains(&event.location.district.to_lowercase()) {
        return false;
    }
    if let Some(category) = f.category {
        if event.category != category {
            return false;
        }
    }
    if !f.activities.is_empty() {
        let has_tag = event
            .activities
            .iter()
            .any(|tag| f.activities.contains(&tag.to_lowercase()));
        if !has_tag {
            return false;
        }
    }
    // Cada capacidad pedida debe estar cubierta por algún aliado del evento.
    if f.ally_boat && !event.allies.iter().any(|a| a.has_boat) {
        return false;
    }
    if f.ally_sup && !event.allies.iter().any(|a| a.has_sup_gear) {
        return false;
    }
    if f.ally_kits && !event.allies.iter().any(|a| a.has_kits) {
        return false;
    }
    if f.ally_insurance && !event.allies.iter().any(|a| a.has_insurance) {
        return false;
    }
    if let Some(min) = f.min_points {
        if event.benefits.points.unwrap_or(0) < min {
            return false;
        }
    }
    if let Some(min) = f.min_hours {
        if event.benefits.volunteer_hours < min {
            return false;
        }
    }
    if f.no_swim && event.requirements.must_swim {
        return false;
    }
    if let Some(day) = &f.date {
        if event.start_day() != day.as_str() {
            return false;
        }
    }
    true
}

fn matches_text(event: &Event, needle: &str) -> bool {
    event.title.to_lowercase().contains(needle)
        || event.organizer.name.to_lowercase().contains(needle)
        || event.location.beach.to_lowercase().contains(needle)
        || event
            .allies
            .iter()
            .any(|ally| ally.name.to_lowercase().contains(needle))
}

pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let to_rad = |deg: f64| deg.to_radians();
    let dlat = to_rad(lat2 - lat1);
    let dlon = to_rad(lon2 - lon1);
    let a = (dlat / 2.0).sin().powi(2)
        + to_rad(lat1).cos() * to_rad(lat2).cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    6371.0 * c
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCardView {
    pub id: String,
    pub title: String,
    pub starts_at: String,
    pub ends_at: String,
    pub district: String,
    pub beach: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: &'static str,
    pub activities: Vec<String>,
    pub organizer_name: String,
    pub ally_names: Vec<String>,
    pub points: i64,
    pub volunteer_hours: i64,
    pub certificate: bool,
    pub capacity: i64,
    pub status: EventStatus,
    pub distance_km: Option<f64>,
}

fn card_view(event: &Event) -> EventCardView {
    EventCardView {
        id: event.id.clone(),
        title: event.title.clone(),
        starts_at: event.starts_at.clone(),
        ends_at: event.ends_at.clone(),
        district: event.location.district.clone(),
        beach: event.location.beach.clone(),
        latitude: event.location.latitude,
        longitude: event.location.longitude,
        category: event.category.label(),
        activities: event.activities.clone(),
        organizer_name: event.organizer.name.clone(),
        ally_names: event.allies.iter().map(|a| a.name.clone()).collect(),
        points: event.benefits.points.unwrap_or(0),
        volunteer_hours: event.benefits.volunteer_hours,
        certificate: event.benefits.certificate,
        capacity: event.capacity,
        status: event.status,
        distance_km: None,
    }
}

/// Ordena la lista filtrada según el modo elegido. En modo `closest` sin
/// coordenadas del usuario la lista conserva su orden previo (fallback
/// documentado, no es un error).
pub fn sort_events(cards: &mut [EventCardView], mode: SortMode, user: Option<(f64, f64)>) {
    match mode {
        SortMode::Upcoming => cards.sort_by(|a, b| a.starts_at.cmp(&b.starts_at)),
        SortMode::Points => cards.sort_by(|a, b| b.points.cmp(&a.points)),
        SortMode::Closest => {
            let Some((lat, lon)) = user else {
                return;
            };
            for card in cards.iter_mut() {
                card.distance_km = Some(haversine_km(lat, lon, card.latitude, card.longitude));
            }
            cards.sort_by(|a, b| {
                a.distance_km
                    .unwrap_or(f64::MAX)
                    .partial_cmp(&b.distance_km.unwrap_or(f64::MAX))
                    .unwrap_or(Ordering::Equal)
            });
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventsPageData {
    pub events: Vec<EventCardView>,
    pub sort: &'static str,
    pub total: usize,
}

/// Filtra, ordena y arma las tarjetas. Los borradores nunca se sirven.
pub fn build_events_page(catalog: &[Event], query: &EventsQuery) -> EventsPageData {
    let filters = EventFilters::from_query(query);
    let mut cards: Vec<EventCardView> = apply_filters(catalog, &filters)
        .into_iter()
        .filter(|e| e.status != EventStatus::Draft)
        .map(card_view)
        .collect();

    let mode = parse_sort(query.sort.as_deref());
    sort_events(&mut cards, mode, query.lat.zip(query.lon));

    let total = cards.len();
    EventsPageData {
        events: cards,
        sort: mode.as_str(),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::models::{
        Ally, BeachLocation, Benefits, Category, Event, EventStatus, Organizer, Requirements,
    };

    fn mk_event(id: &str, district: &str, lat: f64, lon: f64, points: i64) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Limpieza {}", id),
            description: String::new(),
            starts_at: "2026-09-12T09:00:00".to_string(),
            ends_at: "2026-09-12T12:00:00".to_string(),
            location: BeachLocation {
                district: district.to_string(),
                beach: format!("Playa {}", district),
                latitude: lat,
                longitude: lon,
            },
            category: Category::Costa,
            activities: vec!["recolección".to_string()],
            organizer: Organizer {
                id: "org-test".to_string(),
                name: "Org de prueba".to_string(),
            },
            allies: Vec::<Ally>::new(),
            requirements: Requirements {
                must_swim: false,
                min_age: 12,
                waiver_required: false,
            },
            benefits: Benefits {
                points: Some(points),
                certificate: false,
                volunteer_hours: 3,
            },
            capacity: 50,
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn empty_filters_return_full_list() {
        let catalog = data::events::catalog();
        let result = apply_filters(&catalog, &EventFilters::default());
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn district_filter_excludes_other_districts() {
        let catalog = data::events::catalog();
        let filters = EventFilters {
            districts: vec!["miraflores".to_string(), "barranco".to_string()],
            ..EventFilters::default()
        };
        let result = apply_filters(&catalog, &filters);
        assert!(!result.is_empty());
        for event in &result {
            let district = event.location.district.to_lowercase();
            assert!(district == "miraflores" || district == "barranco");
        }
    }

    #[test]
    fn min_points_keeps_only_events_at_or_above_threshold() {
        let events = vec![
            mk_event("a", "Miraflores", -12.1196, -77.0365, 50),
            mk_event("b", "Barranco", -12.1467, -77.0208, 80),
            mk_event("c", "Chorrillos", -12.1689, -77.0253, 120),
        ];
        let filters = EventFilters {
            min_points: Some(80),
            ..EventFilters::default()
        };
        let result = apply_filters(&events, &filters);
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn text_filter_matches_ally_names() {
        let catalog = data::events::catalog();
        let filters = EventFilters {
            text: "pukana".to_string(),
            ..EventFilters::default()
        };
        let result = apply_filters(&catalog, &filters);
        assert!(result.iter().any(|e| e.id == "ev-001"));
        assert!(result.iter().all(|e| {
            e.allies
                .iter()
                .any(|a| a.name.to_lowercase().contains("pukana"))
        }));
    }

    #[test]
    fn no_swim_filter_excludes_swimming_events() {
        let catalog = data::events::catalog();
        let filters = EventFilters {
            no_swim: true,
            ..EventFilters::default()
        };
        for event in apply_filters(&catalog, &filters) {
            assert!(!event.requirements.must_swim);
        }
    }

    #[test]
    fn date_filter_compares_calendar_day() {
        let catalog = data::events::catalog();
        let filters = EventFilters {
            date: Some("2026-09-12".to_string()),
            ..EventFilters::default()
        };
        let result = apply_filters(&catalog, &filters);
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&"ev-001"));
        assert!(ids.contains(&"ev-002"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn ally_capability_filter_requires_coverage() {
        let catalog = data::events::catalog();
        let filters = EventFilters {
            ally_boat: true,
            ally_insurance: true,
            ..EventFilters::default()
        };
        let result = apply_filters(&catalog, &filters);
        assert!(!result.is_empty());
        for event in &result {
            assert!(event.allies.iter().any(|a| a.has_boat));
            assert!(event.allies.iter().any(|a| a.has_insurance));
        }
    }

    #[test]
    fn haversine_is_zero_on_same_point_and_symmetric() {
        let d0 = haversine_km(-12.1196, -77.0365, -12.1196, -77.0365);
        assert!(d0.abs() < 1e-9);

        let ab = haversine_km(-12.1196, -77.0365, -12.1467, -77.0208);
        let ba = haversine_km(-12.1467, -77.0208, -12.1196, -77.0365);
        assert!((ab - ba).abs() < 1e-9);
        // Miraflores a Barranco: alrededor de 3-5 km.
        assert!(ab > 2.0 && ab < 6.0);
    }

    #[test]
    fn closest_sort_puts_nearby_event_first() {
        let events = vec![
            mk_event("barranco", "Barranco", -12.1467, -77.0208, 50),
            mk_event("miraflores", "Miraflores", -12.1196, -77.0365, 80),
        ];
        let query = EventsQuery {
            sort: Some("closest".to_string()),
            lat: Some(-12.1196),
            lon: Some(-77.0365),
            ..EventsQuery::default()
        };
        let page = build_events_page(&events, &query);
        assert_eq!(page.events[0].id, "miraflores");
        assert!(page.events[0].distance_km.unwrap() < page.events[1].distance_km.unwrap());
    }

    #[test]
    fn closest_sort_without_coordinates_keeps_prior_order() {
        let events = vec![
            mk_event("b", "Barranco", -12.1467, -77.0208, 50),
            mk_event("a", "Miraflores", -12.1196, -77.0365, 80),
        ];
        let query = EventsQuery {
            sort: Some("closest".to_string()),
            ..EventsQuery::default()
        };
        let page = build_events_page(&events, &query);
        let ids: Vec<&str> = page.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(page.events.iter().all(|e| e.distance_km.is_none()));
    }

    #[test]
    fn points_sort_is_non_increasing() {
        let catalog = data::events::catalog();
        let query = EventsQuery {
            sort: Some("points".to_string()),
            ..EventsQuery::default()
        };
        let page = build_events_page(&catalog, &query);
        for pair in page.events.windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }
    }

    #[test]
    fn upcoming_sort_is_non_decreasing() {
        let catalog = data::events::catalog();
        let query = EventsQuery::default();
        let page = build_events_page(&catalog, &query);
        assert_eq!(page.sort, "upcoming");
        for pair in page.events.windows(2) {
            assert!(pair[0].starts_at <= pair[1].starts_at);
        }
    }

    #[test]
    fn drafts_are_never_served() {
        let catalog = data::events::catalog();
        let page = build_events_page(&catalog, &EventsQuery::default());
        assert!(page.events.iter().all(|e| e.status != EventStatus::Draft));
        assert_eq!(page.total, page.events.len());
    }
}
