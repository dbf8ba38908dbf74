use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Costa,
    Mar,
    Educacion,
    Reciclaje,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Costa => "Costa",
            Category::Mar => "Mar",
            Category::Educacion => "Educación",
            Category::Reciclaje => "Reciclaje",
        }
    }

    pub fn parse(input: &str) -> Option<Category> {
        match input.trim().to_lowercase().as_str() {
            "costa" => Some(Category::Costa),
            "mar" => Some(Category::Mar),
            "educacion" | "educación" => Some(Category::Educacion),
            "reciclaje" => Some(Category::Reciclaje),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
    Draft,
}

#[derive(Debug, Clone, Serialize)]
pub struct BeachLocation {
    pub district: String,
    pub beach: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Aliado: escuela de surf, restaurante u ONG que apoya un evento con
/// capacidades concretas (bote, tablas SUP, kits de limpieza, seguro).
#[derive(Debug, Clone, Serialize)]
pub struct Ally {
    pub id: String,
    pub name: String,
    pub kind: String, // surf_school|restaurant|ngo
    pub has_boat: bool,
    pub has_sup_gear: bool,
    pub has_kits: bool,
    pub has_insurance: bool,
    pub discount: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Organizer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Requirements {
    pub must_swim: bool,
    pub min_age: i64,
    pub waiver_required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Benefits {
    pub points: Option<i64>,
    pub certificate: bool,
    pub volunteer_hours: i64,
}

/// Evento del catálogo inmutable. Los timestamps son strings ISO locales
/// ("YYYY-MM-DDTHH:MM:SS"); el orden lexicográfico coincide con el cronológico.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub starts_at: String,
    pub ends_at: String,
    pub location: BeachLocation,
    pub category: Category,
    pub activities: Vec<String>,
    pub organizer: Organizer,
    pub allies: Vec<Ally>,
    pub requirements: Requirements,
    pub benefits: Benefits,
    pub capacity: i64,
    pub status: EventStatus,
}

impl Event {
    /// Día calendario del inicio ("YYYY-MM-DD").
    pub fn start_day(&self) -> &str {
        &self.starts_at[..self.starts_at.len().min(10)]
    }
}
