//! Catálogo de eventos de demostración: limpiezas en la costa limeña.
//! No hay backend real; el catálogo vive en memoria, como las listas mock
//! de la maqueta original.

use crate::models::{
    Ally, BeachLocation, Benefits, Category, Event, EventStatus, Organizer, Requirements,
};

fn ally(
    id: &str,
    name: &str,
    kind: &str,
    has_boat: bool,
    has_sup_gear: bool,
    has_kits: bool,
    has_insurance: bool,
    discount: Option<&str>,
) -> Ally {
    Ally {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        has_boat,
        has_sup_gear,
        has_kits,
        has_insurance,
        discount: discount.map(|d| d.to_string()),
    }
}

pub fn catalog() -> Vec<Event> {
    vec![
        Event {
            id: "ev-001".to_string(),
            title: "Limpieza Playa Makaha".to_string(),
            description: "Jornada de recolección y clasificación de residuos en la Costa Verde. \
                          Trae bloqueador y botella reutilizable."
                .to_string(),
            starts_at: "2026-09-12T09:00:00".to_string(),
            ends_at: "2026-09-12T12:00:00".to_string(),
            location: BeachLocation {
                district: "Miraflores".to_string(),
                beach: "Playa Makaha".to_string(),
                latitude: -12.1196,
                longitude: -77.0365,
            },
            category: Category::Costa,
            activities: vec!["recolección".to_string(), "clasificación".to_string()],
            organizer: Organizer {
                id: "org-hazla".to_string(),
                name: "HAZla por tu Playa".to_string(),
            },
            allies: vec![
                ally(
                    "al-pukana",
                    "Pukana Surf School",
                    "surf_school",
                    false,
                    true,
                    true,
                    false,
                    Some("20% en clases de surf para voluntarios"),
                ),
                ally(
                    "al-lapunta-eco",
                    "EcoKits Perú",
                    "ngo",
                    false,
                    false,
                    true,
                    false,
                    None,
                ),
            ],
            requirements: Requirements {
                must_swim: false,
                min_age: 12,
                waiver_required: true,
            },
            benefits: Benefits {
                points: Some(80),
                certificate: true,
                volunteer_hours: 3,
            },
            capacity: 60,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "ev-002".to_string(),
            title: "Jornada en Los Yuyos".to_string(),
            description: "Limpieza de orilla y zona de pescadores en Barranco.".to_string(),
            starts_at: "2026-09-12T08:30:00".to_string(),
            ends_at: "2026-09-12T11:30:00".to_string(),
            location: BeachLocation {
                district: "Barranco".to_string(),
                beach: "Playa Los Yuyos".to_string(),
                latitude: -12.1467,
                longitude: -77.0208,
            },
            category: Category::Costa,
            activities: vec!["recolección".to_string()],
            organizer: Organizer {
                id: "org-vidamar".to_string(),
                name: "VidaMar Barranco".to_string(),
            },
            allies: vec![ally(
                "al-canta",
                "Cevichería La Canta Rana",
                "restaurant",
                false,
                false,
                false,
                false,
                Some("Menú marino al 50% mostrando el certificado"),
            )],
            requirements: Requirements {
                must_swim: false,
                min_age: 10,
                waiver_required: false,
            },
            benefits: Benefits {
                points: Some(50),
                certificate: false,
                volunteer_hours: 3,
            },
            capacity: 40,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "ev-003".to_string(),
            title: "Limpieza submarina San Bartolo".to_string(),
            description: "Retiro de redes fantasma y residuos del fondo marino con apoyo de bote. \
                          Solo voluntarios que sepan nadar."
                .to_string(),
            starts_at: "2026-09-19T07:30:00".to_string(),
            ends_at: "2026-09-19T11:30:00".to_string(),
            location: BeachLocation {
                district: "San Bartolo".to_string(),
                beach: "Playa Norte San Bartolo".to_string(),
                latitude: -12.3869,
                longitude: -76.7786,
            },
            category: Category::Mar,
            activities: vec!["buceo".to_string(), "recolección".to_string()],
            organizer: Organizer {
                id: "org-marlimpio".to_string(),
                name: "Mar Limpio Perú".to_string(),
            },
            allies: vec![ally(
                "al-bartolo-dive",
                "San Bartolo Dive Center",
                "surf_school",
                true,
                false,
                false,
                true,
                None,
            )],
            requirements: Requirements {
                must_swim: true,
                min_age: 18,
                waiver_required: true,
            },
            benefits: Benefits {
                points: Some(150),
                certificate: true,
                volunteer_hours: 4,
            },
            capacity: 16,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "ev-004".to_string(),
            title: "Taller de reciclaje en Agua Dulce".to_string(),
            description: "Charla práctica sobre segregación de residuos y microplásticos, \
                          seguida de una limpieza corta."
                .to_string(),
            starts_at: "2026-09-20T10:00:00".to_string(),
            ends_at: "2026-09-20T12:00:00".to_string(),
            location: BeachLocation {
                district: "Chorrillos".to_string(),
                beach: "Playa Agua Dulce".to_string(),
                latitude: -12.1689,
                longitude: -77.0253,
            },
            category: Category::Educacion,
            activities: vec!["taller".to_string(), "recolección".to_string()],
            organizer: Organizer {
                id: "org-hazla".to_string(),
                name: "HAZla por tu Playa".to_string(),
            },
            allies: vec![],
            requirements: Requirements {
                must_swim: false,
                min_age: 8,
                waiver_required: false,
            },
            benefits: Benefits {
                points: Some(40),
                certificate: false,
                volunteer_hours: 2,
            },
            capacity: 80,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "ev-005".to_string(),
            title: "Acopio y clasificación en La Punta".to_string(),
            description: "Centro de acopio temporal: pesaje, clasificación y registro de \
                          reciclables recuperados del mar."
                .to_string(),
            starts_at: "2026-10-03T09:00:00".to_string(),
            ends_at: "2026-10-03T15:00:00".to_string(),
            location: BeachLocation {
                district: "La Punta".to_string(),
                beach: "Playa Cantolao".to_string(),
                latitude: -12.0703,
                longitude: -77.166,
            },
            category: Category::Reciclaje,
            activities: vec!["clasificación".to_string(), "pesaje".to_string()],
            organizer: Organizer {
                id: "org-recicla".to_string(),
                name: "Recicla Callao".to_string(),
            },
            allies: vec![ally(
                "al-ecokits",
                "EcoKits Perú",
                "ngo",
                false,
                false,
                true,
                true,
                None,
            )],
            requirements: Requirements {
                must_swim: false,
                min_age: 14,
                waiver_required: false,
            },
            benefits: Benefits {
                points: Some(120),
                certificate: true,
                volunteer_hours: 5,
            },
            capacity: 30,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "ev-006".to_string(),
            title: "Limpieza de verano en Ancón".to_string(),
            description: "Gran jornada previa a la temporada en la bahía de Ancón, con \
                          stand-up paddle para la zona de rompeolas."
                .to_string(),
            starts_at: "2026-10-10T08:00:00".to_string(),
            ends_at: "2026-10-10T12:00:00".to_string(),
            location: BeachLocation {
                district: "Ancón".to_string(),
                beach: "Bahía de Ancón".to_string(),
                latitude: -11.7733,
                longitude: -77.1769,
            },
            category: Category::Costa,
            activities: vec!["recolección".to_string(), "sup".to_string()],
            organizer: Organizer {
                id: "org-vidamar".to_string(),
                name: "VidaMar Barranco".to_string(),
            },
            allies: vec![ally(
                "al-ancon-sup",
                "Ancón SUP Club",
                "surf_school",
                true,
                true,
                false,
                true,
                Some("Alquiler de tabla gratis durante el evento"),
            )],
            requirements: Requirements {
                must_swim: true,
                min_age: 15,
                waiver_required: true,
            },
            benefits: Benefits {
                points: Some(90),
                certificate: false,
                volunteer_hours: 4,
            },
            capacity: 100,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "ev-007".to_string(),
            title: "Limpieza post-feriado Punta Hermosa".to_string(),
            description: "Jornada ya realizada, queda en el historial de la comunidad.".to_string(),
            starts_at: "2026-07-18T09:00:00".to_string(),
            ends_at: "2026-07-18T12:00:00".to_string(),
            location: BeachLocation {
                district: "Punta Hermosa".to_string(),
                beach: "Playa El Silencio".to_string(),
                latitude: -12.3345,
                longitude: -76.8235,
            },
            category: Category::Costa,
            activities: vec!["recolección".to_string()],
            organizer: Organizer {
                id: "org-marlimpio".to_string(),
                name: "Mar Limpio Perú".to_string(),
            },
            allies: vec![],
            requirements: Requirements {
                must_swim: false,
                min_age: 12,
                waiver_required: false,
            },
            benefits: Benefits {
                points: Some(60),
                certificate: false,
                volunteer_hours: 3,
            },
            capacity: 50,
            status: EventStatus::Past,
        },
        Event {
            id: "ev-008".to_string(),
            title: "Censo de aves y limpieza en Ventanilla".to_string(),
            description: "Borrador: pendiente de confirmar permisos con SERNANP.".to_string(),
            starts_at: "2026-11-07T07:00:00".to_string(),
            ends_at: "2026-11-07T11:00:00".to_string(),
            location: BeachLocation {
                district: "Ventanilla".to_string(),
                beach: "Humedales de Ventanilla".to_string(),
                latitude: -11.8786,
                longitude: -77.1256,
            },
            category: Category::Educacion,
            activities: vec!["censo".to_string(), "recolección".to_string()],
            organizer: Organizer {
                id: "org-recicla".to_string(),
                name: "Recicla Callao".to_string(),
            },
            allies: vec![],
            requirements: Requirements {
                must_swim: false,
                min_age: 12,
                waiver_required: false,
            },
            benefits: Benefits {
                points: None,
                certificate: false,
                volunteer_hours: 4,
            },
            capacity: 25,
            status: EventStatus::Draft,
        },
    ]
}
