//! Agregación por día calendario para la vista mensual. Derivado puro del
//! catálogo, se recalcula en cada petición.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Event;

/// Mapa día ("YYYY-MM-DD") → eventos que empiezan ese día.
pub fn events_by_day<'a>(events: &'a [Event]) -> BTreeMap<String, Vec<&'a Event>> {
    let mut days: BTreeMap<String, Vec<&Event>> = BTreeMap::new();
    for event in events {
        days.entry(event.start_day().to_string())
            .or_default()
            .push(event);
    }
    days
}

#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub count: usize,
    pub event_ids: Vec<String>,
}

/// Resumen por día de un mes ("YYYY-MM"), para anotar el calendario con el
/// conteo de eventos.
pub fn month_view(events: &[Event], month: &str) -> Vec<DaySummary> {
    events_by_day(events)
        .into_iter()
        .filter(|(day, _)| day.starts_with(month))
        .map(|(date, day_events)| DaySummary {
            date,
            count: day_events.len(),
            event_ids: day_events.iter().map(|e| e.id.clone()).collect(),
        })
        .collect()
}
