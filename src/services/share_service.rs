//! Enlaces externos para compartir un evento: Google Calendar, ICS y los
//! intents de WhatsApp/Facebook/Twitter. Solo armado de strings.

use serde::Serialize;

use crate::models::Event;

#[derive(Debug, Serialize)]
pub struct ShareLinks {
    pub google_calendar: String,
    pub ics: String,
    pub whatsapp: String,
    pub facebook: String,
    pub twitter: String,
}

pub fn build_share_links(event: &Event, base_url: &str) -> ShareLinks {
    let event_url = format!("{}/events/{}", base_url.trim_end_matches('/'), event.id);
    let text = format!(
        "Súmate a \"{}\" en {} ({}) 🌊",
        event.title, event.location.beach, event.location.district
    );

    ShareLinks {
        google_calendar: google_calendar_url(event),
        ics: build_ics(event),
        whatsapp: format!(
            "https://wa.me/?text={}",
            percent_encode(&format!("{} {}", text, event_url))
        ),
        facebook: format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            percent_encode(&event_url)
        ),
        twitter: format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            percent_encode(&text),
            percent_encode(&event_url)
        ),
    }
}

pub fn google_calendar_url(event: &Event) -> String {
    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        percent_encode(&event.title),
        compact_timestamp(&event.starts_at),
        compact_timestamp(&event.ends_at),
        percent_encode(&event.description),
        percent_encode(&format!(
            "{}, {}",
            event.location.beach, event.location.district
        )),
    )
}

pub fn build_ics(event: &Event) -> String {
    let location = format!("{}, {}", event.location.beach, event.location.district);
    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//EcoPlaya//Limpiezas de playa//ES".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@ecoplaya.pe", event.id),
        format!("DTSTART:{}", compact_timestamp(&event.starts_at)),
        format!("DTEND:{}", compact_timestamp(&event.ends_at)),
        format!("SUMMARY:{}", escape_ics_text(&event.title)),
        format!("DESCRIPTION:{}", escape_ics_text(&event.description)),
        format!("LOCATION:{}", escape_ics_text(&location)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];
    lines.join("\r\n")
}

// "2026-09-12T09:00:00" → "20260912T090000"
fn compact_timestamp(iso: &str) -> String {
    iso.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

fn escape_ics_text(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(*byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn first_event() -> crate::models::Event {
        data::events::catalog().into_iter().next().unwrap()
    }

    #[test]
    fn percent_encode_handles_spaces_and_utf8() {
        assert_eq!(percent_encode("hola mundo"), "hola%20mundo");
        assert_eq!(percent_encode("año"), "a%C3%B1o");
        assert_eq!(percent_encode("abc-123_.~"), "abc-123_.~");
    }

    #[test]
    fn compact_timestamp_strips_separators() {
        assert_eq!(compact_timestamp("2026-09-12T09:00:00"), "20260912T090000");
    }

    #[test]
    fn google_calendar_url_carries_date_range() {
        let url = google_calendar_url(&first_event());
        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("dates=20260912T090000/20260912T120000"));
    }

    #[test]
    fn ics_escapes_reserved_characters() {
        let mut event = first_event();
        event.title = "Limpieza; playa, etapa 1".to_string();
        let ics = build_ics(&event);
        assert!(ics.contains("SUMMARY:Limpieza\\; playa\\, etapa 1"));
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR"));
    }

    #[test]
    fn share_links_point_at_the_event_url() {
        let event = first_event();
        let links = build_share_links(&event, "https://ecoplaya.pe/");
        let encoded_url = percent_encode("https://ecoplaya.pe/events/ev-001");
        assert!(links.whatsapp.contains(&encoded_url));
        assert!(links.facebook.ends_with(&encoded_url));
        assert!(links.twitter.contains(&encoded_url));
    }
}
