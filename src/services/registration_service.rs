use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::registrations_repo::{self, NewRegistration};
use crate::database::profiles_repo;
use crate::error::AppError;
use crate::models::{Event, EventStatus};
use crate::services::{now_timestamp, profile_service};

#[derive(Debug, Deserialize, Default)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub swim_confirmed: bool,
    #[serde(default)]
    pub waiver_accepted: bool,
}

#[derive(Debug, Serialize)]
pub struct RegistrationView {
    pub registration_id: String,
    pub event_id: String,
    pub spots_left: i64,
}

#[derive(Debug, Serialize)]
pub struct CompletionView {
    pub event_id: String,
    pub points_earned: i64,
    pub volunteer_hours: i64,
    pub new_badges: Vec<String>,
}

/// Busca un evento servible del catálogo (los borradores no existen de cara
/// al voluntario).
pub fn find_event<'a>(events: &'a [Event], event_id: &str) -> Result<&'a Event, AppError> {
    events
        .iter()
        .find(|e| e.id == event_id && e.status != EventStatus::Draft)
        .ok_or(AppError::NotFound)
}

pub async fn register(
    pool: &SqlitePool,
    events: &[Event],
    user_id: &str,
    event_id: &str,
    req: &RegistrationRequest,
) -> Result<RegistrationView, AppError> {
    let event = find_event(events, event_id)?;

    if event.status == EventStatus::Past {
        return Err(AppError::Validation("El evento ya finalizó".to_string()));
    }
    if event.requirements.must_swim && !req.swim_confirmed {
        return Err(AppError::Validation(
            "Este evento requiere saber nadar; confírmalo para inscribirte".to_string(),
        ));
    }
    if event.requirements.waiver_required && !req.waiver_accepted {
        return Err(AppError::Validation(
            "Debes aceptar el deslinde de responsabilidad".to_string(),
        ));
    }
    // Una inscripción activa o ya completada bloquea una nueva.
    if let Some(existing) = registrations_repo::find_blocking(pool, user_id, event_id).await? {
        let msg = if existing.status == "completed" {
            "Ya completaste este evento"
        } else {
            "Ya estás inscrito en este evento"
        };
        return Err(AppError::Validation(msg.to_string()));
    }

    profiles_repo::ensure_profile(pool, user_id).await?;

    let registration_id = Uuid::new_v4().to_string();
    let created_at = now_timestamp();
    let inserted = registrations_repo::insert_registration(
        pool,
        NewRegistration {
            registration_id: &registration_id,
            user_id,
            event_id,
            created_at: &created_at,
        },
        event.capacity,
    )
    .await?;
    if inserted == 0 {
        return Err(AppError::Validation(
            "No quedan cupos para este evento".to_string(),
        ));
    }

    let taken = registrations_repo::count_active_for_event(pool, event_id).await?;

    info!("✅ Inscripción: user={} event={}", user_id, event_id);

    Ok(RegistrationView {
        registration_id,
        event_id: event.id.clone(),
        spots_left: (event.capacity - taken).max(0),
    })
}

pub async fn cancel(pool: &SqlitePool, user_id: &str, event_id: &str) -> Result<(), AppError> {
    let Some(reg) = registrations_repo::find_active(pool, user_id, event_id).await? else {
        return Err(AppError::NotFound);
    };
    registrations_repo::update_status(pool, &reg.registration_id, "cancelled").await?;
    info!("↩️  Inscripción cancelada: user={} event={}", user_id, event_id);
    Ok(())
}

/// Check-in de demostración: marca la inscripción como completada y acredita
/// los beneficios del evento al perfil del voluntario.
pub async fn complete(
    pool: &SqlitePool,
    events: &[Event],
    user_id: &str,
    event_id: &str,
) -> Result<CompletionView, AppError> {
    let event = find_event(events, event_id)?;

    let Some(reg) = registrations_repo::find_active(pool, user_id, event_id).await? else {
        return Err(AppError::Validation(
            "No estás inscrito en este evento".to_string(),
        ));
    };

    registrations_repo::update_status(pool, &reg.registration_id, "completed").await?;

    let points = event.benefits.points.unwrap_or(0);
    profiles_repo::ensure_profile(pool, user_id).await?;
    profiles_repo::credit(pool, user_id, points, event.benefits.volunteer_hours, 1).await?;

    let new_badges = profile_service::award_pending_badges(pool, user_id).await?;

    info!(
        "🏁 Evento completado: user={} event={} puntos={} insignias_nuevas={}",
        user_id,
        event_id,
        points,
        new_badges.len()
    );

    Ok(CompletionView {
        event_id: event.id.clone(),
        points_earned: points,
        volunteer_hours: event.benefits.volunteer_hours,
        new_badges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::database::{self, profiles_repo};
    use crate::models::{BeachLocation, Benefits, Category, Organizer, Requirements};

    fn tiny_event(capacity: i64) -> Event {
        Event {
            id: "ev-mini".to_string(),
            title: "Limpieza chica".to_string(),
            description: String::new(),
            starts_at: "2026-09-12T09:00:00".to_string(),
            ends_at: "2026-09-12T12:00:00".to_string(),
            location: BeachLocation {
                district: "Miraflores".to_string(),
                beach: "Playa Makaha".to_string(),
                latitude: -12.1196,
                longitude: -77.0365,
            },
            category: Category::Costa,
            activities: vec![],
            organizer: Organizer {
                id: "org-test".to_string(),
                name: "Org".to_string(),
            },
            allies: vec![],
            requirements: Requirements {
                must_swim: false,
                min_age: 12,
                waiver_required: false,
            },
            benefits: Benefits {
                points: Some(80),
                certificate: true,
                volunteer_hours: 3,
            },
            capacity,
            status: EventStatus::Upcoming,
        }
    }

    #[tokio::test]
    async fn register_then_duplicate_is_rejected() {
        let pool = database::test_pool().await;
        let events = data::events::catalog();

        let view = register(&pool, &events, "usr-demo", "ev-001", &RegistrationRequest::default())
            .await
            .expect("primera inscripción");
        assert_eq!(view.event_id, "ev-001");
        assert_eq!(view.spots_left, 59);

        let err = register(&pool, &events, "usr-demo", "ev-001", &RegistrationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn swimming_event_needs_confirmation() {
        let pool = database::test_pool().await;
        let events = data::events::catalog();

        let err = register(
            &pool,
            &events,
            "usr-demo",
            "ev-003",
            &RegistrationRequest {
                swim_confirmed: false,
                waiver_accepted: true,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        register(
            &pool,
            &events,
            "usr-demo",
            "ev-003",
            &RegistrationRequest {
                swim_confirmed: true,
                waiver_accepted: true,
            },
        )
        .await
        .expect("con confirmación debe pasar");
    }

    #[tokio::test]
    async fn full_event_rejects_new_registrations() {
        let pool = database::test_pool().await;
        let events = vec![tiny_event(1)];

        register(&pool, &events, "usr-a", "ev-mini", &RegistrationRequest::default())
            .await
            .expect("primer cupo");
        let err = register(&pool, &events, "usr-b", "ev-mini", &RegistrationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn cancelling_frees_the_spot() {
        let pool = database::test_pool().await;
        let events = vec![tiny_event(1)];

        register(&pool, &events, "usr-a", "ev-mini", &RegistrationRequest::default())
            .await
            .unwrap();
        cancel(&pool, "usr-a", "ev-mini").await.unwrap();
        register(&pool, &events, "usr-b", "ev-mini", &RegistrationRequest::default())
            .await
            .expect("el cupo quedó libre");
    }

    #[tokio::test]
    async fn completing_credits_points_and_first_badge() {
        let pool = database::test_pool().await;
        let events = data::events::catalog();

        register(&pool, &events, "usr-demo", "ev-001", &RegistrationRequest::default())
            .await
            .unwrap();
        let view = complete(&pool, &events, "usr-demo", "ev-001").await.unwrap();
        assert_eq!(view.points_earned, 80);
        assert_eq!(view.volunteer_hours, 3);
        assert!(view
            .new_badges
            .contains(&profile_service::BADGE_FIRST_CLEANUP.to_string()));

        let profile = profiles_repo::load_profile(&pool, "usr-demo")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.points, 80);
        assert_eq!(profile.volunteer_hours, 3);
        assert_eq!(profile.cleanups_attended, 1);
    }

    #[tokio::test]
    async fn completed_event_cannot_be_taken_again() {
        let pool = database::test_pool().await;
        let events = data::events::catalog();

        register(&pool, &events, "usr-demo", "ev-001", &RegistrationRequest::default())
            .await
            .unwrap();
        complete(&pool, &events, "usr-demo", "ev-001").await.unwrap();

        // Sin esto se podrían acumular puntos repitiendo el mismo evento.
        let err = register(&pool, &events, "usr-demo", "ev-001", &RegistrationRequest::default())
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("Ya completaste")),
            other => panic!("se esperaba Validation, llegó {:?}", other),
        }
    }

    #[tokio::test]
    async fn past_and_draft_events_are_not_registrable() {
        let pool = database::test_pool().await;
        let events = data::events::catalog();

        let err = register(&pool, &events, "usr-demo", "ev-007", &RegistrationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = register(&pool, &events, "usr-demo", "ev-008", &RegistrationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
