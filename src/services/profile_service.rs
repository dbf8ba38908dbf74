use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::{profiles_repo, users_repo};
use crate::error::AppError;
use crate::models::ProfileRow;
use crate::services::now_timestamp;

pub const BADGE_FIRST_CLEANUP: &str = "primera-limpieza";
pub const BADGE_FIVE_CLEANUPS: &str = "cinco-limpiezas";
pub const BADGE_POINTS_500: &str = "club-500-puntos";
pub const BADGE_HOURS_20: &str = "20-horas";

fn badge_title(badge_id: &str) -> &'static str {
    match badge_id {
        BADGE_FIRST_CLEANUP => "Primera limpieza",
        BADGE_FIVE_CLEANUPS => "Cinco limpiezas",
        BADGE_POINTS_500 => "Club de los 500 puntos",
        BADGE_HOURS_20 => "20 horas de voluntariado",
        _ => "Insignia",
    }
}

/// Insignias que el perfil ya alcanzó según sus umbrales. Puro.
pub fn earned_badges(profile: &ProfileRow) -> Vec<&'static str> {
    let mut earned = Vec::new();
    if profile.cleanups_attended >= 1 {
        earned.push(BADGE_FIRST_CLEANUP);
    }
    if profile.cleanups_attended >= 5 {
        earned.push(BADGE_FIVE_CLEANUPS);
    }
    if profile.points >= 500 {
        earned.push(BADGE_POINTS_500);
    }
    if profile.volunteer_hours >= 20 {
        earned.push(BADGE_HOURS_20);
    }
    earned
}

/// Otorga las insignias pendientes y devuelve solo las nuevas.
pub async fn award_pending_badges(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<String>> {
    let Some(profile) = profiles_repo::load_profile(pool, user_id).await? else {
        return Ok(Vec::new());
    };

    let now = now_timestamp();
    let mut new_badges = Vec::new();
    for badge_id in earned_badges(&profile) {
        if profiles_repo::insert_badge(pool, user_id, badge_id, &now).await? > 0 {
            new_badges.push(badge_id.to_string());
        }
    }
    Ok(new_badges)
}

#[derive(Debug, Serialize)]
pub struct BadgeView {
    pub id: String,
    pub title: String,
    pub awarded_at: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub district: Option<String>,
    pub points: i64,
    pub volunteer_hours: i64,
    pub cleanups_attended: i64,
    pub badges: Vec<BadgeView>,
    pub certificate_available: bool,
}

pub async fn load_profile_view(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<ProfileView>, AppError> {
    let Some(user) = users_repo::find_by_id(pool, user_id).await? else {
        return Ok(None);
    };

    profiles_repo::ensure_profile(pool, user_id).await?;
    let profile = profiles_repo::load_profile(pool, user_id)
        .await?
        .unwrap_or(ProfileRow {
            user_id: user_id.to_string(),
            points: 0,
            volunteer_hours: 0,
            cleanups_attended: 0,
        });

    let badges = profiles_repo::list_badges(pool, user_id)
        .await?
        .into_iter()
        .map(|b| BadgeView {
            title: badge_title(&b.badge_id).to_string(),
            id: b.badge_id,
            awarded_at: b.awarded_at,
        })
        .collect();

    Ok(Some(ProfileView {
        name: user.name,
        district: user.district,
        points: profile.points,
        volunteer_hours: profile.volunteer_hours,
        cleanups_attended: profile.cleanups_attended,
        badges,
        certificate_available: profile.cleanups_attended >= 1,
    }))
}
