use sqlx::SqlitePool;
use tracing::info;

// Sin herramienta de migraciones: el esquema se crea al arrancar.
// Todo lo que la maqueta guardaba en localStorage vive en estas tablas.

const SQL_CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  user_id TEXT PRIMARY KEY,
  email TEXT NOT NULL UNIQUE,
  password TEXT NOT NULL,
  name TEXT NOT NULL,
  district TEXT
)
"#;

const SQL_CREATE_CURRENT_USER: &str = r#"
CREATE TABLE IF NOT EXISTS current_user (
  user_id TEXT PRIMARY KEY
)
"#;

const SQL_CREATE_PROFILES: &str = r#"
CREATE TABLE IF NOT EXISTS profiles (
  user_id TEXT PRIMARY KEY,
  points INTEGER NOT NULL DEFAULT 0,
  volunteer_hours INTEGER NOT NULL DEFAULT 0,
  cleanups_attended INTEGER NOT NULL DEFAULT 0
)
"#;

const SQL_CREATE_BADGES: &str = r#"
CREATE TABLE IF NOT EXISTS badges (
  user_id TEXT NOT NULL,
  badge_id TEXT NOT NULL,
  awarded_at TEXT NOT NULL,
  PRIMARY KEY (user_id, badge_id)
)
"#;

const SQL_CREATE_REGISTRATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS registrations (
  registration_id TEXT PRIMARY KEY,
  user_id TEXT NOT NULL,
  event_id TEXT NOT NULL,
  status TEXT NOT NULL DEFAULT 'join',
  created_at TEXT NOT NULL
)
"#;

const SQL_CREATE_REDEMPTIONS: &str = r#"
CREATE TABLE IF NOT EXISTS redemptions (
  redemption_id TEXT PRIMARY KEY,
  user_id TEXT NOT NULL,
  reward_id TEXT NOT NULL,
  cost_points INTEGER NOT NULL,
  code TEXT NOT NULL,
  created_at TEXT NOT NULL
)
"#;

const SQL_CREATE_REFERRALS: &str = r#"
CREATE TABLE IF NOT EXISTS referrals (
  user_id TEXT PRIMARY KEY,
  code TEXT NOT NULL UNIQUE,
  referred_count INTEGER NOT NULL DEFAULT 0
)
"#;

const SQL_CREATE_REFERRAL_CLAIMS: &str = r#"
CREATE TABLE IF NOT EXISTS referral_claims (
  user_id TEXT PRIMARY KEY,
  code TEXT NOT NULL,
  created_at TEXT NOT NULL
)
"#;

const SQL_CREATE_REMINDERS: &str = r#"
CREATE TABLE IF NOT EXISTS reminders (
  user_id TEXT NOT NULL,
  event_id TEXT NOT NULL,
  remind_at TEXT NOT NULL,
  created_at TEXT NOT NULL,
  PRIMARY KEY (user_id, event_id)
)
"#;

const SQL_SEED_DEMO_USER: &str = r#"
INSERT OR IGNORE INTO users (user_id, email, password, name, district)
VALUES ('usr-demo', 'voluntaria@ecoplaya.pe', 'ecoplaya', 'Valeria Quispe', 'Miraflores')
"#;

const SQL_SEED_DEMO_PROFILE: &str = r#"
INSERT OR IGNORE INTO profiles (user_id, points, volunteer_hours, cleanups_attended)
VALUES ('usr-demo', 0, 0, 0)
"#;

pub async fn init(pool: &SqlitePool) -> sqlx::Result<()> {
    let statements = [
        SQL_CREATE_USERS,
        SQL_CREATE_CURRENT_USER,
        SQL_CREATE_PROFILES,
        SQL_CREATE_BADGES,
        SQL_CREATE_REGISTRATIONS,
        SQL_CREATE_REDEMPTIONS,
        SQL_CREATE_REFERRALS,
        SQL_CREATE_REFERRAL_CLAIMS,
        SQL_CREATE_REMINDERS,
        SQL_SEED_DEMO_USER,
        SQL_SEED_DEMO_PROFILE,
    ];

    for sql in statements {
        sqlx::query(sql).execute(pool).await?;
    }

    info!("🗄️  Esquema SQLite listo (usuario demo: voluntaria@ecoplaya.pe)");
    Ok(())
}
