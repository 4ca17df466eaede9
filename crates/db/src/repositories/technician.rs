use crate::models::DbTechnician;
use chrono::Utc;
use eyre::Result;
use salonslot_core::models::technician::WeeklySchedule;
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

pub async fn create_technician(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    name: &str,
    weekly_schedule: &WeeklySchedule,
) -> Result<DbTechnician> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating technician: id={}, salon_id={}, name={}", id, salon_id, name);

    let technician = sqlx::query_as::<_, DbTechnician>(
        r#"
        INSERT INTO technicians (id, salon_id, name, weekly_schedule, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, salon_id, name, weekly_schedule, created_at
        "#,
    )
    .bind(id)
    .bind(salon_id)
    .bind(name)
    .bind(Json(weekly_schedule))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(technician)
}

pub async fn get_technicians_by_salon_id(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
) -> Result<Vec<DbTechnician>> {
    let technicians = sqlx::query_as::<_, DbTechnician>(
        r#"
        SELECT id, salon_id, name, weekly_schedule, created_at
        FROM technicians
        WHERE salon_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(salon_id)
    .fetch_all(pool)
    .await?;

    Ok(technicians)
}
