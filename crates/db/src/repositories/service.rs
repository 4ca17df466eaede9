use crate::models::DbService;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    name: &str,
    duration_minutes: i64,
    price_cents: Option<i64>,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, salon_id, name, duration_minutes, price_cents, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, salon_id, name, duration_minutes, price_cents, created_at
        "#,
    )
    .bind(id)
    .bind(salon_id)
    .bind(name)
    .bind(duration_minutes)
    .bind(price_cents)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_services_by_salon_id(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, salon_id, name, duration_minutes, price_cents, created_at
        FROM services
        WHERE salon_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(salon_id)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn get_services_by_ids(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    service_ids: &[Uuid],
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, salon_id, name, duration_minutes, price_cents, created_at
        FROM services
        WHERE salon_id = $1 AND id = ANY($2)
        "#,
    )
    .bind(salon_id)
    .bind(service_ids)
    .fetch_all(pool)
    .await?;

    Ok(services)
}
