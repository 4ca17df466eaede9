use crate::models::{DbAppointment, NewAppointment};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, salon_id={}, technician_id={:?}, start={}",
        id,
        appointment.salon_id,
        appointment.technician_id,
        appointment.start_time
    );

    let created = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments
            (id, salon_id, technician_id, client_name, client_phone, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, salon_id, technician_id, client_name, client_phone, start_time, end_time, created_at
        "#,
    )
    .bind(id)
    .bind(appointment.salon_id)
    .bind(appointment.technician_id)
    .bind(&appointment.client_name)
    .bind(&appointment.client_phone)
    .bind(appointment.start_time)
    .bind(appointment.end_time)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Appointments of a salon that overlap `[from, to)`, earliest first.
pub async fn get_appointments_between(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, salon_id, technician_id, client_name, client_phone, start_time, end_time, created_at
        FROM appointments
        WHERE salon_id = $1 AND start_time < $3 AND end_time > $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(salon_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}
