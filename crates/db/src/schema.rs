use eyre::{Result, WrapErr};
use sqlx::{Pool, Postgres};
use tracing::info;

const TABLES: &[(&str, &str)] = &[
    (
        "technicians",
        r#"
        CREATE TABLE IF NOT EXISTS technicians (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL,
            name VARCHAR(255) NOT NULL,
            weekly_schedule JSONB NOT NULL DEFAULT '{}'::jsonb,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "services",
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL,
            name VARCHAR(255) NOT NULL,
            duration_minutes BIGINT NOT NULL,
            price_cents BIGINT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    ),
    (
        "appointments",
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL,
            technician_id UUID NULL REFERENCES technicians(id),
            client_name VARCHAR(255) NOT NULL,
            client_phone VARCHAR(64) NOT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_technicians_salon_id ON technicians(salon_id)",
    "CREATE INDEX IF NOT EXISTS idx_services_salon_id ON services(salon_id)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_salon_id ON appointments(salon_id)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_technician_id ON appointments(technician_id)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_start_time ON appointments(start_time)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_end_time ON appointments(end_time)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for (table, ddl) in TABLES {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .wrap_err_with(|| format!("Failed to create table {}", table))?;
    }

    // One statement per query, prepared statements reject batches
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
