#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc};
use salonslot_api::{app, ApiState};
use salonslot_core::{
    availability::SlotPolicy,
    clock::FixedClock,
    models::technician::{WeeklySchedule, WorkingDay, WorkingHours},
};
use salonslot_db::{
    models::{DbAppointment, DbService, DbTechnician},
    repository::MockSalonRepository,
};
use sqlx::types::Json;
use uuid::Uuid;

pub struct TestContext {
    pub salon_id: Uuid,
    pub repository: MockSalonRepository,
    pub now: DateTime<FixedOffset>,
}

impl TestContext {
    /// Monday 2025-05-05, 08:00 at +02:00.
    pub fn new() -> Self {
        Self {
            salon_id: Uuid::new_v4(),
            repository: MockSalonRepository::new(),
            now: local(8, 0),
        }
    }

    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.now = local(hour, minute);
        self
    }

    // Build a server over the real router with the mocked repository
    pub fn server(self) -> TestServer {
        let state = Arc::new(ApiState {
            repository: Arc::new(self.repository),
            clock: Arc::new(FixedClock(self.now)),
            slot_policy: SlotPolicy::default(),
        });
        TestServer::new(app(state)).expect("Failed to build test server")
    }
}

pub fn local(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 5, 5, hour, minute, 0)
        .unwrap()
}

pub fn local_utc(hour: u32, minute: u32) -> DateTime<Utc> {
    local(hour, minute).with_timezone(&Utc)
}

pub fn working(start: u32, end: u32) -> WorkingDay {
    WorkingDay::Working(
        WorkingHours::new(
            NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
        )
        .unwrap(),
    )
}

pub fn technician_row(salon_id: Uuid, name: &str, schedule: &WeeklySchedule) -> DbTechnician {
    DbTechnician {
        id: Uuid::new_v4(),
        salon_id,
        name: name.to_string(),
        weekly_schedule: Json(serde_json::to_value(schedule).unwrap()),
        created_at: Utc::now(),
    }
}

pub fn service_row(salon_id: Uuid, name: &str, duration_minutes: i64) -> DbService {
    DbService {
        id: Uuid::new_v4(),
        salon_id,
        name: name.to_string(),
        duration_minutes,
        price_cents: Some(2500),
        created_at: Utc::now(),
    }
}

pub fn appointment_row(
    salon_id: Uuid,
    technician_id: Option<Uuid>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        salon_id,
        technician_id,
        client_name: "Walk-in".to_string(),
        client_phone: "555-0199".to_string(),
        start_time: start,
        end_time: end,
        created_at: Utc::now(),
    }
}
