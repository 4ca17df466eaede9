mod test_utils;

use axum::http::StatusCode;
use chrono::Duration;
use pretty_assertions::assert_eq;
use salonslot_core::models::{appointment::Appointment, technician::WeeklySchedule};
use salonslot_db::models::{DbAppointment, DbService, DbTechnician, NewAppointment};
use serde_json::{json, Value};
use uuid::Uuid;

use test_utils::{appointment_row, local_utc, service_row, technician_row, working, TestContext};

struct Salon {
    ctx: TestContext,
    technicians: Vec<DbTechnician>,
    services: Vec<DbService>,
}

impl Salon {
    fn new(ctx: TestContext) -> Self {
        let salon_id = ctx.salon_id;
        Self {
            technicians: vec![
                technician_row(salon_id, "Ana", &WeeklySchedule::every_day(working(9, 18))),
                technician_row(salon_id, "Bich", &WeeklySchedule::every_day(working(9, 18))),
            ],
            services: vec![
                service_row(salon_id, "Pedicure", 50),
                service_row(salon_id, "Paraffin", 10),
            ],
            ctx,
        }
    }

    fn url(&self) -> String {
        format!("/api/salons/{}/appointments", self.ctx.salon_id)
    }

    fn body(&self, technician_id: Option<Uuid>, start: chrono::DateTime<chrono::Utc>) -> Value {
        json!({
            "service_ids": self.services.iter().map(|s| s.id).collect::<Vec<_>>(),
            "technician_id": technician_id,
            "client_name": " Mai ",
            "client_phone": "555-0100",
            "start_time": start,
        })
    }

    /// Wires catalog and appointment lookups.
    fn expect_snapshot(&mut self, appointments: Vec<DbAppointment>) {
        let technicians = self.technicians.clone();
        let services = self.services.clone();
        self.ctx
            .repository
            .expect_get_technicians()
            .returning(move |_| Ok(technicians.clone()));
        self.ctx
            .repository
            .expect_get_services_by_ids()
            .returning(move |_, _| Ok(services.clone()));
        self.ctx
            .repository
            .expect_get_appointments_between()
            .returning(move |_, _, _| Ok(appointments.clone()));
    }
}

fn stored(appointment: &NewAppointment) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        salon_id: appointment.salon_id,
        technician_id: appointment.technician_id,
        client_name: appointment.client_name.clone(),
        client_phone: appointment.client_phone.clone(),
        start_time: appointment.start_time,
        end_time: appointment.end_time,
        created_at: chrono::Utc::now(),
    }
}

#[test_log::test(tokio::test)]
async fn test_create_appointment_with_technician() {
    let mut salon = Salon::new(TestContext::new());
    let ana_id = salon.technicians[0].id;
    let salon_id = salon.ctx.salon_id;
    salon.expect_snapshot(vec![]);
    salon
        .ctx
        .repository
        .expect_create_appointment()
        .withf(move |new| {
            new.salon_id == salon_id
                && new.technician_id == Some(ana_id)
                && new.client_name == "Mai"
                && new.end_time - new.start_time == Duration::minutes(60)
        })
        .times(1)
        .returning(|new| Ok(stored(new)));

    let url = salon.url();
    let body = salon.body(Some(ana_id), local_utc(11, 0));
    let response = salon.ctx.server().post(&url).json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created: Appointment = response.json();
    assert_eq!(created.technician_id, Some(ana_id));
    assert_eq!(created.start_time, local_utc(11, 0));
    assert_eq!(created.end_time, local_utc(12, 0));
}

#[tokio::test]
async fn test_unassigned_booking_is_stored_without_technician() {
    let mut salon = Salon::new(TestContext::new());
    let ana_id = salon.technicians[0].id;
    let salon_id = salon.ctx.salon_id;
    // Ana is busy, Bich can take it
    salon.expect_snapshot(vec![appointment_row(
        salon_id,
        Some(ana_id),
        local_utc(10, 0),
        local_utc(12, 0),
    )]);
    salon
        .ctx
        .repository
        .expect_create_appointment()
        .withf(|new| new.technician_id.is_none())
        .times(1)
        .returning(|new| Ok(stored(new)));

    let url = salon.url();
    let body = salon.body(None, local_utc(11, 0));
    let response = salon.ctx.server().post(&url).json(&body).await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_taken_time_is_a_conflict() {
    let mut salon = Salon::new(TestContext::new());
    let ana_id = salon.technicians[0].id;
    let salon_id = salon.ctx.salon_id;
    salon.expect_snapshot(vec![appointment_row(
        salon_id,
        Some(ana_id),
        local_utc(10, 0),
        local_utc(11, 0),
    )]);
    salon.ctx.repository.expect_create_appointment().never();

    let url = salon.url();
    // Inside the 10 minute cleanup buffer after Ana's appointment
    let body = salon.body(Some(ana_id), local_utc(11, 5));
    let response = salon.ctx.server().post(&url).json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    let error: Value = response.json();
    assert!(error["error"].as_str().unwrap().contains("no longer available"));
}

#[tokio::test]
async fn test_booking_in_the_past_is_rejected() {
    let mut salon = Salon::new(TestContext::new().at(14, 0));
    let ana_id = salon.technicians[0].id;
    salon.expect_snapshot(vec![]);
    salon.ctx.repository.expect_create_appointment().never();

    let url = salon.url();
    let body = salon.body(Some(ana_id), local_utc(13, 0));
    let response = salon.ctx.server().post(&url).json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["error"].as_str().unwrap().contains("in the past"));
}

#[tokio::test]
async fn test_booking_past_closing_is_rejected() {
    let mut salon = Salon::new(TestContext::new());
    salon.expect_snapshot(vec![]);
    salon.ctx.repository.expect_create_appointment().never();

    let url = salon.url();
    let body = salon.body(None, local_utc(17, 30));
    let response = salon.ctx.server().post(&url).json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["error"].as_str().unwrap().contains("outside working hours"));
}

#[tokio::test]
async fn test_booking_unknown_technician() {
    let mut salon = Salon::new(TestContext::new());
    salon.expect_snapshot(vec![]);
    salon.ctx.repository.expect_create_appointment().never();

    let url = salon.url();
    let body = salon.body(Some(Uuid::new_v4()), local_utc(11, 0));
    let response = salon.ctx.server().post(&url).json(&body).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_requires_client_details() {
    let mut salon = Salon::new(TestContext::new());
    salon.ctx.repository.expect_get_technicians().never();
    salon.ctx.repository.expect_create_appointment().never();

    let url = salon.url();
    let mut body = salon.body(None, local_utc(11, 0));
    body["client_phone"] = json!("");
    let response = salon.ctx.server().post(&url).json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_today() {
    let mut ctx = TestContext::new();
    let salon_id = ctx.salon_id;
    let rows = vec![
        appointment_row(salon_id, None, local_utc(9, 0), local_utc(9, 30)),
        appointment_row(salon_id, Some(Uuid::new_v4()), local_utc(13, 0), local_utc(14, 0)),
    ];
    let expected: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    ctx.repository
        .expect_get_appointments_between()
        .withf(move |id, from, to| *id == salon_id && *from == local_utc(0, 0) && *to == local_utc(0, 0) + Duration::days(1))
        .returning(move |_, _, _| Ok(rows.clone()));

    let response = ctx.server().get(&format!("/api/salons/{}/appointments/today", salon_id)).await;

    response.assert_status_ok();
    let appointments: Vec<Appointment> = response.json();
    assert_eq!(appointments.iter().map(|a| a.id).collect::<Vec<_>>(), expected);
}
