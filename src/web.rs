use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use actix_files::Files;
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::booking::slot_utils::{is_valid_slot, DEFAULT_TIME_SLOTS};
use crate::booking::{BookingManager, Decision, MAX_SLOTS};
use crate::sample::generate_sample_bookings;

/// Shared dashboard state. The core is single-user by contract, so one
/// manager behind a mutex serializes all admissions for the process.
pub struct AppState {
    pub manager: Mutex<BookingManager>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    patient_id: String,
    date: String,
    slot: String,
    risk_score: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    time: String,
    booked: usize,
    available: usize,
    patients: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    date: NaiveDate,
    slots: Vec<SlotAvailability>,
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({"success": false, "error": message}))
}

fn store_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(serde_json::json!({"error": "Booking store not initialized"}))
}

// Availability grid for one date (the calendar view)
async fn get_availability(
    date: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let date = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return Ok(bad_request("Invalid date, expected YYYY-MM-DD")),
    };

    let manager = state.manager.lock().unwrap();
    let store = match manager.store() {
        Ok(store) => store,
        Err(_) => return Ok(store_error()),
    };

    let slots: Vec<SlotAvailability> = DEFAULT_TIME_SLOTS
        .iter()
        .map(|&slot| {
            let occupants = store.occupants(date, slot);
            SlotAvailability {
                time: slot.to_string(),
                booked: occupants.len(),
                available: MAX_SLOTS.saturating_sub(occupants.len()),
                patients: occupants.iter().map(|b| b.patient_id.clone()).collect(),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(AvailabilityResponse { date, slots }))
}

// New booking endpoint; runs the admission policy
async fn book_appointment(
    req: web::Json<BookingRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.patient_id.trim().is_empty() {
        return Ok(bad_request("Patient ID is required"));
    }
    if !is_valid_slot(&req.slot) {
        return Ok(bad_request("Unknown time slot"));
    }
    if req.risk_score > 100 {
        return Ok(bad_request("Risk score must be between 0 and 100"));
    }
    let date = match NaiveDate::parse_from_str(&req.date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return Ok(bad_request("Invalid date, expected YYYY-MM-DD")),
    };

    let mut manager = state.manager.lock().unwrap();
    match manager.add_booking(req.patient_id.trim(), date, &req.slot, req.risk_score) {
        Ok(Decision::Accepted(_)) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": format!("Appointment booked for {} at {}", req.patient_id.trim(), req.slot)
        }))),
        Ok(Decision::Rejected(reason)) => Ok(HttpResponse::Conflict().json(serde_json::json!({
            "success": false,
            "error": reason.message()
        }))),
        Err(_) => Ok(store_error()),
    }
}

// Cross-date slot load (patients per time slot)
async fn get_slot_analysis(state: web::Data<AppState>) -> Result<HttpResponse> {
    let manager = state.manager.lock().unwrap();
    match manager.summarize_by_slot() {
        Ok(summaries) => Ok(HttpResponse::Ok().json(summaries)),
        Err(_) => Ok(store_error()),
    }
}

// Slots holding two or more high-risk patients
async fn get_overbooking(state: web::Data<AppState>) -> Result<HttpResponse> {
    let manager = state.manager.lock().unwrap();
    match manager.analyze_overbooking() {
        Ok(overbooked) => Ok(HttpResponse::Ok().json(overbooked)),
        Err(_) => Ok(store_error()),
    }
}

// Histogram of risk scores across all bookings
async fn get_risk_distribution(state: web::Data<AppState>) -> Result<HttpResponse> {
    let manager = state.manager.lock().unwrap();
    match manager.risk_distribution() {
        Ok(buckets) => Ok(HttpResponse::Ok().json(buckets)),
        Err(_) => Ok(store_error()),
    }
}

// Advisory slot suggestions for a candidate risk score
async fn get_recommendations(
    risk: web::Path<u8>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let risk = risk.into_inner();
    if risk > 100 {
        return Ok(bad_request("Risk score must be between 0 and 100"));
    }
    let manager = state.manager.lock().unwrap();
    match manager.recommend(risk) {
        Ok(loads) => Ok(HttpResponse::Ok().json(loads)),
        Err(_) => Ok(store_error()),
    }
}

// All bookings, sorted for the table view
async fn get_bookings(state: web::Data<AppState>) -> Result<HttpResponse> {
    let manager = state.manager.lock().unwrap();
    let store = match manager.store() {
        Ok(store) => store,
        Err(_) => return Ok(store_error()),
    };
    let mut bookings = store.records.clone();
    bookings.sort_by(|a, b| (a.date, &a.slot).cmp(&(b.date, &b.slot)));
    Ok(HttpResponse::Ok().json(bookings))
}

// Replaces the store with freshly generated sample data
async fn reseed(state: web::Data<AppState>) -> Result<HttpResponse> {
    let store = generate_sample_bookings();
    let count = store.len();
    state.manager.lock().unwrap().set_data(store);
    info!("Reseeded store with {} sample bookings", count);
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "count": count})))
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    let mut manager = BookingManager::new();
    manager.set_data(generate_sample_bookings());
    let app_state = web::Data::new(AppState {
        manager: Mutex::new(manager),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/api/book", web::post().to(book_appointment))
            .route("/api/bookings", web::get().to(get_bookings))
            .route("/api/analysis/slots", web::get().to(get_slot_analysis))
            .route("/api/analysis/overbooking", web::get().to(get_overbooking))
            .route("/api/analysis/risk-distribution", web::get().to(get_risk_distribution))
            .route("/api/reseed", web::post().to(reseed))
            .service(web::resource("/api/availability/{date}").route(web::get().to(get_availability)))
            .service(web::resource("/api/recommend/{risk}").route(web::get().to(get_recommendations)))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
