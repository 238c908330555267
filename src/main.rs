mod analysis;
mod booking;
mod display;
mod sample;
mod web;

use chrono::Local;
use log::info;

use booking::BookingManager;
use display::{print_availability, print_overbooking, print_slot_summary, write_bookings_csv};
use sample::generate_sample_bookings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args.get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        info!("Starting booking dashboard on port {}", port);
        info!("Access the site at http://localhost:{}", port);

        web::start_server(port).await?;
        return Ok(());
    }

    // CLI mode: generate sample data and print a one-shot report
    println!("Generating sample booking data...");
    let mut manager = BookingManager::new();
    manager.set_data(generate_sample_bookings());

    let store = manager.store()?;
    println!("Loaded {} sample bookings", store.len());

    print_availability(store, Local::now().date_naive());
    print_slot_summary(&manager.summarize_by_slot()?);
    print_overbooking(&manager.analyze_overbooking()?);

    let csv_path = "bookings.csv";
    write_bookings_csv(manager.store()?, csv_path)?;
    println!("\nBookings saved to {}", csv_path);

    Ok(())
}
