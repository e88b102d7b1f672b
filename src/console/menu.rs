//! Interactive planning menu
//!
//! Presentation glue over the services: prompts collect validated input,
//! core errors are rendered with their structured detail, and every report
//! comes straight from the entities' own renderers.

use chrono::Duration;

use crate::console::input;
use crate::display::report::header;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{
    Accommodation, Attraction, City, Document, DocumentType, FixedPrices, Money,
    RandomPrices, StaticExchangeRates, TransportOption, Trip, TripType, User, VisaApplication,
    VisaTag,
};
use crate::services::{TripPlannerService, VisaService};

const MENU_WIDTH: usize = 47;

/// Run the interactive session until the user exits
pub fn run(user: &mut User) {
    let planner = TripPlannerService::new();
    let visa_service = VisaService::new();

    loop {
        println!("\n{}", header("WAYFARER TRAVEL PLANNER", MENU_WIDTH));
        println!("1. Plan new trip");
        println!("2. Apply for visa");
        println!("3. Show trips");
        println!("4. Show budget report");
        println!("5. Show profile");
        println!("0. Exit");

        match input::read_int_in_range("Your choice", 0, 5) {
            1 => plan_trip(user, &planner),
            2 => apply_for_visa(user, &visa_service),
            3 => show_trips(user),
            4 => show_budget(user),
            5 => println!("\n{}", user.summary()),
            _ => {
                println!("Goodbye!");
                return;
            }
        }
    }
}

fn plan_trip(user: &mut User, planner: &TripPlannerService) {
    println!("\n{}", header("NEW TRIP PLANNING", MENU_WIDTH));

    let Some(trip_type) = select_trip_type() else {
        return;
    };

    if let Err(err) = planner.ensure_visa_approved(user, trip_type) {
        explain_visa_refusal(&err);
        return;
    }
    println!("{}: visa requirement satisfied.", trip_type);

    let name = input::read_string("Trip name");
    let budget = input::read_positive_amount("Total budget");
    let start_date = input::read_future_date("Start date");
    let end_date = input::read_future_date("End date");

    if let Err(err) = TripPlannerService::validate_date_range(start_date, end_date) {
        println!("Error: {}", err);
        return;
    }

    let nights = (end_date - start_date).num_days();
    println!("Trip duration: {} days", nights + 1);

    let Some(transport) = select_transport(trip_type) else {
        return;
    };
    let Some(accommodation) = select_accommodation(nights as u32) else {
        return;
    };

    match planner.plan_trip(
        user,
        &name,
        budget,
        start_date,
        end_date,
        &transport,
        &accommodation,
    ) {
        Ok(id) => {
            println!("Trip plan created!");
            if input::read_yes_no("Would you like to add sightseeing activities?") {
                if let Some(trip) = user.trip_mut(id) {
                    add_sightseeing_loop(trip, planner, start_date);
                }
            }
            if let Some(trip) = user.trip(id) {
                println!("\n{}", trip.export_to_text());
            }
        }
        Err(err) => println!("Error: {}", err),
    }
}

fn select_trip_type() -> Option<TripType> {
    println!("\nTRIP TYPE SELECTION");
    println!("1. Domestic Trip");
    println!("2. Europe Trip (Schengen visa required)");
    println!("3. USA Trip (US visa required)");
    println!("0. Cancel");

    match input::read_int_in_range("Your choice", 0, 3) {
        1 => Some(TripType::Domestic),
        2 => Some(TripType::Europe),
        3 => Some(TripType::Usa),
        _ => None,
    }
}

fn explain_visa_refusal(err: &PlannerError) {
    println!("\nError: {}", err);
    if let PlannerError::VisaNotApproved(tag) = err {
        println!("What you need to do:");
        println!("  1. Select 'Apply for visa' from the main menu");
        match tag {
            VisaTag::Schengen => {
                println!("  2. Enter one of the Schengen country codes (e.g. DE, FR, IT)")
            }
            VisaTag::Us => println!("  2. Enter 'US' as the country code"),
        }
        println!("  3. Upload the required documents");
        println!("  4. Plan your trip after the visa is approved");
    }
}

fn select_transport(trip_type: TripType) -> Option<TransportOption> {
    println!("\nTRANSPORTATION SELECTION");
    let mut prices = RandomPrices;

    let choice = if trip_type == TripType::Domestic {
        println!("1. Flight");
        println!("2. Bus");
        println!("3. Train");
        input::read_int_in_range("Your choice", 1, 3)
    } else {
        println!("Flight is the only option for international trips.");
        1
    };

    let from = input::read_string("Departure city");
    let to = input::read_string("Arrival city");

    let transport = match choice {
        1 => TransportOption::flight_at_market(from, to, &mut prices),
        2 => TransportOption::bus_at_market(from, to, &mut prices),
        _ => TransportOption::train_at_market(from, to, &mut prices),
    };

    match transport {
        Ok(transport) => {
            println!("{}", transport);
            Some(transport)
        }
        Err(err) => {
            println!("Error: {}", err);
            None
        }
    }
}

fn select_accommodation(nights: u32) -> Option<Accommodation> {
    println!("\nACCOMMODATION SELECTION ({} nights)", nights);
    println!("1. Hotel (breakfast included)");
    println!("2. Apartment (with kitchen)");
    println!("3. Hostel (budget-friendly)");
    let mut prices = RandomPrices;

    let accommodation = match input::read_int_in_range("Your choice", 1, 3) {
        1 => Accommodation::hotel_at_market(nights, &mut prices),
        2 => Accommodation::apartment_at_market(nights, &mut prices),
        _ => Accommodation::hostel_at_market(nights, &mut prices),
    };

    match accommodation {
        Ok(accommodation) => {
            println!("{}", accommodation);
            Some(accommodation)
        }
        Err(err) => {
            println!("Error: {}", err);
            None
        }
    }
}

fn add_sightseeing_loop(trip: &mut Trip, planner: &TripPlannerService, start_date: chrono::NaiveDate) {
    loop {
        let name = input::read_string("Place name (e.g. Eiffel Tower)");
        let description = input::read_string("Short description");
        let fee = input::read_amount("Entry fee (0 if free)");
        let hours = input::read_int_in_range("Estimated visit duration (hours)", 1, 8) as u32;

        let attraction = Attraction::new(name, description, fee, hours);
        let day = input::read_int_in_range("Which day?", 1, trip.duration_days());
        let date = start_date + Duration::days(day - 1);
        let start = date.and_hms_opt(10, 0, 0).expect("fixed visit hour is valid");

        match planner.add_sightseeing(trip, &attraction, start, hours) {
            Ok(()) => println!(
                "Activity added: {} | Remaining: {}",
                attraction.name(),
                trip.budget().remaining()
            ),
            Err(err) => println!("Error: {}", err),
        }

        if !input::read_yes_no("Would you like to add another activity?") {
            return;
        }
    }
}

fn apply_for_visa(user: &mut User, visa_service: &VisaService) {
    println!("\n{}", header("VISA APPLICATION", MENU_WIDTH));

    if !user.visa_applications().is_empty() {
        println!("Your current applications:");
        for application in user.visa_applications() {
            println!(
                "  {} - {}",
                application.kind().type_name(),
                application.status()
            );
        }
    }

    println!("\nSupported country codes:");
    println!("  USA: US");
    let schengen: Vec<&str> = visa_service
        .supported_schengen_countries()
        .iter()
        .map(|(code, _)| *code)
        .collect();
    println!("  Schengen: {}", schengen.join(", "));

    let country = input::read_string("Country code (e.g. US, DE, FR)");
    let applicant = input::read_string("Applicant's full name");

    let mut application = match visa_service.create_application(&country, &applicant) {
        Ok(application) => application,
        Err(err) => {
            println!("Error: {}", err);
            return;
        }
    };

    println!("\n{}", application.export_to_text(&StaticExchangeRates));
    println!("\nDOCUMENT UPLOAD");

    if let Err(err) = upload_documents(&mut application) {
        println!("Error: {}", err);
        return;
    }

    println!("\n{}", header("APPLICATION RESULT", MENU_WIDTH));
    match visa_service.validate_and_approve(&mut application) {
        Ok(()) => {
            let rates = StaticExchangeRates;
            println!("Your application is complete and APPROVED!");
            println!(
                "Visa fee: {}",
                rates.format_with_conversion(application.kind().fee(&rates))
            );
            user.add_visa_application(application);
        }
        Err(err) => {
            println!("APPLICATION INCOMPLETE: {}", err);
            let missing = application.missing_documents();
            if !missing.is_empty() {
                println!("Missing documents:");
                for doc_type in missing {
                    println!("  • {}", doc_type);
                }
            }
            println!("Upload all documents and try again.");
        }
    }
}

fn upload_documents(application: &mut VisaApplication) -> PlannerResult<()> {
    if input::read_yes_no("Upload passport") {
        let number = input::read_string("Passport number");
        application.add_document(Document::new(DocumentType::Passport, number)?);
        println!("Passport added.");
    }
    if input::read_yes_no("Upload biometric photo") {
        application.add_document(Document::new(DocumentType::Photo, "photo.jpg")?);
        println!("Photo added.");
    }
    if input::read_yes_no("Upload bank statement") {
        application.add_document(Document::new(DocumentType::BankStatement, "bank_statement.pdf")?);
        println!("Bank statement added.");
    }
    match application.kind().tag() {
        VisaTag::Us => {
            if input::read_yes_no("Upload DS-160 form") {
                application.add_document(Document::new(DocumentType::Ds160Form, "DS160-CONFIRMED")?);
                println!("DS-160 form added.");
            }
        }
        VisaTag::Schengen => {
            if input::read_yes_no("Upload travel insurance") {
                application
                    .add_document(Document::new(DocumentType::Insurance, "travel_insurance.pdf")?);
                println!("Insurance added.");
            }
        }
    }
    Ok(())
}

fn show_trips(user: &User) {
    if user.trips().is_empty() {
        println!("\nNo trips planned yet.");
        return;
    }
    for trip in user.trips() {
        println!("\n{}", trip.export_to_text());
    }
}

fn show_budget(user: &User) {
    if user.trips().is_empty() {
        println!("\nNo trips planned yet.");
        return;
    }
    let name = input::read_string("Trip name");
    match user.trip_by_name(&name) {
        Some(trip) => println!("\n{}", trip.budget().report()),
        None => println!("No trip named '{}'.", name),
    }
}

/// Scripted non-interactive walkthrough used by `wayfarer demo`
///
/// Deterministic market prices; exercises the visa workflow, the planning
/// admission flow, and sightseeing additions end to end.
pub fn run_demo(user: &mut User, budget: Money) -> PlannerResult<()> {
    let planner = TripPlannerService::new();
    let visa_service = VisaService::new();
    let mut prices = FixedPrices;

    println!("{}", header("WAYFARER DEMO", MENU_WIDTH));

    // Visa first: a Europe trip will not pass the gate without it
    let mut application = visa_service.create_application("FR", user.name())?;
    for (doc_type, content) in [
        (DocumentType::Passport, "U12345678"),
        (DocumentType::Photo, "photo.jpg"),
        (DocumentType::Insurance, "travel_insurance.pdf"),
        (DocumentType::BankStatement, "bank_statement.pdf"),
    ] {
        application.add_document(Document::new(doc_type, content)?);
    }
    visa_service.validate_and_approve(&mut application)?;
    println!("\n{}", application.export_to_text(&StaticExchangeRates));
    user.add_visa_application(application);

    planner.ensure_visa_approved(user, TripType::Europe)?;

    let start_date = chrono::Local::now().date_naive() + Duration::days(30);
    let end_date = start_date + Duration::days(3);
    let transport = TransportOption::flight_at_market("Istanbul", "Paris", &mut prices)?;
    let accommodation = Accommodation::hotel_at_market(3, &mut prices)?;

    let id = planner.plan_trip(
        user,
        "Paris Getaway",
        budget,
        start_date,
        end_date,
        &transport,
        &accommodation,
    )?;

    let paris = City::paris();
    let trip = user.trip_mut(id).expect("trip was registered above");
    for attraction in paris.attractions() {
        let start = (start_date + Duration::days(1))
            .and_hms_opt(10, 0, 0)
            .expect("fixed visit hour is valid");
        planner.add_sightseeing(trip, attraction, start, attraction.estimated_hours())?;
    }
    planner.set_destination(trip, paris.clone());
    planner.confirm_trip(trip);

    let trip = user.trip(id).expect("trip was registered above");
    println!("\n{}", trip.export_to_text());
    println!("\n{}", trip.budget().report());
    println!("\n{}", user.summary());
    Ok(())
}
