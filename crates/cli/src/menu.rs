//! The numbered menu loop and its handlers.
//!
//! The banner, prompts, and confirmation lines form the console protocol and
//! are kept stable so operators and transcripts keep working across versions.

use chrono::{NaiveDate, NaiveTime};

use clinic_core::{AdminSession, Clinic, Patient, RecordStore, Treatment};

use crate::prompt;

/// Runs the menu loop until the operator chooses save-and-exit.
pub fn run(
    clinic: &mut Clinic,
    session: &mut AdminSession,
    store: &RecordStore,
) -> anyhow::Result<()> {
    loop {
        display_menu();
        let choice = prompt::read_u32("Enter your choice: ")?;

        match choice {
            1 => admin_login(session)?,
            2 => add_patient(clinic)?,
            3 => {
                if session.require_admin().is_ok() {
                    schedule_appointment(clinic)?;
                } else {
                    println!("\nAdmin login required to schedule appointments.\n");
                }
            }
            4 => view_all_patients(clinic, session),
            5 => {
                match store.save(clinic) {
                    Ok(()) => println!("\nData saved successfully."),
                    Err(err) => tracing::error!("failed to save records: {}", err),
                }
                println!("\nData saved. Exiting Skin Clinic Records Management. Goodbye!\n");
                return Ok(());
            }
            6 => {
                if session.require_admin().is_ok() {
                    display_all_appointments(clinic);
                } else {
                    println!("\nAdmin login required to view all appointments.\n");
                }
            }
            _ => println!("\nInvalid choice. Please enter a valid option.\n"),
        }
    }
}

fn display_menu() {
    println!("=====================================");
    println!("    DERMATIQUE LOUNGE SKIN CLINIC");
    println!("=====================================");
    println!("1. Admin Login");
    println!("2. Add Patient");
    println!("3. Schedule Appointment (Admin Only)");
    println!("4. View All Patients (Admin only)");
    println!("5. Save and Exit");
    println!("6. View All Appointments (Admin Only)");
}

fn admin_login(session: &mut AdminSession) -> anyhow::Result<()> {
    let username = prompt::read_line("\nEnter admin username: ")?;
    let password = prompt::read_password("Enter admin password: ")?;

    if session.login(&username, &password) {
        println!("\nAdmin login successful!\n");
    } else {
        println!("\nInvalid credentials. Admin login failed.\n");
    }
    Ok(())
}

fn add_patient(clinic: &mut Clinic) -> anyhow::Result<()> {
    let name = prompt::read_line("Enter patient name: ")?;
    let age = prompt::read_u32("Enter patient age: ")?;
    let address = prompt::read_line("Enter patient address: ")?;
    let contact_number = prompt::read_line("Enter patient contact number: ")?;
    let email_address = prompt::read_line("Enter patient email address: ")?;
    let gender = read_gender()?;
    let treatment = choose_treatment()?;

    clinic.add_patient(Patient::new(
        name,
        age,
        address,
        gender,
        contact_number,
        email_address,
        treatment,
    ));

    println!("\nPatient added successfully!\n");
    Ok(())
}

fn read_gender() -> anyhow::Result<char> {
    loop {
        let line = prompt::read_line("Select gender (M/F): ")?;
        match line.chars().next() {
            Some(first) => return Ok(first.to_ascii_uppercase()),
            None => println!("Please enter a valid option."),
        }
    }
}

/// Numbered treatment selection from the fixed catalogue.
fn choose_treatment() -> anyhow::Result<Treatment> {
    println!("\nSelect treatment disease:");
    for (index, treatment) in Treatment::ALL.iter().enumerate() {
        println!("[{}] {}", index + 1, treatment);
    }

    loop {
        let choice = prompt::read_u32("Enter your choice: ")? as usize;
        if (1..=Treatment::ALL.len()).contains(&choice) {
            return Ok(Treatment::ALL[choice - 1]);
        }
        println!("\nInvalid choice. Please enter a valid option.\n");
    }
}

fn schedule_appointment(clinic: &mut Clinic) -> anyhow::Result<()> {
    let name = prompt::read_line("\nEnter patient name for appointment: ")?;

    let Some(patient) = clinic.find_by_name_mut(&name) else {
        println!("\nPatient not found.\n");
        return Ok(());
    };

    let date = prompt::read_line("Enter appointment date (YYYY-MM-DD): ")?;
    let time = prompt::read_line("Enter appointment time (HH:MM): ")?;

    // The slot is stored as raw text; the parse is advisory only.
    if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        tracing::warn!("appointment date does not look like YYYY-MM-DD: {}", date);
    }
    if NaiveTime::parse_from_str(&time, "%H:%M").is_err() {
        tracing::warn!("appointment time does not look like HH:MM: {}", time);
    }

    patient.schedule_appointment(date, time);
    println!("\nAppointment scheduled successfully!\n");
    Ok(())
}

fn view_all_patients(clinic: &Clinic, session: &AdminSession) {
    if session.require_admin().is_ok() {
        println!("\nAll Patients:");
        for patient in clinic.patients() {
            println!("{patient}");
        }
    } else {
        println!("\nAdmin login required to view all patients.\n");
    }
}

fn display_all_appointments(clinic: &Clinic) {
    let appointments: Vec<_> = clinic.all_appointments().collect();

    if appointments.is_empty() {
        println!("\nNo appointments scheduled.\n");
        return;
    }

    println!("\nAll Scheduled Appointments:");
    for appointment in appointments {
        if let Some(patient) = clinic.find_patient_by_appointment(appointment) {
            println!(
                "Patient: {}, Age: {}, Treatment: {}, {}",
                patient.name, patient.age, patient.treatment, appointment
            );
        }
    }
}
