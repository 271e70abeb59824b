//! Patient records and their appointments.

use std::fmt;

use crate::treatment::Treatment;

/// A scheduled (date, time) pair owned by exactly one patient record.
///
/// Both fields are free text by convention (`YYYY-MM-DD`, `HH:MM`) and are
/// deliberately not validated; whatever was entered is what gets persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub date: String,
    pub time: String,
}

impl Appointment {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date: {}, Time: {}", self.date, self.time)
    }
}

/// A clinic client: demographics, one assigned treatment, and the
/// appointments the record owns.
///
/// The name doubles as the lookup key; there is no separate identifier, and
/// nothing guarantees uniqueness. Records are only ever mutated by appending
/// appointments.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub address: String,
    /// Single character, upper-cased at entry.
    pub gender: char,
    pub contact_number: String,
    pub email_address: String,
    pub treatment: Treatment,
    /// Snapshot of the catalogue price taken when the record was created.
    /// Later catalogue changes do not propagate to existing records.
    pub treatment_price: f64,
    pub appointments: Vec<Appointment>,
}

impl Patient {
    /// Creates a patient record with the treatment price derived from the
    /// catalogue at creation time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        gender: char,
        contact_number: impl Into<String>,
        email_address: impl Into<String>,
        treatment: Treatment,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
            gender,
            contact_number: contact_number.into(),
            email_address: email_address.into(),
            treatment,
            treatment_price: treatment.price(),
            appointments: Vec::new(),
        }
    }

    /// Appends an existing appointment to this record.
    pub fn add_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Constructs an appointment from raw date and time text and appends it.
    ///
    /// The date and time are kept verbatim; there is no format validation
    /// and no conflict check, so double-booking the same slot is permitted.
    pub fn schedule_appointment(&mut self, date: impl Into<String>, time: impl Into<String>) {
        self.add_appointment(Appointment::new(date, time));
    }
}

impl fmt::Display for Patient {
    /// One-line summary used by the patient listing. Contact number, email
    /// address, and price are intentionally not part of this line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Address: {}, Gender: {}, Treatment Disease: {}, Appointments: [",
            self.name, self.age, self.address, self.gender, self.treatment
        )?;
        for (i, appointment) in self.appointments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{appointment}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_patient(treatment: Treatment) -> Patient {
        Patient::new(
            "Jane Doe",
            34,
            "12 Harley Street",
            'F',
            "0713339121",
            "jane@example.com",
            treatment,
        )
    }

    #[test]
    fn price_is_snapshotted_from_the_catalogue_at_creation() {
        let patient = base_patient(Treatment::Acne);
        assert_eq!(patient.treatment_price, 2500.0);

        let patient = base_patient(Treatment::SkinCancer);
        assert_eq!(patient.treatment_price, 20000.0);
    }

    #[test]
    fn appointments_keep_insertion_order() {
        let mut patient = base_patient(Treatment::Eczema);
        patient.schedule_appointment("2026-03-01", "09:00");
        patient.schedule_appointment("2026-03-01", "09:00");
        patient.schedule_appointment("2026-04-15", "14:30");

        // Double-booking the identical slot is allowed.
        assert_eq!(patient.appointments.len(), 3);
        assert_eq!(patient.appointments[0], patient.appointments[1]);
        assert_eq!(patient.appointments[2].time, "14:30");
    }

    #[test]
    fn display_matches_the_listing_format() {
        let mut patient = base_patient(Treatment::Acne);
        assert_eq!(
            patient.to_string(),
            "Name: Jane Doe, Age: 34, Address: 12 Harley Street, Gender: F, \
             Treatment Disease: ACNE, Appointments: []"
        );

        patient.schedule_appointment("2026-03-01", "09:00");
        patient.schedule_appointment("2026-04-15", "14:30");
        assert_eq!(
            patient.to_string(),
            "Name: Jane Doe, Age: 34, Address: 12 Harley Street, Gender: F, \
             Treatment Disease: ACNE, Appointments: [Date: 2026-03-01, Time: 09:00, \
             Date: 2026-04-15, Time: 14:30]"
        );
    }
}
