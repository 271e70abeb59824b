//! The in-memory patient registry.
//!
//! One `Clinic` instance exists per process run. It owns every patient record
//! in arrival order, is rehydrated from the records file at startup, and is
//! flushed back at exit. All lookups key on the patient name; the model has
//! no separate identifier, so duplicate names are ambiguous and every search
//! settles for the first match.

use crate::patient::{Appointment, Patient};

/// The collection of all patient records for the current run.
#[derive(Debug, Default)]
pub struct Clinic {
    patients: Vec<Patient>,
}

impl Clinic {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a patient record. There is no uniqueness check; adding a
    /// second record under an existing name always succeeds.
    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    /// All patient records in arrival order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Finds the first patient whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Patient> {
        let wanted = name.to_lowercase();
        self.patients.iter().find(|p| p.name.to_lowercase() == wanted)
    }

    /// Mutable variant of [`find_by_name`](Self::find_by_name), used by the
    /// scheduling flow to append to the found record.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Patient> {
        let wanted = name.to_lowercase();
        self.patients
            .iter_mut()
            .find(|p| p.name.to_lowercase() == wanted)
    }

    /// Every appointment across the registry, flattened: patient arrival
    /// order first, then each patient's own appointment order.
    pub fn all_appointments(&self) -> impl Iterator<Item = &Appointment> {
        self.patients.iter().flat_map(|p| p.appointments.iter())
    }

    /// Reverse lookup from an appointment to its owning patient.
    ///
    /// Linear scan over every patient's appointment list; fine at clinic
    /// scale. Returns `None` when no record contains the appointment.
    pub fn find_patient_by_appointment(&self, appointment: &Appointment) -> Option<&Patient> {
        self.patients
            .iter()
            .find(|p| p.appointments.contains(appointment))
    }
}
