//! Flat-file persistence for the clinic registry.
//!
//! The records file is plain comma-delimited text: one header row, then one
//! row per appointment with the owning patient's fields repeated on every
//! row. Patients without appointments produce no rows, so they do not
//! survive a save/reload cycle. Reloading reconstructs patient records by
//! grouping rows back together, either by adjacency (the legacy behaviour)
//! or by name (see [`RowGrouping`]).
//!
//! Free-text fields are written verbatim with no quoting or escaping. An
//! embedded delimiter in a name, address, contact number, or email breaks
//! column alignment for that row on reload; the store warns when it writes
//! such a row and skips it when it reads one back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CoreConfig, RowGrouping};
use crate::constants::{RECORDS_HEADER, RECORD_COLUMNS, RECORD_DELIMITER};
use crate::error::{ClinicError, ClinicResult};
use crate::patient::Patient;
use crate::registry::Clinic;
use crate::treatment::Treatment;

/// Reads and writes the clinic records file.
///
/// A store is cheap to construct and holds no open file handle; each call
/// to [`save`](RecordStore::save) or [`load`](RecordStore::load) performs
/// one whole-file operation.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    grouping: RowGrouping,
}

/// One parsed data row of the records file.
struct RecordRow {
    name: String,
    age: u32,
    address: String,
    gender: char,
    contact_number: String,
    email_address: String,
    treatment: Treatment,
    date: String,
    time: String,
}

impl RecordRow {
    /// Builds a fresh patient record from this row, carrying its
    /// appointment. The price comes from the treatment catalogue, never
    /// from the file.
    fn into_patient(self) -> Patient {
        let mut patient = Patient::new(
            self.name,
            self.age,
            self.address,
            self.gender,
            self.contact_number,
            self.email_address,
            self.treatment,
        );
        patient.schedule_appointment(self.date, self.time);
        patient
    }
}

impl RecordStore {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            path: config.records_path().to_path_buf(),
            grouping: config.grouping(),
        }
    }

    /// Path of the records file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialises the whole registry to the records file, replacing any
    /// previous contents.
    ///
    /// Patients without appointments are dropped from the file with a
    /// warning. Field text is written verbatim, so a row whose fields carry
    /// embedded delimiters is warned about but still written.
    pub fn save(&self, clinic: &Clinic) -> ClinicResult<()> {
        let mut out = String::new();
        out.push_str(RECORDS_HEADER);
        out.push('\n');

        for patient in clinic.patients() {
            if patient.appointments.is_empty() {
                tracing::warn!(
                    "patient has no appointments and will not be saved: {}",
                    patient.name
                );
                continue;
            }

            for appointment in &patient.appointments {
                let row = format!(
                    "{},{},{},{},{},{},{},{:.1},{},{}",
                    patient.name,
                    patient.age,
                    patient.address,
                    patient.gender,
                    patient.contact_number,
                    patient.email_address,
                    patient.treatment,
                    patient.treatment_price,
                    appointment.date,
                    appointment.time
                );
                if row.matches(RECORD_DELIMITER).count() + 1 != RECORD_COLUMNS {
                    tracing::warn!(
                        "record row for {} contains embedded delimiters and will not reload cleanly",
                        patient.name
                    );
                }
                out.push_str(&row);
                out.push('\n');
            }
        }

        fs::write(&self.path, out).map_err(ClinicError::FileWrite)
    }

    /// Rebuilds a registry from the records file.
    ///
    /// The first line is consumed as the header without inspection. Rows
    /// that cannot be parsed are skipped with a warning rather than
    /// aborting the load. The stored price column is ignored; prices are
    /// re-derived from the treatment catalogue, so a stale price in the
    /// file cannot survive a reload.
    pub fn load(&self) -> ClinicResult<Clinic> {
        let contents = fs::read_to_string(&self.path).map_err(ClinicError::FileRead)?;

        let mut patients: Vec<Patient> = Vec::new();
        for (index, line) in contents.lines().enumerate().skip(1) {
            if line.is_empty() {
                continue;
            }
            let row = match parse_row(index + 1, line) {
                Ok(row) => row,
                Err(err) => {
                    tracing::warn!("skipping unreadable record row: {}", err);
                    continue;
                }
            };
            match self.grouping {
                RowGrouping::Adjacent => attach_adjacent(&mut patients, row),
                RowGrouping::Merged => attach_merged(&mut patients, row),
            }
        }

        let mut clinic = Clinic::new();
        for patient in patients {
            clinic.add_patient(patient);
        }

        Ok(clinic)
    }

    /// Loads the registry, falling back to an empty one when the file
    /// cannot be read.
    ///
    /// A missing file is the normal first-run state and is only logged at
    /// info level; any other read failure is logged as an error. Either way
    /// the caller gets a usable empty registry and the process carries on.
    pub fn load_or_empty(&self) -> Clinic {
        match self.load() {
            Ok(clinic) => clinic,
            Err(ClinicError::FileRead(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "no records file at {}, starting with an empty registry",
                    self.path.display()
                );
                Clinic::new()
            }
            Err(err) => {
                tracing::error!("failed to load records: {}", err);
                Clinic::new()
            }
        }
    }
}

/// Legacy grouping: a row continues the most recently built record only
/// when its name matches that record's name exactly. Rows for one name
/// that are not contiguous become duplicate records.
fn attach_adjacent(patients: &mut Vec<Patient>, row: RecordRow) {
    match patients.last_mut() {
        Some(current) if current.name == row.name => {
            current.schedule_appointment(row.date, row.time);
        }
        _ => patients.push(row.into_patient()),
    }
}

/// Corrected grouping: a row joins the first record whose name matches
/// case-insensitively, wherever that record sits. Demographics keep the
/// values of the first row seen for the name.
fn attach_merged(patients: &mut Vec<Patient>, row: RecordRow) {
    let key = row.name.to_lowercase();
    match patients.iter_mut().find(|p| p.name.to_lowercase() == key) {
        Some(existing) => existing.schedule_appointment(row.date, row.time),
        None => patients.push(row.into_patient()),
    }
}

fn parse_row(line: usize, text: &str) -> ClinicResult<RecordRow> {
    let columns: Vec<&str> = text.split(RECORD_DELIMITER).collect();
    if columns.len() != RECORD_COLUMNS {
        return Err(ClinicError::MalformedRow {
            line,
            reason: format!(
                "expected {} columns, found {}",
                RECORD_COLUMNS,
                columns.len()
            ),
        });
    }

    let age = columns[1]
        .parse::<u32>()
        .map_err(|_| ClinicError::MalformedRow {
            line,
            reason: format!("unparseable age: {}", columns[1]),
        })?;
    let gender = columns[3]
        .chars()
        .next()
        .ok_or_else(|| ClinicError::MalformedRow {
            line,
            reason: "empty gender column".to_string(),
        })?;
    let treatment: Treatment = columns[6].parse()?;

    // Column 7 is the stored price; it is deliberately not read back.
    Ok(RecordRow {
        name: columns[0].to_string(),
        age,
        address: columns[2].to_string(),
        gender,
        contact_number: columns[4].to_string(),
        email_address: columns[5].to_string(),
        treatment,
        date: columns[8].to_string(),
        time: columns[9].to_string(),
    })
}
