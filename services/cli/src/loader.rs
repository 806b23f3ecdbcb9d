//! CSV ingestion for the three tables the engine consumes.
//!
//! Expected layout under the data directory: `students.csv` with
//! `id,name,skills`, `internships.csv` with
//! `id,title,company,description,required_skills,posted_at`, and
//! `applications.csv` with `student_id,internship_id,applied_on`. Skill
//! columns are comma-separated inside a quoted field; dates are
//! `YYYY-MM-DD`.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use intern_ai::dataset::InMemoryStore;
use intern_ai::recommend::{
    ApplicationRecord, Internship, InternshipId, StudentId, StudentProfile,
};
use intern_ai::skills::SkillSet;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct StudentRow {
    id: u64,
    name: String,
    #[serde(default)]
    skills: String,
}

#[derive(Debug, Deserialize)]
struct InternshipRow {
    id: u64,
    title: String,
    company: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    required_skills: String,
    posted_at: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    student_id: u64,
    internship_id: u64,
    applied_on: NaiveDate,
}

pub fn load_store(data_dir: &Path) -> Result<InMemoryStore, AppError> {
    let students = read_table(data_dir.join("students.csv"), parse_students)?;
    let internships = read_table(data_dir.join("internships.csv"), parse_internships)?;
    let applications = read_table(data_dir.join("applications.csv"), parse_applications)?;
    info!(
        students = students.len(),
        internships = internships.len(),
        applications = applications.len(),
        "loaded dataset"
    );
    Ok(InMemoryStore::new(students, internships, applications)?)
}

fn read_table<T>(
    path: PathBuf,
    parse: impl Fn(&mut csv::Reader<std::fs::File>) -> Result<Vec<T>, csv::Error>,
) -> Result<Vec<T>, AppError> {
    let mut reader =
        csv::Reader::from_path(&path).map_err(|source| AppError::Csv {
            path: path.clone(),
            source,
        })?;
    parse(&mut reader).map_err(|source| AppError::Csv { path, source })
}

fn parse_students<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<StudentProfile>, csv::Error> {
    reader
        .deserialize()
        .map(|row| {
            let row: StudentRow = row?;
            Ok(StudentProfile {
                id: StudentId(row.id),
                name: row.name,
                skills: SkillSet::parse(&row.skills),
            })
        })
        .collect()
}

fn parse_internships<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<Internship>, csv::Error> {
    reader
        .deserialize()
        .map(|row| {
            let row: InternshipRow = row?;
            Ok(Internship {
                id: InternshipId(row.id),
                title: row.title,
                company: row.company,
                description: row.description,
                required_skills: SkillSet::parse(&row.required_skills),
                posted_at: row.posted_at,
            })
        })
        .collect()
}

fn parse_applications<R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Vec<ApplicationRecord>, csv::Error> {
    reader
        .deserialize()
        .map(|row| {
            let row: ApplicationRow = row?;
            Ok(ApplicationRecord {
                student_id: StudentId(row.student_id),
                internship_id: InternshipId(row.internship_id),
                applied_on: row.applied_on,
            })
        })
        .collect()
}
