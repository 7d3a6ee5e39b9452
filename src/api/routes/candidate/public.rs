//! Public types for the candidate form
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CandidateForm {
    pub time: Option<String>,
    pub email: Option<String>,
}
