//! Domain models for the hospital directory
//!
//! Entities are owned by the persistence layer; these types are the shapes the
//! server reads, writes and serializes. JSON uses camelCase keys.

pub mod hospital;
pub mod qna;
pub mod review;
pub mod user;
pub mod visit_request;

pub use hospital::{Department, Hospital, HospitalDetail, HospitalLabel, HospitalSummary, NewHospital};
pub use qna::{Qna, QnaWithAuthor};
pub use review::{ReverifySummary, Review, ReviewWithHospital};
pub use user::{User, UserSummary};
pub use visit_request::{NewVisitRequest, RequestWithHospital, VisitRequest};
