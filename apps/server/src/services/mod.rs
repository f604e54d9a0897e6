//! Business logic layer
//!
//! Services sit between handlers and the directory store: they validate
//! input, call the store and record metrics.

pub mod hospitals;
pub mod metrics;
pub mod qna;
pub mod reviews;
pub mod visit_requests;

pub use hospitals::{
    CreateHospitalError, EntryPoint, HospitalDraft, HospitalService, HospitalValidationError,
};
pub use metrics::MetricsService;
pub use qna::QnaService;
pub use reviews::{DirectoryReviewVerifier, ReviewService, ReviewVerifier};
pub use visit_requests::{
    CreateRequestError, RequestValidationError, VisitRequestPayload, VisitRequestService,
};
