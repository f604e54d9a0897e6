mod admin;
mod metrics;
mod pages;
mod qna;
mod requests;
mod reviews;
