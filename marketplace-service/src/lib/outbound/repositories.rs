pub mod business_account;
pub mod job;
pub mod job_application;
pub mod token;
pub mod user;
