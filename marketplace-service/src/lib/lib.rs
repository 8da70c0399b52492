pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::business_account;
pub use domain::job;
pub use domain::job_application;
pub use domain::token;
pub use domain::user;
pub use outbound::repositories;
