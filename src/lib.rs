pub mod aggregate;
pub mod clean;
pub mod composite;
pub mod config;
pub mod derive;
pub mod games_fetch;
pub mod http_client;
pub mod projection;
pub mod report;
pub mod source_check;
