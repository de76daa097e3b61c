#![doc = "The `taskboard` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, in-memory stores, services,"]
#![doc = "authorization policy, authentication mechanisms, routing configuration,"]
#![doc = "and error handling for the taskboard application. It is used by the main"]
#![doc = "binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod routes;
pub mod seed;
pub mod services;
pub mod store;
