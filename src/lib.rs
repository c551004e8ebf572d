pub mod config;
pub mod fetcher;
pub mod holder;
pub mod models;
pub mod repository;
pub mod routes;
pub mod utils;
