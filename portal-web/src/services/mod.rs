//! Backend API services

pub mod auth;
