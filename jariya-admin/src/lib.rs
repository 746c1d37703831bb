//! Jariya admin library
//!
//! Core of the Jariya admin panel: the same-origin proxy relay, the typed
//! API client and its envelope, per-entity services, the admin session and
//! the screen view models built on top of them.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod screens;
pub mod services;
pub mod session;
