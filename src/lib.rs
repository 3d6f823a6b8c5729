//! Storefront front-end for a textile supplier: catalog navigation, product
//! listing and contact/quote forms, built with Dioxus.

pub mod app;
pub mod catalog;
pub mod catalog_client;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod menu;
pub mod pages;
pub mod types;
pub mod webhook;

pub use app::{App, Route};
