// SPDX-License-Identifier: MPL-2.0
//! `iced_compass` provides locale-aware navigation for Iced applications.
//!
//! It builds locale-prefixed routes, gates contribution features on a static
//! allow-list of locales, and renders localized link components with Fluent,
//! demonstrated by a small multilingual contribution shell.

#![doc(html_root_url = "https://docs.rs/iced_compass/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locales;
pub mod routes;
pub mod ui;
