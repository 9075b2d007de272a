// SPDX-License-Identifier: MPL-2.0
//! `localizable` tracks the user's display language, resolves which packaged
//! resource bundle answers string lookups, and turns keys into translated
//! strings.
//!
//! It is a thin selection layer in front of Fluent string tables: no
//! pluralization, interpolation or locale-aware formatting happens here.

pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod preferences;
