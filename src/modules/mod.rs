//! Behaviour that sits beside the widgets
//!
//! - navigation: sidebar link selection, implements the Module trait
//! - export: headless text and JSON output of a page

pub mod export;
pub mod navigation;
