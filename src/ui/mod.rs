//! UI module - reusable widgets

pub mod components;
