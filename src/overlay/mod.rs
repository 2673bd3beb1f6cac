//! Overlay step navigation.

pub mod config;
pub mod controller;
pub mod observer;
pub mod tour;
