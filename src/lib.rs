//! Oracool - astrology-informed wellness chat backend
//!
//! This crate turns raw astrology-engine output into a structured natal chart
//! report and serves a chat in which an AI astrologer answers against that
//! chart.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
