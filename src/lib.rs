//! ssr-control - Remote control service for a screen recorder
//!
//! A small HTTP/1.1 server that lets external tooling drive a recorder's
//! lifecycle: start, pause/resume, save, cancel, status. The recorder
//! itself is supplied by the host through [`controller::RecorderController`];
//! the service holds a non-owning handle and runs entirely on one thread,
//! so controller implementations need no locking.

pub mod api;
pub mod config;
pub mod controller;
pub mod http;
pub mod server;
