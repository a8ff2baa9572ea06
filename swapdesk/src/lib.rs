//! # Swapdesk - Library Root
//!
//! A native desktop **token swap simulator**: pick two assets, enter an
//! amount of one, see the equivalent amount of the other computed from a
//! live price feed, then submit a simulated exchange. No real transfer
//! ever occurs.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swapdesk (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode native GUI             │
//! │  Tokio         - Async runtime for timed flows         │
//! │  Reqwest       - HTTP client for the price feed        │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (one fetch per session)
//!          ▼
//! ┌─────────────────┐
//! │  Price feed     │
//! │  (public JSON)  │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Swap form state machine and orchestration
//!   - Event-driven: async tasks report back through a channel
//!   - `Arc<RwLock<AppState>>` shared state, locked briefly
//! - **core**: Error taxonomy, service traits, timing configuration
//! - **services**: HTTP client for the price feed
//! - **ui**: egui rendering (swap screen, token picker, result modal)
//! - **utils**: Amount validation, tokio runtime bridge
//! - **debug**: File-based tracing setup
//!
//! ## Core Concepts
//!
//! The swap form is a small state machine. User actions mutate state
//! synchronously through handlers; the three timed flows (catalog load,
//! direction reversal, simulated settlement) run as tokio tasks that send
//! `AppEvent`s, applied on the main thread every frame. Guards ensure at
//! most one of each flow is in flight, and the whole form freezes while a
//! submission settles.
//!
//! ## Testing
//!
//! The price source is injected (see [`core::service::PriceSource`]) and
//! all delays are configurable (see [`core::config::SwapTimings`]), so the
//! full submission and reversal flows run deterministically in tests:
//!
//! ```bash
//! cargo test --lib
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, SwapState};
pub use crate::core::{AppError, Result};
