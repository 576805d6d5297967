//! # trellis-view: Step-through Trellis Viewer
//!
//! Submits a noisy bit sequence, generator polynomials and an error
//! probability to an external convolutional decoding engine, then draws the
//! engine's ranked candidate paths as a trellis, revealing them one at a
//! time.
//!
//! ## Architecture
//!
//! - **Protocol**: JSON request/response documents, validated once at the
//!   boundary ([`protocol`])
//! - **Engine**: one subprocess per submission, run on a worker thread and
//!   reported back over crossbeam channels ([`engine`])
//! - **Session**: the accepted response and its reveal state ([`session`])
//! - **Trellis**: pure layout from candidate paths to draw instructions
//!   ([`trellis`])
//! - **Frontend**: eframe/egui shell that paints the instructions
//!   ([`frontend`])
//!
//! ## Example
//!
//! ```ignore
//! use trellis_view::{
//!     app::Workbench,
//!     config::AppConfig,
//!     engine::{DecoderProcess, EngineBridge},
//!     frontend::TrellisApp,
//! };
//!
//! fn main() -> eframe::Result<()> {
//!     let config = AppConfig::load_or_default();
//!     let (bridge, _handle) = EngineBridge::spawn(DecoderProcess::from_config(&config.engine))
//!         .expect("failed to start engine worker");
//!     let workbench = Workbench::new(bridge);
//!
//!     eframe::run_native(
//!         "Trellis Viewer",
//!         eframe::NativeOptions::default(),
//!         Box::new(move |_cc| Ok(Box::new(TrellisApp::new(workbench, &config)))),
//!     )
//! }
//! ```

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod input;
pub mod protocol;
pub mod session;
pub mod trellis;
pub mod types;

// Re-export commonly used types
pub use app::{AppAction, Workbench};
pub use config::AppConfig;
pub use error::{Result, TrellisError};
pub use session::Session;
pub use trellis::{layout_path, required_canvas_width, DrawInstruction, TrellisGeometry};
pub use types::{Bit, CandidatePath, DecodeRequest, DecodeResponse};
