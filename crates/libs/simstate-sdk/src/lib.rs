//! Permission-gated multi-SIM telephony state SDK.
//!
//! Exposes a device's multi-SIM state through one asynchronous entry point,
//! [`SimStateClient::get_sim_state`]. The pipeline behind it:
//!
//! - **Platform gate** — rejects non-Android hosts before anything else
//! - **Permission orchestrator** — sequential runtime permission requests,
//!   short-circuiting on the first denial
//! - **Native query bridge** — slot count + active subscriptions from the
//!   injected [`CapabilityProvider`], with a per-entry permission re-check
//!   before exposing phone numbers
//! - **Snapshot mapper** — pure aggregation into [`SimStateSnapshot`]
//!
//! Failures surface as exactly one [`SimStateError`]: `Unsupported`,
//! `PermissionDenied`, or `Native`. No caching, no change notifications,
//! no cancellation.
//!
//! The native binding is a dependency-injected provider; [`StaticProvider`]
//! is a ready-made in-memory substitute for tests and demos.

mod client;
pub mod config;
pub mod error;
mod permission;
mod platform;
pub mod provider;
mod snapshot;
mod stub;
pub mod types;

pub use client::SimStateClient;
pub use config::SimStateConfig;
pub use error::{code as error_code, SimStateError, SourceFault};
pub use provider::{CapabilityProvider, HostInfo, PermissionHost, TelephonySource};
pub use stub::StaticProvider;
pub use types::{
    HostPlatform, PermissionId, PermissionOutcome, PermissionRationale, RawSimSnapshot,
    RawSubscription, SimCardRecord, SimStateSnapshot, REQUIRED_PERMISSIONS,
};
