//! Demo driver for the SIM state pipeline.
//!
//! Builds an in-memory device from the flags, runs one `get_sim_state`
//! call, and prints the snapshot as JSON. Failures print the stable error
//! code and message to stderr and exit nonzero.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use simstate_sdk::{
    HostPlatform, PermissionId, RawSubscription, SimStateClient, StaticProvider,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Android,
    Ios,
    Web,
}

impl From<PlatformArg> for HostPlatform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Android => HostPlatform::Android,
            PlatformArg::Ios => HostPlatform::Ios,
            PlatformArg::Web => HostPlatform::Web,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PermissionArg {
    PhoneState,
    PhoneNumbers,
}

impl From<PermissionArg> for PermissionId {
    fn from(arg: PermissionArg) -> Self {
        match arg {
            PermissionArg::PhoneState => PermissionId::ReadPhoneState,
            PermissionArg::PhoneNumbers => PermissionId::ReadPhoneNumbers,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "simstate", about = "Query simulated device SIM state", version)]
struct Cli {
    /// Host platform to simulate.
    #[arg(long, value_enum, default_value = "android")]
    platform: PlatformArg,

    /// Physical SIM slots the simulated device exposes.
    #[arg(long, default_value_t = 2)]
    slots: u32,

    /// Active SIMs to populate, one per slot starting at 0.
    #[arg(long, default_value_t = 1)]
    sims: u32,

    /// Deny a permission when the pipeline requests it. Repeatable.
    #[arg(long, value_enum)]
    deny: Vec<PermissionArg>,

    /// Grant permissions at request time but revoke them before the number
    /// lookup, demonstrating the access-time redaction re-check.
    #[arg(long)]
    revoke_after_grant: bool,

    /// Pretty-print the snapshot.
    #[arg(long)]
    pretty: bool,
}

fn build_provider(cli: &Cli) -> StaticProvider {
    let mut provider = StaticProvider::android()
        .with_platform(cli.platform.into())
        .grant(PermissionId::ReadPhoneState)
        .grant(PermissionId::ReadPhoneNumbers)
        .with_slot_count(cli.slots);

    for denied in &cli.deny {
        provider = provider.deny((*denied).into());
    }
    if cli.revoke_after_grant {
        provider = provider
            .revoke_held(PermissionId::ReadPhoneState)
            .revoke_held(PermissionId::ReadPhoneNumbers);
    }

    for slot in 0..cli.sims.min(cli.slots) {
        provider = provider.with_subscription(RawSubscription {
            id: slot as i32 + 1,
            slot_index: slot as i32,
            carrier_name: Some(format!("Carrier {}", (b'X' + slot as u8 % 3) as char)),
            display_name: Some(format!("SIM {}", slot + 1)),
            country_iso: Some("us".to_owned()),
            number: Some(format!("+1555000{:04}", slot + 1)),
            is_active: true,
        });
    }
    provider
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let client = SimStateClient::new(Arc::new(build_provider(&cli)));
    match client.get_sim_state().await {
        Ok(snapshot) => {
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&snapshot)
            } else {
                serde_json::to_string(&snapshot)
            };
            match rendered {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    log::error!("failed to render snapshot: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            eprintln!("{}: {err}", err.code());
            ExitCode::FAILURE
        }
    }
}
