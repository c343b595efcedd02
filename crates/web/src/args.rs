//! Command-line argument definitions.
//!
//! Connection and object settings come from the environment (see
//! `cobj-config`); the command line only overrides the listen port.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cobj-web")]
#[command(about = "Web front end for listing and creating HubSpot custom object records", long_about = None)]
#[command(version)]
#[command(
    after_help = "Environment:\n  HUBSPOT_ACCESS_TOKEN, CUSTOM_OBJECT_TYPE, PROP1, PROP2, PROP3 (required)\n  PROP1_LABEL, PROP2_LABEL, PROP3_LABEL, PORT, HUBSPOT_BASE_URL, HUBSPOT_TIMEOUT (optional)\n"
)]
pub struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}
