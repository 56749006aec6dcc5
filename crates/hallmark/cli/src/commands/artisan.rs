//! Artisan commands

use super::Session;
use crate::error::CliResult;
use crate::output;
use clap::Subcommand;
use hallmark_runtime::{Call, Principal, Query, QueryResponse};

/// Artisan subcommands
#[derive(Subcommand)]
pub enum ArtisanCommands {
    /// Register the caller's own artisan profile (admin only)
    Register {
        /// Display name
        name: String,
        /// Credentials statement
        credentials: String,
    },

    /// Mark an artisan verified at the current sequence (admin only)
    Verify {
        /// Artisan principal
        artisan: String,
    },

    /// Print whether an artisan is verified
    Status {
        /// Artisan principal
        artisan: String,
    },

    /// Show an artisan profile
    Show {
        /// Artisan principal
        artisan: String,
    },
}

/// Execute an artisan command
pub fn execute(command: ArtisanCommands, session: &Session) -> CliResult<String> {
    match command {
        ArtisanCommands::Register { name, credentials } => {
            let (receipt, _) = session.submit(Call::RegisterArtisan { name, credentials })?;
            let text = format!("Artisan {} registered", receipt.caller);
            output::render(session.format, &receipt, text)
        }
        ArtisanCommands::Verify { artisan } => {
            let artisan = Principal::new(artisan);
            let (receipt, _) = session.submit(Call::VerifyArtisan {
                artisan: artisan.clone(),
            })?;
            let text = format!("Artisan {} verified at {}", artisan, receipt.sequence);
            output::render(session.format, &receipt, text)
        }
        ArtisanCommands::Status { artisan } => {
            let deployment = session.load()?;
            let artisan = Principal::new(artisan);
            let response = deployment.query(&Query::IsVerified {
                artisan: artisan.clone(),
            });
            let text = match response {
                QueryResponse::Verified(true) => format!("{artisan}: verified"),
                _ => format!("{artisan}: not verified"),
            };
            output::render(session.format, &response, text)
        }
        ArtisanCommands::Show { artisan } => {
            let deployment = session.load()?;
            let artisan = Principal::new(artisan);
            let record = deployment.artisans().details(&artisan);
            let text = match &record {
                Some(r) => format!(
                    "{artisan}\n  name:         {}\n  credentials:  {}\n  verified:     {}\n  verified at:  {}",
                    r.name, r.credentials, r.verified, r.verification_date
                ),
                None => format!("{artisan}: no artisan profile"),
            };
            output::render(session.format, &record, text)
        }
    }
}
