//! Admin commands

use super::Session;
use crate::error::CliResult;
use crate::output;
use clap::{Subcommand, ValueEnum};
use hallmark_runtime::{Call, Principal, RegistryKind};
use std::collections::BTreeMap;

/// Registry selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegistryArg {
    Artisan,
    Material,
    Design,
}

impl From<RegistryArg> for RegistryKind {
    fn from(arg: RegistryArg) -> Self {
        match arg {
            RegistryArg::Artisan => RegistryKind::Artisan,
            RegistryArg::Material => RegistryKind::Material,
            RegistryArg::Design => RegistryKind::Design,
        }
    }
}

/// Admin subcommands
#[derive(Subcommand)]
pub enum AdminCommands {
    /// Show the admin of each registry
    Show,

    /// Hand a registry's admin role to another principal (admin only)
    Transfer {
        /// Registry whose admin changes
        #[arg(value_enum)]
        registry: RegistryArg,
        /// New admin principal. Not validated.
        new_admin: String,
    },
}

/// Execute an admin command
pub fn execute(command: AdminCommands, session: &Session) -> CliResult<String> {
    match command {
        AdminCommands::Show => {
            let deployment = session.load()?;
            let admins: BTreeMap<String, Principal> = RegistryKind::ALL
                .iter()
                .map(|kind| (kind.to_string(), deployment.admin(*kind).clone()))
                .collect();
            let text = admins
                .iter()
                .map(|(kind, admin)| format!("{kind:<9} {admin}"))
                .collect::<Vec<_>>()
                .join("\n");
            output::render(session.format, &admins, text)
        }
        AdminCommands::Transfer {
            registry,
            new_admin,
        } => {
            let registry = RegistryKind::from(registry);
            let new_admin = Principal::new(new_admin);
            let (receipt, _) = session.submit(Call::TransferAdmin {
                registry,
                new_admin: new_admin.clone(),
            })?;
            let text = format!("{registry} admin is now {new_admin}");
            output::render(session.format, &receipt, text)
        }
    }
}
