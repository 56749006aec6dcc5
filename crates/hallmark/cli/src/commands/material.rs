//! Material commands

use super::Session;
use crate::error::CliResult;
use crate::output;
use clap::Subcommand;
use hallmark_runtime::{Call, MaterialId, NewMaterial, Outcome};

/// Material subcommands
#[derive(Subcommand)]
pub enum MaterialCommands {
    /// Certify a material (admin only)
    Certify {
        name: String,
        /// Material type, e.g. Metal or Gemstone
        #[arg(value_name = "TYPE")]
        material_type: String,
        purity: String,
        origin: String,
    },

    /// Show a certified material
    Show {
        /// Material id
        id: u64,
    },

    /// Print how many materials have been certified
    Count,
}

/// Execute a material command
pub fn execute(command: MaterialCommands, session: &Session) -> CliResult<String> {
    match command {
        MaterialCommands::Certify {
            name,
            material_type,
            purity,
            origin,
        } => {
            let material = NewMaterial::new(name, material_type, purity, origin);
            let (receipt, outcome) = session.submit(Call::CertifyMaterial(material))?;
            let text = match outcome {
                Outcome::MaterialCertified { id } => format!("Certified {id}"),
                other => format!("{other:?}"),
            };
            output::render(session.format, &receipt, text)
        }
        MaterialCommands::Show { id } => {
            let deployment = session.load()?;
            let id = MaterialId(id);
            let record = deployment.materials().details(id);
            let text = match &record {
                Some(r) => format!(
                    "{id}\n  name:       {}\n  type:       {}\n  purity:     {}\n  origin:     {}\n  certifier:  {}\n  certified:  {}",
                    r.name, r.material_type, r.purity, r.origin, r.certifier, r.certification_date
                ),
                None => format!("{id}: not found"),
            };
            output::render(session.format, &record, text)
        }
        MaterialCommands::Count => {
            let count = session.load()?.materials().count();
            output::render(session.format, &count, count.to_string())
        }
    }
}
