//! Design commands

use super::Session;
use crate::error::CliResult;
use crate::output;
use clap::Subcommand;
use hallmark_runtime::{Call, DesignId, MaterialId, NewDesign, Outcome};

/// Design subcommands
#[derive(Subcommand)]
pub enum DesignCommands {
    /// Register a design with the caller as its artisan
    Register {
        name: String,
        description: String,
        image_uri: String,

        /// Material id used by the design (repeatable)
        #[arg(short, long = "material")]
        materials: Vec<u64>,
    },

    /// Show a registered design
    Show {
        /// Design id
        id: u64,
    },

    /// Print how many designs have been registered
    Count,
}

/// Execute a design command
pub fn execute(command: DesignCommands, session: &Session) -> CliResult<String> {
    match command {
        DesignCommands::Register {
            name,
            description,
            image_uri,
            materials,
        } => {
            let materials = materials.into_iter().map(MaterialId).collect();
            let design = NewDesign::new(name, description, image_uri, materials);
            let (receipt, outcome) = session.submit(Call::RegisterDesign(design))?;
            let text = match outcome {
                Outcome::DesignRegistered { id } => format!("Registered {id}"),
                other => format!("{other:?}"),
            };
            output::render(session.format, &receipt, text)
        }
        DesignCommands::Show { id } => {
            let deployment = session.load()?;
            let id = DesignId(id);
            let record = deployment.designs().details(id);
            let text = match &record {
                Some(r) => {
                    let materials: Vec<String> =
                        r.materials.iter().map(|m| m.0.to_string()).collect();
                    format!(
                        "{id}\n  name:        {}\n  description: {}\n  image:       {}\n  artisan:     {}\n  registered:  {}\n  materials:   [{}]",
                        r.name,
                        r.description,
                        r.image_uri,
                        r.artisan,
                        r.registration_date,
                        materials.join(", ")
                    )
                }
                None => format!("{id}: not found"),
            };
            output::render(session.format, &record, text)
        }
        DesignCommands::Count => {
            let count = session.load()?.designs().count();
            output::render(session.format, &count, count.to_string())
        }
    }
}
