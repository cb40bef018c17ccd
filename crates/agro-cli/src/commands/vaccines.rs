use agro_core::catalog::vaccines_for;
use agro_core::enums::Species;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VaccinesArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `agrosalud vaccines --species`.
pub fn handle(args: &VaccinesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let species = parse_enum::<Species>(&args.species, "species")?;
    output(&vaccines_for(species), flags.format)
}
