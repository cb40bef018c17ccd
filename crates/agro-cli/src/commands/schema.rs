use agro_core::entities::{
    Animal, MedicalHistory, MedicalMonitoring, RoutineCheckup, Treatment, UserProfile,
    Vaccination,
};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPES: &[&str] = &[
    "animal",
    "vaccination",
    "monitoring",
    "treatment",
    "checkup",
    "profile",
    "history",
];

/// Handle `agrosalud schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "animal" => schema_for!(Animal),
        "vaccination" => schema_for!(Vaccination),
        "monitoring" => schema_for!(MedicalMonitoring),
        "treatment" => schema_for!(Treatment),
        "checkup" => schema_for!(RoutineCheckup),
        "profile" => schema_for!(UserProfile),
        "history" => schema_for!(MedicalHistory),
        other => anyhow::bail!("unknown type '{other}'; expected one of: {}", TYPES.join(", ")),
    };
    output(&schema, flags.format)
}
