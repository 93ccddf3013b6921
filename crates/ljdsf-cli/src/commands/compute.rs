use crate::cli::ComputeArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::{particles, report};
use ljdsf::core::forcefield::tail::TypeCounts;
use ljdsf::core::models::neighbor::{NeighborList, SpecialBonds};
use ljdsf::engine::compute::ComputeFlags;
use ljdsf::engine::config::HostSettings;
use ljdsf::engine::ledger::EnergyTally;
use ljdsf::engine::pair_style::LjCutCoulDsf;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(args: ComputeArgs) -> Result<()> {
    let ff = config::load_force_field(&args.forcefield, &args.set_values)?;

    info!("Loading particles from {:?}", &args.particles);
    let mut system = particles::read_particles(&args.particles)?;
    if system.is_empty() {
        return Err(CliError::Argument(format!(
            "No particles found in {}",
            args.particles.display()
        )));
    }

    let ntypes = args
        .ntypes
        .unwrap_or_else(|| system.types().iter().copied().max().unwrap_or(0));
    particles::validate_types(&system, ntypes)?;

    let special = SpecialBonds::new(
        parse_special_or_default(args.special_lj.as_deref())?,
        parse_special_or_default(args.special_coul.as_deref())?,
    );
    let host = HostSettings::from_units(args.units).with_special(special);

    let mut style = LjCutCoulDsf::from_force_field(ntypes, &ff)?;
    let counts = TypeCounts::from_types(system.local_types(), ntypes);
    let cutforce = style.init(host, true, Some(&counts))?;

    let neighbors =
        NeighborList::half_brute_force(system.positions(), system.nlocal(), cutforce, |_, _| 0);
    info!(
        particles = system.len(),
        pairs = neighbors.num_pairs(),
        cutforce,
        "Built neighbor list."
    );

    let mut tally = EnergyTally::new();
    let (view, forces) = system.split();
    let summary = style.compute(
        &view,
        forces,
        &neighbors,
        ComputeFlags::all(args.newton_pair),
        &mut tally,
    )?;
    info!(evaluated = summary.pairs_evaluated, "Force pass finished.");

    println!("{}", report::settings_summary(style.global_settings()));
    println!("Units: {} (qqrd2e = {})", args.units, host.qqrd2e);
    println!("{}", report::energy_summary(&tally, &style));

    if let Some(path) = &args.forces {
        particles::write_forces(path, system.forces())?;
        println!("Forces written to {}", path.display());
    }

    if let Some(path) = &args.checkpoint {
        let mut writer = BufWriter::new(File::create(path)?);
        style.write_restart(&mut writer)?;
        writer.flush()?;
        println!("Checkpoint written to {}", path.display());
    }

    Ok(())
}

fn parse_special_or_default(value: Option<&str>) -> Result<[f64; 3]> {
    value.map_or(Ok([0.0; 3]), particles::parse_special)
}
