//! CLT Solver Example - Cross-ply [0/0/90/90]s laminate

use clt_solver::input::read_plies;
use clt_solver::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A JSON laminate description may be passed as the first argument
    let plies = match std::env::args().nth(1) {
        Some(path) => read_plies(&path)?,
        None => {
            // Carbon/epoxy, 2 mm laminate of 8 plies
            let ply = PlySpec::new(140e9, 5e9, 5e9, 0.35, 0.0, 2e-3 / 8.0)?;
            Layup::new(ply)
                .with_angles(&[0.0, 0.0, 90.0, 90.0])
                .symmetric()
                .build()?
        }
    };

    let laminate = LaminateAssembly::new(&plies)?;
    let moduli = laminate.apparent_moduli();

    eprintln!("=== CLT Solver Example: {} plies ===", laminate.ply_count());
    eprintln!("  total thickness: {:e}", laminate.total_thickness());
    eprintln!("  E_x  = {:.4e}", moduli.hat_e_x);
    eprintln!("  E_y  = {:.4e}", moduli.hat_e_y);
    eprintln!("  G_xy = {:.4e}", moduli.hat_g_xy);
    eprintln!("  nu_xy = {:.4}", moduli.hat_nu_xy);
    eprintln!("  coupled: {}", laminate.has_coupling());

    println!("{}", laminate.to_report().to_json_pretty()?);
    Ok(())
}
