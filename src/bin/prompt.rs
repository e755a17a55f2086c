//! Interactive laminate entry from the terminal

use clt_solver::input::Prompter;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let layup = Prompter::new().layup()?;
    let laminate = layup.assemble()?;

    println!("{}", laminate.to_report().to_json_pretty()?);
    Ok(())
}
