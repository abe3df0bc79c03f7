use basic_shell::calc::CalcEngine;
use basic_shell::Shell;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut shell = Shell::new(CalcEngine::new());
    shell.run()?;
    Ok(())
}
