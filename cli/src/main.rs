use anyhow::Result;

fn main() -> Result<()> {
    quadld_cli::run()
}
