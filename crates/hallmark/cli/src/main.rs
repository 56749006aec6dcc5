fn main() -> anyhow::Result<()> {
    hallmark_cli::run()?;
    Ok(())
}
