//! mtsfix binary entry point

fn main() -> anyhow::Result<()> {
    mtsfix::cli::run_cli()
}
