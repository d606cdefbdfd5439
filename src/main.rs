use anyhow::Result;

fn main() -> Result<()> {
    numconvert::cli::run()
}
