use anyhow::Result;

fn main() -> Result<()> {
    siyuan_search::cli::run()
}
