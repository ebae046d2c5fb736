use anyhow::Result;

fn main() -> Result<()> {
    movie_log::cli::run()
}
