mod app;
mod effects;
mod input;
mod render;

fn main() -> anyhow::Result<()> {
    // Rendering owns stdout, so logs go to the file only.
    larder_logging::initialize(larder_logging::LogDestination::File);
    app::run()
}
