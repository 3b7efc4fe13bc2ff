use env_logger::{Builder, Env};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .init();

    let presenter_factory = sorting_visualizer::PixelsPresenterFactory::new();
    let command = sorting_visualizer::RunGuiCommand::new(presenter_factory);

    command.execute()
}
