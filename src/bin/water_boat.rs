use chunkvox::config::{WaterConfig, WindowConfig};
use chunkvox::scene::WaterScene;
use chunkvox::{app, logging};

fn main() {
    logging::init();

    let config = WaterConfig::default();
    tracing::info!(grid = config.grid_size, seed = config.noise_seed, "water surface ready");

    if let Err(e) = app::run(WaterScene::new(config), WindowConfig::water_boat()) {
        tracing::error!(error = %e, "water-boat failed");
        std::process::exit(1);
    }
}
