use chunkvox::config::{ControlConfig, WindowConfig, WorldConfig};
use chunkvox::scene::ChunkWorldScene;
use chunkvox::{app, logging};

fn main() {
    logging::init();

    let world_config = WorldConfig::default();
    let scene = ChunkWorldScene::new(&world_config, &ControlConfig::default());
    tracing::info!(
        chunks = scene.world().len(),
        solid_blocks = scene.world().solid_count(),
        "world ready"
    );

    if let Err(e) = app::run(scene, WindowConfig::chunk_world()) {
        tracing::error!(error = %e, "chunkvox failed");
        std::process::exit(1);
    }
}
