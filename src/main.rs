use clap::Parser;
use dicom_preview_rs::config::ServiceArgs;
use dicom_preview_rs::logger::{self, info};
use dicom_preview_rs::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let config = ServiceArgs::parse().into_config();

    info!("Starting dicom_preview...");
    info!("Brain image: {}", config.brain_image_path.display());
    info!("Annotation image: {}", config.annotation_image_path.display());
    info!(
        "Output depth: {:?}, frame: {}",
        config.conversion.output_depth, config.conversion.frame
    );

    server::run(config).await
}
