use dotenv::dotenv;
use image_disk::adapters::inbound::create_client;
use image_disk::adapters::outbound::file_store::init_file_store;
use image_disk::adapters::outbound::image_codec::init_image_codec;
use image_disk::adapters::outbound::reporter::init_reporter;
use image_disk::domain::app::ImageDiskStore;
use image_disk::ports::inbound::client::Client;
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let disk = ImageDiskStore::new(init_image_codec(), init_file_store(), init_reporter());
    let mut client = create_client(disk);
    client.run()
}
