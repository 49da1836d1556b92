use logo_lookup::Platform;
use restaurants::{Pipeline, ScreenState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let pipeline = Pipeline::new(Platform::Ios);
    let mut screen = ScreenState::new();
    screen.fetch(&pipeline).await;

    let json = serde_json::to_string_pretty(screen.restaurants()).unwrap();
    println!("json: {}", json);
}
