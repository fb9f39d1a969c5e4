#[tokio::main]
async fn main() {
    devhunt::start_server().await;
}
