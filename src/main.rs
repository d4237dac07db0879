#[actix_web::main]
async fn main() -> std::io::Result<()> {
    smartdocs_server::run().await
}
