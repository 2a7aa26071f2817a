//! catalog-service 入口

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    catalog_service::bootstrap::run("config").await
}
