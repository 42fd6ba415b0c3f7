use cinemate_service::api;
use cinemate_service::common::init;
use cinemate_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    api::serve(settings).await
}
