use pizzamap_application::prelude::AppState;
use pizzamap_core::entities::{Region, Weekday};
use time::OffsetDateTime;

mod cfg;
mod gateways;
mod summary;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cfg = cfg::Cfg::from_env()?;
    let region = Region::PORTLAND;
    let app = AppState::new(
        gateways::backend(&cfg)?,
        gateways::geocoding_gateway(&cfg, region)?,
        region,
    );
    app.load().await?;

    let today = Weekday::from(OffsetDateTime::now_utc().weekday());
    print!("{}", summary::render(&app.store(), &region, today)?);
    Ok(())
}
