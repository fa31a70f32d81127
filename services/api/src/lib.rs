mod advise;
mod cli;
mod infra;
mod routes;
mod server;

use food_iq::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
