use mimalloc::MiMalloc;
use movie_gateway::gateway_entrypoint;
use movie_gateway_internal::BoxError;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[ntex::main]
async fn main() -> Result<(), BoxError> {
    gateway_entrypoint().await?;

    Ok(())
}
