use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    savor_storefront::run().await
}
