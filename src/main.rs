use anyhow::Context as _;
use archean_bot::bots::MainBot;
use shuttle_secrets::SecretStore;

#[shuttle_runtime::main]
async fn serenity(
    #[shuttle_secrets::Secrets] secret_store: SecretStore,
) -> shuttle_serenity::ShuttleSerenity {
    let bot = MainBot::new(&secret_store)
        .await
        .context("Failed to set up the bot")?;
    let client = bot.into_client().await.context("Err creating client")?;

    Ok(client.into())
}
