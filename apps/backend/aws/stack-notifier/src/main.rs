#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use stack_notifier::{HttpWebhook, NotificationHandler, NotifierConfig, Outcome};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let sentry_endpoint = std::env::var("SENTRY_ENDPOINT").unwrap_or_default();

    // Can be overridden with RUST_LOG env var
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive("hyper=warn".parse().expect("static directive"))
            .add_directive("hyper_util=warn".parse().expect("static directive"))
            .add_directive("reqwest=warn".parse().expect("static directive"))
            .add_directive("rustls=warn".parse().expect("static directive"))
    });

    let _sentry_guard = if sentry_endpoint.is_empty() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
            .init();
        None
    } else {
        let guard = sentry::init((
            sentry_endpoint,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 0.3,
                ..Default::default()
            },
        ));
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
            .with(sentry_tracing::layer())
            .init();
        Some(guard)
    };

    let config = NotifierConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Refusing to start");
    })?;
    let sink = HttpWebhook::from_config(&config)?;
    let handler = NotificationHandler::new(config, sink);

    tracing::info!(
        channel = %handler.config().channel,
        timeout_ms = handler.config().timeout_ms,
        "Stack notifier ready"
    );

    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<serde_json::Value>| async move {
        let outcome: Outcome = handler.handle(event.payload).await?;
        Ok::<Outcome, Error>(outcome)
    }))
    .await
}
