use std::{process, sync::Arc};

use cambio::{
    application::{
        error::AppError,
        generate::{GenerationProvider, GenerationService},
        qc::QcService,
        repos::{ArticlesRepo, JobsRepo},
    },
    config,
    infra::{
        error::InfraError,
        generate::{MockProvider, OpenAiProvider},
        http::{self, ApiState, HealthFlags, HttpState, RouterState},
        store::MemoryStore,
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let store = Arc::new(MemoryStore::seeded());
    let jobs_repo: Arc<dyn JobsRepo> = store.clone();
    let articles_repo: Arc<dyn ArticlesRepo> = store.clone();

    let (provider, mode): (Arc<dyn GenerationProvider>, &'static str) = if settings.generation.mock
    {
        (Arc::new(MockProvider), "mock")
    } else {
        let provider = OpenAiProvider::new(&settings.generation).map_err(AppError::from)?;
        (Arc::new(provider), "live")
    };

    let qc = Arc::new(QcService::new(articles_repo.clone()));
    let generation = Arc::new(GenerationService::new(
        provider,
        articles_repo.clone(),
        mode,
    ));

    let flags = HealthFlags {
        has_api_key: settings.generation.api_key.is_some(),
        mock: settings.generation.mock,
    };

    let http_state = HttpState {
        articles: articles_repo.clone(),
    };
    let api_state = ApiState {
        jobs: jobs_repo,
        articles: articles_repo,
        qc,
        generation,
        flags,
    };

    info!(
        target = "cambio::startup",
        addr = %settings.server.addr,
        mode = mode,
        has_api_key = flags.has_api_key,
        "Starting cambio"
    );

    serve_http(&settings, http_state, api_state).await
}

async fn serve_http(
    settings: &config::Settings,
    http_state: HttpState,
    api_state: ApiState,
) -> Result<(), AppError> {
    let router_state = RouterState {
        http: http_state,
        api: api_state,
    };
    let router = http::build_router(router_state.clone())
        .merge(http::build_api_router(router_state.clone()))
        .with_state(router_state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}
