use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};

pub mod error;
pub use error::{ApiError, ApiResult};

pub mod builders;
pub mod extract;

pub mod api;


pub trait ApiRouter {
	fn api_routes(self) -> Self where Self: Sized { self }
}

/// full application router, with tracing, timeout and cors layers, bound to given context
pub fn router(ctx: jobboard::Context) -> axum::Router {
	use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

	let timeout = std::time::Duration::from_secs(ctx.cfg().security.request_timeout);

	axum::Router::<jobboard::Context>::new()
		.api_routes()
		.layer(
			TraceLayer::new(SharedClassifier::new(ServerErrorsAsFailures::new()))
				.make_span_with(|req: &axum::http::Request<_>| {
					tracing::span!(
						tracing::Level::INFO,
						"request",
						method = %req.method(),
						uri = %req.uri(),
					)
				})
		)
		.layer(TimeoutLayer::with_status_code(axum::http::StatusCode::REQUEST_TIMEOUT, timeout))
		.layer(CorsLayer::permissive())
		.with_state(ctx)
}

pub async fn serve(ctx: jobboard::Context, bind: String, shutdown: impl ShutdownToken) -> Result<(), std::io::Error> {
	let router = router(ctx);

	tracing::info!("serving api routes on {bind}");

	let listener = tokio::net::TcpListener::bind(bind).await?;
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown.event())
		.await?;

	Ok(())
}


pub trait ShutdownToken: Sync + Send + 'static {
	fn event(self) -> impl std::future::Future<Output = ()> + std::marker::Send;
}
