use crate::routes;
use axum::{
    routing::{get, IntoMakeService},
    Router, Server,
};
use hyper::server::conn::AddrIncoming;
use std::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};

/// Builds the router with both routes and the request-id/trace middleware.
///
/// Paths other than the two registered ones fall through to axum's default 404, and methods
/// other than GET on a registered path get a 405. HEAD is routed explicitly, since axum would
/// otherwise answer it with the GET handler.
pub fn app() -> Router {
    // Configure service to have request IDs show up correctly in logs produced by
    // `tower_http::trace::Trace`. Modified from: https://docs.rs/tower-http/latest/tower_http/request_id/index.html#using-trace
    let trace_layer = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        // Log requests and responses.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        // Propagate the header to the response before the response reaches `TraceLayer`.
        .propagate_x_request_id();

    Router::new()
        .route("/hello-world", get(routes::hello_world).head(routes::method_not_allowed))
        .route("/health", get(routes::health).head(routes::method_not_allowed))
        .layer(trace_layer)
}

/// Returns a server bound to `listener`. Awaiting it serves requests until the process exits.
pub fn run(listener: TcpListener) -> hyper::Result<Server<AddrIncoming, IntoMakeService<Router>>> {
    Ok(axum::Server::from_tcp(listener)?.serve(app().into_make_service()))
}
