// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Browser clients call from arbitrary origins; allow all of them.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
