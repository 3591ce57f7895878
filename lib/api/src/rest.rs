use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result as ActixResult};
use internmatch_ranking::{CandidateQuery, RecommendResponse, Recommender};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

pub const HEALTH_MESSAGE: &str = "Internship Recommendation API is running";

#[derive(Serialize)]
struct HealthResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(recommender: Arc<Recommender>, host: &str, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(recommender.clone()))
                .configure(configure)
        })
        .bind((host, port))?
        .run()
        .await
    }
}

/// Register the routes and the JSON body settings on an app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error),
    )
    .route("/", web::get().to(health))
    .route("/recommend", web::post().to(recommend));
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    warn!(error = %message, "rejected recommend request body");
    let response = HttpResponse::BadRequest().json(ErrorResponse { error: message });
    InternalError::from_response(err, response).into()
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse { message: HEALTH_MESSAGE }))
}

async fn recommend(
    recommender: web::Data<Arc<Recommender>>,
    req: web::Json<CandidateQuery>,
) -> ActixResult<HttpResponse> {
    let query = req.into_inner();
    let recommendations = recommender.recommend(&query);
    debug!(returned = recommendations.len(), "recommend request served");
    Ok(HttpResponse::Ok().json(RecommendResponse::new(recommendations)))
}
