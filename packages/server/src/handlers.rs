//! HTTP handler functions for the food map API.

use actix_web::{HttpResponse, web};
use food_map_enrichment::{dataset_statistics, search_regions};
use food_map_pipeline::RecordSelection;
use food_map_server_models::{
    ApiError, ApiHealth, ApiSearchResult, ScopeQueryParams, SearchQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

const fn selection(params: &ScopeQueryParams) -> RecordSelection {
    RecordSelection {
        cluster: params.cluster,
        year: params.year,
    }
}

/// `GET /api/analysis?region=<token>&cluster=<id>&year=<year>`
///
/// Runs a full enrichment pass for the requested scope.
pub async fn analysis(
    state: web::Data<AppState>,
    params: web::Query<ScopeQueryParams>,
) -> HttpResponse {
    let result = state
        .pipeline
        .analyze_selected(params.region.as_deref(), selection(&params))
        .await;
    HttpResponse::Ok().json(result)
}

/// `GET /api/clusters/{cluster_id}?region=<token>&year=<year>`
///
/// Enriched regions of one numeric cluster. A `cluster` query parameter
/// is ignored in favor of the path.
pub async fn cluster(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    params: web::Query<ScopeQueryParams>,
) -> HttpResponse {
    let selection = RecordSelection {
        cluster: Some(path.into_inner()),
        year: params.year,
    };
    let result = state
        .pipeline
        .analyze_selected(params.region.as_deref(), selection)
        .await;
    HttpResponse::Ok().json(result)
}

/// `GET /api/regions/list`
///
/// Grouping names for the scope selector, `"All"` first.
pub async fn regions_list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.pipeline.available_groupings().await)
}

/// `GET /api/statistics?region=<token>&cluster=<id>&year=<year>`
pub async fn statistics(
    state: web::Data<AppState>,
    params: web::Query<ScopeQueryParams>,
) -> HttpResponse {
    let result = state
        .pipeline
        .analyze_selected(params.region.as_deref(), selection(&params))
        .await;
    HttpResponse::Ok().json(dataset_statistics(&result.regions))
}

/// `GET /api/search?q=<query>`
///
/// Case-insensitive place-name search across all regions.
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchQueryParams>,
) -> HttpResponse {
    let Some(query) = params.q.as_deref().filter(|q| !q.is_empty()) else {
        return HttpResponse::BadRequest().json(ApiError {
            error: "Query parameter q is required".to_string(),
        });
    };

    let result = state.pipeline.analyze(None).await;
    let data: Vec<_> = search_regions(&result.regions, query)
        .into_iter()
        .cloned()
        .collect();

    HttpResponse::Ok().json(ApiSearchResult {
        query: query.to_string(),
        count: data.len(),
        data,
    })
}
