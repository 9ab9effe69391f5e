use axum::Json;
use competeintel_core::{Coordinates, CATEGORIES, CITIES};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct CategoryItem {
    pub name: &'static str,
    pub cnae_code: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct CategoriesResponse {
    pub categories: Vec<CategoryItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct CityItem {
    pub name: &'static str,
    pub state: &'static str,
    pub coordinates: Coordinates,
}

#[derive(Debug, Serialize)]
pub(super) struct CitiesResponse {
    pub cities: Vec<CityItem>,
}

/// GET /api/categories
pub(super) async fn list_categories() -> Json<CategoriesResponse> {
    let categories = CATEGORIES
        .into_iter()
        .map(|c| CategoryItem {
            name: c.name(),
            cnae_code: c.cnae_code(),
            description: c.description(),
        })
        .collect();
    Json(CategoriesResponse { categories })
}

/// GET /api/cities
pub(super) async fn list_cities() -> Json<CitiesResponse> {
    let cities = CITIES
        .iter()
        .map(|c| CityItem {
            name: c.name,
            state: c.state,
            coordinates: c.center(),
        })
        .collect();
    Json(CitiesResponse { cities })
}
