use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ItemsQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RenameItemRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ShowAllRequest {
    pub show_all: bool,
}

#[derive(Debug, Deserialize)]
pub struct ItemsPerPageRequest {
    pub items_per_page: usize,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewSettingsResponse {
    pub items_per_page: usize,
    pub show_all: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<String>,
    pub current: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FiltersResponse {
    pub enabled: bool,
    pub categories: Vec<String>,
}
