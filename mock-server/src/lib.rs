use axum::{
    extract::Query,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Success body served for a valid request. Defined independently from
/// the client crate so integration tests catch schema drift.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApodResponse {
    pub title: String,
    pub explanation: String,
    pub url: String,
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct ApodQuery {
    pub api_key: Option<String>,
    pub date: Option<String>,
    pub concept_tags: Option<String>,
}

pub fn app() -> Router {
    Router::new().route("/planetary/apod", get(get_apod))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_apod(
    Query(query): Query<ApodQuery>,
) -> Result<Json<ApodResponse>, (StatusCode, Json<Value>)> {
    match query.api_key.as_deref() {
        None | Some("") => Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": {
                    "code": "API_KEY_MISSING",
                    "message": "No api_key was supplied. Get one at https://api.nasa.gov"
                }
            })),
        )),
        Some(_) => {
            let date = query
                .date
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
            let concepts = query
                .concept_tags
                .is_some_and(|t| t.eq_ignore_ascii_case("true"))
                .then(|| vec!["astronomy".to_string(), "sky".to_string()]);
            Ok(Json(picture_for(&date, concepts)))
        }
    }
}

/// Deterministic picture for a date; the title embeds the date so
/// different days never share one.
fn picture_for(date: &str, concepts: Option<Vec<String>>) -> ApodResponse {
    ApodResponse {
        title: format!("Stars over the horizon ({date})"),
        explanation: format!("A test-fixture sky as it appeared on {date}."),
        url: format!("https://apod.nasa.gov/apod/image/{date}.jpg"),
        media_type: "image".to_string(),
        concepts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_expected_keys() {
        let body = picture_for("2020-01-01", None);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["title"], "Stars over the horizon (2020-01-01)");
        assert_eq!(json["media_type"], "image");
        assert_eq!(json["url"], "https://apod.nasa.gov/apod/image/2020-01-01.jpg");
        assert!(json.get("concepts").is_none());
    }

    #[test]
    fn concepts_serialize_when_present() {
        let body = picture_for("2020-01-01", Some(vec!["astronomy".to_string()]));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["concepts"][0], "astronomy");
    }

    #[test]
    fn titles_differ_across_dates() {
        let a = picture_for("2020-01-01", None);
        let b = picture_for("2020-01-02", None);
        assert_ne!(a.title, b.title);
    }
}
