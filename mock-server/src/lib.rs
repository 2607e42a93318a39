use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Account accepted by `/caption_image`.
pub const USERNAME: &str = "mock-user";
pub const PASSWORD: &str = "mock-pass";

pub const INVALID_LOGIN: &str = "Invalid username/password";
pub const NO_TEXTS: &str = "No texts specified.";
pub const UNKNOWN_TEMPLATE: &str = "Template not found";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Meme {
    pub id: String,
    pub name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub box_count: u32,
    pub captions: u64,
}

/// A caption the server has rendered, keyed by image id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Generated {
    pub template_id: String,
    pub texts: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub memes: Vec<Meme>,
    pub generated: HashMap<String, Generated>,
}

pub type Db = Arc<RwLock<Store>>;

fn meme(id: &str, name: &str, image: &str, width: u32, height: u32, box_count: u32, captions: u64) -> Meme {
    Meme {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://i.imgflip.com/{image}.jpg"),
        width,
        height,
        box_count,
        captions,
    }
}

/// Templates served by `/get_memes`, in catalog order.
pub fn seed_catalog() -> Vec<Meme> {
    vec![
        meme("181913649", "Drake Hotline Bling", "30b1gx", 1200, 1200, 2, 1_446_000),
        meme("87743020", "Two Buttons", "1g8my4", 600, 908, 3, 1_083_000),
        meme("112126428", "Distracted Boyfriend", "1ur9b0", 1200, 800, 3, 1_096_000),
        meme("61579", "One Does Not Simply", "1bij", 568, 335, 2, 374_000),
        meme("101470", "Ancient Aliens", "26am", 500, 437, 2, 312_000),
    ]
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store {
        memes: seed_catalog(),
        generated: HashMap::new(),
    }));
    Router::new()
        .route("/get_memes", get(get_memes))
        .route("/caption_image", post(caption_image))
        .route("/generated/{id}", get(get_generated))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_memes(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({ "success": true, "data": { "memes": store.memes } }))
}

fn failure(message: &str) -> Json<Value> {
    tracing::info!(%message, "caption rejected");
    Json(json!({ "success": false, "error_message": message }))
}

/// Pull `boxes[i][text]` fields out in index order, stopping at the first gap.
fn box_texts(fields: &[(String, String)]) -> Vec<String> {
    let lookup: HashMap<&str, &str> = fields
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    (0..)
        .map_while(|i| lookup.get(format!("boxes[{i}][text]").as_str()).map(|v| v.to_string()))
        .collect()
}

async fn caption_image(
    State(db): State<Db>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Json<Value> {
    let field = |name: &str| {
        fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    };

    if field("username") != USERNAME || field("password") != PASSWORD {
        return failure(INVALID_LOGIN);
    }

    let texts = box_texts(&fields);
    if texts.is_empty() {
        return failure(NO_TEXTS);
    }

    let template_id = field("template_id").to_string();
    let mut store = db.write().await;
    let Some(template) = store.memes.iter_mut().find(|m| m.id == template_id) else {
        return failure(UNKNOWN_TEMPLATE);
    };
    template.captions += 1;

    let image_id = Uuid::new_v4().simple().to_string();
    tracing::info!(%template_id, %image_id, boxes = texts.len(), "caption generated");
    store
        .generated
        .insert(image_id.clone(), Generated { template_id, texts });

    Json(json!({
        "success": true,
        "data": {
            "url": format!("https://i.imgflip.com/{image_id}.jpg"),
            "page_url": format!("https://imgflip.com/i/{image_id}"),
        }
    }))
}

async fn get_generated(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Generated>, StatusCode> {
    let store = db.read().await;
    store.generated.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
