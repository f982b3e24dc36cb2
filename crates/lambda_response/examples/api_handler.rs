use lambda_response::{Response, ResponseBuilder, ResponseError, SqsResponse, SqsResponseBuilder, StatusCode};
use serde_json::{Value, json};

async fn handle(event: Value) -> Result<Response, ResponseError> {
    match event.get("name").and_then(Value::as_str) {
        Some(name) => ResponseBuilder::new()
            .status(StatusCode::OK)
            .json(json!({ "message": format!("Hello {name}!") })),
        None => ResponseBuilder::new()
            .status(StatusCode::BAD_REQUEST)
            .json(json!({ "error": "missing name" })),
    }
}

async fn handle_batch(records: &[(&str, bool)]) -> SqsResponse {
    let mut res = SqsResponseBuilder::new();
    for (id, processed) in records {
        if !processed {
            res.add_failure(*id);
        }
    }
    res.build()
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let response = handle(json!({ "name": "world" })).await.unwrap();
    println!("{}", serde_json::to_string_pretty(&response).unwrap());

    let report = handle_batch(&[("m-1", true), ("m-2", false), ("m-3", false)]).await;
    println!("{}", serde_json::to_string(&report).unwrap());
}
