use std::sync::Arc;

use anyhow::Result;
use box_tracker_core::NewBox;
use box_tracker_service::BoxService;

async fn service() -> Result<BoxService> {
    let (storage, _) = crate::open_backend().await?;
    Ok(BoxService::new(Arc::new(storage)))
}

pub(crate) async fn list(include_hidden: bool) -> Result<()> {
    let boxes = service().await?.list(include_hidden).await?;
    println!("{}", serde_json::to_string_pretty(&boxes)?);
    Ok(())
}

pub(crate) async fn show(id: i32) -> Result<()> {
    let found = service().await?.get(id).await?;
    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

pub(crate) async fn add(
    number: i32,
    room: String,
    contents: String,
    image_url: Option<String>,
) -> Result<()> {
    let input = NewBox { number, room, contents, image_url };
    let created = service().await?.create(input).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}
