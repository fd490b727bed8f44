mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn webinar_lifecycle_paths() -> Result<()> {
    let upstream = common::MockUpstream::start().await?;
    let (app, _state) = common::gateway(&upstream.base_url)?;
    upstream.reply(StatusCode::OK, json!({ "id": 555, "topic": "Launch" }));

    let (status, body) = common::send(&app, Method::GET, "/api/webinars/555", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 555, "topic": "Launch" }));
    assert_eq!(upstream.last().path, "/v2/webinars/555");

    let webinar = json!({ "topic": "Launch", "type": 5 });
    common::send(&app, Method::POST, "/api/webinars/host-1", Some(webinar.clone())).await?;
    let seen = upstream.last();
    assert_eq!(seen.path, "/v2/users/host-1/webinars");
    assert_eq!(seen.body, Some(webinar));

    common::send(&app, Method::PATCH, "/api/webinars/555", Some(json!({ "agenda": "Q&A" }))).await?;
    let seen = upstream.last();
    assert_eq!(seen.method, Method::PATCH);
    assert_eq!(seen.path, "/v2/webinars/555");

    common::send(&app, Method::DELETE, "/api/webinars/555", None).await?;
    let seen = upstream.last();
    assert_eq!(seen.method, Method::DELETE);
    assert_eq!(seen.path, "/v2/webinars/555");
    Ok(())
}

#[tokio::test]
async fn webinar_registrants() -> Result<()> {
    let upstream = common::MockUpstream::start().await?;
    let (app, _state) = common::gateway(&upstream.base_url)?;

    common::send(
        &app,
        Method::GET,
        "/api/webinars/555/registrants?next_page_token=n2&status=approved",
        None,
    )
    .await?;
    let seen = upstream.last();
    assert_eq!(seen.path, "/v2/webinars/555/registrants");
    assert_eq!(seen.query.as_deref(), Some("status=approved&next_page_token=n2"));

    let update = json!({ "action": "deny", "registrants": [{ "email": "x@y.com" }] });
    common::send(&app, Method::PUT, "/api/webinars/555/registrants/status", Some(update.clone())).await?;
    let seen = upstream.last();
    assert_eq!(seen.method, Method::PUT);
    assert_eq!(seen.path, "/v2/webinars/555/registrants/status");
    assert_eq!(seen.body, Some(update));

    common::send(&app, Method::POST, "/api/webinars/555/registrants", Some(json!({ "email": "x@y.com" }))).await?;
    let seen = upstream.last();
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.path, "/v2/webinars/555/registrants");
    Ok(())
}

#[tokio::test]
async fn webinar_participants_report_error_is_relayed() -> Result<()> {
    let upstream = common::MockUpstream::start().await?;
    let (app, _state) = common::gateway(&upstream.base_url)?;
    upstream.reply(
        StatusCode::BAD_REQUEST,
        json!({ "code": 200, "message": "Only available for paid accounts." }),
    );

    let (status, body) = common::send(&app, Method::GET, "/api/webinars/report/555/participants", None).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Only available for paid accounts." }));
    assert_eq!(upstream.last().path, "/v2/report/webinars/555/participants");
    Ok(())
}
