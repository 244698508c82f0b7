//! HTTP-level integration tests for the vehicle endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vehicle_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/novo/carros",
        json!({"marca": "Volkswagen", "modelo": "Gol", "ano": 2019, "cor": "Branco"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"mensagem": "Carro cadastrado com sucesso!"})
    );

    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, "/lista/carros").await).await;
    let vehicles = list.as_array().unwrap();
    assert_eq!(vehicles.len(), 1);
    let id = vehicles[0]["idCarro"].as_i64().unwrap();
    assert_eq!(
        vehicles[0],
        json!({"idCarro": id, "marca": "Volkswagen", "modelo": "Gol", "ano": 2019, "cor": "Branco"})
    );

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/atualizar/carros/{id}"),
        json!({"marca": "Volkswagen", "modelo": "Gol G8", "ano": 2023, "cor": "Preto"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"mensagem": "Carro atualizado com sucesso!"})
    );

    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, "/lista/carros").await).await;
    assert_eq!(
        list,
        json!([{"idCarro": id, "marca": "Volkswagen", "modelo": "Gol G8", "ano": 2023, "cor": "Preto"}])
    );

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/remover/carros/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"mensagem": "Carro removido com sucesso!"})
    );

    let app = common::build_test_app(pool);
    assert_eq!(body_json(get(app, "/lista/carros").await).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_vehicle_with_text_year_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/novo/carros",
        json!({"marca": "Fiat", "modelo": "Uno", "ano": "dois mil", "cor": "Azul"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["mensagem"].as_str().unwrap().starts_with("Requisição inválida"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_absent_vehicle_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/remover/carros/31337").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["mensagem"],
        "Erro ao remover o carro. Entre em contato com o administrador do sistema."
    );
}
