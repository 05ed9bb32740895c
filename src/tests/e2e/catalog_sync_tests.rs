use crate::modules::catalog::adapters::outbound::http_product_store::HttpProductStore;
use crate::modules::catalog::controller::CatalogController;
use crate::modules::catalog::core::draft::DraftField;
use crate::modules::catalog::ports::{ProductStore, StoreError};
use crate::modules::catalog::use_cases::delete_product::handler::DeleteOutcome;
use crate::modules::catalog::use_cases::submit_product::handler::SubmitOutcome;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::prompter::ScriptedPrompter;
use reqwest::{Client, Url};
use std::sync::Arc;

async fn spawn_products_api() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(AppState::in_memory()))
            .await
            .unwrap();
    });
    Url::parse(&format!("http://{addr}/products")).unwrap()
}

type Controller = CatalogController<HttpProductStore, ScriptedPrompter>;

async fn add(controller: &mut Controller, name: &str, price: &str, sku: &str) -> SubmitOutcome {
    controller.set_field(DraftField::Name, name);
    controller.set_field(DraftField::Price, price);
    controller.set_field(DraftField::Sku, sku);
    controller.submit().await
}

#[tokio::test]
async fn keeps_the_catalog_in_sync_with_the_products_api() {
    let url = spawn_products_api().await;
    let store = Arc::new(HttpProductStore::new(Client::new(), url));
    let prompter = Arc::new(ScriptedPrompter::accepting());
    let mut controller = CatalogController::new(store.clone(), prompter.clone());

    controller.mount().await;
    assert!(controller.state().products.is_empty());
    assert_eq!(controller.state().error, None);

    assert!(matches!(
        add(&mut controller, "Teclado", "120", "TEC-1").await,
        SubmitOutcome::Created(_)
    ));
    let created = add(&mut controller, "Água mineral", "3.5", "AGU-1").await;
    let SubmitOutcome::Created(agua) = created else {
        panic!("expected create, got {created:?}");
    };
    assert_eq!(agua.missing_letter, Some('b'));

    let names: Vec<&str> = controller
        .state()
        .products
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Água mineral", "Teclado"]);

    // Taking another product's sku is rejected with the server's message.
    assert!(controller.begin_edit_at(2));
    controller.set_field(DraftField::Sku, "AGU-1");
    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(
        controller.state().error.as_deref(),
        Some("SKU already registered")
    );
    assert!(controller.state().is_editing());

    controller.set_field(DraftField::Sku, "TEC-2");
    assert!(matches!(
        controller.submit().await,
        SubmitOutcome::Updated(ref p) if p.sku == "TEC-2"
    ));
    assert!(!controller.state().is_editing());

    assert_eq!(controller.delete_at(1).await, Some(DeleteOutcome::Deleted));
    let remaining: Vec<&str> = controller
        .state()
        .products
        .iter()
        .map(|p| p.sku.as_str())
        .collect();
    assert_eq!(remaining, vec!["TEC-2"]);
    assert_eq!(
        *prompter.notices.lock().await,
        vec![
            "Produto cadastrado com sucesso!".to_string(),
            "Produto cadastrado com sucesso!".to_string(),
            "Produto atualizado com sucesso!".to_string(),
            "Produto excluído com sucesso!".to_string(),
        ]
    );
}

#[tokio::test]
async fn reports_missing_products_by_status() {
    let url = spawn_products_api().await;
    let store = HttpProductStore::new(Client::new(), url);

    assert_eq!(
        store
            .delete_product("0190a1b2-0000-7000-8000-000000000099")
            .await,
        Err(StoreError::Status { status: 404 })
    );

    let input = crate::modules::catalog::core::product::ProductInput {
        name: "Mouse".into(),
        price: 10.0,
        sku: "MOU-1".into(),
    };
    assert_eq!(
        store
            .update_product("0190a1b2-0000-7000-8000-000000000099", &input)
            .await,
        Err(StoreError::Rejected {
            status: 404,
            message: Some("Product not found".into()),
        })
    );
}
