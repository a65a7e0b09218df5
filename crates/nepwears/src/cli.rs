//! CLI commands
//!
//! `collections` drives a real navigation controller against the configured
//! catalogue, so the output matches what the menus render.

use anyhow::{Context, Result};
use comfy_table::{Cell, ContentArrangement, Table};
use nepwears_core::menu::{collection_href, SHOP_ALL};
use nepwears_core::{
    CollectionItem, ManualScrollSource, NavSnapshot, NavigationController, StaticCollections,
    StorefrontConfig,
};

/// Load the catalogue through the controller and print the menu entries
pub async fn run_collections(config: &StorefrontConfig, json: bool) -> Result<()> {
    let snapshot = menu_snapshot(config).await?;

    if json {
        let value = collections_json(&snapshot);
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("Failed to serialize collections")?
        );
    } else {
        println!("{}", collections_table(snapshot.visible_collections()));
        let hidden = snapshot
            .collections
            .len()
            .saturating_sub(snapshot.visible_collections().len());
        if hidden > 0 {
            println!("{} more not shown in menus", hidden);
        }
    }

    Ok(())
}

async fn menu_snapshot(config: &StorefrontConfig) -> Result<NavSnapshot> {
    let scroll = ManualScrollSource::new();
    let mut controller = NavigationController::new(config.nav.clone());

    controller
        .initialize(&scroll, StaticCollections::new(config.collections.clone()))
        .context("Failed to initialize navigation")?
        .await;

    let snapshot = controller.snapshot();
    controller
        .teardown()
        .context("Failed to tear down navigation")?;
    Ok(snapshot)
}

fn collections_json(snapshot: &NavSnapshot) -> serde_json::Value {
    serde_json::json!({
        "status": snapshot.collections_status,
        "total": snapshot.collections.len(),
        "menu_limit": snapshot.collection_menu_limit,
        "menu": snapshot.visible_collections().iter().map(|item| serde_json::json!({
            "name": item.name,
            "slug": item.slug,
            "href": collection_href(&item.slug),
        })).collect::<Vec<_>>(),
    })
}

fn collections_table(items: &[CollectionItem]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Collection", "Route"]);

    table.add_row(vec![
        Cell::new("-"),
        Cell::new(SHOP_ALL.label),
        Cell::new(SHOP_ALL.href),
    ]);
    for (i, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&item.name),
            Cell::new(collection_href(&item.slug)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_menu_snapshot_caps_to_limit() {
        let mut config = StorefrontConfig::default();
        config
            .collections
            .push(CollectionItem::new("Winter Knits", "winter-knits"));

        let snapshot = menu_snapshot(&config).await.unwrap();
        assert_eq!(snapshot.collections.len(), 5);
        assert_eq!(snapshot.visible_collections().len(), 4);

        let value = collections_json(&snapshot);
        assert_eq!(value["total"], 5);
        assert_eq!(value["status"]["status"], "ready");
        assert_eq!(value["menu"][0]["href"], "/embroidered-shirt");
        assert_eq!(value["menu"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_table_starts_with_shop_all() {
        let items = nepwears_core::collections::default_collections();
        let rendered = collections_table(&items).to_string();

        let shop_all = rendered.find("Shop All").unwrap();
        let first = rendered.find("Embroidered Shirt").unwrap();
        assert!(shop_all < first);
        assert!(rendered.contains("/essential-linens"));
    }
}
