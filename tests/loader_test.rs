#[macro_use]
extern crate assert_float_eq;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use smart_week_rs::data::{load_dataset, DirectorySource, SheetSource, Table, TableSource};
use smart_week_rs::models::{BaseUnit, Numeric, Weekday};
use smart_week_rs::planner::{generate_plan, Preferences};
use smart_week_rs::PlannerError;

const HEADER: &str = "RecipeID,MealName,TotalTime,Tags,Ingredients\n";

fn write_table(dir: &Path, table: Table, rows: &str) {
    fs::write(dir.join(table.file_name()), rows).unwrap();
}

fn sample_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let path = dir.path();

    write_table(
        path,
        Table::Breakfast,
        &format!("{HEADER}1,Poha,20,Veg,Poha:1:cup|Peanuts:2:tbsp\n"),
    );
    write_table(
        path,
        Table::Dinner,
        &format!(
            "{HEADER}1,Dal Tadka,35,Veg,\"Toor Dal:1:cup|Garlic:4:clove\"\n\
             2,Rajma,ninety,Veg,Kidney Beans:1:cup\n"
        ),
    );
    write_table(
        path,
        Table::LunchMains,
        &format!("{HEADER}1,Chapati,30,,Atta Flour:2:cup\n"),
    );
    write_table(
        path,
        Table::LunchVegSides,
        &format!("{HEADER}1,Bhindi Fry,25,,Okra:250:g\n"),
    );
    write_table(path, Table::LunchNonVegSides, HEADER);
    write_table(
        path,
        Table::Prices,
        "IngredientName,Price,PackUnit,Brand\n\
         Atta Flour,3.00,1kg,Aashirvaad\n\
         Toor Dal,2.00,500 g,\n\
         Okra,1.20,pack,\n\
         Garlic,abc,3 pieces,\n",
    );

    dir
}

#[tokio::test]
async fn test_load_dataset_from_directory() {
    let dir = sample_dir();
    let dataset = load_dataset(&DirectorySource::new(dir.path())).await.unwrap();

    assert_eq!(dataset.row_count(Table::Breakfast), 1);
    assert_eq!(dataset.row_count(Table::Dinner), 2);
    assert_eq!(dataset.row_count(Table::LunchNonVegSides), 0);
    assert_eq!(dataset.row_count(Table::Prices), 4);

    let rajma = &dataset.pools.dinner[1];
    assert_eq!(rajma.total_time_minutes, Numeric::Unparsed);
    assert!(rajma.has_unparsed_fields());

    let toor = dataset.prices.get("Toor Dal").unwrap();
    assert_float_absolute_eq!(toor.base_quantity, 500.0, 1e-9);
    assert_eq!(toor.base_unit, BaseUnit::Grams);

    let okra = dataset.prices.get("Okra").unwrap();
    assert_eq!(okra.base_unit, BaseUnit::Pieces);

    assert!(dataset.prices.get("Garlic").unwrap().price_per_pack.is_unparsed());
    assert!(dataset.unpriced_ingredients().contains("Peanuts"));
}

#[tokio::test]
async fn test_generate_plan_from_loaded_tables() {
    let dir = sample_dir();
    let dataset = load_dataset(&DirectorySource::new(dir.path())).await.unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let report = generate_plan(&dataset, &Preferences::default(), &mut rng);

    assert_eq!(report.plan.len(), 7);
    assert_eq!(report.plan.get(Weekday::Monday).unwrap().breakfast.name(), "Poha");

    // Seven chapati lunches: 7 * 2 cups * 120 g.
    let atta = report.shopping_list.get("Atta Flour").unwrap();
    assert_float_absolute_eq!(atta.total_quantity(), 1680.0, 1e-9);
    assert_float_absolute_eq!(atta.estimated_cost.unwrap(), 5.04, 1e-9);

    // Garlic has a price row but no usable price.
    if let Some(garlic) = report.shopping_list.get("Garlic") {
        assert_eq!(garlic.estimated_cost, None);
    }
    assert_float_absolute_eq!(report.total_cost, report.shopping_list.total_cost(), 1e-9);
}

#[tokio::test]
async fn test_missing_table_fails_load() {
    let dir = sample_dir();
    fs::remove_file(dir.path().join(Table::LunchMains.file_name())).unwrap();

    let err = load_dataset(&DirectorySource::new(dir.path()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::ReadTable {
            table: Table::LunchMains,
            ..
        }
    ));
}

#[tokio::test]
async fn test_empty_essential_table_fails_load() {
    let dir = sample_dir();
    write_table(dir.path(), Table::Breakfast, HEADER);

    let err = load_dataset(&DirectorySource::new(dir.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::EmptyTable(Table::Breakfast)));
}

/// Answer every request with `403 Forbidden`, like a sheet that is not shared.
async fn forbidden_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 403 Forbidden\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    )
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

fn sheet_source(base_url: &str) -> SheetSource {
    let gids: HashMap<Table, String> = Table::ALL
        .iter()
        .enumerate()
        .map(|(i, table)| (*table, i.to_string()))
        .collect();
    SheetSource::new("sheet-id", gids).with_base_url(base_url)
}

#[tokio::test]
async fn test_forbidden_sheet_fails_fetch() {
    let base_url = forbidden_server().await;
    let source = sheet_source(&base_url);

    let err = source.fetch(Table::Prices).await.unwrap_err();
    assert!(matches!(
        err,
        PlannerError::Fetch {
            table: Table::Prices,
            ..
        }
    ));
    assert!(err.to_string().contains("Anyone with the link can view"));
}

#[tokio::test]
async fn test_forbidden_sheet_aborts_whole_load() {
    let base_url = forbidden_server().await;
    let source = sheet_source(&base_url);

    let err = load_dataset(&source).await.unwrap_err();
    assert!(matches!(err, PlannerError::Fetch { .. }), "{err}");
    assert!(err.to_string().contains("Anyone with the link can view"));
}
