use census_rs_sdk::{
    open_census, CensusBackend, ChildLevel, ErrorCode, Geoid, MetricNumber, OpenCensusConfig,
    PostgresBackend, PostgresConfig, StoredLocator, Value, VintageCatalog,
};
use postgresql_embedded::PostgreSQL;
use sqlx::{Executor, PgPool};

const DATABASE: &str = "census_test";

/// One vintage schema with zero-padded `varchar` locators, as loaded from the
/// census extracts.
const SCHEMA: &str = r#"
CREATE SCHEMA "acs2011_5yr";
CREATE TABLE "acs2011_5yr".geoheader (
    geoid varchar(40) NOT NULL,
    stusab varchar(2) NOT NULL,
    logrecno varchar(7) NOT NULL,
    name text,
    sumlevel varchar(3)
);
CREATE TABLE "acs2011_5yr".b01001 (
    stusab varchar(2) NOT NULL,
    logrecno varchar(7) NOT NULL,
    b01001001 integer,
    b01001003 integer,
    b01001004 integer,
    b01001005 integer,
    b01001006 integer,
    b01001027 integer,
    b01001028 integer,
    b01001029 integer,
    b01001030 integer
);
INSERT INTO "acs2011_5yr".geoheader VALUES
    ('04000US06', 'CA', '0000001', 'California', '040'),
    ('05000US06075', 'CA', '0000020', 'San Francisco County', '050'),
    ('05000US06001', 'CA', '0000021', 'Alameda County', '050');
INSERT INTO "acs2011_5yr".b01001 VALUES
    ('CA', '0000001', 80, 5, 5, 5, 5, 1, 1, 1, 0),
    ('CA', '0000020', 800, 10, 10, 10, 10, 10, 10, 10, 10),
    ('CA', '0000021', 1500, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL);
"#;

async fn start_postgres() -> (PostgreSQL, String) {
    let mut postgresql = PostgreSQL::default();
    postgresql
        .setup()
        .await
        .expect("embedded postgres should install");
    postgresql
        .start()
        .await
        .expect("embedded postgres should start");
    postgresql
        .create_database(DATABASE)
        .await
        .expect("test database should be created");
    let url = postgresql.settings().url(DATABASE);

    let pool = PgPool::connect(&url).await.expect("setup pool should connect");
    pool.execute(SCHEMA).await.expect("fixture schema should load");
    pool.close().await;

    (postgresql, url)
}

fn geoid(value: &str) -> Geoid {
    Geoid::parse(value).expect("geoid should parse")
}

async fn values_decode_by_type(backend: &PostgresBackend) {
    let result = backend
        .execute(
            "SELECT 1::int4 AS small, $1::int8 AS big, 0.5::float8 AS ratio, \
             $2::text AS label, NULL::text AS missing, true AS flag",
            &[Value::Integer(9_000_000_000), Value::Text("CA".to_string())],
        )
        .await
        .expect("typed select should succeed");

    assert_eq!(
        result.columns,
        vec!["small", "big", "ratio", "label", "missing", "flag"]
    );
    assert_eq!(
        result.rows,
        vec![vec![
            Value::Integer(1),
            Value::Integer(9_000_000_000),
            Value::Real(0.5),
            Value::Text("CA".to_string()),
            Value::Null,
            Value::Integer(1),
        ]]
    );
}

async fn numeric_columns_are_rejected(backend: &PostgresBackend) {
    let err = backend
        .execute("SELECT 1.5::numeric AS share", &[])
        .await
        .expect_err("numeric should not decode");

    assert!(err.is(ErrorCode::Backend));
    assert!(err.description.contains("NUMERIC"));
}

async fn empty_results_keep_their_columns(backend: &PostgresBackend) {
    let result = backend
        .execute(
            "SELECT geoid, name FROM \"acs2011_5yr\".geoheader WHERE logrecno = $1",
            &[Value::Text("9999999".to_string())],
        )
        .await
        .expect("empty select should succeed");

    assert!(result.rows.is_empty());
    assert_eq!(result.columns, vec!["geoid", "name"]);
}

async fn census_reads_varchar_locators(url: &str) {
    let backend = PostgresBackend::connect(&PostgresConfig::new(url))
        .await
        .expect("backend should connect");
    let census = open_census(OpenCensusConfig {
        backend: Box::new(backend),
        catalog: VintageCatalog::acs_default(),
    })
    .await
    .expect("census should open");

    let resolved = census
        .resolve(&geoid("04000US06"), None)
        .await
        .expect("schemas that do not exist are skipped");
    assert_eq!(resolved.vintage.id(), "acs2011_5yr");
    assert_eq!(
        resolved.key.stored(),
        &StoredLocator::Text("0000001".to_string())
    );

    let doc = census
        .summary(&geoid("04000US06"), None)
        .await
        .expect("summary should assemble");
    assert_eq!(
        doc.metric("demographics", "population", "percent_under_18")
            .expect("percent metric")
            .values
            .this,
        Some(MetricNumber::Decimal(28.8))
    );

    let projection = census
        .table_details(
            "acs2011_5yr",
            "b01001",
            &[geoid("04000US06")],
            Some(ChildLevel::County),
        )
        .await
        .expect("table details should load");
    assert_eq!(projection.len(), 2);
    assert_eq!(
        projection[&geoid("05000US06075")]["b01001001"],
        Value::Integer(800)
    );
    assert_eq!(
        projection[&geoid("05000US06001")]["b01001003"],
        Value::Null
    );

    let matches = census
        .search("San", Some("acs2011_5yr"))
        .await
        .expect("search should run");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].stusab, "CA");
}

#[tokio::test]
async fn postgres_backend_against_embedded_server() {
    let (postgresql, url) = start_postgres().await;
    let backend = PostgresBackend::connect(&PostgresConfig::new(url.as_str()))
        .await
        .expect("backend should connect");

    values_decode_by_type(&backend).await;
    numeric_columns_are_rejected(&backend).await;
    empty_results_keep_their_columns(&backend).await;
    census_reads_varchar_locators(&url).await;

    postgresql.stop().await.expect("embedded postgres should stop");
}
