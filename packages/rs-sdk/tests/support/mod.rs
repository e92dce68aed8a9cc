#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Writes `<dir>/<vintage>.sqlite` with the geoheader and B01001 tables.
pub fn write_vintage_file(dir: &Path, vintage: &str) -> PathBuf {
    let path = dir.join(format!("{vintage}.sqlite"));
    let conn = Connection::open(&path).expect("vintage file should open");
    conn.execute_batch(
        "CREATE TABLE geoheader (
             geoid TEXT NOT NULL,
             stusab TEXT NOT NULL,
             logrecno INTEGER NOT NULL,
             name TEXT,
             sumlevel TEXT
         );
         CREATE TABLE b01001 (
             stusab TEXT NOT NULL,
             logrecno INTEGER NOT NULL,
             b01001001 INTEGER,
             b01001003 INTEGER,
             b01001004 INTEGER,
             b01001005 INTEGER,
             b01001006 INTEGER,
             b01001027 INTEGER,
             b01001028 INTEGER,
             b01001029 INTEGER,
             b01001030 INTEGER
         );",
    )
    .expect("vintage schema should be created");
    path
}

pub fn insert_geography(
    path: &Path,
    geoid: &str,
    stusab: &str,
    logrecno: i64,
    name: &str,
    sumlevel: &str,
) {
    let conn = Connection::open(path).expect("vintage file should open");
    conn.execute(
        "INSERT INTO geoheader (geoid, stusab, logrecno, name, sumlevel) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![geoid, stusab, logrecno, name, sumlevel],
    )
    .expect("geoheader row should insert");
}

/// Inserts a B01001 row whose eight under-18 brackets all hold `bracket`.
pub fn insert_population(path: &Path, stusab: &str, logrecno: i64, total: i64, bracket: i64) {
    let conn = Connection::open(path).expect("vintage file should open");
    conn.execute(
        "INSERT INTO b01001 VALUES (?1, ?2, ?3, ?4, ?4, ?4, ?4, ?4, ?4, ?4, ?4)",
        params![stusab, logrecno, total, bracket],
    )
    .expect("b01001 row should insert");
}
