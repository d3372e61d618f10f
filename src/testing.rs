//! Shared test fixtures: an in-memory dataset with the production schema

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

const SCHEMA: &str = "
CREATE TABLE players (
    player_id TEXT PRIMARY KEY,
    family_name TEXT NOT NULL,
    given_name TEXT NOT NULL,
    birth_date TEXT,
    female INTEGER NOT NULL,
    goal_keeper INTEGER NOT NULL,
    defender INTEGER NOT NULL,
    midfielder INTEGER NOT NULL,
    forward INTEGER NOT NULL
);

CREATE TABLE teams (
    team_id TEXT PRIMARY KEY,
    team_name TEXT NOT NULL,
    team_code TEXT NOT NULL,
    confederation TEXT NOT NULL,
    mens_team INTEGER NOT NULL,
    womens_team INTEGER NOT NULL
);

CREATE TABLE tournaments (
    tournament_id TEXT PRIMARY KEY,
    tournament_name TEXT NOT NULL,
    year INTEGER NOT NULL,
    host_country TEXT NOT NULL,
    winner TEXT NOT NULL
);

CREATE TABLE stadiums (
    stadium_id TEXT PRIMARY KEY,
    stadium_name TEXT NOT NULL,
    city_name TEXT NOT NULL,
    country_name TEXT NOT NULL,
    stadium_capacity INTEGER NOT NULL
);

CREATE TABLE matches (
    match_id TEXT PRIMARY KEY,
    tournament_id TEXT NOT NULL,
    match_name TEXT NOT NULL,
    stage TEXT NOT NULL,
    match_date TEXT NOT NULL,
    stadium_id TEXT NOT NULL,
    home_team_id TEXT NOT NULL,
    away_team_id TEXT NOT NULL,
    home_team_score INTEGER NOT NULL,
    away_team_score INTEGER NOT NULL,
    result TEXT NOT NULL
);

CREATE TABLE goals (
    goal_id TEXT PRIMARY KEY,
    tournament_id TEXT NOT NULL,
    match_id TEXT NOT NULL,
    team_id TEXT NOT NULL,
    player_id TEXT NOT NULL,
    minute_regulation INTEGER,
    own_goal INTEGER NOT NULL,
    penalty INTEGER NOT NULL
);

CREATE TABLE appearances (
    tournament_id TEXT NOT NULL,
    match_id TEXT NOT NULL,
    team_id TEXT NOT NULL,
    player_id TEXT NOT NULL,
    position_code TEXT NOT NULL,
    starter INTEGER NOT NULL,
    substitute INTEGER NOT NULL
);
";

// Twelve players so the window arithmetic scenarios (page 3 of size 5, etc.)
// come straight from the fixture.
const SEED: &str = "
INSERT INTO players VALUES
    ('P-00001', 'Ayala',     'Roberto', '1976-04-14', 0, 0, 1, 0, 0),
    ('P-00002', 'Baggio',    'Roberto', '1967-02-18', 0, 0, 0, 0, 1),
    ('P-00003', 'Banks',     'Gordon',  '1937-12-30', 0, 1, 0, 0, 0),
    ('P-00004', 'Charlton',  'Bobby',   '1937-10-11', 0, 0, 0, 1, 0),
    ('P-00005', 'Didi',      'Waldyr',  '1928-10-08', 0, 0, 0, 1, 0),
    ('P-00006', 'Eusebio',   'Ferreira','1942-01-25', 0, 0, 0, 0, 1),
    ('P-00007', 'Fontaine',  'Just',    '1933-08-18', 0, 0, 0, 0, 1),
    ('P-00008', 'Garrincha', 'Manuel',  '1933-10-28', 0, 0, 0, 0, 1),
    ('P-00009', 'Hamm',      'Mia',     '1972-03-17', 1, 0, 0, 0, 1),
    ('P-00010', 'Kahn',      'Oliver',  '1969-06-15', 0, 1, 0, 0, 0),
    ('P-00011', 'Lloyd',     'Carli',   '1982-07-16', 1, 0, 0, 1, 0),
    ('P-00012', 'Maradona',  'Diego',   '1960-10-30', 0, 0, 0, 0, 1);

INSERT INTO teams VALUES
    ('T-01', 'Uruguay',       'URU', 'CONMEBOL', 1, 0),
    ('T-02', 'Argentina',     'ARG', 'CONMEBOL', 1, 0),
    ('T-03', 'France',        'FRA', 'UEFA',     1, 1),
    ('T-04', 'United States', 'USA', 'CONCACAF', 0, 1);

INSERT INTO tournaments VALUES
    ('WC-1930', '1930 FIFA World Cup', 1930, 'Uruguay', 'Uruguay'),
    ('WC-2022', '2022 FIFA World Cup', 2022, 'Qatar',   'Argentina');

INSERT INTO stadiums VALUES
    ('S-001', 'Estadio Centenario', 'Montevideo',     'Uruguay', 90000),
    ('S-002', 'Lusail Stadium',     'Lusail',         'Qatar',   88966),
    ('S-003', 'Maracana',           'Rio de Janeiro', 'Brazil',  78838);

INSERT INTO matches VALUES
    ('M-1930-01', 'WC-1930', 'Uruguay v Argentina', 'final',      '1930-07-30', 'S-001', 'T-01', 'T-02', 4, 2, 'home team win'),
    ('M-2022-01', 'WC-2022', 'Argentina v France',  'final',      '2022-12-18', 'S-002', 'T-02', 'T-03', 3, 3, 'draw'),
    ('M-2022-02', 'WC-2022', 'France v Uruguay',    'semi-final', '2022-12-14', 'S-002', 'T-03', 'T-01', 2, 0, 'home team win');

INSERT INTO goals VALUES
    ('G-00001', 'WC-1930', 'M-1930-01', 'T-01', 'P-00005', 12,   0, 0),
    ('G-00002', 'WC-1930', 'M-1930-01', 'T-02', 'P-00012', 20,   0, 0),
    ('G-00003', 'WC-1930', 'M-1930-01', 'T-01', 'P-00005', 57,   0, 0),
    ('G-00004', 'WC-2022', 'M-2022-01', 'T-02', 'P-00012', 23,   0, 1),
    ('G-00005', 'WC-2022', 'M-2022-01', 'T-03', 'P-00007', NULL, 0, 1);

INSERT INTO appearances VALUES
    ('WC-1930', 'M-1930-01', 'T-01', 'P-00003', 'GK', 1, 0),
    ('WC-1930', 'M-1930-01', 'T-01', 'P-00005', 'MF', 1, 0),
    ('WC-1930', 'M-1930-01', 'T-02', 'P-00012', 'FW', 1, 0),
    ('WC-2022', 'M-2022-01', 'T-02', 'P-00012', 'FW', 0, 1),
    ('WC-2022', 'M-2022-01', 'T-03', 'P-00007', 'FW', 1, 0);
";

/// An in-memory pool with the production schema and no rows
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::raw_sql(SCHEMA).execute(&pool).await.expect("schema");
    pool
}

/// An in-memory pool with the production schema and the seeded fixture
pub(crate) async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    sqlx::raw_sql(SEED).execute(&pool).await.expect("seed");
    pool
}
