use crate::{config::Config, prelude::*, sv};

pub struct Services<'a> {
  pub equipment: sv::Equipment<'a>,
  pub history: sv::History<'a>,
  pub qr: sv::Qr<'a>,
}

pub struct AppState {
  pub db: DatabaseConnection,
  pub config: Config,
}

impl AppState {
  /// Connects to the store and brings its schema up to date. A failed
  /// migration is fatal: the server never runs against a partial schema.
  pub async fn new(config: Config) -> Result<Self> {
    info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;

    info!("Running migrations...");
    Migrator::up(&db, None).await.map_err(Error::Migration)?;

    Ok(Self::with_db(db, config))
  }

  pub fn with_db(db: DatabaseConnection, config: Config) -> Self {
    Self { db, config }
  }

  pub fn sv(&self) -> Services<'_> {
    Services {
      equipment: sv::Equipment::new(&self.db),
      history: sv::History::new(&self.db),
      qr: sv::Qr::new(&self.config),
    }
  }
}
