use std::{env, path::PathBuf};

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  /// Port the HTTP server binds on all interfaces.
  pub port: u16,
  /// Address embedded in QR deep links. Never taken from the request, so
  /// links stay stable no matter which interface served the page.
  pub qr_host: String,
  pub qr_port: u16,
  pub static_dir: PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_url: String::from("sqlite:equipamentos.db?mode=rwc"),

      port: 5000,
      qr_host: String::from("192.168.1.151"),
      qr_port: 5000,
      static_dir: PathBuf::from("static"),
    }
  }
}

fn var_or<T: std::str::FromStr>(key: &str, default: T) -> T {
  env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl Config {
  pub fn from_env() -> Self {
    let defaults = Self::default();
    let port = var_or("PORT", defaults.port);

    Self {
      database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
      port,
      qr_host: env::var("QR_HOST").unwrap_or(defaults.qr_host),
      qr_port: var_or("QR_PORT", port),
      static_dir: env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or(defaults.static_dir),
    }
  }

  pub fn qr_directory(&self) -> PathBuf {
    self.static_dir.join("qr_codes")
  }

  /// Deep link to the history page of one equipment item.
  pub fn history_link(&self, equipment_id: i32) -> String {
    format!(
      "http://{}:{}/historico/{}",
      self.qr_host, self.qr_port, equipment_id
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_history_link() {
    let config = Config {
      qr_host: "10.0.0.5".into(),
      qr_port: 8080,
      ..Config::default()
    };

    assert_eq!(config.history_link(7), "http://10.0.0.5:8080/historico/7");
  }

  #[test]
  fn test_qr_directory_is_under_static() {
    let config =
      Config { static_dir: PathBuf::from("/srv/app"), ..Config::default() };

    assert_eq!(config.qr_directory(), PathBuf::from("/srv/app/qr_codes"));
  }
}
