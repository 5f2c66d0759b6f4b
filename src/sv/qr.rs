use std::{io::Cursor, path::PathBuf};

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use tokio::fs;

use crate::{config::Config, prelude::*};

/// Writes QR images that link to the history page of an equipment item.
pub struct Qr<'a> {
  config: &'a Config,
}

fn render_png(content: &str) -> Result<Vec<u8>> {
  let code = QrCode::new(content.as_bytes())?;
  let image = code.render::<Luma<u8>>().min_dimensions(256, 256).build();

  let mut png = Vec::new();
  DynamicImage::ImageLuma8(image)
    .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
  Ok(png)
}

impl<'a> Qr<'a> {
  pub fn new(config: &'a Config) -> Self {
    Self { config }
  }

  pub fn file_name(equipment_id: i32) -> String {
    format!("qr_{equipment_id}.png")
  }

  pub fn path(&self, equipment_id: i32) -> PathBuf {
    self.config.qr_directory().join(Self::file_name(equipment_id))
  }

  /// Renders the deep link for `equipment_id`, replacing any earlier image,
  /// and returns the file name inside the QR directory.
  pub async fn generate(&self, equipment_id: i32) -> Result<String> {
    let link = self.config.history_link(equipment_id);
    let png = render_png(&link)?;

    fs::create_dir_all(self.config.qr_directory()).await?;
    fs::write(self.path(equipment_id), png).await?;

    debug!("QR code for equipment #{equipment_id} points to {link}");
    Ok(Self::file_name(equipment_id))
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  fn decode(path: &Path) -> String {
    let luma = image::open(path).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
      luma.width() as usize,
      luma.height() as usize,
      |x, y| luma.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);
    let (_, content) = grids[0].decode().unwrap();
    content
  }

  #[tokio::test]
  async fn test_generate_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
      qr_host: "192.168.0.10".into(),
      qr_port: 5000,
      static_dir: dir.path().to_path_buf(),
      ..Config::default()
    };
    let qr = Qr::new(&config);

    let first = qr.generate(7).await.unwrap();
    let first_bytes = std::fs::read(qr.path(7)).unwrap();
    let second = qr.generate(7).await.unwrap();

    assert_eq!(first, "qr_7.png");
    assert_eq!(first, second);
    assert_eq!(qr.path(7), dir.path().join("qr_codes").join("qr_7.png"));
    assert_eq!(std::fs::read(qr.path(7)).unwrap(), first_bytes);
    assert_eq!(decode(&qr.path(7)), "http://192.168.0.10:5000/historico/7");
  }

  #[tokio::test]
  async fn test_one_file_per_equipment() {
    let dir = tempfile::tempdir().unwrap();
    let config =
      Config { static_dir: dir.path().to_path_buf(), ..Config::default() };
    let qr = Qr::new(&config);

    qr.generate(1).await.unwrap();
    qr.generate(2).await.unwrap();

    let mut names: Vec<_> = std::fs::read_dir(config.qr_directory())
      .unwrap()
      .map(|entry| entry.unwrap().file_name().into_string().unwrap())
      .collect();
    names.sort();
    assert_eq!(names, ["qr_1.png", "qr_2.png"]);
    assert_eq!(decode(&qr.path(2)), config.history_link(2));
  }
}
