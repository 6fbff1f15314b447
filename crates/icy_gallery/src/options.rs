use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{GalleryError, GalleryResult, GridGeometry};

/// Upper bound of records accepted per search
pub const MAX_ITEMS: usize = 18;
pub const GRID_COLS: usize = 6;
pub const PAD: f32 = 20.0;
pub const GAP: f32 = 10.0;

pub const CANVAS_WIDTH: u32 = 900;
pub const CANVAS_HEIGHT: u32 = 560;

pub const DEFAULT_SEARCH_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1/search";
pub const DEFAULT_OBJECT_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1/objects";
pub const DEFAULT_WEB_URL: &str = "https://www.metmuseum.org/art/collection";

const OPTIONS_FILE: &str = "options.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Collection search endpoint (`?hasImages=true&q=` is appended)
    pub search_url: String,
    /// Object detail endpoint (`/{id}` is appended)
    pub object_url: String,
    /// Public web collection, used for click-through navigation
    pub web_url: String,

    pub max_items: usize,
    pub grid_columns: usize,
    pub padding: f32,
    pub gap: f32,
    pub canvas_width: u32,
    pub canvas_height: u32,

    pub image_timeout_secs: u64,
    /// Upper bound for a single API request, connect included
    pub request_timeout_secs: u64,

    /// Keywords used by the "random keyword" command. Empty uses the built-in list.
    pub keywords: Vec<String>,

    /// TTF/OTF font used to draw text into snapshots
    pub font_path: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            object_url: DEFAULT_OBJECT_URL.to_string(),
            web_url: DEFAULT_WEB_URL.to_string(),
            max_items: MAX_ITEMS,
            grid_columns: GRID_COLS,
            padding: PAD,
            gap: GAP,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            image_timeout_secs: 15,
            request_timeout_secs: 30,
            keywords: Vec::new(),
            font_path: None,
        }
    }
}

impl Options {
    /// Directory holding the options file and the log files
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "icy_gallery").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn load_options() -> Self {
        if let Some(dir) = Self::config_dir() {
            if !dir.exists() && fs::create_dir_all(&dir).is_err() {
                log::error!("Can't create configuration directory {:?}", dir);
                return Self::default();
            }
            let options_file = dir.join(OPTIONS_FILE);
            if options_file.exists() {
                match Self::load_from(&options_file) {
                    Ok(options) => return options,
                    Err(err) => log::error!("Error reading options file: {}", err),
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> GalleryResult<Self> {
        let txt = fs::read_to_string(path)?;
        toml::from_str(&txt).map_err(|err| GalleryError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn store_options(&self) {
        if let Some(dir) = Self::config_dir() {
            if let Err(err) = self.store_to(&dir.join(OPTIONS_FILE)) {
                log::error!("Error writing options file: {}", err);
            }
        }
    }

    pub fn store_to(&self, path: &Path) -> GalleryResult<()> {
        let text = toml::to_string(self).map_err(|err| GalleryError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn grid_geometry(&self) -> GridGeometry {
        GridGeometry {
            canvas_width: self.canvas_width as f32,
            canvas_height: self.canvas_height as f32,
            columns: self.grid_columns.max(1),
            padding: self.padding,
            gap: self.gap,
        }
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
