//! Gallery configuration

use crate::{default_keybindings, GalleryError, MediaItem, MediaList};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main gallery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub general: GeneralConfig,
    pub grid: GridConfig,
    pub items: Vec<MediaItem>,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            grid: GridConfig::default(),
            items: default_items(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub title: String,
    pub theme: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: "Image Gallery".to_string(),
            theme: "dark".to_string(),
            window_width: 1280,
            window_height: 800,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Thumbnails per row
    pub columns: usize,
    /// Longest edge of decoded images, in pixels
    pub max_image_edge: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            max_image_edge: 2048,
        }
    }
}

impl GalleryConfig {
    /// Load configuration from the default location
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a file, falling back to defaults if it is missing
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&content).map_err(GalleryError::from)?;
            tracing::info!("Configuration loaded from {:?}", config_path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a file
    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "ImageGallery", "ImageGallery")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }

    /// Validate the configured items into a gallery list
    pub fn media_list(&self) -> Result<MediaList, GalleryError> {
        if self.grid.columns == 0 {
            return Err(GalleryError::Config("grid.columns must be at least 1".into()));
        }
        MediaList::new(self.items.clone())
    }
}

fn default_items() -> Vec<MediaItem> {
    vec![
        MediaItem::new(
            "https://images.ctfassets.net/7mmwp5vb96tc/1UmmmbBoLgvDszcSXjumQc/f8f1e32065c244489ce3050bcd85cec3/Norway_Vikingen_HGR_163147_Photo_Espen_Mills.jpg?q=75&w=3840&fm=webp",
            "Norwegian Mountain Range",
        ),
        MediaItem::new(
            "https://static01.nyt.com/images/2017/10/22/travel/22Norway1/22Norway1-superJumbo.jpg",
            "Norway Luxury Housing",
        ),
        MediaItem::new(
            "https://www.travelandleisure.com/thmb/BWJQU1XbrF_rA9ffCANSLeDfhUY=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/TAL-northern-lights-SOLARMAX0124-a4a1d62e9991474183434a3d2a670217.jpg",
            "Aurora Borealis",
        ),
        MediaItem::new(
            "https://img.freepik.com/free-photo/glowing-spaceship-orbits-planet-starry-galaxy-generated-by-ai_188544-9655.jpg?size=626&ext=jpg&ga=GA1.1.2008272138.1713139200&semt=sph",
            "Space Wallpaper",
        ),
        MediaItem::new(
            "https://api.time.com/wp-content/uploads/2015/10/iconic-space-photos-armstrong-moon-nasa1.jpg",
            "Astronaut on the Moon",
        ),
        MediaItem::new(
            "https://www.worldcampus.psu.edu/sites/default/files/2023-01/old-main-wide_2320x1305.jpg",
            "PSU Old Main",
        ),
        MediaItem::new(
            "https://dxbhsrqyrr690.cloudfront.net/sidearm.nextgen.sites/gopsusports.com/images/2023/9/24/DSC_9146.jpg",
            "PSU Whiteout with Fireworks",
        ),
        MediaItem::new(
            "https://cdn.learfield.com/wp-content/uploads/2016/11/Penn-State2.jpg",
            "PSU Whiteout game",
        ),
        MediaItem::new(
            "https://www.state.gov/wp-content/uploads/2019/04/Japan-2107x1406.jpg",
            "Japanese Pagoda",
        ),
    ]
}
