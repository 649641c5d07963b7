use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use crate::{
    assets::fonts::FontSet,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    timeline::timing::TimingSecs,
};

const SAMPLE_IMAGE_URL: &str = "https://cdn.pixabay.com/photo/2024/05/27/07/46/bee-8790316_640.jpg";

/// Host-supplied composition parameters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReelProps {
    /// Heading text shown in the title scene.
    pub title: String,
}

impl Default for ReelProps {
    fn default() -> Self {
        Self {
            title: "Top 5 Best Movies".to_string(),
        }
    }
}

/// One ranked entry of the slideshow.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovieItem {
    /// Stable identifier.
    pub id: u32,
    /// Caption text.
    pub title: String,
    /// Remote image shown full-bleed behind the caption.
    pub image_url: String,
}

impl MovieItem {
    /// Build an item.
    pub fn new(id: u32, title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: image_url.into(),
        }
    }

    /// Built-in five-entry list.
    pub fn sample_list() -> Vec<MovieItem> {
        [
            "1. The Matrix",
            "2. Inception",
            "3. Interstellar",
            "4. The Dark Knight",
            "5. Gladiator",
        ]
        .into_iter()
        .zip(1u32..)
        .map(|(title, id)| MovieItem::new(id, title, SAMPLE_IMAGE_URL))
        .collect()
    }
}

/// Full reel configuration, usually read from JSON.
///
/// Every field is optional in JSON and falls back to the built-in reel:
/// 30 fps, 1280x720, the sample movie list, and 2.5s / 3s / 0.5s timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReelConfig {
    /// Composition parameters.
    #[serde(default)]
    pub props: ReelProps,
    /// Timeline frame rate.
    #[serde(default)]
    pub fps: Fps,
    /// Output canvas.
    #[serde(default)]
    pub canvas: Canvas,
    /// Ordered movie records, one item scene each.
    #[serde(default = "MovieItem::sample_list")]
    pub movies: Vec<MovieItem>,
    /// Scene lengths in seconds.
    #[serde(default)]
    pub timing: TimingSecs,
    /// Font families referenced by text styles.
    #[serde(default)]
    pub fonts: FontSet,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            props: ReelProps::default(),
            fps: Fps::default(),
            canvas: Canvas::default(),
            movies: MovieItem::sample_list(),
            timing: TimingSecs::default(),
            fonts: FontSet::default(),
        }
    }
}

impl ReelConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse reel config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("parse reel config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open reel config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the structural invariants evaluation relies on.
    ///
    /// Movie ids key the item scenes and must be unique. Title and movie text are left to
    /// the host's parameter schema.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        let mut seen = HashSet::with_capacity(self.movies.len());
        for movie in &self.movies {
            if !seen.insert(movie.id) {
                return Err(ReelError::validation(format!(
                    "duplicate movie id {}",
                    movie.id
                )));
            }
        }
        self.timing.validate()?;
        self.fonts.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
