//! Font registration.
//!
//! Text styles only carry family names. The host loads the faces behind those names, once,
//! before any frame is evaluated: [`FontSet::prepare`] drives a [`FontLoader`] and hands back
//! [`PreparedFonts`], which [`crate::Reel::new`] requires.

use crate::foundation::error::{ReelError, ReelResult};

/// Host hook that makes a font family available to its text renderer.
pub trait FontLoader {
    /// Load `family`. Called once per family, in declaration order.
    fn load_family(&mut self, family: &str) -> ReelResult<()>;
}

/// Font families used by the reel's two text roles.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FontSet {
    /// Title heading family.
    #[serde(default = "default_heading_family")]
    pub heading: String,
    /// Movie caption family.
    #[serde(default = "default_caption_family")]
    pub caption: String,
}

fn default_heading_family() -> String {
    "Fjalla One".to_string()
}

fn default_caption_family() -> String {
    "Archivo Black".to_string()
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            heading: default_heading_family(),
            caption: default_caption_family(),
        }
    }
}

impl FontSet {
    /// Reject blank family names.
    pub fn validate(&self) -> ReelResult<()> {
        for (role, family) in [("heading", &self.heading), ("caption", &self.caption)] {
            if family.trim().is_empty() {
                return Err(ReelError::validation(format!(
                    "{role} font family must be non-empty"
                )));
            }
        }
        Ok(())
    }

    /// Register both families with `loader` and return the proof of registration.
    #[tracing::instrument(skip(self, loader))]
    pub fn prepare(&self, loader: &mut dyn FontLoader) -> ReelResult<PreparedFonts> {
        self.validate()?;
        for family in [&self.heading, &self.caption] {
            loader.load_family(family)?;
            tracing::debug!(family = family.as_str(), "font family registered");
        }
        Ok(PreparedFonts {
            heading: self.heading.clone(),
            caption: self.caption.clone(),
        })
    }
}

/// Family names whose faces the host has already loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedFonts {
    heading: String,
    caption: String,
}

impl PreparedFonts {
    /// Heading family name.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Caption family name.
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// In-memory [`FontLoader`] that records registered families.
#[derive(Clone, Debug, Default)]
pub struct FontRegistry {
    families: Vec<String>,
}

impl FontRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once `family` has been registered.
    pub fn contains(&self, family: &str) -> bool {
        self.families.iter().any(|f| f == family)
    }

    /// Registered families in first-registration order.
    pub fn families(&self) -> &[String] {
        &self.families
    }
}

impl FontLoader for FontRegistry {
    fn load_family(&mut self, family: &str) -> ReelResult<()> {
        if !self.contains(family) {
            self.families.push(family.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
