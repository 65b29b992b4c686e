use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::config::FontsConfig;
use crate::foundation::error::ReelResult;
use crate::text::style::FontRole;

/// Where a face's bytes came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// Explicitly configured file.
    File(PathBuf),
    /// Found by family query in configured font directories or system fonts.
    Database,
    /// Supplied in memory by the caller.
    Memory,
}

/// Raw font bytes for one role.
#[derive(Clone, Debug)]
pub struct FontFace {
    /// Best-known family name (informational; shaping uses the name registered from the bytes).
    pub family: String,
    /// Font file bytes (TTF/OTF/TTC).
    pub bytes: Arc<Vec<u8>>,
    /// Source of the bytes.
    pub origin: FontOrigin,
}

/// Resolved typefaces for the two text roles.
///
/// A missing face is not an error: text set in that role is skipped at render time.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    heading: Option<FontFace>,
    body: Option<FontFace>,
}

impl FontBook {
    /// Book without any faces; all text is skipped when rendering.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Install in-memory font bytes for `role`.
    pub fn with_face(mut self, role: FontRole, bytes: Vec<u8>) -> Self {
        *self.slot_mut(role) = Some(FontFace {
            family: role.preferred_family().to_owned(),
            bytes: Arc::new(bytes),
            origin: FontOrigin::Memory,
        });
        self
    }

    /// Face used for `role`, if any.
    pub fn face(&self, role: FontRole) -> Option<&FontFace> {
        match role {
            FontRole::Heading => self.heading.as_ref(),
            FontRole::Body => self.body.as_ref(),
        }
    }

    /// `true` when neither role has a face.
    pub fn is_empty(&self) -> bool {
        self.heading.is_none() && self.body.is_none()
    }

    fn slot_mut(&mut self, role: FontRole) -> &mut Option<FontFace> {
        match role {
            FontRole::Heading => &mut self.heading,
            FontRole::Body => &mut self.body,
        }
    }

    /// Resolve faces from configuration.
    ///
    /// Explicit files win and must be readable. Otherwise the preferred family for the role
    /// is queried in the configured font directories (and system fonts when enabled), falling
    /// back to any sans-serif face.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load(cfg: &FontsConfig, base_dir: &Path) -> ReelResult<Self> {
        let mut book = Self::empty();
        let mut db: Option<usvg::fontdb::Database> = None;

        for role in FontRole::ALL {
            let explicit = match role {
                FontRole::Heading => cfg.heading.as_ref(),
                FontRole::Body => cfg.body.as_ref(),
            };

            let face = if let Some(rel) = explicit {
                let path = base_dir.join(rel);
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("read font file '{}'", path.display()))?;
                Some(FontFace {
                    family: role.preferred_family().to_owned(),
                    bytes: Arc::new(bytes),
                    origin: FontOrigin::File(path),
                })
            } else {
                let db = db.get_or_insert_with(|| build_fontdb(cfg, base_dir));
                query_face(db, role)
            };

            match &face {
                Some(f) => tracing::debug!(?role, family = %f.family, origin = ?f.origin, "font resolved"),
                None => tracing::warn!(?role, "no font face available; text in this role will be skipped"),
            }
            *book.slot_mut(role) = face;
        }

        Ok(book)
    }
}

fn build_fontdb(cfg: &FontsConfig, base_dir: &Path) -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    for dir in &cfg.dirs {
        load_fonts_from_dir(&mut db, &base_dir.join(dir));
    }
    if cfg.system_fallback {
        db.load_system_fonts();
    }
    db
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "font directory not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}

fn query_face(db: &usvg::fontdb::Database, role: FontRole) -> Option<FontFace> {
    let families = [
        usvg::fontdb::Family::Name(role.preferred_family()),
        usvg::fontdb::Family::SansSerif,
    ];
    let weight = match role {
        FontRole::Heading => 800,
        FontRole::Body => 400,
    };
    let query = usvg::fontdb::Query {
        families: &families,
        weight: usvg::fontdb::Weight(weight),
        stretch: usvg::fontdb::Stretch::Normal,
        style: usvg::fontdb::Style::Normal,
    };

    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id))?;
    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| role.preferred_family().to_owned());
    let bytes = db.with_face_data(id, |data, _index| data.to_vec())?;

    Some(FontFace {
        family,
        bytes: Arc::new(bytes),
        origin: FontOrigin::Database,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
