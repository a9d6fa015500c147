use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_BACKGROUNDS, DEFAULT_FIGHTERS, DEFAULT_POSES};

pub const SPRITE_EXT: &str = "png";

/// Directory every manifest path hangs off.
pub fn sprites_dir(root: &Path) -> PathBuf {
    root.join("assets").join("sprites")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKind {
    Sprite { fighter: String, pose: String },
    Background { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub kind: AssetKind,
    pub path: PathBuf,
}

impl fmt::Display for AssetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AssetKind::Sprite { fighter, pose } => write!(f, "sprite {fighter}/{pose}"),
            AssetKind::Background { name } => write!(f, "background {name}"),
        }
    }
}

/// Fixed list of files a run touches: every fighter × pose sprite, then the
/// backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    fighters: Vec<String>,
    poses: Vec<String>,
    backgrounds: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(DEFAULT_FIGHTERS, DEFAULT_POSES, DEFAULT_BACKGROUNDS)
    }
}

impl Manifest {
    pub fn new<F, P, B>(fighters: F, poses: P, backgrounds: B) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            fighters: fighters.into_iter().map(Into::into).collect(),
            poses: poses.into_iter().map(Into::into).collect(),
            backgrounds: backgrounds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fighters(&self) -> &[String] {
        &self.fighters
    }

    pub fn poses(&self) -> &[String] {
        &self.poses
    }

    pub fn backgrounds(&self) -> &[String] {
        &self.backgrounds
    }

    pub fn len(&self) -> usize {
        self.fighters.len() * self.poses.len() + self.backgrounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sprite_path(root: &Path, fighter: &str, pose: &str) -> PathBuf {
        sprites_dir(root)
            .join(fighter)
            .join(format!("{pose}.{SPRITE_EXT}"))
    }

    pub fn background_path(root: &Path, name: &str) -> PathBuf {
        sprites_dir(root).join(name)
    }

    /// Entries in processing order: fighters outer, poses inner, then
    /// backgrounds as declared.
    pub fn entries(&self, root: &Path) -> Vec<AssetEntry> {
        let mut entries = Vec::with_capacity(self.len());

        for fighter in &self.fighters {
            for pose in &self.poses {
                entries.push(AssetEntry {
                    path: Self::sprite_path(root, fighter, pose),
                    kind: AssetKind::Sprite {
                        fighter: fighter.clone(),
                        pose: pose.clone(),
                    },
                });
            }
        }

        for name in &self.backgrounds {
            entries.push(AssetEntry {
                path: Self::background_path(root, name),
                kind: AssetKind::Background { name: name.clone() },
            });
        }

        entries
    }

    /// Every manifest path that does not exist under `root`, in processing order.
    pub fn missing(&self, root: &Path) -> Vec<PathBuf> {
        self.entries(root)
            .into_iter()
            .map(|entry| entry.path)
            .filter(|path| !path.is_file())
            .collect()
    }
}
