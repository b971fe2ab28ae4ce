use std::fmt;
use std::path;

use super::*;

/// Declarative record for the documentation site, holding the deploy-time
/// constants `resolve` produces.  A deployment may override it by placing a
/// `_site.yml` at its site root.
const SITE_DECLARATION: &str = "\
title: Artillery
description: Cluster management & Distributed data protocol
theme: api
theme_config:
  edit_links: true
  sidebar_group_order:
    - getting-started
    - building-blocks
    - examples
";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub title: String,
    pub description: String,
    pub theme: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<crate::RelPath>,
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> SiteConfig {
        SiteConfig {
            root: Default::default(),
            title: "Artillery".into(),
            description: "Cluster management & Distributed data protocol".into(),
            theme: "api".into(),
            destination: None,
            theme_config: Default::default(),
        }
    }
}

impl SiteConfig {
    /// Produce the record for the built-in declaration.  Invoked once at
    /// build-tool startup; the record is immutable from then on.
    pub fn resolve() -> Result<SiteConfig> {
        Self::parse(SITE_DECLARATION)
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read site config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            Self::parse(&content)
                .map_err(|e| e.context_with(|c| c.insert("Path", path.display().to_string())))?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteConfig> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteConfig> {
        let file_path = find_project_file(&cwd, "_site.yml");
        let config = file_path
            .map(|p| {
                log::debug!("Using site config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No _site.yml file found in current directory, using default site config."
                );
                let config = SiteConfig {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<SiteConfig> {
        serde_yaml::from_str(content)
            .map_err(|e| Status::new("Failed to parse site config").with_source(e))
    }

    /// Output location resolved against `root`; `None` means the renderer's
    /// default location.
    pub fn abs_dest(&self) -> Option<path::PathBuf> {
        self.destination
            .as_ref()
            .map(|dest| dest.to_logical_path(&self.root))
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
