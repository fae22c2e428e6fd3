use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::page::{FilterControl, NavLink, PageShell};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub data: Option<String>,
    pub base_url: Option<String>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub fallback_image: Option<String>,
    pub no_color: Option<bool>,
    pub page_title: Option<String>,
    pub filters: Option<Vec<FilterControl>>,
    pub nav_links: Option<Vec<NavLink>>,
    pub dropdown: Option<bool>,
    pub mobile_nav: Option<bool>,
    pub empty_state: Option<bool>,
    pub empty_state_text: Option<String>,
}

impl ConfigFile {
    pub fn page_shell(&self) -> PageShell {
        let defaults = PageShell::default();
        PageShell {
            title: self.page_title.clone().unwrap_or(defaults.title),
            filters: self.filters.clone().unwrap_or(defaults.filters),
            nav_links: self.nav_links.clone().unwrap_or(defaults.nav_links),
            dropdown: self.dropdown.unwrap_or(defaults.dropdown),
            mobile_nav: self.mobile_nav.unwrap_or(defaults.mobile_nav),
            empty_state: self.empty_state.unwrap_or(defaults.empty_state),
            empty_state_text: self
                .empty_state_text
                .clone()
                .unwrap_or(defaults.empty_state_text),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".menuboard").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

pub fn load_config(path: &PathBuf, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(ConfigFile::default()),
        Ok(contents) => serde_yaml::from_str::<ConfigFile>(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

fn default_config_yaml() -> String {
    r#"# menuboard config
#
# Location (default):
#   ~/.menuboard/config.yml

# Menu data (choose one; defaults to "./menu-data 1.json")
# data: ./menu-data 1.json
# base_url: https://restaurant.example/

# Output (optional, defaults to HTML on stdout)
# output: ./menu.html
# output_format: html

# Cards
fallback_image: assets/images/food_variety.jpg

# Page shell
page_title: Menu
dropdown: true
mobile_nav: true
empty_state: true
empty_state_text: No items available in this category yet.

# Filter buttons; value is the category slug ("all" shows everything)
filters:
  - { label: All, value: all }
  - { label: Starters, value: starters }
  - { label: Biriyani, value: biriyani }
  - { label: "Breads & Parottas", value: breads-parottas }
  - { label: Curries, value: curries }
  - { label: Desserts, value: desserts }
  - { label: Beverages, value: beverages }

nav_links:
  - { label: Home, href: index.html }
  - { label: Menu, href: menu.html }
  - { label: About, href: about.html }
  - { label: Contact, href: contact.html }

# Output styling
no_color: false
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<bool, String> {
    if path.exists() {
        return Ok(false);
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_yaml_matches_default_shell() {
        let cfg: ConfigFile = serde_yaml::from_str(&default_config_yaml()).unwrap();
        assert_eq!(cfg.page_shell(), PageShell::default());
        assert_eq!(
            cfg.fallback_image.as_deref(),
            Some(crate::render::DEFAULT_FALLBACK_IMAGE)
        );
    }

    #[test]
    fn writes_default_once_and_loads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yml");
        assert!(ensure_default_config_file(&path).unwrap());
        assert!(!ensure_default_config_file(&path).unwrap());
        let cfg = load_config(&path, false).unwrap();
        assert_eq!(cfg.dropdown, Some(true));
    }

    #[test]
    fn missing_config_respects_allow_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        assert_eq!(load_config(&path, true).unwrap(), ConfigFile::default());
        assert!(load_config(&path, false)
            .unwrap_err()
            .starts_with("config file not found"));
    }

    #[test]
    fn partial_config_keeps_shell_defaults() {
        let cfg: ConfigFile = serde_yaml::from_str(
            "dropdown: false\nfilters:\n  - { label: Everything }\n",
        )
        .unwrap();
        let shell = cfg.page_shell();
        assert!(!shell.dropdown);
        assert!(shell.mobile_nav);
        assert_eq!(shell.filters, vec![FilterControl::new("Everything", "")]);
    }

    #[test]
    fn expands_home_prefix() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~/menu.json"), home.join("menu.json"));
        }
        assert_eq!(expand_tilde("./menu.json"), PathBuf::from("./menu.json"));
    }
}
