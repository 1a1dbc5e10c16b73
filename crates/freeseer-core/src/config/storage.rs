use std::path::{
    Path,
    PathBuf,
};

use serde::de::DeserializeOwned;
use serde::Serialize;
use toml_edit::{
    DocumentMut,
    Item,
};

use crate::error::{
    CoreError,
    CoreResult,
};

/// Typed view of one section of a TOML settings file.
///
/// The section is addressed by a path of nested table names (`["Global"]`
/// for `[Global]`). Saving rewrites only that section and leaves the rest of
/// the file alone, comments and key order included.
#[derive(Debug)]
pub struct ConfigHandle<T> {
    value: T,
    path: PathBuf,
    section: Vec<String>,
    read_only: bool,
}

impl<T> ConfigHandle<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn open(path: impl Into<PathBuf>, storage_args: &[&str], read_only: bool) -> CoreResult<Self> {
        let path = path.into();
        let section: Vec<String> = storage_args.iter().map(|s| s.to_string()).collect();

        let value: T = match read_document(&path)? {
            Some(document) => match lookup_section(&document, &section)? {
                Some(table) => toml::Value::Table(table.clone()).try_into()?,
                None => {
                    tracing::debug!(
                        path = %path.display(),
                        section = %section.join("."),
                        "Config section missing, using defaults"
                    );
                    T::default()
                }
            },
            None => {
                tracing::debug!(path = %path.display(), "Config file missing, using defaults");
                T::default()
            }
        };

        Ok(Self {
            value,
            path,
            section,
            read_only,
        })
    }

    pub fn save(&self) -> CoreResult<()> {
        if self.read_only {
            return Err(CoreError::ReadOnly(self.path.clone()));
        }

        let mut document = if self.path.exists() {
            std::fs::read_to_string(&self.path)?
                .parse::<DocumentMut>()
                .map_err(|e| {
                    CoreError::InvalidConfig(format!("Failed to parse existing config: {}", e))
                })?
        } else {
            DocumentMut::new()
        };

        let rendered = toml::to_string(&self.value)?
            .parse::<DocumentMut>()
            .map_err(|e| CoreError::InvalidConfig(format!("Failed to render settings: {}", e)))?;

        let section = section_table_mut(document.as_table_mut(), &self.section)?;
        for (key, item) in rendered.as_table().iter() {
            match section.get_mut(key) {
                Some(existing) => *existing = item.clone(),
                None => {
                    section.insert(key, item.clone());
                }
            }
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, document.to_string())?;

        tracing::debug!(
            path = %self.path.display(),
            section = %self.section.join("."),
            "Saved config"
        );

        Ok(())
    }
}

impl<T> ConfigHandle<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> CoreResult<&mut T> {
        if self.read_only {
            return Err(CoreError::ReadOnly(self.path.clone()));
        }
        Ok(&mut self.value)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn section(&self) -> &[String] {
        &self.section
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

fn read_document(path: &Path) -> CoreResult<Option<toml::Table>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(toml::from_str::<toml::Table>(&content)?))
}

fn lookup_section<'a>(
    document: &'a toml::Table, section: &[String],
) -> CoreResult<Option<&'a toml::Table>> {
    let mut current = document;
    for key in section {
        match current.get(key) {
            None => return Ok(None),
            Some(toml::Value::Table(table)) => current = table,
            Some(_) => {
                return Err(CoreError::InvalidConfig(format!(
                    "[{}] is not a table",
                    key
                )))
            }
        }
    }
    Ok(Some(current))
}

/// Table at `section`, created if missing. New intermediate tables are implicit.
fn section_table_mut<'a>(
    root: &'a mut toml_edit::Table, section: &[String],
) -> CoreResult<&'a mut toml_edit::Table> {
    let mut current = root;
    for (depth, key) in section.iter().enumerate() {
        let mut table = toml_edit::Table::new();
        table.set_implicit(depth + 1 < section.len());

        let entry = current.entry(key).or_insert(Item::Table(table));
        current = entry.as_table_mut().ok_or_else(|| {
            CoreError::InvalidConfig(format!("[{}] is not a table", key))
        })?;
    }
    Ok(current)
}
