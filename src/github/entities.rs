use std::collections::BTreeMap;

use serde::{de::IgnoredAny, Deserialize, Serialize};

/// A gist as returned by `GET /gists/{id}`. File contents are not needed, only their names.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    #[serde(default)]
    pub files: BTreeMap<String, IgnoredAny>,
}

impl Gist {
    /// Name of the file that gets overwritten by updates.
    pub fn first_file_name(&self) -> Option<&str> {
        self.files.keys().next().map(String::as_str)
    }
}

/// Body of `PATCH /gists/{id}`. The key of `files` is the current file name, the value may rename
/// it.
#[derive(Debug, Serialize)]
pub struct GistUpdate<'a> {
    pub files: BTreeMap<&'a str, FileUpdate<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FileUpdate<'a> {
    pub filename: &'a str,
    pub content: &'a str,
}

impl<'a> GistUpdate<'a> {
    pub fn single(original_name: &'a str, filename: &'a str, content: &'a str) -> Self {
        Self {
            files: BTreeMap::from([(original_name, FileUpdate { filename, content })]),
        }
    }
}
